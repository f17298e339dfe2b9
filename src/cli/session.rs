//! Interactive conversion session
//!
//! Each input line is either `value category from to` ("1 Data Size gigabyte
//! megabyte"), a bare value converted with the default units, or quick-entry
//! text ("100 celsius to fahrenheit"). Successful conversions are appended to a
//! history owned by the session; the history table is printed when input ends.

use std::io::{BufRead, Write};
use tracing::info;

use super::report_error;
use crate::api::commands::converter::{convert_units_command, parse_text_command};
use crate::api::commands::history::get_history_command;
use crate::core::catalog::UnitCategory;
use crate::core::format::format_result;
use crate::core::history::ConversionHistory;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::{AppSettings, UserPreferences};
use crate::shared::types::{ConvertUnitsRequest, HistoryEntry};

const ERR_MISSING_TARGET: &str = "Please name a target unit, e.g. \"12 km to mile\".";

/// Convert one line of input, recording it in `history` on success
pub fn convert_line(
    history: &mut ConversionHistory,
    text: &str,
    preferences: &UserPreferences,
) -> AppResult<String> {
    let request = match structured_request(text, preferences) {
        Some(request) => request,
        None => quick_entry_request(text)?,
    };
    Ok(convert_units_command(history, request)?.summary)
}

/// `value category from to`, or a bare value using the default units.
///
/// The category may span several words ("Data Size") or carry its icon; the
/// last two tokens are always the units. Units are passed through as typed so
/// the resolver decides whether they belong to the category.
fn structured_request(text: &str, preferences: &UserPreferences) -> Option<ConvertUnitsRequest> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (value, rest) = tokens.split_first()?;
    let value: f64 = value.replace(',', ".").parse().ok()?;

    if rest.is_empty() {
        return Some(ConvertUnitsRequest {
            value,
            category: preferences.default_category.clone(),
            from_unit: preferences.default_from_unit.clone(),
            to_unit: preferences.default_to_unit.clone(),
        });
    }
    if rest.len() < 3 {
        return None;
    }

    let (category, units) = rest.split_at(rest.len() - 2);
    let category: UnitCategory = category.join(" ").parse().ok()?;
    Some(ConvertUnitsRequest {
        value,
        category: category.name().to_string(),
        from_unit: units[0].to_string(),
        to_unit: units[1].to_string(),
    })
}

fn quick_entry_request(text: &str) -> AppResult<ConvertUnitsRequest> {
    let parsed = parse_text_command(text)?;
    let to_unit = parsed
        .target_unit
        .ok_or_else(|| AppError::Validation(ERR_MISSING_TARGET.to_string()))?;

    Ok(ConvertUnitsRequest {
        value: parsed.amount,
        category: parsed.category.name().to_string(),
        from_unit: parsed.unit,
        to_unit,
    })
}

/// Read conversions from `input` until EOF or `quit`, then print the history table
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    settings: &AppSettings,
) -> AppResult<ConversionHistory> {
    let mut history = ConversionHistory::new();
    info!("session started");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            break;
        }

        match convert_line(&mut history, line, &settings.preferences) {
            Ok(summary) => writeln!(out, "✅ {}", summary)?,
            Err(e) => report_error(&e, out)?,
        }
    }

    let response = get_history_command(&history, settings.history.display_limit);
    if !response.entries.is_empty() {
        writeln!(out)?;
        writeln!(out, "📜 Conversion History")?;
        write_history_table(&response.entries, out)?;
    }

    info!(total = history.len(), "session ended");
    Ok(history)
}

fn write_history_table<W: Write>(entries: &[HistoryEntry], out: &mut W) -> AppResult<()> {
    let headers = ["Value", "From", "Converted Value", "To"];
    let rows: Vec<[String; 4]> = entries
        .iter()
        .map(|entry| {
            [
                entry.value.to_string(),
                entry.from_unit.clone(),
                format_result(entry.converted_value),
                entry.to_unit.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: [&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    writeln!(out, "{}", render(headers).trim_end())?;
    writeln!(out, "{}", widths.map(|w| "-".repeat(w)).join("-+-"))?;
    for row in &rows {
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()];
        writeln!(out, "{}", render(cells).trim_end())?;
    }
    Ok(())
}
