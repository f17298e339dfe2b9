//! Terminal front end
//!
//! Parses arguments with clap and renders results, errors and the history
//! table as plain text.

pub mod session;

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::api::commands::converter::{
    convert_units_command, get_categories_command, get_units_for_category_command,
};
use crate::api::commands::settings::get_settings;
use crate::core::catalog::UnitCategory;
use crate::core::history::ConversionHistory;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;
use crate::shared::types::ConvertUnitsRequest;

#[derive(Parser, Debug)]
#[command(name = "unit-converter")]
#[command(about = "Convert values across length, weight, temperature, data size and more")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List categories
    Categories,

    /// List the units of a category
    Units {
        category: String,
    },

    /// Convert a value, e.g. `convert 100 celsius fahrenheit`
    Convert {
        value: f64,

        /// Source unit; the configured default when omitted
        from: Option<String>,

        /// Target unit; the configured default when omitted
        to: Option<String>,

        /// Category; inferred from FROM when omitted
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Convert free text, e.g. `ask "12.5 km to mile"`
    Ask {
        text: String,
    },

    /// Read one conversion per line from stdin, then print the history table
    Session,

    /// Print the active settings
    Settings {
        /// Print the raw settings JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse arguments, load settings and run the requested command
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    crate::shared::logging::init_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    // Load settings
    let settings = get_settings(cli.settings.as_deref())
        .await
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(cli.command, &settings, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {}", e);
            if let Err(write_err) = report_error(&e, &mut out) {
                tracing::error!("Failed to write error output: {}", write_err);
            }
            ExitCode::FAILURE
        }
    }
}

/// Run one parsed command, writing user-facing output to `out`
pub fn execute<W: Write>(command: Command, settings: &AppSettings, out: &mut W) -> AppResult<()> {
    match command {
        Command::Categories => {
            for category in get_categories_command().categories {
                writeln!(out, "{}: {}", category.label, category.units.join(", "))?;
            }
        }
        Command::Units { category } => {
            let response = get_units_for_category_command(&category)?;
            for unit in response.units {
                writeln!(out, "{}", unit)?;
            }
        }
        Command::Convert { value, from, to, category } => {
            let preferences = &settings.preferences;
            let category = match (category, &from) {
                (Some(category), _) => category,
                (None, Some(from)) => infer_category(from, settings),
                (None, None) => preferences.default_category.clone(),
            };
            let from_unit = from.unwrap_or_else(|| preferences.default_from_unit.clone());
            let to_unit = to.unwrap_or_else(|| preferences.default_to_unit.clone());

            let mut history = ConversionHistory::new();
            let request = ConvertUnitsRequest { value, category, from_unit, to_unit };
            let response = convert_units_command(&mut history, request)?;
            writeln!(out, "✅ {}", response.summary)?;
        }
        Command::Ask { text } => {
            let mut history = ConversionHistory::new();
            let summary = session::convert_line(&mut history, &text, &settings.preferences)?;
            writeln!(out, "✅ {}", summary)?;
        }
        Command::Session => {
            let stdin = io::stdin();
            session::run_session(stdin.lock(), out, settings)?;
        }
        Command::Settings { json: true } => {
            writeln!(out, "{}", serde_json::to_string_pretty(settings)?)?;
        }
        Command::Settings { json: false } => {
            let preferences = &settings.preferences;
            writeln!(
                out,
                "Default conversion: {} {} -> {}",
                preferences.default_category, preferences.default_from_unit, preferences.default_to_unit
            )?;
            writeln!(out, "Theme: {}", preferences.theme)?;
            writeln!(out, "History rows shown: {}", settings.history.display_limit)?;
        }
    }
    Ok(())
}

// Falls back to the configured default so the resolver can reject a bad unit
fn infer_category(from_unit: &str, settings: &AppSettings) -> String {
    UnitCategory::for_unit(from_unit)
        .map(|category| category.name().to_string())
        .unwrap_or_else(|| settings.preferences.default_category.clone())
}

/// Print a command error the way the user should see it
pub fn report_error<W: Write>(err: &AppError, out: &mut W) -> io::Result<()> {
    writeln!(out, "⚠️ {}", err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: Command) -> (AppResult<()>, String) {
        let mut out = Vec::new();
        let result = execute(command, &AppSettings::default(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from([
            "unit-converter", "convert", "1", "gigabyte", "megabyte", "--category", "Data Size",
        ])
        .unwrap();
        match cli.command {
            Command::Convert { value, from, to, category } => {
                assert_eq!(value, 1.0);
                assert_eq!(from.as_deref(), Some("gigabyte"));
                assert_eq!(to.as_deref(), Some("megabyte"));
                assert_eq!(category.as_deref(), Some("Data Size"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_convert_infers_category() {
        let (result, output) = run(Command::Convert {
            value: 1.0,
            from: Some("kilometer".to_string()),
            to: Some("meter".to_string()),
            category: None,
        });
        assert!(result.is_ok());
        assert_eq!(output, "✅ 1 kilometer = 1000.00 meter\n");
    }

    #[test]
    fn test_convert_unknown_unit_fails() {
        let (result, _) = run(Command::Convert {
            value: 1.0,
            from: Some("cubit".to_string()),
            to: Some("meter".to_string()),
            category: None,
        });
        let err = result.unwrap_err();
        let mut out = Vec::new();
        report_error(&err, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "⚠️ Invalid unit conversion! Please check your inputs.\n"
        );
    }

    #[test]
    fn test_convert_falls_back_to_default_units() {
        let (result, output) = run(Command::Convert {
            value: 2500.0,
            from: None,
            to: None,
            category: None,
        });
        assert!(result.is_ok());
        assert_eq!(output, "✅ 2500 meter = 2.50 kilometer\n");

        let (result, output) = run(Command::Convert {
            value: 3.0,
            from: Some("mile".to_string()),
            to: None,
            category: None,
        });
        assert!(result.is_ok());
        assert_eq!(output, "✅ 3 mile = 4.83 kilometer\n");
    }

    #[test]
    fn test_settings_shows_defaults_and_theme() {
        let (result, output) = run(Command::Settings { json: false });
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Default conversion: Length meter -> kilometer\nTheme: dark\nHistory rows shown: 40\n"
        );

        let (_, output) = run(Command::Settings { json: true });
        let parsed: AppSettings = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, AppSettings::default());
    }

    #[test]
    fn test_categories_lists_ten_lines() {
        let (result, output) = run(Command::Categories);
        assert!(result.is_ok());
        assert_eq!(output.lines().count(), 10);
        assert!(output.starts_with("📏 Length: meter, kilometer"));
    }

    #[test]
    fn test_ask() {
        let (result, output) = run(Command::Ask { text: "0 celsius to kelvin".to_string() });
        assert!(result.is_ok());
        assert_eq!(output, "✅ 0 celsius = 273.15 kelvin\n");
    }
}
