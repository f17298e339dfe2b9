//! Quick-entry parsing
//!
//! Reads free text such as "12.5 km to mile" or "100 celsius in fahrenheit"
//! into an amount, a catalog unit and an optional target unit.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::catalog::UnitCategory;
use crate::shared::error::{AppError, AppResult};

const ERR_CANNOT_PARSE: &str = "Could not parse a value and unit from";

// Compiled once; the patterns are constants so expect cannot fire at runtime
static RE_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*([+-]?\d+(?:\.\d+)?)\s*([a-z°_/\- ]+?)(?:\s+(?:to|in|into|as)\s+([a-z°_/\- ]+?))?\s*$",
    )
    .expect("Failed to compile quick-entry pattern")
});

static RE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace pattern"));

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub amount: f64,
    pub unit: &'static str,
    pub target_unit: Option<&'static str>,
    pub category: UnitCategory,
}

/// Map a typed unit (symbol, plural, spelling variant) to its catalog name
pub fn normalize_unit(unit: &str) -> Option<&'static str> {
    let lowered = unit.trim().to_lowercase();
    let collapsed = RE_WHITESPACE.replace_all(&lowered, " ");
    let canonical = match &*collapsed {
        // Length
        "m" | "meter" | "meters" | "metre" | "metres" => "meter",
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => "kilometer",
        "mi" | "mile" | "miles" => "mile",
        "yd" | "yard" | "yards" => "yard",
        "ft" | "foot" | "feet" => "foot",
        "in" | "inch" | "inches" => "inch",
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => "centimeter",
        // Weight
        "g" | "gram" | "grams" => "gram",
        "kg" | "kilo" | "kilos" | "kilogram" | "kilograms" => "kilogram",
        "lb" | "lbs" | "pound" | "pounds" => "pound",
        "oz" | "ounce" | "ounces" => "ounce",
        "ton" | "tons" | "short ton" | "short tons" => "ton",
        // Time
        "s" | "sec" | "secs" | "second" | "seconds" => "second",
        "min" | "mins" | "minute" | "minutes" => "minute",
        "h" | "hr" | "hrs" | "hour" | "hours" => "hour",
        "d" | "day" | "days" => "day",
        // Volume
        "l" | "liter" | "liters" | "litre" | "litres" => "liter",
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => "milliliter",
        "gal" | "gallon" | "gallons" => "gallon",
        "cup" | "cups" => "cup",
        "fl oz" | "floz" | "fl-oz" | "fluid ounce" | "fluid ounces" | "fluid_ounce" => "fluid_ounce",
        // Temperature
        "c" | "°c" | "celsius" => "celsius",
        "f" | "°f" | "fahrenheit" => "fahrenheit",
        "k" | "kelvin" | "kelvins" => "kelvin",
        // Speed
        "m/s" | "meter/second" | "meter per second" | "metre per second" | "meters per second"
        | "metres per second" => "meter/second",
        "km/h" | "kmh" | "kph" | "kilometer/hour" | "kilometer per hour" | "kilometre per hour"
        | "kilometers per hour" | "kilometres per hour" => "kilometer/hour",
        "mph" | "mi/h" | "mile/hour" | "mile per hour" | "miles per hour" => "mile/hour",
        "ft/s" | "fps" | "foot/second" | "foot per second" | "feet per second" => "foot/second",
        // Energy
        "j" | "joule" | "joules" => "joule",
        "kj" | "kilojoule" | "kilojoules" => "kilojoule",
        "cal" | "calorie" | "calories" => "calorie",
        "kcal" | "kilocalorie" | "kilocalories" => "kilocalorie",
        "wh" | "watt hour" | "watt hours" | "watt_hour" | "watt-hour" => "watt_hour",
        // Pressure
        "pa" | "pascal" | "pascals" => "pascal",
        "bar" | "bars" => "bar",
        "psi" => "psi",
        "atm" | "atmosphere" | "atmospheres" => "atmosphere",
        // Data size
        "bit" | "bits" => "bit",
        "byte" | "bytes" => "byte",
        "kb" | "kilobyte" | "kilobytes" => "kilobyte",
        "mb" | "megabyte" | "megabytes" => "megabyte",
        "gb" | "gigabyte" | "gigabytes" => "gigabyte",
        "tb" | "terabyte" | "terabytes" => "terabyte",
        // Angle
        "°" | "deg" | "degree" | "degrees" => "degree",
        "rad" | "radian" | "radians" => "radian",
        _ => return None,
    };
    Some(canonical)
}

/// Parse amount, source unit and optional target unit from text
pub fn parse_query(text: &str) -> AppResult<ParsedQuery> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Empty text".to_string()));
    }

    // Comma decimal separators
    let normalized = text.replace(',', ".");

    let fail = || AppError::Validation(format!("{}: '{}'", ERR_CANNOT_PARSE, text));

    let caps = RE_QUERY.captures(&normalized).ok_or_else(fail)?;
    let amount: f64 = caps[1].parse().map_err(|_| fail())?;
    let unit = normalize_unit(&caps[2]).ok_or_else(fail)?;
    let target_unit = match caps.get(3) {
        Some(target) => Some(normalize_unit(target.as_str()).ok_or_else(fail)?),
        None => None,
    };
    let category = UnitCategory::for_unit(unit).ok_or_else(fail)?;

    debug!(amount, unit, ?target_unit, %category, "parsed quick entry");
    Ok(ParsedQuery { amount, unit, target_unit, category })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_land_in_catalog() {
        for alias in ["km", "Miles", "°C", "fl oz", "lbs", "mph", "kcal", "GB", "atm", "rad"] {
            let unit = normalize_unit(alias).unwrap_or_else(|| panic!("{} not recognised", alias));
            assert!(UnitCategory::for_unit(unit).is_some(), "{} is not a catalog unit", unit);
        }
        assert_eq!(normalize_unit("furlong"), None);
    }

    #[test]
    fn test_every_catalog_unit_normalizes_to_itself() {
        for category in UnitCategory::ALL {
            for unit in category.units() {
                assert_eq!(normalize_unit(unit), Some(*unit));
            }
        }
    }

    #[test]
    fn test_parse_with_target() {
        let parsed = parse_query("12.5 km to mile").unwrap();
        assert_eq!(parsed.amount, 12.5);
        assert_eq!(parsed.unit, "kilometer");
        assert_eq!(parsed.target_unit, Some("mile"));
        assert_eq!(parsed.category, UnitCategory::Length);
    }

    #[test]
    fn test_parse_multi_word_units() {
        let parsed = parse_query("60 miles per hour in kilometers per hour").unwrap();
        assert_eq!(parsed.unit, "mile/hour");
        assert_eq!(parsed.target_unit, Some("kilometer/hour"));

        let parsed = parse_query("8 fluid ounces to cups").unwrap();
        assert_eq!(parsed.unit, "fluid_ounce");
        assert_eq!(parsed.target_unit, Some("cup"));
    }

    #[test]
    fn test_parse_singular_speed_units() {
        let parsed = parse_query("1 kilometer per hour to mph").unwrap();
        assert_eq!(parsed.unit, "kilometer/hour");
        assert_eq!(parsed.target_unit, Some("mile/hour"));

        let parsed = parse_query("1 mile per hour to km/h").unwrap();
        assert_eq!(parsed.unit, "mile/hour");
        assert_eq!(parsed.target_unit, Some("kilometer/hour"));

        assert_eq!(normalize_unit("kilometre per hour"), Some("kilometer/hour"));
        assert_eq!(normalize_unit("meter per second"), Some("meter/second"));
        assert_eq!(normalize_unit("metre per second"), Some("meter/second"));
        assert_eq!(normalize_unit("foot per second"), Some("foot/second"));
    }

    #[test]
    fn test_parse_inch_is_not_split_on_in() {
        let parsed = parse_query("5 inch to cm").unwrap();
        assert_eq!(parsed.unit, "inch");
        assert_eq!(parsed.target_unit, Some("centimeter"));
    }

    #[test]
    fn test_parse_without_target() {
        let parsed = parse_query("100celsius").unwrap();
        assert_eq!(parsed.amount, 100.0);
        assert_eq!(parsed.unit, "celsius");
        assert_eq!(parsed.target_unit, None);
        assert_eq!(parsed.category, UnitCategory::Temperature);
    }

    #[test]
    fn test_parse_comma_decimal() {
        assert_eq!(parse_query("2,5 kg").unwrap().amount, 2.5);
    }

    #[test]
    fn test_parse_failures() {
        assert!(parse_query("").is_err());
        assert!(parse_query("hello world").is_err());
        assert!(parse_query("12 furlongs").is_err());
        assert!(parse_query("12 km to parsecs").is_err());
    }
}
