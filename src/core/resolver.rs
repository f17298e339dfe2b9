//! Conversion resolver
//!
//! Turns `(value, category, from_unit, to_unit)` into a number. Temperature is
//! handled with explicit affine formulas; every other category delegates to the
//! dimensional quantity registry.

use super::catalog::UnitCategory;
use super::quantity::Quantity;
use thiserror::Error;
use tracing::debug;

/// Fixed message shown to the user for any failed conversion
pub const ERR_INVALID_CONVERSION: &str = "Invalid unit conversion! Please check your inputs.";

/// The single failure kind of the resolver.
///
/// `reason` is kept for diagnostics only; `Display` never exposes it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Invalid unit conversion! Please check your inputs.")]
    InvalidConversion { reason: String },
}

impl ConversionError {
    fn invalid(reason: impl Into<String>) -> Self {
        ConversionError::InvalidConversion { reason: reason.into() }
    }

    pub fn reason(&self) -> &str {
        match self {
            ConversionError::InvalidConversion { reason } => reason,
        }
    }
}

pub type ConversionResult = Result<f64, ConversionError>;

/// One conversion asked for by the presentation layer.
/// Front ends send `ConvertUnitsRequest`; this is its typed form.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub category: UnitCategory,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(
        value: f64,
        category: UnitCategory,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            value,
            category,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// Convert using string inputs, as a form submission provides them
pub fn convert(value: f64, category: &str, from_unit: &str, to_unit: &str) -> ConversionResult {
    let category: UnitCategory = category
        .parse()
        .map_err(|e: super::catalog::UnknownCategory| ConversionError::invalid(e.to_string()))?;
    resolve(&ConversionRequest::new(value, category, from_unit, to_unit))
}

/// Resolve a typed conversion request
pub fn resolve(request: &ConversionRequest) -> ConversionResult {
    let ConversionRequest { value, category, from_unit, to_unit } = request;

    for unit in [from_unit, to_unit] {
        if !category.contains(unit) {
            return Err(ConversionError::invalid(format!(
                "{} is not a {} unit",
                unit, category
            )));
        }
    }

    let result = match category {
        UnitCategory::Temperature => convert_temperature(*value, from_unit, to_unit)?,
        _ => Quantity::new(*value, from_unit)
            .and_then(|quantity| quantity.to(to_unit))
            .map(|quantity| quantity.magnitude())
            .map_err(|e| ConversionError::invalid(e.to_string()))?,
    };

    debug!(value = *value, %category, from_unit = %from_unit, to_unit = %to_unit, result, "resolved conversion");
    Ok(result)
}

// Only the six directed pairs and the three identities are accepted
fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> ConversionResult {
    Ok(match (from_unit, to_unit) {
        ("celsius", "fahrenheit") => value * 9.0 / 5.0 + 32.0,
        ("fahrenheit", "celsius") => (value - 32.0) * 5.0 / 9.0,
        ("celsius", "kelvin") => value + 273.15,
        ("kelvin", "celsius") => value - 273.15,
        ("fahrenheit", "kelvin") => (value - 32.0) * 5.0 / 9.0 + 273.15,
        ("kelvin", "fahrenheit") => (value - 273.15) * 9.0 / 5.0 + 32.0,
        ("celsius", "celsius") | ("fahrenheit", "fahrenheit") | ("kelvin", "kelvin") => value,
        (from, to) => {
            return Err(ConversionError::invalid(format!(
                "No temperature formula for {} -> {}",
                from, to
            )))
        }
    })
}
