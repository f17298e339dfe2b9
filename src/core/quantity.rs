//! Dimensional quantities
//!
//! A small registry of linear units. Every unit carries its physical dimension
//! and a multiplier to that dimension's base unit, so converting a quantity is
//! `value * from.base_factor / to.base_factor` once dimensions agree.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;
use thiserror::Error;

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Mass,
    Time,
    Volume,
    Speed,
    Energy,
    Pressure,
    Information,
    Angle,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Time => "time",
            Dimension::Volume => "volume",
            Dimension::Speed => "speed",
            Dimension::Energy => "energy",
            Dimension::Pressure => "pressure",
            Dimension::Information => "information",
            Dimension::Angle => "angle",
        };
        f.write_str(name)
    }
}

/// Unit definition with conversion factor
#[derive(Debug, Clone)]
pub struct UnitDefinition {
    pub name: &'static str,
    pub symbol: &'static str,
    pub dimension: Dimension,
    /// Multiplier to convert to the dimension's base unit
    pub base_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Cannot convert {from} ({from_dimension}) to {to} ({to_dimension})")]
    IncompatibleDimensions {
        from: String,
        from_dimension: Dimension,
        to: String,
        to_dimension: Dimension,
    },
}

// Base units: meter, gram, second, liter, meter/second, joule, pascal, byte, radian
const US_GALLON_LITERS: f64 = 3.785411784;
const POUND_GRAMS: f64 = 453.59237;
const FOOT_METERS: f64 = 0.3048;
const MILE_METERS: f64 = 1609.344;

/// Thread-safe unit registry initialized once on first use
static UNIT_REGISTRY: Lazy<HashMap<&'static str, UnitDefinition>> = Lazy::new(|| {
    let definitions = [
        // Length
        ("meter", "m", Dimension::Length, 1.0),
        ("kilometer", "km", Dimension::Length, 1000.0),
        ("centimeter", "cm", Dimension::Length, 0.01),
        ("mile", "mi", Dimension::Length, MILE_METERS),
        ("yard", "yd", Dimension::Length, 3.0 * FOOT_METERS),
        ("foot", "ft", Dimension::Length, FOOT_METERS),
        ("inch", "in", Dimension::Length, FOOT_METERS / 12.0),
        // Mass
        ("gram", "g", Dimension::Mass, 1.0),
        ("kilogram", "kg", Dimension::Mass, 1000.0),
        ("pound", "lb", Dimension::Mass, POUND_GRAMS),
        ("ounce", "oz", Dimension::Mass, POUND_GRAMS / 16.0),
        // Short ton
        ("ton", "ton", Dimension::Mass, 2000.0 * POUND_GRAMS),
        // Time
        ("second", "s", Dimension::Time, 1.0),
        ("minute", "min", Dimension::Time, 60.0),
        ("hour", "h", Dimension::Time, 3600.0),
        ("day", "d", Dimension::Time, 86_400.0),
        // Volume (US customary)
        ("liter", "L", Dimension::Volume, 1.0),
        ("milliliter", "mL", Dimension::Volume, 0.001),
        ("gallon", "gal", Dimension::Volume, US_GALLON_LITERS),
        ("cup", "cup", Dimension::Volume, US_GALLON_LITERS / 16.0),
        ("fluid_ounce", "fl oz", Dimension::Volume, US_GALLON_LITERS / 128.0),
        // Speed
        ("meter/second", "m/s", Dimension::Speed, 1.0),
        ("kilometer/hour", "km/h", Dimension::Speed, 1000.0 / 3600.0),
        ("mile/hour", "mph", Dimension::Speed, MILE_METERS / 3600.0),
        ("foot/second", "ft/s", Dimension::Speed, FOOT_METERS),
        // Energy (thermochemical calorie)
        ("joule", "J", Dimension::Energy, 1.0),
        ("kilojoule", "kJ", Dimension::Energy, 1000.0),
        ("calorie", "cal", Dimension::Energy, 4.184),
        ("kilocalorie", "kcal", Dimension::Energy, 4184.0),
        ("watt_hour", "Wh", Dimension::Energy, 3600.0),
        // Pressure
        ("pascal", "Pa", Dimension::Pressure, 1.0),
        ("bar", "bar", Dimension::Pressure, 100_000.0),
        ("psi", "psi", Dimension::Pressure, 6894.757293168361),
        ("atmosphere", "atm", Dimension::Pressure, 101_325.0),
        // Information (decimal SI prefixes)
        ("bit", "b", Dimension::Information, 0.125),
        ("byte", "B", Dimension::Information, 1.0),
        ("kilobyte", "kB", Dimension::Information, 1e3),
        ("megabyte", "MB", Dimension::Information, 1e6),
        ("gigabyte", "GB", Dimension::Information, 1e9),
        ("terabyte", "TB", Dimension::Information, 1e12),
        // Angle
        ("radian", "rad", Dimension::Angle, 1.0),
        ("degree", "deg", Dimension::Angle, PI / 180.0),
    ];

    definitions
        .into_iter()
        .map(|(name, symbol, dimension, base_factor)| {
            (name, UnitDefinition { name, symbol, dimension, base_factor })
        })
        .collect()
});

/// Look up a unit by canonical name
pub fn lookup(unit: &str) -> Result<&'static UnitDefinition, UnitError> {
    UNIT_REGISTRY
        .get(unit)
        .ok_or_else(|| UnitError::UnknownUnit(unit.to_string()))
}

/// A magnitude paired with a registered unit
#[derive(Debug, Clone, Copy)]
pub struct Quantity {
    magnitude: f64,
    unit: &'static UnitDefinition,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: &str) -> Result<Self, UnitError> {
        Ok(Self { magnitude, unit: lookup(unit)? })
    }

    /// Convert to another unit of the same dimension
    pub fn to(&self, unit: &str) -> Result<Self, UnitError> {
        let target = lookup(unit)?;
        if target.dimension != self.unit.dimension {
            return Err(UnitError::IncompatibleDimensions {
                from: self.unit.name.to_string(),
                from_dimension: self.unit.dimension,
                to: target.name.to_string(),
                to_dimension: target.dimension,
            });
        }

        if std::ptr::eq(target, self.unit) {
            return Ok(*self);
        }

        let base_value = self.magnitude * self.unit.base_factor;
        Ok(Self { magnitude: base_value / target.base_factor, unit: target })
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &'static UnitDefinition {
        self.unit
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_length_conversion() {
        let q = Quantity::new(1.0, "mile").unwrap().to("kilometer").unwrap();
        assert!(approx_eq(q.magnitude(), 1.609344));
        assert_eq!(q.unit().name, "kilometer");
    }

    #[test]
    fn test_us_customary_volume() {
        let cups = Quantity::new(1.0, "gallon").unwrap().to("cup").unwrap();
        assert!(approx_eq(cups.magnitude(), 16.0));
        let floz = Quantity::new(1.0, "cup").unwrap().to("fluid_ounce").unwrap();
        assert!(approx_eq(floz.magnitude(), 8.0));
    }

    #[test]
    fn test_data_size_uses_decimal_prefixes() {
        let mb = Quantity::new(1.0, "gigabyte").unwrap().to("megabyte").unwrap();
        assert_eq!(mb.magnitude(), 1000.0);
        let bits = Quantity::new(1.0, "byte").unwrap().to("bit").unwrap();
        assert_eq!(bits.magnitude(), 8.0);
    }

    #[test]
    fn test_angle() {
        let rad = Quantity::new(180.0, "degree").unwrap().to("radian").unwrap();
        assert!(approx_eq(rad.magnitude(), PI));
    }

    #[test]
    fn test_same_unit_is_exact() {
        let q = Quantity::new(0.1, "psi").unwrap().to("psi").unwrap();
        assert_eq!(q.magnitude(), 0.1);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            Quantity::new(1.0, "furlong").unwrap_err(),
            UnitError::UnknownUnit("furlong".to_string())
        );
        assert!(matches!(
            Quantity::new(1.0, "meter").unwrap().to("parsec"),
            Err(UnitError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_incompatible_dimensions() {
        let err = Quantity::new(1.0, "meter").unwrap().to("gram").unwrap_err();
        assert!(matches!(
            err,
            UnitError::IncompatibleDimensions {
                from_dimension: Dimension::Length,
                to_dimension: Dimension::Mass,
                ..
            }
        ));
    }

    #[test]
    fn test_display() {
        let q = Quantity::new(2.5, "kilometer/hour").unwrap();
        assert_eq!(q.to_string(), "2.5 km/h");
    }
}
