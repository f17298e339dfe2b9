//! Unit catalog
//!
//! Static table of the ten categories offered in the converter and the ordered
//! unit names each one lists. Selection widgets derive directly from this table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Unit categories offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum UnitCategory {
    Length,
    Weight,
    Time,
    Volume,
    Temperature,
    Speed,
    Energy,
    Pressure,
    #[serde(rename = "Data Size")]
    DataSize,
    Angle,
}

impl UnitCategory {
    /// All categories, in display order
    pub const ALL: [UnitCategory; 10] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Time,
        UnitCategory::Volume,
        UnitCategory::Temperature,
        UnitCategory::Speed,
        UnitCategory::Energy,
        UnitCategory::Pressure,
        UnitCategory::DataSize,
        UnitCategory::Angle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Time => "Time",
            UnitCategory::Volume => "Volume",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Speed => "Speed",
            UnitCategory::Energy => "Energy",
            UnitCategory::Pressure => "Pressure",
            UnitCategory::DataSize => "Data Size",
            UnitCategory::Angle => "Angle",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            UnitCategory::Length => "📏",
            UnitCategory::Weight => "⚖️",
            UnitCategory::Time => "⏳",
            UnitCategory::Volume => "🧪",
            UnitCategory::Temperature => "🌡️",
            UnitCategory::Speed => "🚀",
            UnitCategory::Energy => "⚡",
            UnitCategory::Pressure => "🌬️",
            UnitCategory::DataSize => "💾",
            UnitCategory::Angle => "📐",
        }
    }

    /// Display label with icon, e.g. "📏 Length"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon(), self.name())
    }

    /// Ordered unit names offered for this category
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            UnitCategory::Length => &["meter", "kilometer", "mile", "yard", "foot", "inch", "centimeter"],
            UnitCategory::Weight => &["gram", "kilogram", "pound", "ounce", "ton"],
            UnitCategory::Time => &["second", "minute", "hour", "day"],
            UnitCategory::Volume => &["liter", "milliliter", "gallon", "cup", "fluid_ounce"],
            UnitCategory::Temperature => &["celsius", "fahrenheit", "kelvin"],
            UnitCategory::Speed => &["meter/second", "kilometer/hour", "mile/hour", "foot/second"],
            UnitCategory::Energy => &["joule", "kilojoule", "calorie", "kilocalorie", "watt_hour"],
            UnitCategory::Pressure => &["pascal", "bar", "psi", "atmosphere"],
            UnitCategory::DataSize => &["bit", "byte", "kilobyte", "megabyte", "gigabyte", "terabyte"],
            UnitCategory::Angle => &["degree", "radian"],
        }
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    /// Find the category listing `unit`. Each catalog unit belongs to exactly one category.
    pub fn for_unit(unit: &str) -> Option<UnitCategory> {
        Self::ALL.into_iter().find(|category| category.contains(unit))
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for UnitCategory {
    type Err = UnknownCategory;

    /// Accepts the bare name (any case) or the icon label shown in the UI
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                category.name().eq_ignore_ascii_case(trimmed) || category.label() == trimmed
            })
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
