use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::core::catalog::UnitCategory;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertUnitsRequest {
    pub value: f64,
    pub category: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    /// e.g. "100 celsius = 212.00 fahrenheit"
    pub summary: String,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParseUnitResponse {
    pub amount: f64,
    pub unit: String,
    pub target_unit: Option<String>,
    pub category: UnitCategory,
}

// Category Data Transfer Object for frontend selectors
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CategoryDTO {
    pub id: UnitCategory,
    pub label: String,    // Icon label (e.g., "📏 Length")
    pub units: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GetCategoriesResponse {
    pub categories: Vec<CategoryDTO>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GetUnitsResponse {
    pub category: UnitCategory,
    pub units: Vec<String>,
}

/// One row of the conversion history table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub value: f64,
    pub from_unit: String,
    pub converted_value: f64,
    pub to_unit: String,
    pub category: UnitCategory,
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        value: f64,
        from_unit: impl Into<String>,
        converted_value: f64,
        to_unit: impl Into<String>,
        category: UnitCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            from_unit: from_unit.into(),
            converted_value,
            to_unit: to_unit.into(),
            category,
            recorded_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GetHistoryResponse {
    /// Displayed slice, oldest first
    pub entries: Vec<HistoryEntry>,
    /// Number of conversions recorded this session
    pub total: usize,
}
