//! Converter command module
//!
//! Conversion, catalog lookup and quick-entry parsing.

use tracing::{info, warn};

use crate::core::catalog::UnitCategory;
use crate::core::format::{format_conversion, format_result};
use crate::core::history::ConversionHistory;
use crate::core::parsing::parse_query;
use crate::core::resolver::{resolve, ConversionRequest, ERR_INVALID_CONVERSION};
use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{
    CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, GetCategoriesResponse,
    GetUnitsResponse, HistoryEntry, ParseUnitResponse,
};

const ERR_NEGATIVE_VALUE: &str = "Value cannot be negative. Please provide a positive value.";
const ERR_NON_FINITE_VALUE: &str = "Value must be a finite number.";

fn parse_category(category: &str) -> AppResult<UnitCategory> {
    category
        .parse()
        .map_err(|e: crate::core::catalog::UnknownCategory| AppError::Validation(e.to_string()))
}

/// Convert a value and record it in the session history on success
pub fn convert_units_command(
    history: &mut ConversionHistory,
    request: ConvertUnitsRequest,
) -> AppResult<ConvertUnitsResponse> {
    if !request.value.is_finite() {
        return Err(AppError::Validation(ERR_NON_FINITE_VALUE.to_string()));
    }
    if request.value < 0.0 {
        return Err(AppError::Validation(ERR_NEGATIVE_VALUE.to_string()));
    }

    // An unknown category is just another invalid conversion to the user
    let category = match request.category.parse::<UnitCategory>() {
        Ok(category) => category,
        Err(e) => {
            warn!(reason = %e, "conversion rejected");
            return Err(AppError::Calculation(ERR_INVALID_CONVERSION.to_string()));
        }
    };

    let conversion = ConversionRequest::new(request.value, category, request.from_unit, request.to_unit);
    let result = resolve(&conversion)?;

    let summary = format_conversion(conversion.value, &conversion.from_unit, result, &conversion.to_unit);
    info!(%summary, "conversion complete");

    history.record(HistoryEntry::new(
        conversion.value,
        conversion.from_unit.clone(),
        result,
        conversion.to_unit.clone(),
        category,
    ));

    Ok(ConvertUnitsResponse {
        result,
        formatted_result: format_result(result),
        summary,
        from_unit: conversion.from_unit,
        to_unit: conversion.to_unit,
    })
}

/// All categories with their icon labels and units
pub fn get_categories_command() -> GetCategoriesResponse {
    let categories = UnitCategory::ALL
        .into_iter()
        .map(|category| CategoryDTO {
            id: category,
            label: category.label(),
            units: category.units().iter().map(|u| u.to_string()).collect(),
        })
        .collect();

    GetCategoriesResponse { categories }
}

pub fn get_units_for_category_command(category: &str) -> AppResult<GetUnitsResponse> {
    let category = parse_category(category)?;
    Ok(GetUnitsResponse {
        category,
        units: category.units().iter().map(|u| u.to_string()).collect(),
    })
}

/// Parse quick-entry text and extract amount, unit, target and category
pub fn parse_text_command(text: &str) -> AppResult<ParseUnitResponse> {
    let parsed = parse_query(text)?;
    Ok(ParseUnitResponse {
        amount: parsed.amount,
        unit: parsed.unit.to_string(),
        target_unit: parsed.target_unit.map(str::to_string),
        category: parsed.category,
    })
}
