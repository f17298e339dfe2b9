//! Conversion core
//!
//! - `catalog`: the ten unit categories and their unit lists
//! - `quantity`: linear unit registry used for every non-temperature category
//! - `resolver`: the conversion function
//! - `history`: session-scoped conversion history
//! - `format`: two-decimal result formatting
//! - `parsing`: quick-entry text parsing

pub mod catalog;
pub mod format;
pub mod history;
pub mod parsing;
pub mod quantity;
pub mod resolver;
