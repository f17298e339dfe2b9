//! Command modules
//!
//! Entry points a presentation layer calls. Each takes typed requests from
//! `shared::types` and returns `AppResult`.
//!
//! - `converter`: conversion, catalog lookup, quick-entry parsing
//! - `history`: the displayed slice of the session history
//! - `settings`: settings persistence

pub mod converter;
pub mod history;
pub mod settings;
