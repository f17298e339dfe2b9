pub mod types;
pub mod settings;
pub mod error;
pub mod logging;
