pub mod api;
pub mod cli;
pub mod core;
pub mod shared;

pub use cli::run;
