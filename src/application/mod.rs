pub mod config;
pub mod use_cases;

pub use config::*;
pub use use_cases::*;
