pub mod view_models;
pub mod wasm_api;

pub use view_models::*;
