pub mod poll_markets;
pub mod refresh_markets;

pub use poll_markets::*;
pub use refresh_markets::*;
