//! Gazette domain - the daily index and its detail notes.

pub mod exchange_rate;
pub mod listing;
pub mod models;

pub use exchange_rate::ExchangeRate;
pub use models::{GazetteIndex, Publication};
