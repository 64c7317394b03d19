// DOF Daily Digest - API Core
//
// Scrapes the Diario Oficial de la Federación daily index, asks OpenAI for
// a per-department executive summary, normalizes the model's bullet output
// into header/sub-list HTML, and splices in the day's published exchange
// rate where it belongs.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
