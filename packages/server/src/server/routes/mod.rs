// HTTP routes
pub mod digest;
pub mod health;

pub use digest::*;
pub use health::*;
