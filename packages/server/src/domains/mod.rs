pub mod digest;
pub mod gazette;
