//! Digest domain - summary request, restructuring, and assembly.

pub mod inject;
pub mod pipeline;
pub mod prompt;
pub mod restructure;

pub use pipeline::{DigestPipeline, DigestSettings};
pub use prompt::PromptStyle;
