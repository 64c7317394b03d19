//! Kernel module - infrastructure and injected dependencies.

pub mod ai;
pub mod fetcher;
pub mod test_dependencies;
pub mod traits;

pub use ai::OpenAISummarizer;
pub use fetcher::DofPageFetcher;
pub use test_dependencies::{MockPageFetcher, MockSummarizer};
pub use traits::*;
