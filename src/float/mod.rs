mod butterflies;
pub mod cache;
pub mod context;
mod core;

pub use crate::common::{FftError, FftFloat, FftProcess, Sample};
pub use cache::{CacheKey, FftCache};
pub use context::FftContext;
