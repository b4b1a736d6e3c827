#![no_std]

// Heap storage for twiddle tables, stage plans and the context cache.
extern crate alloc;

// std math and std::error::Error are opt-in; tests always get std.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;

pub use common::{FftError, FftFloat, FftProcess, Sample};
pub use float::{CacheKey, FftCache, FftContext};
