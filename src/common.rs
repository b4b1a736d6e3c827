// src/common.rs

use core::fmt;
use core::fmt::Debug;
use core::ops::Neg;
use num_complex::Complex;
use num_traits::{Num, NumAssign};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    LengthTooSmall,
    SizeMismatch,
    BufferTooSmall,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::LengthTooSmall => write!(f, "Transform length must be at least 2"),
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::BufferTooSmall => write!(f, "Scratch buffer is too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Scalar type the transform engine is generic over.
pub trait FftFloat:
    Copy + Default + Debug + Num + NumAssign + Neg<Output = Self> + Send + Sync + 'static
{
    /// Narrows a double-precision constant (twiddles, 0.5) to this scalar.
    fn from_f64(value: f64) -> Self;
}

impl FftFloat for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl FftFloat for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// An input sample the transform can consume.
///
/// Real samples enter the first butterfly stage with a zero imaginary part.
pub trait Sample<T>: Copy {
    fn to_complex(self) -> Complex<T>;
}

impl<T: FftFloat> Sample<T> for Complex<T> {
    #[inline]
    fn to_complex(self) -> Complex<T> {
        self
    }
}

impl Sample<f32> for f32 {
    #[inline]
    fn to_complex(self) -> Complex<f32> {
        Complex::new(self, 0.0)
    }
}

impl Sample<f64> for f64 {
    #[inline]
    fn to_complex(self) -> Complex<f64> {
        Complex::new(self, 0.0)
    }
}

pub trait FftProcess<S, T> {
    fn process(&self, input: &[S], output: &mut [T]) -> Result<(), FftError>;
}
