// src/float/context.rs

use super::butterflies::{butterfly2, butterfly3, butterfly4, butterfly5, butterfly_generic};
use super::core::{factorize, generic_scratch_len, precompute_twiddles};
use crate::common::{FftError, FftFloat, FftProcess, Sample};
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex;

/// A precomputed mixed-radix plan for one transform length and direction.
///
/// The plan is immutable once built: twiddles and the stage factorization
/// are shared by every call. The work buffer needed by radices above 5 is
/// supplied per call, so one context can serve several threads at once.
///
/// Neither direction is normalized. A forward transform followed by an
/// inverse one returns the input scaled by `len()`.
#[derive(Debug, Clone)]
pub struct FftContext<T> {
    len: usize,
    inverse: bool,
    twiddles: Vec<Complex<T>>,
    radices: Vec<usize>,
    remainders: Vec<usize>,
    scratch_len: usize,
}

impl<T: FftFloat> FftContext<T> {
    /// Builds the twiddle table and stage plan for `len` points.
    pub fn new(len: usize, inverse: bool) -> Result<Self, FftError> {
        if len < 2 {
            return Err(FftError::LengthTooSmall);
        }

        let (radices, remainders) = factorize(len);
        let scratch_len = generic_scratch_len(&radices);

        Ok(Self {
            len,
            inverse,
            twiddles: precompute_twiddles(len, inverse),
            radices,
            remainders,
            scratch_len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    pub fn twiddles(&self) -> &[Complex<T>] {
        &self.twiddles
    }

    /// Stage radices, outermost first.
    pub fn radices(&self) -> &[usize] {
        &self.radices
    }

    /// Sub-transform size left below each stage; the last entry is 1.
    pub fn remainders(&self) -> &[usize] {
        &self.remainders
    }

    /// Minimum scratch length for [`transform_with_scratch`](Self::transform_with_scratch).
    /// Zero when every stage has a dedicated kernel.
    pub fn scratch_len(&self) -> usize {
        self.scratch_len
    }

    /// Transforms `input` into `output`, allocating scratch only if a stage
    /// needs the generic kernel.
    pub fn transform<S: Sample<T>>(
        &self,
        input: &[S],
        output: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        let mut scratch = vec![Complex::default(); self.scratch_len];
        self.transform_with_scratch(input, output, &mut scratch)
    }

    /// Transforms `input` into `output` using a caller-owned work buffer of
    /// at least [`scratch_len`](Self::scratch_len) values.
    pub fn transform_with_scratch<S: Sample<T>>(
        &self,
        input: &[S],
        output: &mut [Complex<T>],
        scratch: &mut [Complex<T>],
    ) -> Result<(), FftError> {
        if input.len() != self.len || output.len() != self.len {
            return Err(FftError::SizeMismatch);
        }
        if scratch.len() < self.scratch_len {
            return Err(FftError::BufferTooSmall);
        }

        self.recurse(input, 0, output, 0, 1, scratch);
        Ok(())
    }

    /// Decimation-in-time step for stage `stage`.
    ///
    /// `output` is exactly `p * m` long. Its input samples are
    /// `input[offset + j * fstride]` for `j` in `0..p * m`.
    fn recurse<S: Sample<T>>(
        &self,
        input: &[S],
        offset: usize,
        output: &mut [Complex<T>],
        stage: usize,
        fstride: usize,
        scratch: &mut [Complex<T>],
    ) {
        let p = self.radices[stage];
        let m = self.remainders[stage];

        if m == 1 {
            for (j, out) in output.iter_mut().enumerate() {
                *out = input[offset + j * fstride].to_complex();
            }
        } else {
            // p interleaved sub-sequences, each transformed into its own block
            for (q, block) in output.chunks_exact_mut(m).enumerate() {
                self.recurse(input, offset + q * fstride, block, stage + 1, fstride * p, scratch);
            }
        }

        match p {
            2 => butterfly2(output, &self.twiddles, fstride, m),
            3 => butterfly3(output, &self.twiddles, fstride, m),
            4 => butterfly4(output, &self.twiddles, fstride, m, self.inverse),
            5 => butterfly5(output, &self.twiddles, fstride, m),
            _ => butterfly_generic(output, &self.twiddles, fstride, m, p, scratch),
        }
    }
}

impl<T: FftFloat, S: Sample<T>> FftProcess<S, Complex<T>> for FftContext<T> {
    fn process(&self, input: &[S], output: &mut [Complex<T>]) -> Result<(), FftError> {
        self.transform(input, output)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
