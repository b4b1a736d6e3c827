// src/float/core.rs

use crate::common::FftFloat;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex;

/// Computes the full twiddle table for a transform of size `n`.
///
/// `twiddle[k] = exp(i * sign * 2*pi * k / n)`, with `sign = +1` for the
/// inverse direction and `-1` for the forward one. Angles are evaluated in
/// double precision and narrowed once.
pub(crate) fn precompute_twiddles<T: FftFloat>(n: usize, inverse: bool) -> Vec<Complex<T>> {
    let phase_step = if inverse { 2.0 } else { -2.0 } * PI / (n as f64);
    (0..n)
        .map(|k| {
            let (sin, cos) = sin_cos(phase_step * (k as f64));
            Complex::new(T::from_f64(cos), T::from_f64(sin))
        })
        .collect()
}

/// Splits `n` into stage radices, outermost first.
///
/// Fours are taken first, then twos, then odd candidates 3, 5, 7, 9, ...
/// Once the candidate squared exceeds what is left, the remainder is prime
/// and becomes the last radix. Returns `(radices, remainders)` where
/// `remainders[i]` is the size of each sub-transform below stage `i`.
pub(crate) fn factorize(n: usize) -> (Vec<usize>, Vec<usize>) {
    let mut radices = Vec::new();
    let mut remainders = Vec::new();
    let mut rest = n;
    let mut p = 4;

    loop {
        while rest % p != 0 {
            p = match p {
                4 => 2,
                2 => 3,
                _ => p + 2,
            };
            if p * p > rest {
                p = rest;
            }
        }
        rest /= p;
        radices.push(p);
        remainders.push(rest);
        if rest <= 1 {
            break;
        }
    }

    (radices, remainders)
}

/// Scratch length the generic butterfly needs for this plan, or zero when
/// every stage has a dedicated kernel.
pub(crate) fn generic_scratch_len(radices: &[usize]) -> usize {
    radices.iter().copied().filter(|&p| p > 5).max().unwrap_or(0)
}

/// sin/cos that works with and without std.
fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
