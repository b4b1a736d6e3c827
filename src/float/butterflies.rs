// src/float/butterflies.rs
//
// Recombination kernels for one decimation-in-time stage. Each kernel sees a
// block of `p * m` values holding `p` contiguous sub-transforms of size `m`
// and rewrites it in place as one transform of size `p * m`. `fstride` is the
// twiddle index step for this recursion depth, so `twiddles[k * fstride]` is
// `exp(-+ 2*pi*i * k / (p * m))`.

use crate::common::FftFloat;
use num_complex::Complex;

/// Multiplies by `-i` (forward) or `+i` (inverse) without a complex product.
#[inline(always)]
fn rotate_quarter<T: FftFloat>(value: Complex<T>, inverse: bool) -> Complex<T> {
    if inverse {
        Complex::new(-value.im, value.re)
    } else {
        Complex::new(value.im, -value.re)
    }
}

pub(crate) fn butterfly2<T: FftFloat>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    fstride: usize,
    m: usize,
) {
    debug_assert_eq!(data.len(), 2 * m);
    let (lower, upper) = data.split_at_mut(m);
    for (k, (a, b)) in lower.iter_mut().zip(upper.iter_mut()).enumerate() {
        let t = *b * twiddles[k * fstride];
        *b = *a - t;
        *a += t;
    }
}

pub(crate) fn butterfly3<T: FftFloat>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    fstride: usize,
    m: usize,
) {
    debug_assert_eq!(data.len(), 3 * m);
    let m2 = 2 * m;
    let half = T::from_f64(0.5);
    // Imaginary part of the primitive cube root: -+ sqrt(3)/2.
    let sin_third = twiddles[fstride * m].im;

    for k in 0..m {
        let s1 = data[k + m] * twiddles[k * fstride];
        let s2 = data[k + m2] * twiddles[2 * k * fstride];

        let sum = s1 + s2;
        let diff = (s1 - s2) * sin_third;

        let mid = data[k] - sum * half;
        data[k] += sum;

        data[k + m2] = Complex::new(mid.re + diff.im, mid.im - diff.re);
        data[k + m] = Complex::new(mid.re - diff.im, mid.im + diff.re);
    }
}

pub(crate) fn butterfly4<T: FftFloat>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    fstride: usize,
    m: usize,
    inverse: bool,
) {
    debug_assert_eq!(data.len(), 4 * m);
    for k in 0..m {
        let s0 = data[k + m] * twiddles[k * fstride];
        let s1 = data[k + 2 * m] * twiddles[2 * k * fstride];
        let s2 = data[k + 3 * m] * twiddles[3 * k * fstride];

        let even_diff = data[k] - s1;
        let even_sum = data[k] + s1;
        let odd_sum = s0 + s2;
        let odd_diff = rotate_quarter(s0 - s2, inverse);

        data[k + 2 * m] = even_sum - odd_sum;
        data[k] = even_sum + odd_sum;
        data[k + m] = even_diff + odd_diff;
        data[k + 3 * m] = even_diff - odd_diff;
    }
}

pub(crate) fn butterfly5<T: FftFloat>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    fstride: usize,
    m: usize,
) {
    debug_assert_eq!(data.len(), 5 * m);
    let ya = twiddles[fstride * m];
    let yb = twiddles[fstride * 2 * m];

    for u in 0..m {
        let x0 = data[u];
        let x1 = data[u + m] * twiddles[u * fstride];
        let x2 = data[u + 2 * m] * twiddles[2 * u * fstride];
        let x3 = data[u + 3 * m] * twiddles[3 * u * fstride];
        let x4 = data[u + 4 * m] * twiddles[4 * u * fstride];

        // Conjugate-pair sums and differences: (1,4) and (2,3).
        let s14 = x1 + x4;
        let d14 = x1 - x4;
        let s23 = x2 + x3;
        let d23 = x2 - x3;

        data[u] = x0 + s14 + s23;

        let a = x0
            + Complex::new(
                s14.re * ya.re + s23.re * yb.re,
                s14.im * ya.re + s23.im * yb.re,
            );
        let b = Complex::new(
            d14.im * ya.im + d23.im * yb.im,
            -d14.re * ya.im - d23.re * yb.im,
        );
        data[u + m] = a - b;
        data[u + 4 * m] = a + b;

        let c = x0
            + Complex::new(
                s14.re * yb.re + s23.re * ya.re,
                s14.im * yb.re + s23.im * ya.re,
            );
        let d = Complex::new(
            -d14.im * yb.im + d23.im * ya.im,
            d14.re * yb.im - d23.re * ya.im,
        );
        data[u + 2 * m] = c + d;
        data[u + 3 * m] = c - d;
    }
}

/// Plain O(p^2) DFT recombination for radices without a dedicated kernel.
///
/// `scratch` must hold at least `p` values; it is overwritten.
pub(crate) fn butterfly_generic<T: FftFloat>(
    data: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    fstride: usize,
    m: usize,
    p: usize,
    scratch: &mut [Complex<T>],
) {
    debug_assert_eq!(data.len(), p * m);
    debug_assert!(scratch.len() >= p);
    let n = twiddles.len();
    let scratch = &mut scratch[..p];

    for u in 0..m {
        for (q, slot) in scratch.iter_mut().enumerate() {
            *slot = data[u + q * m];
        }

        for q1 in 0..p {
            let k = u + q1 * m;
            let mut twidx = 0;
            let mut acc = scratch[0];
            for value in &scratch[1..] {
                twidx += fstride * k;
                if twidx >= n {
                    twidx -= n;
                }
                acc += *value * twiddles[twidx];
            }
            data[k] = acc;
        }
    }
}

#[cfg(test)]
#[path = "butterflies_tests.rs"]
mod tests;
