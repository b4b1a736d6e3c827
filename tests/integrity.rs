use num_complex::Complex;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::Normal;
use rs_mixed_fft::{FftCache, FftContext, FftFloat};

/// Reference DFT in double precision with the same unnormalized convention.
fn dft(input: &[Complex<f64>], inverse: bool) -> Vec<Complex<f64>> {
    let n = input.len();
    let sign = if inverse { 2.0 } else { -2.0 };
    (0..n)
        .map(|k| {
            let mut acc = Complex::new(0.0, 0.0);
            for (j, x) in input.iter().enumerate() {
                let f = sign * std::f64::consts::PI * ((k * j) % n) as f64 / n as f64;
                acc += x * Complex::new(f.cos(), f.sin());
            }
            acc
        })
        .collect()
}

fn random_input(size: usize, seed: u64) -> Vec<Complex<f64>> {
    let distribution = Normal::new(0.0, 1.0).unwrap();
    let rng: StdRng = SeedableRng::seed_from_u64(seed);
    let values: Vec<f64> = rng.sample_iter(&distribution).take(2 * size).collect();
    values.chunks_exact(2).map(|c| Complex::new(c[0], c[1])).collect()
}

fn narrow<T: FftFloat>(input: &[Complex<f64>]) -> Vec<Complex<T>> {
    input
        .iter()
        .map(|x| Complex::new(T::from_f64(x.re), T::from_f64(x.im)))
        .collect()
}

fn near_f32(actual: &[Complex<f32>], expected: &[Complex<f64>]) {
    assert_eq!(actual.len(), expected.len());
    let scale = expected.iter().map(|x| x.norm()).fold(1.0, f64::max) as f32;
    let tolerance = 1e-4 * scale;
    for (actual, expected) in actual.iter().zip(expected.iter()) {
        let expected = Complex::new(expected.re as f32, expected.im as f32);
        assert!(
            float_cmp::approx_eq!(
                f32,
                actual.re,
                expected.re,
                float_cmp::F32Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ) && float_cmp::approx_eq!(
                f32,
                actual.im,
                expected.im,
                float_cmp::F32Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ),
            "{} != {}",
            actual,
            expected
        );
    }
}

fn near_f64(actual: &[Complex<f64>], expected: &[Complex<f64>]) {
    assert_eq!(actual.len(), expected.len());
    let scale = expected.iter().map(|x| x.norm()).fold(1.0, f64::max);
    let tolerance = 1e-11 * scale;
    for (actual, expected) in actual.iter().zip(expected.iter()) {
        assert!(
            float_cmp::approx_eq!(
                f64,
                actual.re,
                expected.re,
                float_cmp::F64Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ) && float_cmp::approx_eq!(
                f64,
                actual.im,
                expected.im,
                float_cmp::F64Margin {
                    epsilon: tolerance,
                    ulps: 8
                }
            ),
            "{} != {}",
            actual,
            expected
        );
    }
}

macro_rules! generate_test {
    {
        $type:ty, $name:ident, $comparison:ident, $inverse:expr
    } => {
        #[test]
        fn $name() {
            const MAX_SIZE: usize = 64;
            let input = random_input(MAX_SIZE, 0xdeadbeef);
            for size in 2..=MAX_SIZE {
                let fft = FftContext::<$type>::new(size, $inverse).unwrap();
                let mut output = vec![Complex::default(); size];
                fft.transform(&narrow::<$type>(&input[..size]), &mut output).unwrap();
                $comparison(&output, &dft(&input[..size], $inverse));
            }
        }
    }
}

generate_test! { f32, integrity_forward_f32, near_f32, false }
generate_test! { f32, integrity_inverse_f32, near_f32, true }
generate_test! { f64, integrity_forward_f64, near_f64, false }
generate_test! { f64, integrity_inverse_f64, near_f64, true }

#[test]
fn integrity_large_sizes_f64() {
    let mut cache = FftCache::<f64>::new();
    for size in [120, 128, 243, 250, 343, 1000, 2 * 3 * 5 * 7 * 11] {
        let input = random_input(size, size as u64);
        near_f64(&cache.fft(&input).unwrap(), &dft(&input, false));
        near_f64(&cache.ifft(&input).unwrap(), &dft(&input, true));
    }
}

#[test]
fn round_trip_scales_by_length() {
    let mut cache = FftCache::<f32>::new();
    for size in [2, 3, 7, 16, 30, 49, 100] {
        let input = narrow::<f32>(&random_input(size, 7));
        let spectrum = cache.fft(&input).unwrap();
        let restored = cache.ifft(&spectrum).unwrap();
        for (r, x) in restored.iter().zip(input.iter()) {
            let r = *r / size as f32;
            assert!((r - *x).norm() < 1e-4 * (1.0 + x.norm()), "{} != {}", r, x);
        }
    }
}

#[test]
fn linearity() {
    let mut cache = FftCache::<f64>::new();
    let (a, b) = (Complex::new(0.5, -2.0), Complex::new(-1.25, 0.75));
    for size in [6, 9, 20, 22] {
        let x = random_input(size, 1);
        let y = random_input(size, 2);
        let combined: Vec<Complex<f64>> =
            x.iter().zip(y.iter()).map(|(x, y)| a * x + b * y).collect();

        let fx = cache.fft(&x).unwrap();
        let fy = cache.fft(&y).unwrap();
        let expected: Vec<Complex<f64>> =
            fx.iter().zip(fy.iter()).map(|(x, y)| a * x + b * y).collect();

        near_f64(&cache.fft(&combined).unwrap(), &expected);
    }
}

#[test]
fn dc_bin_is_sum() {
    let mut cache = FftCache::<f64>::new();
    for size in [2, 5, 12, 17, 64] {
        let complex = random_input(size, 3);
        let sum: Complex<f64> = complex.iter().sum();
        let spectrum = cache.fft(&complex).unwrap();
        assert!((spectrum[0] - sum).norm() < 1e-12 * size as f64);

        let real: Vec<f64> = complex.iter().map(|x| x.re).collect();
        let sum: f64 = real.iter().sum();
        let spectrum = cache.fft(&real).unwrap();
        assert!((spectrum[0] - sum).norm() < 1e-12 * size as f64);
    }
}

#[test]
fn parseval_per_kernel() {
    let mut cache = FftCache::<f32>::new();
    // radix 4/2, radix 3, radix 5, mixed 4*3, generic 2*7
    for size in [8, 9, 25, 12, 14] {
        let input = narrow::<f32>(&random_input(size, 11));
        let spectrum = cache.fft(&input).unwrap();
        let time_energy: f32 = input.iter().map(|x| x.norm_sqr()).sum();
        let freq_energy: f32 = spectrum.iter().map(|x| x.norm_sqr()).sum();
        let expected = size as f32 * time_energy;
        assert!(
            (freq_energy - expected).abs() < 1e-4 * expected,
            "size {}: {} != {}",
            size,
            freq_energy,
            expected
        );
    }
}

#[test]
fn known_small_transform() {
    let mut cache = FftCache::<f32>::new();
    let spectrum = cache.fft(&[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let expected = [
        Complex::new(21.0, 0.0),
        Complex::new(-3.0, 5.1962),
        Complex::new(-3.0, 1.7321),
        Complex::new(-3.0, 0.0),
        Complex::new(-3.0, -1.7321),
        Complex::new(-3.0, -5.1962),
    ];
    for (s, e) in spectrum.iter().zip(expected.iter()) {
        assert!((s - e).norm() < 1e-4, "{} != {}", s, e);
    }
}

#[test]
fn shared_context_across_threads() {
    let fft = std::sync::Arc::new(FftContext::<f64>::new(2 * 11 * 13, false).unwrap());
    let input = random_input(fft.len(), 5);
    let expected = dft(&input, false);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let fft = fft.clone();
            let input = input.clone();
            std::thread::spawn(move || {
                let mut scratch = vec![Complex::default(); fft.scratch_len()];
                let mut output = vec![Complex::default(); fft.len()];
                fft.transform_with_scratch(&input, &mut output, &mut scratch)
                    .unwrap();
                output
            })
        })
        .collect();

    for handle in handles {
        near_f64(&handle.join().unwrap(), &expected);
    }
}

#[test]
fn error_display() {
    let err = FftContext::<f32>::new(1, false).unwrap_err();
    assert_eq!(err.to_string(), "Transform length must be at least 2");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.to_string().contains("at least 2"));
}
