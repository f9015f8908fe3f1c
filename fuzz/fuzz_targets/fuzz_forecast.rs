#![no_main]

use libfuzzer_sys::fuzz_target;
use trend_engine::{forecast, time_left, FitFamily, Mode};

/// Splits the input into little-endian `f64` words, replacing non-finite
/// values so the interesting paths (fits, root finding) actually run.
fn decode_samples(data: &[u8]) -> Vec<f64> {
    data.chunks_exact(8)
        .map(|chunk| {
            let value = f64::from_le_bytes(chunk.try_into().unwrap());
            if value.is_finite() {
                value
            } else {
                0.0
            }
        })
        .take(64)
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };

    let samples = decode_samples(rest);
    if samples.len() < 2 {
        return;
    }

    let (t, x) = samples.split_at(samples.len() / 2);
    let n = t.len().min(x.len());
    let (t, x) = (&t[..n], &x[..n]);

    let fit = match selector % 5 {
        0 => FitFamily::Linear,
        1 => FitFamily::Exponential,
        2 => FitFamily::Logarithmic,
        3 => FitFamily::Power,
        _ => FitFamily::Polynomial(u32::from(selector / 5 % 6) + 1),
    };
    let mode = match selector % 4 {
        0 => Mode::Value,
        1 => Mode::Max,
        2 => Mode::Min,
        _ => Mode::Avg,
    };

    // Any input may be rejected, but nothing may panic.
    let _ = forecast(t, x, 1.0, 10.0, fit, mode);
    let _ = forecast(t, x, 1.0, 0.0, fit, Mode::Delta);
    let _ = time_left(t, x, 1.0, 100.0, fit);
});
