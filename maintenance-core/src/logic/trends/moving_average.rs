//! Trailing moving average

use super::TrendError;

/// Trailing mean over `window` samples.
///
/// The first `window - 1` entries are `None`; entry `i` is the mean of
/// `values[i + 1 - window ..= i]`. A window longer than the series yields
/// all `None`.
pub fn moving_average(values: &[f64], window: usize) -> Result<Vec<Option<f64>>, TrendError> {
    if window == 0 {
        return Err(TrendError::ZeroWindow);
    }

    let warmup = (window - 1).min(values.len());
    let mut out = vec![None; warmup];
    out.extend(
        values
            .windows(window)
            .map(|w| Some(w.iter().sum::<f64>() / window as f64)),
    );

    Ok(out)
}
