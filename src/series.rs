//! Plain-slice helpers for the rolling and summary statistics the analyses
//! need. All windows use "min periods of one" semantics: a statistic is
//! computed over however many observations are available at the start of the
//! series instead of being withheld until the window is full.

/// Simple moving average with a trailing window of `window` observations.
///
/// Output has the same length as the input; row `i` averages
/// `values[i.saturating_sub(window - 1)..=i]`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window > 0, "window must be positive");
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;
    for i in 0..values.len() {
        sum += values[i];
        if i >= window {
            sum -= values[i - window];
        }
        let n = (i + 1).min(window);
        out.push(sum / n as f64);
    }
    out
}

/// Rolling mean over an optional series, averaging only the present values in
/// each window. `None` when the window holds no value at all.
pub fn rolling_mean_opt(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    assert!(window > 0, "window must be positive");
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let lo = (i + 1).saturating_sub(window);
        let mut sum = 0.0;
        let mut n = 0usize;
        for v in values[lo..=i].iter().flatten() {
            sum += v;
            n += 1;
        }
        out.push(if n > 0 { Some(sum / n as f64) } else { None });
    }
    out
}

/// Percentage change over `periods` observations.
///
/// The first `periods` rows have no lookback and yield `None`, as does any row
/// whose lookback value is zero.
pub fn pct_change(values: &[f64], periods: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i < periods || values[i - periods] == 0.0 {
            out.push(None);
        } else {
            out.push(Some(values[i] / values[i - periods] - 1.0));
        }
    }
    out
}

/// Running maximum observed so far (expanding window).
pub fn expanding_max(values: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v > max {
            max = v;
        }
        out.push(max);
    }
    out
}

/// First differences; the first row has no predecessor and yields `None`.
pub fn diff(values: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i == 0 {
            out.push(None);
        } else {
            out.push(Some(values[i] - values[i - 1]));
        }
    }
    out
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median by sorting a copy; averages the middle pair for even lengths.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (n - 1 denominator).
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Pearson correlation between two equal-length samples.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    assert_eq!(xs.len(), ys.len(), "samples must be equal length");
    if xs.len() < 2 {
        return f64::NAN;
    }
    let mx = mean(xs);
    let my = mean(ys);
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        vx += (x - mx) * (x - mx);
        vy += (y - my) * (y - my);
    }
    if vx == 0.0 || vy == 0.0 {
        return f64::NAN;
    }
    cov / (vx.sqrt() * vy.sqrt())
}

/// Welch's two-sample t-statistic (unequal variances).
pub fn welch_t(a: &[f64], b: &[f64]) -> f64 {
    if a.len() < 2 || b.len() < 2 {
        return f64::NAN;
    }
    let va = std_dev(a).powi(2) / a.len() as f64;
    let vb = std_dev(b).powi(2) / b.len() as f64;
    (mean(a) - mean(b)) / (va + vb).sqrt()
}
