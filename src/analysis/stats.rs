/// Descriptive statistics for the resolution diagnostic.
///
/// A single `describe` pass computes the full set of moments; the
/// printed report surfaces only mean/min/max, which is what the
/// resolution check actually reads. Variance uses the n-1 (sample)
/// denominator; skewness and kurtosis are the biased central-moment
/// forms, kurtosis as excess (normal = 0).

/// Summary of a sample of distances.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
    pub skewness: f64,
    pub kurtosis: f64,
}

/// Compute descriptive statistics over a sample.
///
/// Returns `None` for an empty sample — there is nothing to describe
/// and no sensible sentinel values. Single-element samples report zero
/// variance/skewness and excess kurtosis of -3 by convention.
pub fn describe(values: &[f64]) -> Option<DescriptiveStats> {
    if values.is_empty() {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);

    for &v in values {
        min = min.min(v);
        max = max.max(v);
        let d = v - mean;
        m2 += d * d;
        m3 += d * d * d;
        m4 += d * d * d * d;
    }
    m2 /= n;
    m3 /= n;
    m4 /= n;

    let variance = if values.len() > 1 { m2 * n / (n - 1.0) } else { 0.0 };
    let skewness = if m2 > 0.0 { m3 / m2.powf(1.5) } else { 0.0 };
    let kurtosis = if m2 > 0.0 { m4 / (m2 * m2) - 3.0 } else { -3.0 };

    Some(DescriptiveStats {
        count: values.len(),
        mean,
        min,
        max,
        variance,
        skewness,
        kurtosis,
    })
}

/// Format the console report for the grid resolution check.
///
/// Mean is rounded to centimeters; min/max print as-is so suspicious
/// values (a 0 from duplicate points, say) stand out unrounded.
pub fn resolution_report(stats: &DescriptiveStats) -> String {
    format!(
        "Grid Resolution (m) \nMean: {:.2} \nMin: {} \nMax: {}",
        stats.mean, stats.min, stats.max
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
