use crate::analyzer::thresholds::STRONG_TREND_R2;
use crate::model::{AnalysisError, PricePoint};
use std::fmt;

/// Per-horizon trend judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    BullishContinuation,
    BearishContinuation,
    Sideways,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Scenario::BullishContinuation => "bullish continuation",
            Scenario::BearishContinuation => "bearish continuation",
            Scenario::Sideways => "sideways / indecisive",
        };
        f.write_str(label)
    }
}

/// Statistics computed once for a single price series.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// Which series this is (e.g. "Monthly (24m)").
    pub label: String,
    pub n: usize,
    pub last_price: f64,
    /// Price change per index step of the least-squares fit.
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination; 0.0 for a flat series.
    pub r2: f64,
    pub last_change: f64,
    pub mean_change: f64,
    pub mean: f64,
    /// Population standard deviation of the prices.
    pub std_dev: f64,
    /// Last price minus the mean.
    pub distance: f64,
    pub prob_up: f64,
    /// Always `1.0 - prob_up`.
    pub prob_down: f64,
    pub scenario: Scenario,
}

/// Ordinary least-squares line over index positions `0..n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

/// Fits `price ≈ slope * i + intercept` with unit-spaced x and computes R².
///
/// `mean` must be the mean of `y`; a flat series yields slope 0 and R² 0.
pub fn linear_fit(y: &[f64], mean: f64) -> LinearFit {
    let n = y.len() as f64;
    let x_mean = (n - 1.0) / 2.0;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (i, &yi) in y.iter().enumerate() {
        let dx = i as f64 - x_mean;
        sxy += dx * (yi - mean);
        sxx += dx * dx;
    }
    let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    let intercept = mean - slope * x_mean;

    let ss_tot: f64 = y.iter().map(|yi| (yi - mean).powi(2)).sum();
    let r2 = if ss_tot == 0.0 {
        0.0
    } else {
        let ss_res: f64 = y
            .iter()
            .enumerate()
            .map(|(i, yi)| (yi - (slope * i as f64 + intercept)).powi(2))
            .sum();
        1.0 - ss_res / ss_tot
    };

    LinearFit { slope, intercept, r2 }
}

/// Arithmetic mean, exact for a constant series.
fn mean_of(values: &[f64]) -> f64 {
    match values.first() {
        None => 0.0,
        Some(&first) if values.iter().all(|&v| v == first) => first,
        Some(_) => values.iter().sum::<f64>() / values.len() as f64,
    }
}

fn classify(slope: f64, r2: f64, last_change: f64, mean_change: f64) -> Scenario {
    if slope > 0.0 && r2 >= STRONG_TREND_R2 && last_change > mean_change {
        Scenario::BullishContinuation
    } else if slope < 0.0 && r2 >= STRONG_TREND_R2 {
        Scenario::BearishContinuation
    } else {
        Scenario::Sideways
    }
}

/// Analyzes one price series.
///
/// Series shorter than two points are rejected with `AnalysisError::DegenerateSeries`.
pub fn analyze(label: &str, series: &[PricePoint]) -> Result<AnalysisResult, AnalysisError> {
    if series.len() < 2 {
        return Err(AnalysisError::DegenerateSeries {
            label: label.to_string(),
            n: series.len(),
        });
    }

    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();
    let n = prices.len();
    let last_price = prices[n - 1];

    let mean = mean_of(&prices);
    let fit = linear_fit(&prices, mean);

    let diffs: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let last_change = diffs.last().copied().unwrap_or(0.0);
    let mean_change = if diffs.is_empty() {
        0.0
    } else {
        diffs.iter().sum::<f64>() / diffs.len() as f64
    };

    let std_dev = (prices.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n as f64).sqrt();
    let distance = last_price - mean;

    let prob_up = if diffs.is_empty() {
        0.0
    } else {
        diffs.iter().filter(|&&d| d > 0.0).count() as f64 / diffs.len() as f64
    };
    let prob_down = 1.0 - prob_up;

    let scenario = classify(fit.slope, fit.r2, last_change, mean_change);

    Ok(AnalysisResult {
        label: label.to_string(),
        n,
        last_price,
        slope: fit.slope,
        intercept: fit.intercept,
        r2: fit.r2,
        last_change,
        mean_change,
        mean,
        std_dev,
        distance,
        prob_up,
        prob_down,
        scenario,
    })
}
