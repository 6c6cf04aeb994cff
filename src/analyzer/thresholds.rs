// Fixed policy thresholds shared by the trend, signal and alert rules.

/// Minimum R² for a monthly trend (and a per-horizon scenario) to count as strong.
pub const STRONG_TREND_R2: f64 = 0.60;

/// Minimum R² for the daily series to be considered trending at all.
pub const DAILY_TREND_R2: f64 = 0.20;

/// Daily probability of decline at or above which an alert fires.
pub const DECLINE_PROBABILITY: f64 = 0.55;

/// Last daily change, in standard deviations, that counts as a strong move.
pub const STRONG_MOVE_Z: f64 = 0.15;

/// Distance from the mean, in standard deviations, that counts as stretched.
pub const FAR_FROM_MEAN_Z: f64 = 0.75;
