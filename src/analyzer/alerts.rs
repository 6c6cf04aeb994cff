use crate::analyzer::thresholds::{
    DAILY_TREND_R2, DECLINE_PROBABILITY, FAR_FROM_MEAN_Z, STRONG_MOVE_Z, STRONG_TREND_R2,
};
use crate::analyzer::trend::AnalysisResult;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Daily probability of decline, as a fraction.
    DeclineProbability { prob: f64 },
    /// Last daily change measured in standard deviations.
    StrongDailyMove { z: f64 },
    /// Distance of the last price from the mean, in standard deviations.
    FarFromMean { z: f64 },
    MacroBullishDailyBearish,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::DeclineProbability { prob } => write!(
                f,
                "⚠️ Elevated daily probability of decline: {:.1}%",
                prob * 100.0
            ),
            Alert::StrongDailyMove { z } => {
                write!(f, "⚡ Strong daily move: last change = {:.2}σ", z)
            }
            Alert::FarFromMean { z } => {
                write!(f, "📏 Price far from the mean: {:.2}σ away", z)
            }
            Alert::MacroBullishDailyBearish => {
                f.write_str("🔻 Macro bullish but daily bearish: possible correction")
            }
        }
    }
}

/// Checks the threshold conditions in a fixed order; every check is independent.
pub fn generate_alerts(res_m: &AnalysisResult, res_d: &AnalysisResult) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if res_d.prob_down >= DECLINE_PROBABILITY {
        alerts.push(Alert::DeclineProbability { prob: res_d.prob_down });
    }

    if res_d.std_dev > 0.0 {
        let z_move = res_d.last_change.abs() / res_d.std_dev;
        if z_move >= STRONG_MOVE_Z {
            alerts.push(Alert::StrongDailyMove { z: z_move });
        }

        let z_dist = res_d.distance.abs() / res_d.std_dev;
        if z_dist >= FAR_FROM_MEAN_Z {
            alerts.push(Alert::FarFromMean { z: z_dist });
        }
    }

    let monthly_bullish = res_m.slope > 0.0 && res_m.r2 >= STRONG_TREND_R2;
    let daily_bearish = res_d.slope < 0.0 && res_d.r2 >= DAILY_TREND_R2;
    if monthly_bullish && daily_bearish {
        alerts.push(Alert::MacroBullishDailyBearish);
    }

    alerts
}
