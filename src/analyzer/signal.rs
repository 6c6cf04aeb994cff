use crate::analyzer::thresholds::{DAILY_TREND_R2, STRONG_TREND_R2};
use crate::analyzer::trend::AnalysisResult;
use std::fmt;

/// Single judgment combining the monthly and daily horizons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinedSignal {
    AlignedBullish,
    BullishButPaused,
    BullishButCorrectionRisk,
    AlignedBearish,
    BearishButSideways,
    BearishButRebound,
    WeakBullishBias,
    WeakBearishBias,
    NoClearBias,
}

impl fmt::Display for CombinedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CombinedSignal::AlignedBullish => "🟢 Aligned bullish: monthly and daily trends both up",
            CombinedSignal::BullishButPaused => "🟡 Bullish but paused: monthly up, daily without direction",
            CombinedSignal::BullishButCorrectionRisk => {
                "🟠 Bullish with correction risk: monthly up, daily down"
            }
            CombinedSignal::AlignedBearish => "🔴 Aligned bearish: monthly and daily trends both down",
            CombinedSignal::BearishButSideways => "🟠 Bearish but sideways: monthly down, daily without direction",
            CombinedSignal::BearishButRebound => "🟡 Bearish with rebound: monthly down, daily up",
            CombinedSignal::WeakBullishBias => "⚪ Weak bullish bias: no strong monthly trend",
            CombinedSignal::WeakBearishBias => "⚪ Weak bearish bias: no strong monthly trend",
            CombinedSignal::NoClearBias => "⚪ No clear bias",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Bullish,
    Bearish,
    Sideways,
}

fn monthly_direction(res_m: &AnalysisResult) -> Direction {
    if res_m.slope > 0.0 && res_m.r2 >= STRONG_TREND_R2 {
        Direction::Bullish
    } else if res_m.slope < 0.0 && res_m.r2 >= STRONG_TREND_R2 {
        Direction::Bearish
    } else {
        Direction::Sideways
    }
}

fn daily_direction(res_d: &AnalysisResult) -> Direction {
    let has_trend = res_d.r2 >= DAILY_TREND_R2;
    if has_trend && res_d.slope > 0.0 {
        Direction::Bullish
    } else if has_trend && res_d.slope < 0.0 {
        Direction::Bearish
    } else {
        Direction::Sideways
    }
}

/// Combines the monthly (`res_m`) and daily (`res_d`) analyses into one signal.
pub fn combine(res_m: &AnalysisResult, res_d: &AnalysisResult) -> CombinedSignal {
    use Direction::*;

    match (monthly_direction(res_m), daily_direction(res_d)) {
        (Bullish, Bullish) => CombinedSignal::AlignedBullish,
        (Bullish, Sideways) => CombinedSignal::BullishButPaused,
        (Bullish, Bearish) => CombinedSignal::BullishButCorrectionRisk,
        (Bearish, Bearish) => CombinedSignal::AlignedBearish,
        (Bearish, Sideways) => CombinedSignal::BearishButSideways,
        (Bearish, Bullish) => CombinedSignal::BearishButRebound,
        (Sideways, _) if res_m.slope > 0.0 => CombinedSignal::WeakBullishBias,
        (Sideways, _) if res_m.slope < 0.0 => CombinedSignal::WeakBearishBias,
        (Sideways, _) => CombinedSignal::NoClearBias,
    }
}
