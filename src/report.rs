// Text rendering of analysis results and the final message
use crate::analyzer::{Alert, AnalysisResult, CombinedSignal};
use chrono::{DateTime, Utc};

/// Renders one analysis result as a fixed-layout text block.
pub fn format_report(res: &AnalysisResult) -> String {
    let momentum = if res.last_change > res.mean_change {
        "accelerating"
    } else {
        "not accelerating"
    };
    format!(
        "📊 {label}\n\
         Points: {n}\n\
         Last price: {price:.2}\n\
         Slope: {slope:.2} per step (intercept {intercept:.2})\n\
         R²: {r2:.2}\n\
         Prob. up: {up:.1}% | Prob. down: {down:.1}%\n\
         Momentum: last change {last:.2} vs mean change {avg:.2} ({momentum})\n\
         Distance to mean: {dist:.2} (mean {mean:.2}, σ = {sd:.2})\n\
         Scenario: {scenario}",
        label = res.label,
        n = res.n,
        price = res.last_price,
        slope = res.slope,
        intercept = res.intercept,
        r2 = res.r2,
        up = res.prob_up * 100.0,
        down = res.prob_down * 100.0,
        last = res.last_change,
        avg = res.mean_change,
        momentum = momentum,
        dist = res.distance,
        mean = res.mean,
        sd = res.std_dev,
        scenario = res.scenario,
    )
}

/// Assembles the full message: header, both reports, combined signal and alerts.
pub fn assemble_message(
    generated_at: DateTime<Utc>,
    res_m: &AnalysisResult,
    res_d: &AnalysisResult,
    signal: CombinedSignal,
    alerts: &[Alert],
) -> String {
    let mut msg = format!(
        "₿ Bitcoin trend report ({})\n\n",
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    msg.push_str(&format_report(res_m));
    msg.push_str("\n\n");
    msg.push_str(&format_report(res_d));
    msg.push_str(&format!("\n\n🧭 Combined signal: {}\n", signal));

    if alerts.is_empty() {
        msg.push_str("\n✅ No alerts.");
    } else {
        msg.push_str("\n🚨 Alerts:");
        for alert in alerts {
            msg.push_str(&format!("\n• {}", alert));
        }
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Scenario;
    use chrono::TimeZone;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            label: "Daily (366d)".to_string(),
            n: 366,
            last_price: 64_250.5,
            slope: 41.237,
            intercept: 40_000.0,
            r2: 0.7349,
            last_change: 512.0,
            mean_change: 80.25,
            mean: 55_000.0,
            std_dev: 6_100.456,
            distance: 9_250.5,
            prob_up: 0.5342,
            prob_down: 1.0 - 0.5342,
            scenario: Scenario::BullishContinuation,
        }
    }

    #[test]
    fn report_layout() {
        let text = format_report(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "📊 Daily (366d)",
                "Points: 366",
                "Last price: 64250.50",
                "Slope: 41.24 per step (intercept 40000.00)",
                "R²: 0.73",
                "Prob. up: 53.4% | Prob. down: 46.6%",
                "Momentum: last change 512.00 vs mean change 80.25 (accelerating)",
                "Distance to mean: 9250.50 (mean 55000.00, σ = 6100.46)",
                "Scenario: bullish continuation",
            ]
        );
    }

    #[test]
    fn message_lists_alerts_in_order() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let alerts = vec![
            Alert::DeclineProbability { prob: 0.6 },
            Alert::MacroBullishDailyBearish,
        ];
        let msg = assemble_message(at, &sample(), &sample(), CombinedSignal::AlignedBullish, &alerts);
        assert!(msg.starts_with("₿ Bitcoin trend report (2024-03-01 08:30 UTC)"));
        assert!(msg.contains(&CombinedSignal::AlignedBullish.to_string()));
        let first = msg.find("probability of decline").unwrap();
        let second = msg.find("possible correction").unwrap();
        assert!(first < second);
        assert!(!msg.contains("No alerts"));
    }

    #[test]
    fn message_without_alerts() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let msg = assemble_message(at, &sample(), &sample(), CombinedSignal::NoClearBias, &[]);
        assert!(msg.ends_with("✅ No alerts."));
    }
}
