// Fetch → series → analysis → signal/alerts → message → delivery
use crate::analyzer::{analyze, combine, generate_alerts, Alert, AnalysisResult, CombinedSignal};
use crate::model::{AppError, HistoryRange, PricePoint};
use crate::notifier::MessageSink;
use crate::report::assemble_message;
use crate::series::{daily_window, monthly_series, DAILY_WINDOW, MONTHLY_MONTHS};
use crate::source::{fetch_checked, PriceSource};
use chrono::{DateTime, Utc};
use tracing::info;

/// Everything derived from one price history.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub monthly: AnalysisResult,
    pub daily: AnalysisResult,
    pub signal: CombinedSignal,
    pub alerts: Vec<Alert>,
}

/// Runs the pure part of the pipeline over an already fetched history.
pub fn evaluate(prices: &[PricePoint]) -> Result<Outcome, AppError> {
    let daily_series = daily_window(prices);
    let monthly = monthly_series(prices, MONTHLY_MONTHS);
    info!(
        "Built series: daily = {} points, monthly = {} points",
        daily_series.len(),
        monthly.len()
    );

    let monthly = analyze(&format!("Monthly ({} months)", MONTHLY_MONTHS), &monthly)?;
    let daily = analyze(&format!("Daily ({} days)", DAILY_WINDOW), &daily_series)?;
    info!(
        "Monthly: slope = {:.2}, R² = {:.2}, scenario = {}",
        monthly.slope, monthly.r2, monthly.scenario
    );
    info!(
        "Daily: slope = {:.2}, R² = {:.2}, scenario = {}",
        daily.slope, daily.r2, daily.scenario
    );

    let signal = combine(&monthly, &daily);
    let alerts = generate_alerts(&monthly, &daily);
    info!("Combined signal: {} | {} alert(s)", signal, alerts.len());

    Ok(Outcome {
        monthly,
        daily,
        signal,
        alerts,
    })
}

/// Runs once end to end; the message is only delivered if every earlier stage succeeded.
pub async fn run(
    source: &dyn PriceSource,
    sink: &dyn MessageSink,
    range: HistoryRange,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let prices = fetch_checked(source, range).await?;
    let outcome = evaluate(&prices)?;
    let message = assemble_message(
        now,
        &outcome.monthly,
        &outcome.daily,
        outcome.signal,
        &outcome.alerts,
    );

    info!("Delivering report via {}...", sink.name());
    sink.deliver(&message).await?;
    info!("Report delivered.");
    Ok(message)
}
