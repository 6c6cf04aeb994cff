// Market-data sources for historical prices

pub mod coingecko;

pub use coingecko::CoinGeckoSource;

use crate::model::{FetchError, HistoryRange, PricePoint};
use tracing::info;

/// Minimum number of raw points a run needs before any analysis happens.
pub const MIN_POINTS: usize = 30;

#[async_trait::async_trait]
pub trait PriceSource: Send + Sync {
    /// Historical prices, ascending by timestamp.
    async fn fetch_history(&self, range: HistoryRange) -> Result<Vec<PricePoint>, FetchError>;
    fn name(&self) -> &str;
}

/// Fetches from `source` and enforces the `MIN_POINTS` floor.
pub async fn fetch_checked(
    source: &dyn PriceSource,
    range: HistoryRange,
) -> Result<Vec<PricePoint>, FetchError> {
    let mut prices = source.fetch_history(range).await?;
    info!("📥 {} returned {} price points (range = {})", source.name(), prices.len(), range);

    if prices.len() < MIN_POINTS {
        return Err(FetchError::InsufficientData {
            got: prices.len(),
            required: MIN_POINTS,
        });
    }

    prices.sort_by_key(|p| p.timestamp);
    Ok(prices)
}
