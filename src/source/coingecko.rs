use crate::model::{FetchError, HistoryRange, PricePoint};
use crate::source::PriceSource;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

const API_BASE: &str = "https://api.coingecko.com/api/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct MarketChart {
    /// `[unix_millis, price]` pairs.
    prices: Vec<(f64, f64)>,
}

/// Bitcoin price history from the CoinGecko `market_chart` endpoint.
pub struct CoinGeckoSource {
    client: Client,
    vs_currency: String,
}

impl CoinGeckoSource {
    pub fn new(vs_currency: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("btc-trend-bot/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self {
            client,
            vs_currency: vs_currency.into(),
        })
    }

    fn build_url(&self) -> String {
        format!("{}/coins/bitcoin/market_chart", API_BASE)
    }

    /// Query for `range`; `interval=daily` pins one point per day even for short ranges,
    /// which the provider would otherwise return at hourly or 5-minute spacing.
    fn query(&self, range: HistoryRange) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.clone()),
            ("days", range.to_string()),
            ("interval", "daily".to_string()),
        ]
    }
}

/// Decodes a `market_chart` body into ascending price points.
///
/// Pairs with an invalid timestamp or a non-positive price are dropped.
pub fn parse_market_chart(body: &str) -> Result<Vec<PricePoint>, FetchError> {
    let chart: MarketChart =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let total = chart.prices.len();
    let mut points: Vec<PricePoint> = chart
        .prices
        .into_iter()
        .filter(|&(_, price)| price.is_finite() && price > 0.0)
        .filter_map(|(millis, price)| {
            DateTime::from_timestamp_millis(millis as i64).map(|ts| PricePoint::new(ts, price))
        })
        .collect();

    if points.len() < total {
        warn!("Dropped {} invalid price points", total - points.len());
    }

    points.sort_by_key(|p| p.timestamp);
    Ok(points)
}

#[async_trait::async_trait]
impl PriceSource for CoinGeckoSource {
    async fn fetch_history(&self, range: HistoryRange) -> Result<Vec<PricePoint>, FetchError> {
        let url = self.build_url();
        info!("Fetching price history: {} (days = {})", url, range);

        let response = self
            .client
            .get(&url)
            .query(&self.query(range))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout
                } else {
                    FetchError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_market_chart(&body)
    }

    fn name(&self) -> &str {
        "CoinGecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_market_chart_body() {
        let body = r#"{
            "prices": [[1704153600000, 44187.14], [1704067200000, 42265.19], [1704240000000, 0.0]],
            "market_caps": [],
            "total_volumes": []
        }"#;
        let points = parse_market_chart(body).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].price, 42265.19);
        assert_eq!(points[0].timestamp.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        assert_eq!(points[1].price, 44187.14);
    }

    #[test]
    fn query_requests_daily_spacing() {
        let source = CoinGeckoSource::new("usd").unwrap();
        for range in [HistoryRange::Days(1), HistoryRange::Days(60), HistoryRange::Max] {
            let query = source.query(range);
            assert!(query.contains(&("interval", "daily".to_string())), "{:?}", query);
            assert!(query.contains(&("days", range.to_string())));
            assert!(query.contains(&("vs_currency", "usd".to_string())));
        }
        assert_eq!(
            source.build_url(),
            "https://api.coingecko.com/api/v3/coins/bitcoin/market_chart"
        );
    }

    #[test]
    fn rejects_malformed_body() {
        let err = parse_market_chart(r#"{"error": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
