// Series builder: daily window and monthly resampling
use crate::model::PricePoint;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Number of trailing points kept for the daily horizon.
pub const DAILY_WINDOW: usize = 366;

/// Number of calendar months kept for the monthly horizon.
pub const MONTHLY_MONTHS: usize = 24;

/// Returns the trailing `DAILY_WINDOW` points, untouched.
pub fn daily_window(prices: &[PricePoint]) -> Vec<PricePoint> {
    let start = prices.len().saturating_sub(DAILY_WINDOW);
    prices[start..].to_vec()
}

/// Keeps the latest point of every (year, month) and returns the most recent `months` of them.
///
/// Equal timestamps inside a month resolve to the one appearing later in `prices`.
pub fn monthly_series(prices: &[PricePoint], months: usize) -> Vec<PricePoint> {
    let mut by_month: BTreeMap<(i32, u32), PricePoint> = BTreeMap::new();

    for point in prices {
        let key = (point.timestamp.year(), point.timestamp.month());
        let entry = by_month.entry(key).or_insert(*point);
        if point.timestamp >= entry.timestamp {
            *entry = *point;
        }
    }

    let skip = by_month.len().saturating_sub(months);
    by_month.into_values().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn day(y: i32, m: u32, d: u32, price: f64) -> PricePoint {
        PricePoint::new(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(), price)
    }

    fn daily_points(count: usize) -> Vec<PricePoint> {
        let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| PricePoint::new(start + Duration::days(i as i64), 1000.0 + i as f64))
            .collect()
    }

    #[test]
    fn daily_window_keeps_trailing_points_verbatim() {
        let all = daily_points(500);
        let window = daily_window(&all);
        assert_eq!(window.len(), DAILY_WINDOW);
        assert_eq!(window[..], all[500 - DAILY_WINDOW..]);
    }

    #[test]
    fn daily_window_returns_short_input_whole() {
        let all = daily_points(40);
        assert_eq!(daily_window(&all), all);
        assert!(daily_window(&[]).is_empty());
    }

    #[test]
    fn monthly_series_last_day_wins() {
        let prices = vec![
            day(2023, 1, 1, 10.0),
            day(2023, 1, 15, 11.0),
            day(2023, 1, 31, 12.0),
            day(2023, 2, 3, 20.0),
            day(2023, 2, 28, 21.0),
            day(2023, 3, 10, 30.0),
        ];
        let monthly = monthly_series(&prices, MONTHLY_MONTHS);
        assert_eq!(monthly.len(), 3);
        assert_eq!(monthly[0], day(2023, 1, 31, 12.0));
        assert_eq!(monthly[1], day(2023, 2, 28, 21.0));
        assert_eq!(monthly[2], day(2023, 3, 10, 30.0));
    }

    #[test]
    fn monthly_series_picks_max_timestamp_even_when_unordered() {
        let prices = vec![day(2023, 5, 20, 2.0), day(2023, 5, 2, 1.0)];
        let monthly = monthly_series(&prices, MONTHLY_MONTHS);
        assert_eq!(monthly, vec![day(2023, 5, 20, 2.0)]);
    }

    #[test]
    fn monthly_series_duplicate_timestamp_later_entry_wins() {
        let prices = vec![day(2023, 5, 20, 2.0), day(2023, 5, 20, 3.0)];
        let monthly = monthly_series(&prices, MONTHLY_MONTHS);
        assert_eq!(monthly[0].price, 3.0);
    }

    #[test]
    fn monthly_series_keeps_most_recent_months() {
        // ~ 3 years of daily data spans 37 calendar months
        let all = daily_points(1100);
        let monthly = monthly_series(&all, MONTHLY_MONTHS);
        assert_eq!(monthly.len(), MONTHLY_MONTHS);
        assert_eq!(monthly.last(), all.last());
        assert!(monthly.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[test]
    fn monthly_series_groups_across_year_boundary() {
        let prices = vec![day(2022, 12, 31, 1.0), day(2023, 1, 1, 2.0)];
        assert_eq!(monthly_series(&prices, MONTHLY_MONTHS).len(), 2);
        assert!(monthly_series(&[], MONTHLY_MONTHS).is_empty());
    }
}
