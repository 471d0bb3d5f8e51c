//! Descriptive price statistics

use serde::Serialize;

/// Summary of a non-empty set of prices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceStatistics {
    pub total: f64,
    pub mean: f64,
    /// Average of the two middle values for an even count
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl PriceStatistics {
    /// `None` for an empty input
    pub fn from_prices(prices: &[f64]) -> Option<Self> {
        if prices.is_empty() {
            return None;
        }

        let mut sorted = prices.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let total: f64 = sorted.iter().sum();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            total,
            mean: total / count as f64,
            median,
            min: sorted[0],
            max: sorted[count - 1],
            count,
        })
    }
}
