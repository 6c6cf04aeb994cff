// Core structs: PricePoint, HistoryRange and the error types
use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// How much history to request from the market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    Days(u32),
    Max,
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryRange::Days(days) => write!(f, "{}", days),
            HistoryRange::Max => f.write_str("max"),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("provider responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode provider response: {0}")]
    Decode(String),
    #[error("insufficient data: got {got} price points, need at least {required}")]
    InsufficientData { got: usize, required: usize },
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("series '{label}' has {n} points, at least 2 are required")]
    DegenerateSeries { label: String, n: usize },
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("API error: {0}")]
    Api(String),
    #[error("delivery timed out")]
    Timeout,
    #[error("message rejected [{status}]: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing required setting {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),
    #[error("analysis: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("delivery: {0}")]
    Notify(#[from] NotifyError),
}
