// Analyzer module: per-horizon trend statistics and the cross-horizon rules built on them.

pub mod alerts;
pub mod signal;
pub mod thresholds;
pub mod trend;

pub use alerts::{generate_alerts, Alert};
pub use signal::{combine, CombinedSignal};
pub use trend::{analyze, AnalysisResult, Scenario};
