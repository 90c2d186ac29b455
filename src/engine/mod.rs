pub mod history;
pub mod reconciler;
pub mod thresholds;
pub mod trend;
