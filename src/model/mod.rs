pub mod campaign;
pub mod metrics;
pub mod row;
pub mod score;
pub mod thresholds;
