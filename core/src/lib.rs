//! Core data layer for the zoo board.
//!
//! Loads the bundled performance fixtures, normalizes the raw rows into
//! canonical numeric records, and provides the sort / summary operations the
//! three zoo views share. No numbers are computed here; every metric arrives
//! precomputed from the offline research pipeline.

pub mod dataset;
pub mod detail;
pub mod normalize;
pub mod sort;
pub mod summary;

pub use dataset::{
    BundledFixtures, Dataset, FactorRow, HasMetrics, ModelRow, StrategyRow, ZooRepository,
};
pub use detail::{DetailMetrics, Holding, NavPoint, StrategyDetail};
pub use sort::{apply_sort, sorted_by};
pub use summary::{Ranking, average, leader, ranking};

use thiserror::Error;

/// Failure taxonomy for data access. `NotFound` is user-actionable (distinct
/// "not found" screen with a way back); `Fetch` and `Parse` surface as the
/// generic error state. No failure is retried automatically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("资源不存在: {0}")]
    NotFound(String),
    #[error("数据获取失败: {0}")]
    Fetch(String),
    #[error("数据格式错误: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}
