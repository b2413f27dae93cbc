//! Shared types for the zoo board frontend and core.
//!
//! Holds the declarative metric schema (units, sort preferences, per-family
//! metric keys) and the centralized number formatting used by every table
//! and summary card.

pub mod formatting;
pub mod metrics;

pub use metrics::{
    FactorMetric, Metric, ModelMetric, ModelStatus, Preference, SortDirection, SortState,
    StrategyMetric, TimeRange, Unit,
};
