//! Canonical display records and the fixture repository.
//!
//! Datasets are static and bundled with the binary; a repository trait keyed
//! by [`TimeRange`] keeps data acquisition decoupled from the views so tests
//! can substitute fixtures. A dataset is rebuilt wholesale on every
//! time-range change, never mutated in place.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zoo_types::{FactorMetric, Metric, ModelMetric, ModelStatus, StrategyMetric, TimeRange};

use crate::DataError;
use crate::normalize::{RawFactorRow, RawModelRow, RawStrategyTable, latest_period_key};

/// Ordered sequence of records for one (entity family, time range) pair.
/// All rows share the family's metric schema.
pub type Dataset<R> = Vec<R>;

/// Access to the parsed numeric value behind each metric key. Sorting and
/// summary projection always go through this, never through display strings.
pub trait HasMetrics {
    type Key: Metric;

    fn metric(&self, key: Self::Key) -> f64;

    /// Row identity shown in name columns and summary cards.
    fn name(&self) -> &str;

    /// Display string for one metric, formatted by the schema's unit.
    fn display(&self, key: Self::Key) -> String {
        key.unit().format(self.metric(key))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Canonical rows
// ─────────────────────────────────────────────────────────────────────────────

/// One factor with canonical (fraction / ratio) metric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorRow {
    pub name: String,
    pub return_ann: f64,
    pub excess_ann: f64,
    pub turnover: f64,
    pub ic_mean: f64,
    pub ir: f64,
    pub unique_alpha: f64,
}

impl HasMetrics for FactorRow {
    type Key = FactorMetric;

    fn metric(&self, key: FactorMetric) -> f64 {
        match key {
            FactorMetric::ReturnAnn => self.return_ann,
            FactorMetric::ExcessAnn => self.excess_ann,
            FactorMetric::Turnover => self.turnover,
            FactorMetric::IcMean => self.ic_mean,
            FactorMetric::Ir => self.ir,
            FactorMetric::UniqueAlpha => self.unique_alpha,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One prediction model on the scoreboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRow {
    pub name: String,
    pub family: String,
    pub ic_mean: f64,
    pub rank_ic: f64,
    pub ir: f64,
    pub train_loss: f64,
    pub infer_millis: f64,
    pub status: ModelStatus,
    pub live: bool,
}

impl HasMetrics for ModelRow {
    type Key = ModelMetric;

    fn metric(&self, key: ModelMetric) -> f64 {
        match key {
            ModelMetric::IcMean => self.ic_mean,
            ModelMetric::RankIc => self.rank_ic,
            ModelMetric::Ir => self.ir,
            ModelMetric::TrainLoss => self.train_loss,
            ModelMetric::InferMillis => self.infer_millis,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One strategy for a resolved backtest period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRow {
    /// Stable slug, also the detail document's file name.
    pub id: String,
    pub name: String,
    pub excess_return: f64,
    pub sharpe: f64,
    pub max_drawdown: f64,
    pub max_excess_drawdown: f64,
    pub win_rate: f64,
    pub turnover: f64,
}

impl HasMetrics for StrategyRow {
    type Key = StrategyMetric;

    fn metric(&self, key: StrategyMetric) -> f64 {
        match key {
            StrategyMetric::ExcessReturn => self.excess_return,
            StrategyMetric::Sharpe => self.sharpe,
            StrategyMetric::MaxDrawdown => self.max_drawdown,
            StrategyMetric::MaxExcessDrawdown => self.max_excess_drawdown,
            StrategyMetric::WinRate => self.win_rate,
            StrategyMetric::Turnover => self.turnover,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository
// ─────────────────────────────────────────────────────────────────────────────

/// Loader interface for the three zoo families. Views depend on this trait,
/// not on the bundled files, so tests substitute fixtures freely.
pub trait ZooRepository {
    fn factors(&self, range: TimeRange) -> Result<Dataset<FactorRow>, DataError>;

    fn models(&self) -> Result<Dataset<ModelRow>, DataError>;

    fn strategies(&self, range: TimeRange) -> Result<Dataset<StrategyRow>, DataError>;
}

/// Default repository over the JSON fixtures compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledFixtures;

const FACTOR_12M: &str = include_str!("../data/factor_backtest_12m.json");
const FACTOR_36M: &str = include_str!("../data/factor_backtest_36m.json");
const MODELS: &str = include_str!("../data/model_scoreboard.json");
const STRATEGIES: &str = include_str!("../data/strategy_performance_multi_period.json");

impl BundledFixtures {
    fn factor_source(range: TimeRange) -> &'static str {
        match range {
            TimeRange::OneYear => FACTOR_12M,
            TimeRange::ThreeYear => FACTOR_36M,
        }
    }
}

impl ZooRepository for BundledFixtures {
    fn factors(&self, range: TimeRange) -> Result<Dataset<FactorRow>, DataError> {
        let raw: Vec<RawFactorRow> = serde_json::from_str(Self::factor_source(range))?;
        debug!(months = range.months(), rows = raw.len(), "loaded factor fixture");
        Ok(raw.into_iter().map(RawFactorRow::normalize).collect())
    }

    fn models(&self) -> Result<Dataset<ModelRow>, DataError> {
        let raw: Vec<RawModelRow> = serde_json::from_str(MODELS)?;
        debug!(rows = raw.len(), "loaded model fixture");
        Ok(raw.into_iter().map(RawModelRow::normalize).collect())
    }

    fn strategies(&self, range: TimeRange) -> Result<Dataset<StrategyRow>, DataError> {
        let table: RawStrategyTable = serde_json::from_str(STRATEGIES)?;
        let months = range.months();
        let rows: Dataset<StrategyRow> = table
            .into_iter()
            .filter_map(|(id, periods)| {
                let key = latest_period_key(periods.keys(), months)?.to_string();
                periods
                    .into_iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, row)| row.normalize(id))
            })
            .collect();
        debug!(months, rows = rows.len(), "loaded strategy fixture");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_factor_fixtures_load_for_both_ranges() {
        for &range in TimeRange::all() {
            let rows = BundledFixtures.factors(range).unwrap();
            assert!(!rows.is_empty());
            // Canonical values are fractions, not pre-scaled percents.
            assert!(rows.iter().all(|r| r.return_ann.abs() < 1.0));
        }
    }

    #[test]
    fn bundled_models_load() {
        let rows = BundledFixtures.models().unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().any(|r| r.status == ModelStatus::Stable));
    }

    #[test]
    fn bundled_strategies_resolve_each_range() {
        let one = BundledFixtures.strategies(TimeRange::OneYear).unwrap();
        let three = BundledFixtures.strategies(TimeRange::ThreeYear).unwrap();
        assert!(!one.is_empty());
        assert_eq!(one.len(), three.len());
        assert!(one.iter().any(|r| r.id == "csi300-enhanced"));
        // The string vintage carries `%` glyphs; normalization must have
        // rescaled them to fractions.
        assert!(one.iter().all(|r| r.win_rate > 0.0 && r.win_rate < 1.0));
    }

    #[test]
    fn display_goes_through_schema_units() {
        let row = StrategyRow {
            id: "csi300-enhanced".into(),
            name: "指数增强".into(),
            excess_return: 0.0852,
            sharpe: 1.35,
            max_drawdown: -0.0662,
            max_excess_drawdown: -0.035,
            win_rate: 0.5833,
            turnover: 4.2,
        };
        assert_eq!(row.display(StrategyMetric::ExcessReturn), "+8.52%");
        assert_eq!(row.display(StrategyMetric::MaxDrawdown), "-6.62%");
        assert_eq!(row.display(StrategyMetric::Turnover), "4.20x");
    }
}
