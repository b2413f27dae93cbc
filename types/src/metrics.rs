//! Declarative metric schema shared by the three zoo views.
//!
//! Each view family (factor / model / strategy) gets a metric-key enum that
//! declares its display label, unit, and sort preference in one place, so
//! "lower is better" defaults and formatting can never drift between pages.

use serde::{Deserialize, Serialize};

use crate::formatting;

/// Display unit for a metric column. Canonical values are raw fractions for
/// percentages and plain numbers for everything else; scaling happens only
/// inside [`Unit::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Percentage with fixed decimals, e.g. `12.40%`.
    Percent { decimals: usize },
    /// Percentage with an explicit `+` on positive values, e.g. `+5.20%`.
    SignedPercent { decimals: usize },
    /// Plain ratio with fixed decimals, e.g. `1.80`.
    Ratio { decimals: usize },
    /// Turnover-style multiple, e.g. `2.50x`.
    Multiple,
    /// Latency in milliseconds, e.g. `1.2ms`.
    Millis,
}

impl Unit {
    /// Format a canonical value for display.
    pub fn format(&self, value: f64) -> String {
        match *self {
            Unit::Percent { decimals } => formatting::format_pct(value, decimals),
            Unit::SignedPercent { decimals } => formatting::format_signed_pct(value, decimals),
            Unit::Ratio { decimals } => formatting::format_ratio(value, decimals),
            Unit::Multiple => formatting::format_multiple(value),
            Unit::Millis => formatting::format_millis(value),
        }
    }
}

/// Whether a larger value of the metric is desirable. Drives the default
/// sort direction on first click and the summary projector's scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    HigherIsBetter,
    LowerIsBetter,
}

/// Active sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Common schema interface for the per-family metric-key enums.
pub trait Metric: Copy + Eq + 'static {
    /// Column header label.
    fn label(&self) -> &'static str;

    /// Display unit and precision.
    fn unit(&self) -> Unit;

    /// Higher-is-better vs lower-is-better.
    fn preference(&self) -> Preference;

    /// All sortable metrics for this family, in column order.
    fn all() -> &'static [Self];

    /// Direction applied when this column is first clicked: descending for
    /// higher-is-better metrics, ascending where lower is better.
    fn default_direction(&self) -> SortDirection {
        match self.preference() {
            Preference::HigherIsBetter => SortDirection::Desc,
            Preference::LowerIsBetter => SortDirection::Asc,
        }
    }
}

/// Single active sort per dataset view: at most one key, with a direction
/// that is only meaningful while a key is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K: Metric> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K: Metric> Default for SortState<K> {
    fn default() -> Self {
        Self { key: None, direction: SortDirection::Desc }
    }
}

impl<K: Metric> SortState<K> {
    pub fn sorted_by(key: K, direction: SortDirection) -> Self {
        Self { key: Some(key), direction }
    }

    /// Apply the column-click toggle rule: clicking the active column flips
    /// the direction, clicking a new column selects its default direction.
    pub fn click(self, key: K) -> Self {
        let direction = if self.key == Some(key) {
            self.direction.flipped()
        } else {
            key.default_direction()
        };
        Self { key: Some(key), direction }
    }
}

/// Backtest window selector shared by the factor and strategy views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    OneYear,
    ThreeYear,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneYear => "近一年 (1Y)",
            TimeRange::ThreeYear => "近三年 (3Y)",
        }
    }

    /// Months covered by the window.
    pub fn months(&self) -> u32 {
        match self {
            TimeRange::OneYear => 12,
            TimeRange::ThreeYear => 36,
        }
    }

    pub fn all() -> &'static [TimeRange] {
        &[TimeRange::OneYear, TimeRange::ThreeYear]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Factor Zoo
// ─────────────────────────────────────────────────────────────────────────────

/// Sortable columns of the factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorMetric {
    ReturnAnn,
    ExcessAnn,
    Turnover,
    IcMean,
    Ir,
    UniqueAlpha,
}

impl Metric for FactorMetric {
    fn label(&self) -> &'static str {
        match self {
            FactorMetric::ReturnAnn => "年化收益率",
            FactorMetric::ExcessAnn => "超额年化",
            FactorMetric::Turnover => "换手率",
            FactorMetric::IcMean => "IC 均值",
            FactorMetric::Ir => "IR 值",
            FactorMetric::UniqueAlpha => "独特性 (Unique)",
        }
    }

    fn unit(&self) -> Unit {
        match self {
            FactorMetric::ReturnAnn => Unit::Percent { decimals: 2 },
            FactorMetric::ExcessAnn => Unit::SignedPercent { decimals: 2 },
            FactorMetric::Turnover => Unit::Multiple,
            FactorMetric::IcMean => Unit::Ratio { decimals: 2 },
            FactorMetric::Ir => Unit::Ratio { decimals: 2 },
            FactorMetric::UniqueAlpha => Unit::Percent { decimals: 0 },
        }
    }

    fn preference(&self) -> Preference {
        match self {
            FactorMetric::Turnover => Preference::LowerIsBetter,
            _ => Preference::HigherIsBetter,
        }
    }

    fn all() -> &'static [Self] {
        &[
            FactorMetric::ReturnAnn,
            FactorMetric::ExcessAnn,
            FactorMetric::Turnover,
            FactorMetric::IcMean,
            FactorMetric::Ir,
            FactorMetric::UniqueAlpha,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Model Zoo
// ─────────────────────────────────────────────────────────────────────────────

/// Sortable columns of the model table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelMetric {
    IcMean,
    RankIc,
    Ir,
    TrainLoss,
    InferMillis,
}

impl Metric for ModelMetric {
    fn label(&self) -> &'static str {
        match self {
            ModelMetric::IcMean => "IC 均值",
            ModelMetric::RankIc => "Rank IC",
            ModelMetric::Ir => "信息比率 (IR)",
            ModelMetric::TrainLoss => "训练损失",
            ModelMetric::InferMillis => "推理耗时(ms)",
        }
    }

    fn unit(&self) -> Unit {
        match self {
            ModelMetric::IcMean | ModelMetric::RankIc | ModelMetric::TrainLoss => {
                Unit::Ratio { decimals: 3 }
            }
            ModelMetric::Ir => Unit::Ratio { decimals: 2 },
            ModelMetric::InferMillis => Unit::Millis,
        }
    }

    fn preference(&self) -> Preference {
        match self {
            ModelMetric::TrainLoss | ModelMetric::InferMillis => Preference::LowerIsBetter,
            _ => Preference::HigherIsBetter,
        }
    }

    fn all() -> &'static [Self] {
        &[
            ModelMetric::IcMean,
            ModelMetric::RankIc,
            ModelMetric::Ir,
            ModelMetric::TrainLoss,
            ModelMetric::InferMillis,
        ]
    }
}

/// Lifecycle status of a prediction model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModelStatus {
    #[default]
    Stable,
    Training,
    Degraded,
    Experiment,
}

impl ModelStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModelStatus::Stable => "Stable",
            ModelStatus::Training => "Training",
            ModelStatus::Degraded => "Degraded",
            ModelStatus::Experiment => "Experiment",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategy Zoo
// ─────────────────────────────────────────────────────────────────────────────

/// Sortable columns of the strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyMetric {
    ExcessReturn,
    Sharpe,
    MaxDrawdown,
    MaxExcessDrawdown,
    WinRate,
    Turnover,
}

impl Metric for StrategyMetric {
    fn label(&self) -> &'static str {
        match self {
            StrategyMetric::ExcessReturn => "年化超额",
            StrategyMetric::Sharpe => "夏普比率",
            StrategyMetric::MaxDrawdown => "最大回撤",
            StrategyMetric::MaxExcessDrawdown => "超额回撤",
            StrategyMetric::WinRate => "相对胜率",
            StrategyMetric::Turnover => "年化换手",
        }
    }

    fn unit(&self) -> Unit {
        match self {
            StrategyMetric::ExcessReturn => Unit::SignedPercent { decimals: 2 },
            StrategyMetric::Sharpe => Unit::Ratio { decimals: 2 },
            StrategyMetric::MaxDrawdown | StrategyMetric::MaxExcessDrawdown => {
                Unit::Percent { decimals: 2 }
            }
            StrategyMetric::WinRate => Unit::Percent { decimals: 2 },
            StrategyMetric::Turnover => Unit::Multiple,
        }
    }

    fn preference(&self) -> Preference {
        match self {
            StrategyMetric::MaxDrawdown
            | StrategyMetric::MaxExcessDrawdown
            | StrategyMetric::Turnover => Preference::LowerIsBetter,
            _ => Preference::HigherIsBetter,
        }
    }

    fn all() -> &'static [Self] {
        &[
            StrategyMetric::ExcessReturn,
            StrategyMetric::Sharpe,
            StrategyMetric::MaxDrawdown,
            StrategyMetric::MaxExcessDrawdown,
            StrategyMetric::WinRate,
            StrategyMetric::Turnover,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_new_column_uses_default_direction() {
        let state = SortState::<StrategyMetric>::default();
        let state = state.click(StrategyMetric::Sharpe);
        assert_eq!(state.key, Some(StrategyMetric::Sharpe));
        assert_eq!(state.direction, SortDirection::Desc);

        let state = SortState::<StrategyMetric>::default().click(StrategyMetric::MaxDrawdown);
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn click_active_column_flips_direction() {
        let state = SortState::sorted_by(StrategyMetric::Sharpe, SortDirection::Desc);
        let state = state.click(StrategyMetric::Sharpe);
        assert_eq!(state.direction, SortDirection::Asc);
        let state = state.click(StrategyMetric::Sharpe);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn click_away_then_back_resets_to_default() {
        let state = SortState::sorted_by(StrategyMetric::Sharpe, SortDirection::Asc);
        let state = state.click(StrategyMetric::Turnover);
        assert_eq!(state.direction, SortDirection::Asc);
        let state = state.click(StrategyMetric::Sharpe);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn lower_is_better_table_matches_all_views() {
        use Preference::*;
        assert_eq!(FactorMetric::Turnover.preference(), LowerIsBetter);
        assert_eq!(StrategyMetric::Turnover.preference(), LowerIsBetter);
        assert_eq!(StrategyMetric::MaxDrawdown.preference(), LowerIsBetter);
        assert_eq!(ModelMetric::TrainLoss.preference(), LowerIsBetter);
        assert_eq!(ModelMetric::InferMillis.preference(), LowerIsBetter);
        assert_eq!(ModelMetric::RankIc.preference(), HigherIsBetter);
    }

    #[test]
    fn unit_formatting_through_schema() {
        assert_eq!(FactorMetric::ReturnAnn.unit().format(0.124), "12.40%");
        assert_eq!(FactorMetric::ExcessAnn.unit().format(0.052), "+5.20%");
        assert_eq!(FactorMetric::Turnover.unit().format(2.5), "2.50x");
        assert_eq!(ModelMetric::InferMillis.unit().format(1.2), "1.2ms");
        assert_eq!(StrategyMetric::MaxDrawdown.unit().format(-0.0843), "-8.43%");
    }
}
