//! Raw fixture rows and their normalization to canonical records.
//!
//! The research pipeline ships two dataset vintages: newer files carry raw
//! numbers (fractions for percentages), older ones carry pre-formatted
//! strings with unit glyphs (`"8.1%"`, `"4.2倍"`, thousands commas). The
//! canonical internal representation is the raw fraction / plain ratio;
//! everything is normalized here, at the loader boundary, exactly once.

use std::collections::BTreeMap;

use serde::Deserialize;
use zoo_types::ModelStatus;

use crate::dataset::{FactorRow, ModelRow, StrategyRow};

/// A metric value as it appears in a fixture: a number, a formatted string,
/// or absent. Absent fields map to a defined default (0.0) rather than a
/// missing-value error; upstream data is complete by contract.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawValue {
    /// Canonical numeric value. Numbers pass through unchanged (fraction for
    /// percentage fields by contract); strings are cleaned of unit glyphs and
    /// thousands commas, with a `%` glyph triggering the /100 rescale. The
    /// shipped vintages always carry the glyph on pre-scaled strings, so no
    /// per-file guessing is involved.
    pub fn to_number(&self) -> f64 {
        match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => zoo_types::formatting::parse_display(s).unwrap_or(0.0),
            RawValue::Missing => 0.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Factor fixtures (numeric vintage)
// ─────────────────────────────────────────────────────────────────────────────

/// One factor row as stored in `因子表现回测{12,36}月` fixtures.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFactorRow {
    #[serde(rename = "因子名称")]
    pub name: String,
    #[serde(rename = "多空年化", default)]
    pub return_ann: RawValue,
    #[serde(rename = "多空超额年化", default)]
    pub excess_ann: RawValue,
    #[serde(rename = "年化换手(倍)", default)]
    pub turnover: RawValue,
    #[serde(rename = "IC均值", default)]
    pub ic_mean: RawValue,
    #[serde(rename = "ICIR", default)]
    pub ir: RawValue,
    #[serde(rename = "独特Alpha", default)]
    pub unique_alpha: RawValue,
}

impl RawFactorRow {
    pub fn normalize(self) -> FactorRow {
        FactorRow {
            name: display_name(&self.name),
            return_ann: self.return_ann.to_number(),
            excess_ann: self.excess_ann.to_number(),
            turnover: self.turnover.to_number(),
            ic_mean: self.ic_mean.to_number(),
            ir: self.ir.to_number(),
            unique_alpha: self.unique_alpha.to_number(),
        }
    }
}

/// Factor names arrive as `English (中文)`; cards and rankings show the bare
/// English part.
pub fn display_name(raw: &str) -> String {
    raw.split('(').next().unwrap_or(raw).trim().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Model fixtures (numeric vintage)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RawModelRow {
    #[serde(rename = "模型名称")]
    pub name: String,
    #[serde(rename = "模型类型", default)]
    pub family: String,
    #[serde(rename = "IC均值", default)]
    pub ic_mean: RawValue,
    #[serde(rename = "RankIC", default)]
    pub rank_ic: RawValue,
    #[serde(rename = "信息比率", default)]
    pub ir: RawValue,
    #[serde(rename = "训练损失", default)]
    pub train_loss: RawValue,
    #[serde(rename = "推理耗时ms", default)]
    pub infer_millis: RawValue,
    #[serde(rename = "状态", default)]
    pub status: String,
    #[serde(rename = "线上", default)]
    pub live: bool,
}

impl RawModelRow {
    pub fn normalize(self) -> ModelRow {
        let status = match self.status.as_str() {
            "Training" => ModelStatus::Training,
            "Degraded" => ModelStatus::Degraded,
            "Experiment" => ModelStatus::Experiment,
            _ => ModelStatus::Stable,
        };
        ModelRow {
            name: self.name,
            family: self.family,
            ic_mean: self.ic_mean.to_number(),
            rank_ic: self.rank_ic.to_number(),
            ir: self.ir.to_number(),
            train_loss: self.train_loss.to_number(),
            infer_millis: self.infer_millis.to_number(),
            status,
            live: self.live,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategy fixtures (pre-formatted string vintage, nested by period)
// ─────────────────────────────────────────────────────────────────────────────

/// One strategy/period cell of the multi-period fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStrategyPeriod {
    #[serde(rename = "策略名称")]
    pub name: String,
    #[serde(rename = "年化超额", default)]
    pub excess_return: RawValue,
    #[serde(rename = "夏普比率", default)]
    pub sharpe: RawValue,
    #[serde(rename = "最大回撤", default)]
    pub max_drawdown: RawValue,
    #[serde(rename = "超额回撤", default)]
    pub max_excess_drawdown: RawValue,
    #[serde(rename = "相对胜率", default)]
    pub win_rate: RawValue,
    #[serde(rename = "年化换手(倍)", default)]
    pub turnover: RawValue,
    #[serde(rename = "月均持仓数", default)]
    pub avg_holdings: RawValue,
}

impl RawStrategyPeriod {
    pub fn normalize(self, id: String) -> StrategyRow {
        StrategyRow {
            id,
            name: self.name,
            excess_return: self.excess_return.to_number(),
            sharpe: self.sharpe.to_number(),
            max_drawdown: self.max_drawdown.to_number(),
            max_excess_drawdown: self.max_excess_drawdown.to_number(),
            win_rate: self.win_rate.to_number(),
            turnover: self.turnover.to_number(),
        }
    }
}

/// Multi-period fixture: strategy name → period key (`12个月_2511`) → row.
/// BTreeMap keeps the strategy iteration order deterministic.
pub type RawStrategyTable = BTreeMap<String, BTreeMap<String, RawStrategyPeriod>>;

/// Resolve the newest period key matching `{months}个月_` among the keys of
/// one strategy entry. Vintage suffixes (`2510`, `2511`) sort lexically, so
/// the lexically greatest match is the latest one; shipping a newer fixture
/// needs no code change.
pub fn latest_period_key<'a>(
    keys: impl IntoIterator<Item = &'a String>,
    months: u32,
) -> Option<&'a str> {
    let prefix = format!("{months}个月_");
    keys.into_iter()
        .filter(|k| k.starts_with(&prefix))
        .max()
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_value_numeric_passthrough() {
        assert_eq!(RawValue::Number(0.124).to_number(), 0.124);
        assert_eq!(RawValue::Missing.to_number(), 0.0);
    }

    #[test]
    fn raw_value_string_vintages() {
        assert_eq!(RawValue::Text("8.1%".into()).to_number(), 0.081);
        assert_eq!(RawValue::Text("+8.52%".into()).to_number(), 0.0852);
        assert_eq!(RawValue::Text("-6.62%".into()).to_number(), -0.0662);
        assert_eq!(RawValue::Text("4.2倍".into()).to_number(), 4.2);
        assert_eq!(RawValue::Text("2.50x".into()).to_number(), 2.5);
        assert_eq!(RawValue::Text("1,234".into()).to_number(), 1234.0);
        // Garbage degrades to the defined default, not an error.
        assert_eq!(RawValue::Text("--".into()).to_number(), 0.0);
    }

    #[test]
    fn factor_display_name_strips_cn_suffix() {
        assert_eq!(display_name("Momentum (动量)"), "Momentum");
        assert_eq!(display_name("Value"), "Value");
    }

    #[test]
    fn scenario_a_momentum_formats_to_two_decimals() {
        let row: RawFactorRow =
            serde_json::from_str(r#"{"因子名称": "Momentum", "多空年化": 0.124}"#).unwrap();
        let row = row.normalize();
        assert_eq!(row.return_ann, 0.124);
        assert_eq!(
            zoo_types::formatting::format_pct(row.return_ann, 2),
            "12.40%"
        );
        // Fields absent from the raw row map to the defined default.
        assert_eq!(row.ic_mean, 0.0);
    }

    #[test]
    fn latest_period_key_picks_newest_vintage() {
        let keys = vec![
            "12个月_2510".to_string(),
            "12个月_2511".to_string(),
            "36个月_2511".to_string(),
        ];
        assert_eq!(latest_period_key(&keys, 12), Some("12个月_2511"));
        assert_eq!(latest_period_key(&keys, 36), Some("36个月_2511"));
        assert_eq!(latest_period_key(&keys, 6), None);
    }
}
