//! Per-strategy detail resource.
//!
//! Fetched by the app as `data/strategies/{url-encoded name}.json`: metadata,
//! a flat metrics object, a date-keyed NAV curve of paired (strategy,
//! benchmark) index values, and point-in-time holdings keyed by date.

use serde::{Deserialize, Serialize};

use crate::DataError;

/// Flat metrics block of the detail resource. Cumulative returns and the
/// drawdown arrive pre-formatted from the pipeline; ratios arrive raw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailMetrics {
    pub total_return: String,
    pub benchmark_return: String,
    pub annualized_return: String,
    pub alpha: f64,
    pub beta: f64,
    pub sharpe: f64,
    pub sortino: f64,
    pub info_ratio: f64,
    pub volatility: f64,
    pub benchmark_volatility: f64,
    /// Raw fraction; displayed as a percentage.
    pub win_rate: f64,
    pub daily_win_rate: f64,
    pub pl_ratio: f64,
    pub win_count: u32,
    pub loss_count: u32,
    pub max_drawdown: String,
}

/// One point of the paired NAV series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPoint {
    pub date: String,
    pub strategy: f64,
    pub benchmark: f64,
}

/// One point-in-time holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub date: String,
    pub code: String,
    pub name: String,
    /// Portfolio weight in percent points (5.2 = 5.2%).
    pub weight: f64,
    pub industry: String,
}

/// Full detail payload for one strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub metrics: DetailMetrics,
    pub nav_curve: Vec<NavPoint>,
    pub holdings: Vec<Holding>,
}

impl StrategyDetail {
    /// Decode a fetched detail document. Malformed payloads surface as
    /// [`DataError::Parse`], the generic error state.
    pub fn from_json(body: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Unique holding dates in file order; the first entry (newest by
    /// pipeline convention) is the default selection.
    pub fn available_dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = Vec::new();
        for h in &self.holdings {
            if !dates.contains(&h.date.as_str()) {
                dates.push(&h.date);
            }
        }
        dates
    }

    /// Holdings snapshot for one date. An unknown date yields an empty
    /// slice-equivalent, rendered as the explicit empty-state row.
    pub fn holdings_on(&self, date: &str) -> Vec<&Holding> {
        self.holdings.iter().filter(|h| h.date == date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": "csi300-enhanced",
        "name": "沪深300指数增强",
        "description": "多因子选股叠加风险约束的指数增强组合。",
        "metrics": {
            "totalReturn": "45.20%", "benchmarkReturn": "28.10%",
            "annualizedReturn": "15.30%",
            "alpha": 0.082, "beta": 0.95, "sharpe": 1.35, "sortino": 1.82,
            "infoRatio": 1.12, "volatility": 0.182, "benchmarkVolatility": 0.165,
            "winRate": 0.583, "dailyWinRate": 0.52, "plRatio": 1.45,
            "winCount": 21, "lossCount": 15, "maxDrawdown": "-6.62%"
        },
        "navCurve": [
            {"date": "2025-09-30", "strategy": 1.42, "benchmark": 1.25},
            {"date": "2025-10-31", "strategy": 1.45, "benchmark": 1.28}
        ],
        "holdings": [
            {"date": "2025-10-31", "code": "600519", "name": "贵州茅台", "weight": 5.2, "industry": "食品饮料"},
            {"date": "2025-10-31", "code": "300750", "name": "宁德时代", "weight": 4.8, "industry": "电力设备"},
            {"date": "2025-09-30", "code": "600519", "name": "贵州茅台", "weight": 5.0, "industry": "食品饮料"}
        ]
    }"#;

    #[test]
    fn decodes_full_schema() {
        let detail = StrategyDetail::from_json(SAMPLE).unwrap();
        assert_eq!(detail.id, "csi300-enhanced");
        assert_eq!(detail.metrics.win_count, 21);
        assert_eq!(detail.nav_curve.len(), 2);
        assert_eq!(detail.metrics.max_drawdown, "-6.62%");
    }

    #[test]
    fn available_dates_are_unique_in_file_order() {
        let detail = StrategyDetail::from_json(SAMPLE).unwrap();
        assert_eq!(detail.available_dates(), ["2025-10-31", "2025-09-30"]);
    }

    #[test]
    fn holdings_on_filters_by_date() {
        let detail = StrategyDetail::from_json(SAMPLE).unwrap();
        assert_eq!(detail.holdings_on("2025-10-31").len(), 2);
        assert_eq!(detail.holdings_on("2025-09-30").len(), 1);
        // Unknown date is an empty state, not an error.
        assert!(detail.holdings_on("2024-01-01").is_empty());
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let err = StrategyDetail::from_json("{\"id\": 3}").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }
}
