//! Column sort engine shared by the three zoo tables.
//!
//! Sorting compares the parsed numeric value, never the display string, and
//! relies on a stable sort so rows with equal values (duplicate turnover
//! ratios are common) keep their original relative order in both directions.

use zoo_types::{SortDirection, SortState};

use crate::dataset::{Dataset, HasMetrics};

/// Return a new dataset ordered by `key` in `direction`. Ties keep input
/// order regardless of direction: the comparator is reversed, the rows are
/// never reversed after the fact.
pub fn sorted_by<R>(rows: &[R], key: R::Key, direction: SortDirection) -> Dataset<R>
where
    R: HasMetrics + Clone,
{
    let mut out = rows.to_vec();
    // total_cmp keeps the comparator a total order even if a NaN ever
    // reaches a dataset.
    out.sort_by(|a, b| {
        let cmp = a.metric(key).total_cmp(&b.metric(key));
        match direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
    out
}

/// Apply a [`SortState`]: with no active key the dataset passes through in
/// input order.
pub fn apply_sort<R>(rows: &[R], state: SortState<R::Key>) -> Dataset<R>
where
    R: HasMetrics + Clone,
{
    match state.key {
        Some(key) => sorted_by(rows, key, state.direction),
        None => rows.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::StrategyRow;
    use zoo_types::StrategyMetric;

    fn row(name: &str, sharpe: f64, turnover: f64) -> StrategyRow {
        StrategyRow {
            id: name.into(),
            name: name.into(),
            excess_return: 0.0,
            sharpe,
            max_drawdown: -0.05,
            max_excess_drawdown: -0.02,
            win_rate: 0.5,
            turnover,
        }
    }

    fn names(rows: &[StrategyRow]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_parsed_value() {
        let rows = vec![row("a", 0.8, 1.0), row("b", 1.4, 2.0), row("c", 1.1, 3.0)];
        let sorted = sorted_by(&rows, StrategyMetric::Sharpe, SortDirection::Desc);
        assert_eq!(names(&sorted), ["b", "c", "a"]);
        let sorted = sorted_by(&rows, StrategyMetric::Sharpe, SortDirection::Asc);
        assert_eq!(names(&sorted), ["a", "c", "b"]);
    }

    #[test]
    fn scenario_d_ties_keep_input_order_both_directions() {
        // Two records with identical turnover 2.50 plus an outlier.
        let rows = vec![row("first", 1.0, 2.5), row("second", 2.0, 2.5), row("low", 3.0, 0.5)];
        let asc = sorted_by(&rows, StrategyMetric::Turnover, SortDirection::Asc);
        assert_eq!(names(&asc), ["low", "first", "second"]);
        let desc = sorted_by(&rows, StrategyMetric::Turnover, SortDirection::Desc);
        assert_eq!(names(&desc), ["first", "second", "low"]);
    }

    #[test]
    fn asc_and_desc_are_reverses_outside_tied_groups() {
        let rows = vec![row("a", 0.3, 1.0), row("b", 2.1, 1.0), row("c", 1.7, 1.0)];
        let asc = sorted_by(&rows, StrategyMetric::Sharpe, SortDirection::Asc);
        let desc = sorted_by(&rows, StrategyMetric::Sharpe, SortDirection::Desc);
        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(names(&asc), names(&reversed));
    }

    #[test]
    fn scenario_b_sharpe_toggle_sequence() {
        let rows = vec![row("a", 0.8, 1.0), row("b", 1.4, 2.0)];
        // First click on Sharpe: no prior sort on this key → descending.
        let state = SortState::default().click(StrategyMetric::Sharpe);
        assert_eq!(names(&apply_sort(&rows, state)), ["b", "a"]);
        // Second click flips to ascending.
        let state = state.click(StrategyMetric::Sharpe);
        assert_eq!(names(&apply_sort(&rows, state)), ["a", "b"]);
    }

    #[test]
    fn nan_sorts_under_a_total_order() {
        let rows = vec![row("nan", f64::NAN, 1.0), row("high", 1.0, 1.0), row("low", 0.5, 1.0)];
        let asc = sorted_by(&rows, StrategyMetric::Sharpe, SortDirection::Asc);
        assert_eq!(names(&asc), ["low", "high", "nan"]);
        let desc = sorted_by(&rows, StrategyMetric::Sharpe, SortDirection::Desc);
        assert_eq!(names(&desc), ["nan", "high", "low"]);
    }

    #[test]
    fn no_active_key_passes_through() {
        let rows = vec![row("z", 0.1, 9.0), row("a", 0.9, 1.0)];
        let out = apply_sort(&rows, SortState::default());
        assert_eq!(names(&out), ["z", "a"]);
    }

    #[test]
    fn empty_dataset_sorts_to_empty() {
        let rows: Vec<StrategyRow> = Vec::new();
        assert!(sorted_by(&rows, StrategyMetric::Sharpe, SortDirection::Desc).is_empty());
    }
}
