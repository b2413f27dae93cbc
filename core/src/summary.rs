//! Summary card projection over a dataset.
//!
//! Leaders are computed from the raw values, independent of the view's
//! current display sort; the projector never reads UI sort state. Empty
//! datasets yield `None` and the views render a defined placeholder.

use zoo_types::{Metric, Preference};

use crate::dataset::HasMetrics;

/// The record leading on `key`: maximum value, or minimum where the metric
/// is lower-is-better. First occurrence wins on ties.
pub fn leader<R: HasMetrics>(rows: &[R], key: R::Key) -> Option<&R> {
    let better = |candidate: f64, best: f64| match key.preference() {
        Preference::HigherIsBetter => candidate > best,
        Preference::LowerIsBetter => candidate < best,
    };
    rows.iter().fold(None, |best, row| match best {
        Some(b) if !better(row.metric(key), b.metric(key)) => Some(b),
        _ => Some(row),
    })
}

/// Champion plus runners-up (ranks 2..) for a header card.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub champion: (String, String),
    /// (rank, name, display value), starting at rank 2.
    pub runners_up: Vec<(usize, String, String)>,
}

/// Rank rows by `key` in the metric's preferred direction and keep the
/// champion plus up to `runners` runners-up. Returns `None` on empty input.
pub fn ranking<R>(rows: &[R], key: R::Key, runners: usize) -> Option<Ranking>
where
    R: HasMetrics + Clone,
{
    use zoo_types::SortDirection;

    let direction = match key.preference() {
        Preference::HigherIsBetter => SortDirection::Desc,
        Preference::LowerIsBetter => SortDirection::Asc,
    };
    let ordered = crate::sort::sorted_by(rows, key, direction);
    let mut it = ordered.into_iter();
    let champion = it.next()?;
    let runners_up = it
        .take(runners)
        .enumerate()
        .map(|(i, row)| (i + 2, row.name().to_string(), row.display(key)))
        .collect();
    Some(Ranking {
        champion: (champion.name().to_string(), champion.display(key)),
        runners_up,
    })
}

/// Mean raw value of `key` across the dataset; `None` when empty.
pub fn average<R: HasMetrics>(rows: &[R], key: R::Key) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    Some(rows.iter().map(|r| r.metric(key)).sum::<f64>() / rows.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FactorRow;
    use crate::sort::sorted_by;
    use zoo_types::{FactorMetric, SortDirection};

    fn factor(name: &str, excess: f64, turnover: f64) -> FactorRow {
        FactorRow {
            name: name.into(),
            return_ann: excess + 0.05,
            excess_ann: excess,
            turnover,
            ic_mean: 0.03,
            ir: 0.9,
            unique_alpha: 0.6,
        }
    }

    #[test]
    fn leader_scans_max_for_higher_is_better() {
        let rows = vec![factor("a", 0.021, 0.8), factor("b", 0.052, 2.5), factor("c", -0.015, 1.2)];
        assert_eq!(leader(&rows, FactorMetric::ExcessAnn).unwrap().name, "b");
    }

    #[test]
    fn leader_scans_min_for_lower_is_better() {
        let rows = vec![factor("a", 0.021, 0.8), factor("b", 0.052, 2.5)];
        assert_eq!(leader(&rows, FactorMetric::Turnover).unwrap().name, "a");
    }

    #[test]
    fn leader_keeps_first_on_ties() {
        let rows = vec![factor("first", 0.05, 1.0), factor("second", 0.05, 1.0)];
        assert_eq!(leader(&rows, FactorMetric::ExcessAnn).unwrap().name, "first");
    }

    #[test]
    fn leader_is_independent_of_display_sort_order() {
        let rows = vec![factor("a", 0.021, 0.8), factor("b", 0.052, 2.5), factor("c", -0.015, 1.2)];
        // Scramble the view with an unrelated ascending sort.
        let scrambled = sorted_by(&rows, FactorMetric::Turnover, SortDirection::Asc);
        let from_scrambled = leader(&scrambled, FactorMetric::ExcessAnn).unwrap();
        let from_input = leader(&rows, FactorMetric::ExcessAnn).unwrap();
        assert_eq!(from_scrambled.name, from_input.name);
        // And equals the head of a preference-directed sort.
        let ranked = sorted_by(&rows, FactorMetric::ExcessAnn, SortDirection::Desc);
        assert_eq!(from_input.name, ranked[0].name);
    }

    #[test]
    fn empty_dataset_yields_defined_placeholders() {
        let rows: Vec<FactorRow> = Vec::new();
        assert!(leader(&rows, FactorMetric::ExcessAnn).is_none());
        assert!(ranking(&rows, FactorMetric::ExcessAnn, 3).is_none());
        assert!(average(&rows, FactorMetric::Turnover).is_none());
    }

    #[test]
    fn ranking_yields_champion_and_runners_up() {
        let rows = vec![
            factor("Momentum", 0.052, 2.5),
            factor("Growth", 0.038, 2.2),
            factor("Size", 0.021, 0.8),
            factor("Quality", 0.018, 1.5),
            factor("Value", -0.015, 1.2),
        ];
        let ranking = ranking(&rows, FactorMetric::ExcessAnn, 3).unwrap();
        assert_eq!(ranking.champion.0, "Momentum");
        assert_eq!(ranking.champion.1, "+5.20%");
        let names: Vec<_> = ranking.runners_up.iter().map(|(r, n, _)| (*r, n.as_str())).collect();
        assert_eq!(names, [(2, "Growth"), (3, "Size"), (4, "Quality")]);
    }

    #[test]
    fn ranking_over_bundled_strategies_feeds_the_home_cards() {
        use crate::dataset::{BundledFixtures, ZooRepository};
        use zoo_types::{StrategyMetric, TimeRange};

        let rows = BundledFixtures.strategies(TimeRange::OneYear).unwrap();
        let rank = ranking(&rows, StrategyMetric::Sharpe, 3).unwrap();
        assert_eq!(rank.champion.0, "市场中性对冲");
        assert_eq!(rank.champion.1, "1.95");
        let runners: Vec<_> = rank.runners_up.iter().map(|(r, n, _)| (*r, n.as_str())).collect();
        assert_eq!(
            runners,
            [(2, "微盘股轮动"), (3, "沪深300指数增强"), (4, "中证500指数增强")]
        );
    }

    #[test]
    fn average_turnover() {
        let rows = vec![factor("a", 0.0, 2.0), factor("b", 0.0, 4.0)];
        assert_eq!(average(&rows, FactorMetric::Turnover), Some(3.0));
    }
}
