//! Frontend-only types.

use zoo_core::{DataError, StrategyDetail};

/// Active panel. The detail page carries the strategy id it was opened for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    FactorZoo,
    ModelZoo,
    StrategyZoo,
    StrategyDetail(String),
}

impl Page {
    /// Nav tab the page belongs to (detail highlights the strategy tab).
    pub fn tab(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::FactorZoo => "factor",
            Page::ModelZoo => "model",
            Page::StrategyZoo | Page::StrategyDetail(_) => "strategy",
        }
    }
}

/// Zoo pages swap between the data table and a static methodology panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZooView {
    #[default]
    Table,
    Methodology,
}

/// Loading state for the per-strategy detail fetch. `NotFound` is a distinct,
/// user-actionable state; `Failed` covers transport and parse failures.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailLoad {
    #[default]
    Loading,
    Loaded(Box<StrategyDetail>),
    NotFound,
    Failed(String),
}

impl From<Result<StrategyDetail, DataError>> for DetailLoad {
    fn from(result: Result<StrategyDetail, DataError>) -> Self {
        match result {
            Ok(detail) => DetailLoad::Loaded(Box::new(detail)),
            Err(DataError::NotFound(_)) => DetailLoad::NotFound,
            Err(err) => DetailLoad::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_detail_is_not_found_not_a_generic_failure() {
        let load = DetailLoad::from(Err(DataError::NotFound("csi500-enhanced".into())));
        assert_eq!(load, DetailLoad::NotFound);

        let load = DetailLoad::from(Err(DataError::Fetch("HTTP 500".into())));
        assert!(matches!(load, DetailLoad::Failed(_)));

        let load = DetailLoad::from(Err(DataError::Parse("eof".into())));
        assert!(matches!(load, DetailLoad::Failed(_)));
    }

    #[test]
    fn detail_page_keeps_the_strategy_tab_active() {
        assert_eq!(Page::StrategyDetail("x".into()).tab(), Page::StrategyZoo.tab());
        assert_ne!(Page::FactorZoo.tab(), Page::ModelZoo.tab());
    }

    #[test]
    fn home_is_the_default_panel_with_its_own_tab() {
        assert_eq!(Page::default(), Page::Home);
        assert_ne!(Page::Home.tab(), Page::FactorZoo.tab());
    }
}
