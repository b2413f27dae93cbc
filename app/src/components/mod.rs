//! UI components: one module per page plus shared table/card widgets.

pub mod factor_zoo;
pub mod home;
pub mod methodology;
pub mod model_zoo;
pub mod strategy_detail;
pub mod strategy_zoo;
pub mod widgets;

pub use factor_zoo::FactorZooPage;
pub use home::HomePage;
pub use model_zoo::ModelZooPage;
pub use strategy_detail::StrategyDetailPage;
pub use strategy_zoo::StrategyZooPage;
