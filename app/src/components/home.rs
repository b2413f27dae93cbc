//! Landing page: hero banner plus one champion/runners-up card per zoo,
//! linking into the three table views.

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use zoo_core::{BundledFixtures, Dataset, HasMetrics, Ranking, ZooRepository, leader, ranking};
use zoo_types::{FactorMetric, ModelMetric, StrategyMetric, TimeRange};

use crate::components::factor_zoo::DATA_VINTAGE;
use crate::types::Page;

#[component]
pub fn HomePage(page: Signal<Page>) -> Element {
    // The factor card ranks by three-year excess, the strategy card by
    // one-year Sharpe, matching the captions below.
    let factor_rank = use_memo(move || {
        let rows = BundledFixtures.factors(TimeRange::ThreeYear).unwrap_or_else(|err| {
            warn!(%err, "factor fixture failed to load");
            Dataset::new()
        });
        ranking(&rows, FactorMetric::ExcessAnn, 3)
    });
    let model_rank = use_memo(move || {
        let rows = BundledFixtures.models().unwrap_or_else(|err| {
            warn!(%err, "model fixture failed to load");
            Dataset::new()
        });
        ranking(&rows, ModelMetric::IcMean, 2)
    });
    let strategies = use_memo(move || {
        BundledFixtures.strategies(TimeRange::OneYear).unwrap_or_else(|err| {
            warn!(%err, "strategy fixture failed to load");
            Dataset::new()
        })
    });
    let strategy_rank = use_memo(move || ranking(&strategies(), StrategyMetric::Sharpe, 3));
    let champion_excess = use_memo(move || {
        leader(&strategies(), StrategyMetric::Sharpe)
            .map(|r| r.display(StrategyMetric::ExcessReturn))
            .unwrap_or_default()
    });

    rsx! {
        section { class: "home-hero",
            h1 { "系统化探索 Alpha" }
            p { class: "hero-sub", "基于严谨的统计分析与基础经济学逻辑" }
            div { class: "hero-formula", "Rᵢ,ₜ − R𝒻,ₜ = αᵢ + Σₖ βₖ·Fₖ,ₜ + εᵢ,ₜ" }
            p { class: "hero-note", "多因子定价模型 · 符号释义见各页方法论" }
        }
        section { class: "home-grid",
            div { class: "home-card",
                div { class: "home-card-head",
                    div {
                        h3 { "因子动物园" }
                        span { class: "home-card-en", "FACTOR ZOO" }
                    }
                    span { class: "home-badge amber", "Alpha Champion" }
                }
                match factor_rank() {
                    Some(rank) => rsx! {
                        ChampionBlock {
                            caption: "当前最强因子 · 近三年冠军",
                            note: "超额年化冠军 · 全市场多空组合",
                            tone: "amber",
                            rank,
                            signed_runners: true,
                        }
                    },
                    None => rsx! { div { class: "champion-box empty", "暂无数据" } },
                }
                span { class: "home-card-foot", "数据截止至 {DATA_VINTAGE}" }
                button {
                    class: "home-enter amber",
                    onclick: move |_| page.set(Page::FactorZoo),
                    "进入因子动物园 →"
                }
            }
            div { class: "home-card",
                div { class: "home-card-head",
                    div {
                        h3 { "模型动物园" }
                        span { class: "home-card-en", "MODEL ZOO" }
                    }
                    span { class: "home-badge purple", "Model Perf." }
                }
                match model_rank() {
                    Some(rank) => rsx! {
                        ChampionBlock {
                            caption: "当前主导模型 (Top Model)",
                            note: "样本外 IC 均值",
                            tone: "purple",
                            rank,
                            signed_runners: false,
                        }
                    },
                    None => rsx! { div { class: "champion-box empty", "暂无数据" } },
                }
                span { class: "home-card-foot", "最后更新 {DATA_VINTAGE}" }
                button {
                    class: "home-enter purple",
                    onclick: move |_| page.set(Page::ModelZoo),
                    "进入模型动物园 →"
                }
            }
            div { class: "home-card",
                div { class: "home-card-head",
                    div {
                        h3 { "策略动物园" }
                        span { class: "home-card-en", "STRATEGY ZOO" }
                    }
                    span { class: "home-badge teal", "Sharpe Leader" }
                }
                match strategy_rank() {
                    Some(rank) => rsx! {
                        ChampionBlock {
                            caption: "当前夏普冠军 · 近一年",
                            note: "年化超额: {champion_excess()}",
                            tone: "teal",
                            rank,
                            signed_runners: false,
                        }
                    },
                    None => rsx! { div { class: "champion-box empty", "暂无数据" } },
                }
                span { class: "home-card-foot", "数据截止至 {DATA_VINTAGE}" }
                button {
                    class: "home-enter teal",
                    onclick: move |_| page.set(Page::StrategyZoo),
                    "探索投资策略 →"
                }
            }
        }
    }
}

/// Champion highlight plus the ranks 2.. list for one landing card.
#[component]
fn ChampionBlock(
    caption: String,
    note: String,
    tone: String,
    rank: Ranking,
    signed_runners: bool,
) -> Element {
    rsx! {
        div { class: "champion-box {tone}",
            span { class: "champion-caption", "{caption}" }
            span { class: "champion-name", "{rank.champion.0}" }
            span { class: "champion-value", "{rank.champion.1}" }
            span { class: "champion-note", "{note}" }
        }
        div { class: "runner-list",
            for (place, name, value) in rank.runners_up.clone() {
                div { class: "runner-row", key: "{place}",
                    span { class: "runner-rank", "{place}" }
                    span { class: "runner-name", "{name}" }
                    span {
                        class: if signed_runners && value.starts_with('-') { "runner-value val-neg" } else { "runner-value" },
                        "{value}"
                    }
                }
            }
        }
    }
}
