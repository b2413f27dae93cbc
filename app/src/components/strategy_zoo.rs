//! Strategy Zoo: live strategy performance table. Rows link to the
//! per-strategy detail page.

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use zoo_core::{BundledFixtures, Dataset, HasMetrics, ZooRepository, apply_sort, average, leader};
use zoo_types::{Metric, SortDirection, SortState, StrategyMetric, TimeRange, formatting};

use crate::components::methodology::StrategyMethodology;
use crate::components::widgets::{EmptyRow, SortIcon, SummaryCard, TimeRangeToggle, value_class};
use crate::types::{Page, ZooView};

#[component]
pub fn StrategyZooPage(page: Signal<Page>) -> Element {
    let mut view = use_signal(ZooView::default);
    let range = use_signal(TimeRange::default);
    // Opens ranked by Sharpe; the active sort survives range changes.
    let mut sort =
        use_signal(|| SortState::sorted_by(StrategyMetric::Sharpe, SortDirection::Desc));

    let rows = use_memo(move || {
        BundledFixtures.strategies(range()).unwrap_or_else(|err| {
            warn!(%err, "strategy fixture failed to load");
            Dataset::new()
        })
    });
    let sorted = use_memo(move || apply_sort(&rows(), sort()));

    if view() == ZooView::Methodology {
        return rsx! { StrategyMethodology { view } };
    }

    let data = rows();
    let best_sharpe = leader(&data, StrategyMetric::Sharpe);
    let best_win = leader(&data, StrategyMetric::WinRate);
    let avg_turnover = average(&data, StrategyMetric::Turnover);

    rsx! {
        section { class: "zoo-page",
            div { class: "page-head",
                div {
                    h1 { "策略动物园" }
                    p { class: "page-sub", "在线组合的超额表现，点击策略查看持仓与净值明细" }
                }
                div { class: "page-actions",
                    TimeRangeToggle { range }
                    button {
                        class: "ghost-btn",
                        onclick: move |_| view.set(ZooView::Methodology),
                        "方法论说明"
                    }
                }
            }
            div { class: "summary-grid",
                SummaryCard {
                    title: "最佳夏普",
                    value: best_sharpe.map(|r| r.name.clone()).unwrap_or_else(|| "--".into()),
                    detail: best_sharpe
                        .map(|r| r.display(StrategyMetric::Sharpe))
                        .unwrap_or_default(),
                }
                SummaryCard {
                    title: "最高相对胜率",
                    value: best_win.map(|r| r.name.clone()).unwrap_or_else(|| "--".into()),
                    detail: best_win
                        .map(|r| r.display(StrategyMetric::WinRate))
                        .unwrap_or_default(),
                }
                SummaryCard {
                    title: "平均换手",
                    value: avg_turnover.map(formatting::format_multiple).unwrap_or_else(|| "--".into()),
                }
                SummaryCard {
                    title: "在线策略",
                    value: format!("{}", data.len()),
                    detail: format!("回测窗口 {}", range().label()),
                }
            }
            table { class: "zoo-table",
                thead {
                    tr {
                        th { class: "name-col", "策略名称" }
                        for &key in StrategyMetric::all() {
                            th {
                                class: "sortable",
                                onclick: move |_| sort.set(sort().click(key)),
                                "{key.label()} "
                                SortIcon { active: sort().key == Some(key), direction: sort().direction }
                            }
                        }
                    }
                }
                tbody {
                    if sorted().is_empty() {
                        EmptyRow { columns: StrategyMetric::all().len() + 1 }
                    }
                    for row in sorted() {
                        tr {
                            key: "{row.id}",
                            class: "row-link",
                            onclick: {
                                let id = row.id.clone();
                                move |_| page.set(Page::StrategyDetail(id.clone()))
                            },
                            td { class: "name-col", "{row.name}" }
                            for &key in StrategyMetric::all() {
                                td { class: value_class(row.metric(key)), "{row.display(key)}" }
                            }
                        }
                    }
                }
            }
            footer { class: "table-foot",
                "共 {sorted().len()} 个策略 · 回测窗口 {range().label()}"
            }
        }
    }
}
