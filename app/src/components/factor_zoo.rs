//! Factor Zoo: sortable backtest table over the bundled factor fixtures.

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use zoo_core::{BundledFixtures, Dataset, HasMetrics, ZooRepository, apply_sort, average, leader};
use zoo_types::{FactorMetric, Metric, SortState, TimeRange, formatting};

use crate::components::methodology::FactorMethodology;
use crate::components::widgets::{EmptyRow, SortIcon, SummaryCard, TimeRangeToggle, value_class};
use crate::types::ZooView;

/// Vintage stamp of the bundled fixtures, shown on the header card.
pub const DATA_VINTAGE: &str = "2025-11-30";

#[component]
pub fn FactorZooPage() -> Element {
    let mut view = use_signal(ZooView::default);
    let range = use_signal(TimeRange::default);
    let mut sort = use_signal(SortState::<FactorMetric>::default);

    // Reload wholesale on every range change; unsorted input order is the
    // fixture's own order until a column is clicked.
    let rows = use_memo(move || {
        BundledFixtures.factors(range()).unwrap_or_else(|err| {
            warn!(%err, "factor fixture failed to load");
            Dataset::new()
        })
    });
    let sorted = use_memo(move || apply_sort(&rows(), sort()));

    if view() == ZooView::Methodology {
        return rsx! { FactorMethodology { view } };
    }

    let data = rows();
    let best_return = leader(&data, FactorMetric::ReturnAnn);
    let best_ic = leader(&data, FactorMetric::IcMean);
    let avg_turnover = average(&data, FactorMetric::Turnover);

    rsx! {
        section { class: "zoo-page",
            div { class: "page-head",
                div {
                    h1 { "因子动物园" }
                    p { class: "page-sub", "全市场量价与基本面因子的多空回测表现" }
                }
                div { class: "page-actions",
                    TimeRangeToggle { range }
                    button {
                        class: "ghost-btn",
                        onclick: move |_| view.set(ZooView::Methodology),
                        "方法论说明"
                    }
                    // Inert; export is handled offline by the research pipeline.
                    button { class: "ghost-btn muted", "导出 CSV" }
                }
            }
            div { class: "summary-grid",
                SummaryCard {
                    title: "最佳表现因子",
                    value: best_return.map(|r| r.name.clone()).unwrap_or_else(|| "--".into()),
                    detail: best_return
                        .map(|r| r.display(FactorMetric::ReturnAnn))
                        .unwrap_or_default(),
                }
                SummaryCard {
                    title: "最高 IC 均值",
                    value: best_ic
                        .map(|r| r.display(FactorMetric::IcMean))
                        .unwrap_or_else(|| "--".into()),
                    detail: best_ic.map(|r| r.name.clone()).unwrap_or_default(),
                }
                SummaryCard {
                    title: "平均换手",
                    value: avg_turnover.map(formatting::format_multiple).unwrap_or_else(|| "--".into()),
                    detail: "全部因子均值".to_string(),
                }
                SummaryCard { title: "数据更新", value: DATA_VINTAGE.to_string() }
            }
            table { class: "zoo-table",
                thead {
                    tr {
                        th { class: "name-col", "因子名称" }
                        for &key in FactorMetric::all() {
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
                        EmptyRow { columns: FactorMetric::all().len() + 1 }
                    }
                    for row in sorted() {
                        tr { key: "{row.name}",
                            td { class: "name-col", "{row.name}" }
                            for &key in FactorMetric::all() {
                                td { class: value_class(row.metric(key)), "{row.display(key)}" }
                            }
                        }
                    }
                }
            }
            footer { class: "table-foot",
                "共 {sorted().len()} 个因子 · 回测窗口 {range().label()}"
            }
        }
    }
}
