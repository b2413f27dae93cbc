//! Model Zoo: prediction-model scoreboard with a live/all version filter.

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use zoo_core::{BundledFixtures, Dataset, HasMetrics, ZooRepository, apply_sort, leader};
use zoo_types::{Metric, ModelMetric, ModelStatus, SortDirection, SortState};

use crate::components::methodology::ModelMethodology;
use crate::components::widgets::{EmptyRow, SortIcon, SummaryCard, value_class};
use crate::types::ZooView;

fn status_class(status: ModelStatus) -> &'static str {
    match status {
        ModelStatus::Stable => "status-tag stable",
        ModelStatus::Training => "status-tag training",
        ModelStatus::Degraded => "status-tag degraded",
        ModelStatus::Experiment => "status-tag experiment",
    }
}

#[component]
pub fn ModelZooPage() -> Element {
    let mut view = use_signal(ZooView::default);
    let mut live_only = use_signal(|| true);
    // The scoreboard opens ranked by Rank IC, best first.
    let mut sort =
        use_signal(|| SortState::sorted_by(ModelMetric::RankIc, SortDirection::Desc));

    let rows = use_memo(move || {
        let all = BundledFixtures.models().unwrap_or_else(|err| {
            warn!(%err, "model fixture failed to load");
            Dataset::new()
        });
        if live_only() {
            all.into_iter().filter(|m| m.live).collect()
        } else {
            all
        }
    });
    let sorted = use_memo(move || apply_sort(&rows(), sort()));

    if view() == ZooView::Methodology {
        return rsx! { ModelMethodology { view } };
    }

    let data = rows();
    let best_rank_ic = leader(&data, ModelMetric::RankIc);
    let best_loss = leader(&data, ModelMetric::TrainLoss);
    let stable = data.iter().filter(|m| m.status == ModelStatus::Stable).count();
    let degraded = data.iter().filter(|m| m.status == ModelStatus::Degraded).count();

    rsx! {
        section { class: "zoo-page",
            div { class: "page-head",
                div {
                    h1 { "模型动物园" }
                    p { class: "page-sub", "截面收益预测模型的样本外评估" }
                }
                div { class: "page-actions",
                    div { class: "toggle-group",
                        button {
                            class: if live_only() { "toggle-btn active" } else { "toggle-btn" },
                            onclick: move |_| live_only.set(true),
                            "线上版本"
                        }
                        button {
                            class: if !live_only() { "toggle-btn active" } else { "toggle-btn" },
                            onclick: move |_| live_only.set(false),
                            "全部版本"
                        }
                    }
                    button {
                        class: "ghost-btn",
                        onclick: move |_| view.set(ZooView::Methodology),
                        "方法论说明"
                    }
                    // Inert; retraining is triggered from the research pipeline.
                    button { class: "ghost-btn muted", "触发再训练" }
                }
            }
            div { class: "summary-grid",
                SummaryCard {
                    title: "最佳 Rank IC",
                    value: best_rank_ic.map(|m| m.name.clone()).unwrap_or_else(|| "--".into()),
                    detail: best_rank_ic
                        .map(|m| m.display(ModelMetric::RankIc))
                        .unwrap_or_default(),
                }
                SummaryCard {
                    title: "最低训练损失",
                    value: best_loss.map(|m| m.name.clone()).unwrap_or_else(|| "--".into()),
                    detail: best_loss
                        .map(|m| m.display(ModelMetric::TrainLoss))
                        .unwrap_or_default(),
                }
                SummaryCard {
                    title: "模型健康度",
                    value: format!("{stable} 稳定 / {degraded} 退化"),
                    detail: format!("共 {} 个模型", data.len()),
                }
            }
            table { class: "zoo-table",
                thead {
                    tr {
                        th { class: "name-col", "模型名称" }
                        th { "模型类型" }
                        for &key in ModelMetric::all() {
                            th {
                                class: "sortable",
                                onclick: move |_| sort.set(sort().click(key)),
                                "{key.label()} "
                                SortIcon { active: sort().key == Some(key), direction: sort().direction }
                            }
                        }
                        th { "状态" }
                    }
                }
                tbody {
                    if sorted().is_empty() {
                        EmptyRow { columns: ModelMetric::all().len() + 3 }
                    }
                    for row in sorted() {
                        tr { key: "{row.name}",
                            td { class: "name-col", "{row.name}" }
                            td { class: "family-col", "{row.family}" }
                            for &key in ModelMetric::all() {
                                td { class: value_class(row.metric(key)), "{row.display(key)}" }
                            }
                            td {
                                span { class: status_class(row.status), "{row.status.label()}" }
                            }
                        }
                    }
                }
            }
            footer { class: "table-foot", "共 {sorted().len()} 个模型" }
        }
    }
}
