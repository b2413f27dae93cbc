//! Per-strategy detail page: fetched metrics, NAV curve, point-in-time
//! holdings with a date selector.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use wasm_bindgen_futures::spawn_local as spawn;

use zoo_core::{NavPoint, StrategyDetail};
use zoo_types::formatting;

use crate::api;
use crate::types::{DetailLoad, Page};

#[component]
pub fn StrategyDetailPage(page: Signal<Page>) -> Element {
    let id = use_memo(move || match page() {
        Page::StrategyDetail(id) => id,
        _ => String::new(),
    });
    let mut load = use_signal(DetailLoad::default);
    let mut generation = use_signal(|| 0u32);
    let mut holdings_date = use_signal(String::new);

    use_effect(move || {
        let id = id();
        if id.is_empty() {
            return;
        }
        let r#gen = *generation.peek() + 1;
        generation.set(r#gen);
        load.set(DetailLoad::Loading);
        holdings_date.set(String::new());
        spawn(async move {
            info!(%id, "fetching strategy detail");
            let result = api::fetch_strategy_detail(&id).await;
            // A newer navigation supersedes this fetch; drop the stale result.
            if *generation.peek() == r#gen {
                load.set(result.into());
            }
        });
    });

    match load() {
        DetailLoad::Loading => rsx! {
            section { class: "detail-page",
                div { class: "detail-placeholder", "加载中…" }
            }
        },
        DetailLoad::NotFound => rsx! {
            section { class: "detail-page",
                div { class: "detail-placeholder not-found",
                    h2 { "策略不存在" }
                    p { "没有找到编号为 “{id}” 的策略，可能已经下线。" }
                    button {
                        class: "ghost-btn",
                        onclick: move |_| page.set(Page::StrategyZoo),
                        "返回策略列表"
                    }
                }
            }
        },
        DetailLoad::Failed(message) => rsx! {
            section { class: "detail-page",
                div { class: "detail-placeholder failed",
                    h2 { "加载失败" }
                    p { "{message}" }
                    button {
                        class: "ghost-btn",
                        onclick: move |_| page.set(Page::StrategyZoo),
                        "返回策略列表"
                    }
                }
            }
        },
        DetailLoad::Loaded(detail) => {
            let dates: Vec<String> =
                detail.available_dates().into_iter().map(str::to_string).collect();
            // Default to the newest snapshot until the user picks another date.
            let selected = if dates.contains(&holdings_date()) {
                holdings_date()
            } else {
                dates.first().cloned().unwrap_or_default()
            };
            rsx! {
                section { class: "detail-page",
                    div { class: "page-head",
                        div {
                            h1 { "{detail.name}" }
                            p { class: "page-sub", "{detail.description}" }
                        }
                        button {
                            class: "ghost-btn",
                            onclick: move |_| page.set(Page::StrategyZoo),
                            "返回策略列表"
                        }
                    }
                    MetricGrid { detail: *detail.clone() }
                    div { class: "detail-panel",
                        h2 { "净值曲线" }
                        NavChart { points: detail.nav_curve.clone() }
                    }
                    div { class: "detail-panel",
                        h2 { "持仓明细" }
                        div { class: "holdings-bar",
                            label { "持仓日期" }
                            select {
                                onchange: move |evt| holdings_date.set(evt.value()),
                                for date in dates.clone() {
                                    option { value: "{date}", selected: date == selected, "{date}" }
                                }
                            }
                        }
                        HoldingsTable { detail: *detail.clone(), date: selected.clone() }
                    }
                }
            }
        }
    }
}

fn signed_class(display: &str) -> &'static str {
    if display.starts_with('-') {
        "val-neg"
    } else {
        "val-pos"
    }
}

#[component]
fn MetricGrid(detail: StrategyDetail) -> Element {
    let m = &detail.metrics;
    let cards: Vec<(&str, String, String, &'static str)> = vec![
        ("总收益", m.total_return.clone(), String::new(), signed_class(&m.total_return)),
        ("基准收益", m.benchmark_return.clone(), String::new(), signed_class(&m.benchmark_return)),
        ("年化收益", m.annualized_return.clone(), String::new(), signed_class(&m.annualized_return)),
        ("最大回撤", m.max_drawdown.clone(), String::new(), "val-neg"),
        ("Alpha", formatting::format_pct(m.alpha, 2), String::new(), "val-pos"),
        ("Beta", formatting::format_ratio(m.beta, 2), String::new(), "val-flat"),
        ("夏普比率", formatting::format_ratio(m.sharpe, 2), String::new(), "val-flat"),
        ("索提诺比率", formatting::format_ratio(m.sortino, 2), String::new(), "val-flat"),
        ("信息比率", formatting::format_ratio(m.info_ratio, 2), String::new(), "val-flat"),
        (
            "年化波动率",
            formatting::format_pct(m.volatility, 2),
            format!("基准 {}", formatting::format_pct(m.benchmark_volatility, 2)),
            "val-flat",
        ),
        (
            "月度胜率",
            formatting::format_pct(m.win_rate, 2),
            format!("{}胜 / {}负 · 日胜率 {}", m.win_count, m.loss_count,
                formatting::format_pct(m.daily_win_rate, 2)),
            "val-flat",
        ),
        ("盈亏比", formatting::format_ratio(m.pl_ratio, 2), String::new(), "val-flat"),
    ];
    rsx! {
        div { class: "metric-grid",
            for (label, value, note, tone) in cards {
                div { class: "metric-card", key: "{label}",
                    span { class: "metric-label", "{label}" }
                    span { class: "metric-value {tone}", "{value}" }
                    if !note.is_empty() {
                        span { class: "metric-note", "{note}" }
                    }
                }
            }
        }
    }
}

const CHART_W: f64 = 640.0;
const CHART_H: f64 = 240.0;
const CHART_PAD: f64 = 12.0;

fn polyline_points(points: &[NavPoint], pick: fn(&NavPoint) -> f64) -> String {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        lo = lo.min(p.strategy.min(p.benchmark));
        hi = hi.max(p.strategy.max(p.benchmark));
    }
    let span = if hi > lo { hi - lo } else { 1.0 };
    let step = if points.len() > 1 {
        (CHART_W - 2.0 * CHART_PAD) / (points.len() - 1) as f64
    } else {
        0.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = CHART_PAD + i as f64 * step;
            let y = CHART_H - CHART_PAD - (pick(p) - lo) / span * (CHART_H - 2.0 * CHART_PAD);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inline SVG line chart of the paired NAV series: strategy solid, benchmark
/// dashed.
#[component]
fn NavChart(points: Vec<NavPoint>) -> Element {
    if points.is_empty() {
        return rsx! { div { class: "chart-empty", "暂无净值数据" } };
    }
    let strategy = polyline_points(&points, |p| p.strategy);
    let benchmark = polyline_points(&points, |p| p.benchmark);
    let first = points.first().map(|p| p.date.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.date.clone()).unwrap_or_default();
    rsx! {
        div { class: "nav-chart",
            svg {
                view_box: "0 0 {CHART_W} {CHART_H}",
                preserve_aspect_ratio: "none",
                polyline {
                    points: "{benchmark}",
                    fill: "none",
                    stroke: "#8a8f98",
                    stroke_width: "1.5",
                    stroke_dasharray: "5 4",
                }
                polyline {
                    points: "{strategy}",
                    fill: "none",
                    stroke: "#2a9d8f",
                    stroke_width: "2",
                }
            }
            div { class: "chart-legend",
                span { class: "legend-strategy", "策略净值" }
                span { class: "legend-benchmark", "基准净值" }
                span { class: "chart-range", "{first} — {last}" }
            }
        }
    }
}

#[component]
fn HoldingsTable(detail: StrategyDetail, date: String) -> Element {
    let holdings = detail.holdings_on(&date);
    rsx! {
        table { class: "zoo-table holdings-table",
            thead {
                tr {
                    th { "代码" }
                    th { "名称" }
                    th { "权重" }
                    th { "行业" }
                }
            }
            tbody {
                if holdings.is_empty() {
                    tr { class: "empty-row",
                        td { colspan: "4", "该日期暂无持仓数据" }
                    }
                }
                for h in holdings {
                    tr { key: "{h.code}",
                        td { "{h.code}" }
                        td { "{h.name}" }
                        td { {format!("{:.2}%", h.weight)} }
                        td { "{h.industry}" }
                    }
                }
            }
        }
    }
}
