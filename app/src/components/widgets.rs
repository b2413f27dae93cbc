//! Shared widgets for the zoo tables and their header cards.

use dioxus::prelude::*;
use zoo_types::{SortDirection, TimeRange};

/// Sort indicator for a column header: direction arrow when the column is
/// active, neutral glyph otherwise.
#[component]
pub fn SortIcon(active: bool, direction: SortDirection) -> Element {
    let glyph = match (active, direction) {
        (false, _) => "↕",
        (true, SortDirection::Asc) => "▲",
        (true, SortDirection::Desc) => "▼",
    };
    rsx! {
        span { class: if active { "sort-icon active" } else { "sort-icon" }, "{glyph}" }
    }
}

/// Header summary card: title, headline value, optional footnote line.
#[component]
pub fn SummaryCard(title: String, value: String, #[props(default)] detail: String) -> Element {
    rsx! {
        div { class: "summary-card",
            span { class: "card-title", "{title}" }
            span { class: "card-value", "{value}" }
            if !detail.is_empty() {
                span { class: "card-detail", "{detail}" }
            }
        }
    }
}

/// Toggle between the two backtest windows.
#[component]
pub fn TimeRangeToggle(range: Signal<TimeRange>) -> Element {
    rsx! {
        div { class: "toggle-group",
            for &option in TimeRange::all() {
                button {
                    class: if range() == option { "toggle-btn active" } else { "toggle-btn" },
                    onclick: move |_| range.set(option),
                    "{option.label()}"
                }
            }
        }
    }
}

/// Placeholder row shown when a table body has nothing to render.
#[component]
pub fn EmptyRow(columns: usize) -> Element {
    rsx! {
        tr { class: "empty-row",
            td { colspan: "{columns}", "暂无数据" }
        }
    }
}

/// Sign-based color class for table cell values.
pub fn value_class(value: f64) -> &'static str {
    if value > 0.0 {
        "val-pos"
    } else if value < 0.0 {
        "val-neg"
    } else {
        "val-flat"
    }
}
