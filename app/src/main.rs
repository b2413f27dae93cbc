//! Zoo board web frontend.
//!
//! Single-page Dioxus app with panel-style navigation between the three zoo
//! views and the per-strategy detail page. All tabular data comes from the
//! bundled fixtures in `zoo-core`; only the detail page fetches.

use dioxus::prelude::*;
use dioxus_logger::tracing::{Level, info};

mod api;
mod components;
mod types;

use components::{FactorZooPage, HomePage, ModelZooPage, StrategyDetailPage, StrategyZooPage};
use types::Page;

static MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[component]
fn App() -> Element {
    let page = use_signal(Page::default);

    use_effect(move || {
        info!(page = ?page.read(), "page changed");
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        div { class: "app-shell",
            NavBar { page }
            main { class: "app-main",
                match page() {
                    Page::Home => rsx! { HomePage { page } },
                    Page::FactorZoo => rsx! { FactorZooPage {} },
                    Page::ModelZoo => rsx! { ModelZooPage {} },
                    Page::StrategyZoo => rsx! { StrategyZooPage { page } },
                    Page::StrategyDetail(_) => rsx! { StrategyDetailPage { page } },
                }
            }
        }
    }
}

#[component]
fn NavBar(page: Signal<Page>) -> Element {
    let tabs: [(&str, Page); 4] = [
        ("首页", Page::Home),
        ("Factor Zoo", Page::FactorZoo),
        ("Model Zoo", Page::ModelZoo),
        ("Strategy Zoo", Page::StrategyZoo),
    ];
    rsx! {
        header { class: "app-nav",
            span {
                class: "app-brand",
                onclick: move |_| page.set(Page::Home),
                "Alpha One Research"
            }
            nav {
                for (label, target) in tabs {
                    button {
                        class: if page().tab() == target.tab() { "nav-tab active" } else { "nav-tab" },
                        onclick: move |_| page.set(target.clone()),
                        "{label}"
                    }
                }
            }
        }
    }
}
