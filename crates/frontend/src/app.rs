use leptos::prelude::*;

use crate::dashboards::{CategorySalesDashboard, PnlOverviewDashboard, YearComparisonDashboard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    PnlOverview,
    CategorySales,
    YearComparison,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::PnlOverview => "P&L Overview",
            Tab::CategorySales => "Category Sales",
            Tab::YearComparison => "Year Comparison",
        }
    }
}

const TABS: [Tab; 3] = [Tab::PnlOverview, Tab::CategorySales, Tab::YearComparison];

#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(Tab::PnlOverview);

    view! {
        <div class="app">
            <header class="app__header">
                <h1 class="app__title">"Interactive Financial Dashboard"</h1>
                <div class="app__subtitle">
                    "Monthly P&L, category sales and year-over-year comparison"
                </div>
            </header>
            <nav class="app__tabs">
                {TABS
                    .iter()
                    .map(|&tab| {
                        let class = move || {
                            if active_tab.get() == tab {
                                "app__tab app__tab--active"
                            } else {
                                "app__tab"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| set_active_tab.set(tab)>
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app__content">
                {move || match active_tab.get() {
                    Tab::PnlOverview => view! { <PnlOverviewDashboard /> }.into_any(),
                    Tab::CategorySales => view! { <CategorySalesDashboard /> }.into_any(),
                    Tab::YearComparison => view! { <YearComparisonDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
