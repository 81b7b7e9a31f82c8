use crate::shared::components::charts::bubble_chart::BubbleChart;
use contracts::dashboards::d101_category_sales::CategorySalesResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use crate::dashboards::d101_category_sales::api;

#[component]
pub fn CategorySalesDashboard() -> impl IntoView {
    let data = RwSignal::new(None::<CategorySalesResponse>);
    let error_msg = RwSignal::new(None::<String>);
    let selected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

    // Load chart data on mount; every category starts selected
    spawn_local(async move {
        match api::get_category_sales().await {
            Ok(resp) => {
                selected.set(resp.categories.iter().map(|c| c.name.clone()).collect());
                data.set(Some(resp));
            }
            Err(e) => error_msg.set(Some(e)),
        }
    });

    view! {
        <div class="dashboard dashboard--categories">
            <h2 class="dashboard__title">"Category sales analysis"</h2>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}

            {move || match data.get() {
                Some(resp) => {
                    let chart_categories = resp.categories.clone();
                    view! {
                        <div class="dashboard__body">
                            <div class="dashboard__filters">
                                <div class="dashboard__filters-label">"Categories"</div>
                                <CheckboxGroup value=selected>
                                    <div style="display: flex; flex-wrap: wrap; gap: 4px 12px;">
                                        {resp.categories.iter().map(|c| {
                                            let name = c.name.clone();
                                            view! {
                                                <Checkbox value=name.clone() label=name />
                                            }
                                        }).collect_view()}
                                    </div>
                                </CheckboxGroup>
                            </div>
                            <BubbleChart
                                title="Monthly sales by category".to_string()
                                month_labels=resp.month_labels.clone()
                                categories=chart_categories
                                visible=selected
                            />
                        </div>
                    }.into_any()
                },
                None => view! {
                    <div class="dashboard__loading">"Loading categories..."</div>
                }.into_any(),
            }}
        </div>
    }
}
