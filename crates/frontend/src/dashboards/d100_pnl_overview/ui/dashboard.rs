use crate::shared::components::charts::combo_chart::ComboChart;
use crate::shared::components::kpi_strip::KpiStrip;
use crate::shared::components::number_format::{
    format_money, int_or_dash, money_or_dash, number_or_dash, pct_or_dash,
};
use crate::shared::api_utils::api_url;
use contracts::dashboards::d100_pnl_overview::PnlOverviewResponse;
use contracts::domain::a001_monthly_record::MonthlyRow;
use contracts::shared::indicators::{IndicatorCatalogResponse, IndicatorValue};
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

use crate::dashboards::d100_pnl_overview::api;

#[component]
pub fn PnlOverviewDashboard() -> impl IntoView {
    let data = RwSignal::new(None::<PnlOverviewResponse>);
    let catalog = RwSignal::new(None::<IndicatorCatalogResponse>);
    let error_msg = RwSignal::new(None::<String>);

    // Load catalogue + overview on mount
    spawn_local(async move {
        match Request::get(&api_url("/api/indicators/meta")).send().await {
            Ok(resp) if resp.ok() => {
                if let Ok(text) = resp.text().await {
                    if let Ok(cat) = serde_json::from_str::<IndicatorCatalogResponse>(&text) {
                        catalog.set(Some(cat));
                    }
                }
            }
            _ => log!("Failed to load indicator catalog"),
        }

        match api::get_pnl_overview().await {
            Ok(resp) => data.set(Some(resp)),
            Err(e) => error_msg.set(Some(e)),
        }
    });

    // KPI values keyed by indicator id, as the card strip expects them
    let kpi_values = Signal::derive(move || {
        data.get()
            .map(|d| {
                d.kpis
                    .into_iter()
                    .map(|v| (v.id.0.clone(), v))
                    .collect::<HashMap<String, IndicatorValue>>()
            })
            .unwrap_or_default()
    });

    view! {
        <div class="dashboard dashboard--pnl">
            <h2 class="dashboard__title">"Profit & loss analysis"</h2>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}

            <div class="dashboard__kpis">
                <h3 class="dashboard__section-title">"Key KPIs (last recorded month)"</h3>
                {move || match catalog.get() {
                    Some(cat) => view! {
                        <KpiStrip metas=cat.indicators values=kpi_values />
                    }.into_any(),
                    None => view! {
                        <div class="dashboard__loading">"Loading KPIs..."</div>
                    }.into_any(),
                }}
            </div>

            {move || match data.get() {
                Some(resp) => view! {
                    <div class="dashboard__body">
                        <div class="dashboard__charts">
                            {resp.charts.into_iter().map(|chart| view! {
                                <ComboChart chart=chart />
                            }).collect_view()}
                        </div>
                        <h3 class="dashboard__section-title">"Monthly detail"</h3>
                        <MonthlyTable rows=resp.rows />
                    </div>
                }.into_any(),
                None => view! {
                    <div class="dashboard__loading">"Loading dashboard..."</div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn MonthlyTable(rows: Vec<MonthlyRow>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Month"</th>
                    <th>"Sales"</th>
                    <th>"Cost of sales"</th>
                    <th>"Operating profit"</th>
                    <th>"Margin %"</th>
                    <th>"Invoices"</th>
                    <th>"Units sold"</th>
                    <th>"Units/invoice"</th>
                    <th>"Growth %"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| view! {
                    <tr>
                        <td>{row.record.month.clone()}</td>
                        <td class="data-table__num">{format_money(row.record.sales, "$")}</td>
                        <td class="data-table__num">{money_or_dash(row.record.cost_of_sales, "$")}</td>
                        <td class="data-table__num">{money_or_dash(row.metrics.operating_profit, "$")}</td>
                        <td class="data-table__num">{pct_or_dash(row.metrics.operating_margin_pct, 1)}</td>
                        <td class="data-table__num">{int_or_dash(row.record.invoices)}</td>
                        <td class="data-table__num">{int_or_dash(row.record.units_sold)}</td>
                        <td class="data-table__num">{number_or_dash(row.metrics.avg_units_per_invoice, 1)}</td>
                        <td class="data-table__num">{pct_or_dash(row.metrics.sales_growth_pct, 1)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
