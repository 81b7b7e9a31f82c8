use crate::shared::components::charts::combo_chart::ComboChart;
use crate::shared::components::number_format::{format_money, pct_or_dash};
use contracts::dashboards::d102_year_comparison::YearComparisonResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d102_year_comparison::api;

#[component]
pub fn YearComparisonDashboard() -> impl IntoView {
    let data = RwSignal::new(None::<YearComparisonResponse>);
    let error_msg = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::get_year_comparison().await {
            Ok(resp) => data.set(Some(resp)),
            Err(e) => error_msg.set(Some(e)),
        }
    });

    view! {
        <div class="dashboard dashboard--comparison">
            <h2 class="dashboard__title">"Year-over-year sales comparison"</h2>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error">{msg}</div>
            })}

            {move || match data.get() {
                Some(resp) => view! {
                    <div class="dashboard__body">
                        <ComboChart chart=resp.chart.clone() />
                        <h3 class="dashboard__section-title">"Monthly detail"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Month"</th>
                                    <th>{format!("{} full month", resp.prior_year)}</th>
                                    <th>{format!("{} MTD", resp.prior_year)}</th>
                                    <th>{format!("{} MTD", resp.current_year)}</th>
                                    <th>"MTD growth %"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {resp.rows.into_iter().map(|row| view! {
                                    <tr>
                                        <td>{row.month.clone()}</td>
                                        <td class="data-table__num">{format_money(row.prior_full, "$")}</td>
                                        <td class="data-table__num">{format_money(row.prior_mtd, "$")}</td>
                                        <td class="data-table__num">{format_money(row.current_mtd, "$")}</td>
                                        <td class="data-table__num">{pct_or_dash(row.growth_pct, 1)}</td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="dashboard__loading">"Loading comparison..."</div>
                }.into_any(),
            }}
        </div>
    }
}
