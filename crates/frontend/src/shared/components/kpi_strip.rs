use super::stat_card::StatCard;
use contracts::shared::indicators::*;
use leptos::prelude::*;
use std::collections::HashMap;

#[component]
pub fn KpiStrip(
    /// Catalogue metadata, in display order
    metas: Vec<IndicatorMeta>,
    /// Computed values keyed by indicator id string
    #[prop(into)]
    values: Signal<HashMap<String, IndicatorValue>>,
) -> impl IntoView {
    let cards: Vec<_> = metas
        .into_iter()
        .map(|meta| {
            let id_str = meta.id.0.clone();

            let value_sig = Signal::derive({
                let id_str = id_str.clone();
                move || {
                    values
                        .get()
                        .get(&id_str)
                        .and_then(|v| v.value)
                }
            });

            let status_sig = Signal::derive({
                let id_str = id_str.clone();
                move || {
                    values
                        .get()
                        .get(&id_str)
                        .map(|v| v.status)
                        .unwrap_or(IndicatorStatus::Neutral)
                }
            });

            let change_sig = Signal::derive({
                let id_str = id_str.clone();
                move || {
                    values
                        .get()
                        .get(&id_str)
                        .and_then(|v| v.change_percent)
                }
            });

            let subtitle_sig = Signal::derive({
                let id_str = id_str.clone();
                move || {
                    values
                        .get()
                        .get(&id_str)
                        .and_then(|v| v.subtitle.clone())
                }
            });

            view! {
                <StatCard
                    label=meta.label.clone()
                    icon_name=meta.icon.clone()
                    value=value_sig
                    format=meta.format.clone()
                    status=status_sig
                    change_percent=change_sig
                    subtitle=subtitle_sig
                />
            }
        })
        .collect();

    view! {
        <div class="kpi-strip">
            <div class="kpi-strip__grid">
                {cards}
            </div>
        </div>
    }
}
