use crate::shared::icons::icon;
use contracts::domain::a001_placement::{PlacementMap, PlacementRecord};
use contracts::shared::store_layout::{
    display_name, split_racks, summarize, LayoutSummary, SectionPriority, SectionSummary,
};
use leptos::prelude::*;

fn tile_class(priority: SectionPriority) -> &'static str {
    match priority {
        SectionPriority::High => "store-layout__tile store-layout__tile--high",
        SectionPriority::Medium => "store-layout__tile store-layout__tile--medium",
        SectionPriority::Low => "store-layout__tile store-layout__tile--low",
    }
}

/// Record-level tag class; unrecognized tags render neutral.
fn rack_card_class(priority: &str) -> &'static str {
    match priority {
        "high" => "rack-card rack-card--high",
        "medium" => "rack-card rack-card--medium",
        "low" => "rack-card rack-card--low",
        _ => "rack-card",
    }
}

#[component]
fn Rack(title: &'static str, records: Vec<(String, PlacementRecord)>) -> impl IntoView {
    view! {
        <div class="aisle-view__rack">
            <h4 class="aisle-view__rack-title">{title}</h4>
            <div class="aisle-view__rack-grid">
                {records
                    .iter()
                    .map(|(id, record)| {
                        let name = display_name(id, record).to_string();
                        let priority = record.priority.clone();
                        view! {
                            <div class=rack_card_class(&record.priority)>
                                <p class="rack-card__name">{name}</p>
                                <p class="rack-card__priority">{format!("Priority: {}", priority)}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn AisleView(section: SectionSummary, on_close: Callback<()>) -> impl IntoView {
    let (left, right) = split_racks(&section.records);
    let left = left.to_vec();
    let right = right.to_vec();
    let title = format!("{} - Aisle {}", section.label, section.id + 1);

    view! {
        <div class="aisle-view__overlay">
            <div class="aisle-view">
                <div class="aisle-view__header">
                    <h3 class="aisle-view__title">{title}</h3>
                    <button
                        class="aisle-view__close"
                        on:click=move |_| on_close.run(())
                    >
                        {icon("x")}
                    </button>
                </div>
                <div class="aisle-view__racks">
                    <Rack title="Left Rack" records=left />
                    <Rack title="Right Rack" records=right />
                </div>
            </div>
        </div>
    }
}

/// 4x4 store layout grid. Tiles are colored by aggregated section
/// priority; clicking a tile opens the aisle detail view.
#[component]
pub fn StoreLayout(
    #[prop(into)] data: Signal<PlacementMap>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let summary = Memo::new(move |_| summarize(&data.get()));
    let (selected_aisle, set_selected_aisle) = signal(None::<usize>);

    let on_close = Callback::new(move |_: ()| set_selected_aisle.set(None));

    view! {
        <div class="dashboard__panel store-layout">
            <div class="store-layout__header">
                {icon("layout-grid")}
                <h2 class="dashboard__panel-title">"Store Layout Optimization"</h2>
            </div>

            {move || {
                if loading.get() {
                    view! {
                        <div class="store-layout__loading">
                            <p>"Loading layout data..."</p>
                        </div>
                    }.into_any()
                } else {
                    let LayoutSummary { sections, dropped_records } = summary.get();
                    view! {
                        <div class="store-layout__floor">
                            <div class="store-layout__entrance">
                                {icon("door-open")}
                                {icon("arrow-right")}
                                <span>"Main Entrance"</span>
                            </div>

                            {(dropped_records > 0).then(|| view! {
                                <div class="warning-box warning-box--warning">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">
                                        {format!(
                                            "{} record(s) reference a section outside the store grid and are not shown",
                                            dropped_records
                                        )}
                                    </span>
                                </div>
                            })}

                            <div class="store-layout__grid">
                                {sections
                                    .iter()
                                    .map(|section| {
                                        let id = section.id;
                                        let label = section.label.clone();
                                        let count = section.total_product_count;
                                        view! {
                                            <div
                                                class=tile_class(section.priority)
                                                on:click=move |_| set_selected_aisle.set(Some(id))
                                            >
                                                <span class="store-layout__tile-label">{label}</span>
                                                <p class="store-layout__tile-count">
                                                    {format!("{} Products", count)}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }.into_any()
                }
            }}

            {move || {
                selected_aisle.get().and_then(|id| {
                    summary.get().sections.get(id).cloned().map(|section| {
                        view! { <AisleView section=section on_close=on_close /> }
                    })
                })
            }}
        </div>
    }
}
