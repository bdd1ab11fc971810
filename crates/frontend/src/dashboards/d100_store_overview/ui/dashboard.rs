use super::sales_chart::SalesChart;
use super::store_layout::StoreLayout;
use crate::dashboards::d100_store_overview::api;
use crate::shared::components::{StatCard, ValueFormat};
use crate::usecases::u100_upload_dataset::view::FileUpload;
use contracts::dashboards::d100_store_overview::AnalyticsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Store overview dashboard: summary metrics, dataset upload, the
/// simulated store layout and the sales-by-sub-category chart.
#[component]
pub fn StoreOverviewDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<AnalyticsResponse>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Bumped after a successful upload to refetch analytics
    let (reload_tick, set_reload_tick) = signal(0u64);

    Effect::new(move |_| {
        reload_tick.get();
        set_loading.set(true);

        spawn_local(async move {
            match api::fetch_analytics().await {
                Ok(response) => {
                    set_data.set(Some(response));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load analytics: {}", e);
                    // Render the all-zeros payload, but keep the error visible
                    set_data.set(Some(AnalyticsResponse::default()));
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let on_upload_complete = Callback::new(move |_: ()| {
        set_reload_tick.update(|tick| *tick += 1);
    });

    let metrics = Signal::derive(move || data.get().map(|d| d.analytics.metrics));
    let total_orders =
        Signal::derive(move || metrics.get().map(|m| m.total_orders as f64));
    let average_order_value =
        Signal::derive(move || metrics.get().map(|m| m.average_order_value));
    let total_products =
        Signal::derive(move || metrics.get().map(|m| m.total_products as f64));

    let layout_data =
        Signal::derive(move || data.get().map(|d| d.data).unwrap_or_default());
    let sub_categories = Signal::derive(move || {
        data.get()
            .map(|d| d.analytics.sub_category_analysis)
            .unwrap_or_default()
    });

    view! {
        <div id="d100_store_overview--dashboard" class="dashboard">
            {move || {
                error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })
            }}

            <div class="dashboard__stats">
                <StatCard
                    label="Total Orders"
                    icon_name="cart"
                    value=total_orders
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Average Order Value"
                    icon_name="trending-up"
                    value=average_order_value
                    format=ValueFormat::Money
                />
                <StatCard
                    label="Total Products"
                    icon_name="package"
                    value=total_products
                    format=ValueFormat::Integer
                />
            </div>

            <div class="dashboard__panel">
                <h2 class="dashboard__panel-title">"Upload Store Data"</h2>
                <FileUpload on_upload_complete=on_upload_complete />
            </div>

            <div class="dashboard__panels">
                <StoreLayout data=layout_data loading=loading />
                <SalesChart data=sub_categories loading=loading />
            </div>
        </div>
    }
}
