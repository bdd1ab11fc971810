use crate::dashboards::d100_store_overview::ui::StoreOverviewDashboard;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <nav class="app__nav">
                <div class="app__nav-inner">
                    <div class="app__brand">
                        {icon("layout-dashboard")}
                        <span class="app__brand-title">"Retail Store Optimizer"</span>
                    </div>
                    <div class="app__nav-links">
                        <a href="#" class="app__nav-link app__nav-link--active">"Dashboard"</a>
                    </div>
                </div>
            </nav>

            <main class="app__main">
                <StoreOverviewDashboard />
            </main>
        </div>
    }
}
