use contracts::dashboards::d100_store_overview::SubCategoryStats;
use indexmap::IndexMap;
use leptos::prelude::*;

#[derive(Clone, PartialEq)]
struct Bar {
    category: String,
    sales: f64,
    profit: f64,
}

/// Bar height as a percentage of the chart area.
fn bar_height_pct(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value.max(0.0) / max * 100.0).min(100.0)
}

/// Grouped bar chart of sales and profit per sub-category.
#[component]
pub fn SalesChart(
    #[prop(into)] data: Signal<IndexMap<String, SubCategoryStats>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let bars = Memo::new(move |_| {
        data.get()
            .iter()
            .map(|(category, stats)| Bar {
                category: category.clone(),
                sales: stats.sales,
                profit: stats.profit,
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="dashboard__panel sales-chart">
            <h2 class="dashboard__panel-title">"Sales by Category"</h2>

            {move || {
                if loading.get() {
                    view! {
                        <div class="sales-chart__loading">
                            <p>"Loading data..."</p>
                        </div>
                    }.into_any()
                } else {
                    let bars = bars.get();
                    let max = bars
                        .iter()
                        .flat_map(|b| [b.sales, b.profit])
                        .fold(0.0f64, f64::max);

                    view! {
                        <div class="sales-chart__plot">
                            {bars
                                .iter()
                                .map(|bar| {
                                    let sales_style = format!(
                                        "height: {:.1}%",
                                        bar_height_pct(bar.sales, max)
                                    );
                                    let profit_style = format!(
                                        "height: {:.1}%",
                                        bar_height_pct(bar.profit, max)
                                    );
                                    let sales_title =
                                        format!("{}: sales {:.2}", bar.category, bar.sales);
                                    let profit_title =
                                        format!("{}: profit {:.2}", bar.category, bar.profit);
                                    view! {
                                        <div class="sales-chart__group">
                                            <div class="sales-chart__bars">
                                                <div
                                                    class="sales-chart__bar sales-chart__bar--sales"
                                                    style=sales_style
                                                    title=sales_title
                                                ></div>
                                                <div
                                                    class="sales-chart__bar sales-chart__bar--profit"
                                                    style=profit_style
                                                    title=profit_title
                                                ></div>
                                            </div>
                                            <span class="sales-chart__group-label">
                                                {bar.category.clone()}
                                            </span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="sales-chart__legend">
                            <span class="sales-chart__legend-item sales-chart__legend-item--sales">
                                "Sales"
                            </span>
                            <span class="sales-chart__legend-item sales-chart__legend-item--profit">
                                "Profit"
                            </span>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
