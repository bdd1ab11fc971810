pub mod dashboard;
pub mod sales_chart;
pub mod store_layout;

pub use dashboard::StoreOverviewDashboard;
