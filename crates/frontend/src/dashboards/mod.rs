pub mod d100_store_overview;

pub use d100_store_overview::ui::StoreOverviewDashboard;
