pub mod dto;

pub use dto::{
    AnalyticsResponse, ApiError, ProcessDataResponse, StoreAnalytics, StoreMetrics,
    SubCategoryStats, TopProduct,
};
