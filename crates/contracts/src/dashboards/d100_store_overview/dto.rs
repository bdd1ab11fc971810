use crate::domain::a001_placement::{LayoutRecommendation, PlacementMap};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Full payload of `GET /api/analytics`.
///
/// Every field is defaulted so a partial or empty body still decodes;
/// `Default` gives the all-zeros payload the dashboard falls back to
/// when the backend is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResponse {
    /// Layout records keyed by record id (consumed by the store grid)
    #[serde(default)]
    pub data: PlacementMap,
    #[serde(default)]
    pub analytics: StoreAnalytics,
    #[serde(default)]
    pub loading: bool,
}

/// Aggregated analytics block of the `/analytics` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreAnalytics {
    #[serde(default)]
    pub metrics: StoreMetrics,
    #[serde(default)]
    pub sub_category_analysis: IndexMap<String, SubCategoryStats>,
    #[serde(default)]
    pub top_products: IndexMap<String, TopProduct>,
}

/// Store-wide summary metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreMetrics {
    #[serde(default)]
    pub total_sales: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub average_order_value: f64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub average_discount: f64,
    #[serde(default)]
    pub profit_margin: f64,
}

/// Per-sub-category aggregates. Wire keys are pandas column names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubCategoryStats {
    #[serde(rename = "Sales", default)]
    pub sales: f64,
    #[serde(rename = "Profit", default)]
    pub profit: f64,
    #[serde(rename = "Quantity", default)]
    pub quantity: f64,
    #[serde(rename = "Discount", default)]
    pub discount: f64,
}

/// One of the top-10 products by sales.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: String,
    pub product_name: String,
    #[serde(rename = "Sales", default)]
    pub sales: f64,
    #[serde(rename = "Profit", default)]
    pub profit: f64,
    #[serde(rename = "Quantity", default)]
    pub quantity: f64,
    #[serde(rename = "Discount", default)]
    pub discount: f64,
}

/// Success body of `POST /api/process-data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProcessDataResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub category_analysis: StoreAnalytics,
    #[serde(default)]
    pub layout_recommendations: IndexMap<String, LayoutRecommendation>,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_response_full_payload() {
        let json = r#"{
            "data": {
                "OFF-BI-1001": {
                    "section": 2,
                    "priority": "high",
                    "sub_category": "Binders",
                    "products": [{"name": "Index Tabs", "id": "OFF-BI-1001"}]
                }
            },
            "analytics": {
                "metrics": {
                    "total_sales": 2297200.86,
                    "total_profit": 286397.02,
                    "average_order_value": 458.61,
                    "total_orders": 5009,
                    "total_products": 1862,
                    "average_discount": 0.16,
                    "profit_margin": 12.47
                },
                "sub_category_analysis": {
                    "Binders": {"Sales": 203412.73, "Profit": 30221.76, "Quantity": 5974, "Discount": 0.37}
                },
                "top_products": {}
            },
            "loading": false
        }"#;
        let resp: AnalyticsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data["OFF-BI-1001"].section, 2);
        assert_eq!(resp.analytics.metrics.total_orders, 5009);
        assert_eq!(
            resp.analytics.sub_category_analysis["Binders"].sales,
            203412.73
        );
    }

    #[test]
    fn test_analytics_response_empty_body() {
        let resp: AnalyticsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.analytics.metrics.total_sales, 0.0);
        assert_eq!(resp, AnalyticsResponse::default());
    }

    #[test]
    fn test_process_data_response() {
        let json = r#"{
            "message": "Data processed successfully",
            "layout_recommendations": {
                "TEC-PH-4093": {
                    "product_name": "Panasonic Headset",
                    "sub_category": "Phones",
                    "section": 7,
                    "priority": "high"
                }
            }
        }"#;
        let resp: ProcessDataResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.message, "Data processed successfully");
        assert_eq!(resp.layout_recommendations["TEC-PH-4093"].section, 7);
    }
}
