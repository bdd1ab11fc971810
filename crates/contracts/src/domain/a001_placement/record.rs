use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Product reference carried inside a placement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub name: String,
    pub id: String,
}

/// One product-category placement assigned to a store section.
///
/// The analytics backend emits these loosely: `priority`, `category`,
/// `sub_category` and `products` may be absent, so they default to empty
/// values instead of failing the decode. `section` is required; values
/// outside 0..16 are legal on the wire and are dropped at aggregation
/// time (see `shared::store_layout`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub section: i64,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub products: Vec<ProductRef>,
}

/// The `/analytics` record mapping, keyed by opaque record id.
///
/// IndexMap keeps JSON insertion order; the aisle-label tie-break and
/// the rack layout both depend on it.
pub type PlacementMap = IndexMap<String, PlacementRecord>;

/// Per-product layout recommendation as returned by `/process-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRecommendation {
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub sub_category: String,
    pub section: i64,
    #[serde(default)]
    pub priority: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_all_fields() {
        let json = r#"{
            "section": 3,
            "priority": "high",
            "category": "Office Supplies",
            "sub_category": "Binders",
            "products": [{"name": "Index Tabs", "id": "OFF-BI-1001"}]
        }"#;
        let record: PlacementRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.section, 3);
        assert_eq!(record.priority, "high");
        assert_eq!(record.sub_category, "Binders");
        assert_eq!(record.products.len(), 1);
        assert_eq!(record.products[0].name, "Index Tabs");
    }

    #[test]
    fn test_record_optional_fields_default() {
        let record: PlacementRecord = serde_json::from_str(r#"{"section": 0}"#).unwrap();
        assert_eq!(record.priority, "");
        assert_eq!(record.category, "");
        assert_eq!(record.sub_category, "");
        assert!(record.products.is_empty());
    }

    #[test]
    fn test_placement_map_preserves_order() {
        let json = r#"{
            "z": {"section": 1},
            "a": {"section": 2},
            "m": {"section": 1}
        }"#;
        let map: PlacementMap = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
