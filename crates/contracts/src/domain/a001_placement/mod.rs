pub mod record;

pub use record::{LayoutRecommendation, PlacementMap, PlacementRecord, ProductRef};
