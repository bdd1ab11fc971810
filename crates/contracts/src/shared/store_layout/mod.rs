//! Store-layout aggregation: buckets the flat placement mapping into the
//! fixed set of store sections and derives per-section display data.

pub mod aggregator;
pub mod racks;

pub use aggregator::{
    summarize, LayoutSummary, SectionPriority, SectionSummary, SECTION_COUNT, UNCATEGORIZED_LABEL,
};
pub use racks::{display_name, split_racks};
