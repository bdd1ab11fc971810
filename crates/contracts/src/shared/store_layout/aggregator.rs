use crate::domain::a001_placement::{PlacementMap, PlacementRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of spatial buckets in the simulated store (4x4 grid).
pub const SECTION_COUNT: usize = 16;

/// Label for a section with no records or no usable sub-category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized Aisle";

/// Aggregated urgency tier of a section. Precedence: high > medium > low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionPriority {
    High,
    Medium,
    Low,
}

impl SectionPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionPriority::High => "high",
            SectionPriority::Medium => "medium",
            SectionPriority::Low => "low",
        }
    }
}

/// Derived view of one store section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    /// Bucket index, 0..16
    pub id: usize,
    /// Most frequent sub-category among the section's records
    pub label: String,
    /// (record id, record) pairs with `section == id`, in input order
    pub records: Vec<(String, PlacementRecord)>,
    /// Sum of `products.len()` over the section's records
    pub total_product_count: usize,
    pub priority: SectionPriority,
}

/// Result of [`summarize`]: always exactly [`SECTION_COUNT`] sections,
/// plus a count of records whose `section` fell outside the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSummary {
    pub sections: Vec<SectionSummary>,
    /// Records silently excluded because `section` is not in 0..16.
    /// Surfaced so the UI can flag upstream data problems.
    pub dropped_records: usize,
}

/// Bucket the placement mapping into [`SECTION_COUNT`] ordered sections.
///
/// Pure and deterministic: recomputed fresh on every call, never fails,
/// never mutates its input. Records with an out-of-range `section` land
/// in no bucket and are only reflected in `dropped_records`.
pub fn summarize(records: &PlacementMap) -> LayoutSummary {
    let sections = (0..SECTION_COUNT)
        .map(|index| {
            let in_section: Vec<(String, PlacementRecord)> = records
                .iter()
                .filter(|(_, value)| value.section == index as i64)
                .map(|(id, value)| (id.clone(), value.clone()))
                .collect();

            let total_product_count = in_section
                .iter()
                .map(|(_, value)| value.products.len())
                .sum();

            SectionSummary {
                id: index,
                label: aisle_label(&in_section),
                total_product_count,
                priority: section_priority(&in_section),
                records: in_section,
            }
        })
        .collect();

    let dropped_records = records
        .values()
        .filter(|value| value.section < 0 || value.section >= SECTION_COUNT as i64)
        .count();

    LayoutSummary {
        sections,
        dropped_records,
    }
}

/// Most common sub-category among the section's records.
///
/// The running best is replaced only on a strict count increase, so the
/// first value to reach the maximum count wins ties. An empty section,
/// or a winner that is the empty string, yields [`UNCATEGORIZED_LABEL`].
fn aisle_label(in_section: &[(String, PlacementRecord)]) -> String {
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut max_count = 0;
    let mut most_common = "";

    for (_, value) in in_section {
        let name = value.sub_category.as_str();
        let count = frequency.entry(name).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            most_common = name;
        }
    }

    if most_common.is_empty() {
        UNCATEGORIZED_LABEL.to_string()
    } else {
        most_common.to_string()
    }
}

fn section_priority(in_section: &[(String, PlacementRecord)]) -> SectionPriority {
    if in_section.iter().any(|(_, value)| value.priority == "high") {
        SectionPriority::High
    } else if in_section.iter().any(|(_, value)| value.priority == "medium") {
        SectionPriority::Medium
    } else {
        SectionPriority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_placement::ProductRef;

    fn record(section: i64, priority: &str, sub_category: &str, products: usize) -> PlacementRecord {
        PlacementRecord {
            section,
            priority: priority.to_string(),
            category: String::new(),
            sub_category: sub_category.to_string(),
            products: (0..products)
                .map(|i| ProductRef {
                    name: format!("product-{}", i),
                    id: format!("id-{}", i),
                })
                .collect(),
        }
    }

    fn map(entries: Vec<(&str, PlacementRecord)>) -> PlacementMap {
        entries
            .into_iter()
            .map(|(id, value)| (id.to_string(), value))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_16_empty_sections() {
        let summary = summarize(&PlacementMap::new());
        assert_eq!(summary.sections.len(), SECTION_COUNT);
        assert_eq!(summary.dropped_records, 0);
        for (i, section) in summary.sections.iter().enumerate() {
            assert_eq!(section.id, i);
            assert!(section.records.is_empty());
            assert_eq!(section.total_product_count, 0);
            assert_eq!(section.label, UNCATEGORIZED_LABEL);
            assert_eq!(section.priority, SectionPriority::Low);
        }
    }

    #[test]
    fn test_single_record_populates_its_section_only() {
        let input = map(vec![("p1", record(0, "high", "Snacks", 1))]);
        let summary = summarize(&input);

        let first = &summary.sections[0];
        assert_eq!(first.label, "Snacks");
        assert_eq!(first.total_product_count, 1);
        assert_eq!(first.priority, SectionPriority::High);
        assert_eq!(first.records.len(), 1);
        assert_eq!(first.records[0].0, "p1");

        for section in &summary.sections[1..] {
            assert!(section.records.is_empty());
            assert_eq!(section.label, UNCATEGORIZED_LABEL);
            assert_eq!(section.priority, SectionPriority::Low);
        }
    }

    #[test]
    fn test_each_record_lands_in_exactly_one_section() {
        let input = map(vec![
            ("a", record(0, "low", "A", 0)),
            ("b", record(5, "low", "B", 2)),
            ("c", record(15, "low", "C", 1)),
            ("d", record(5, "low", "B", 3)),
        ]);
        let summary = summarize(&input);

        let placed: usize = summary.sections.iter().map(|s| s.records.len()).sum();
        assert_eq!(placed, 4);
        assert_eq!(summary.sections[5].records.len(), 2);
        assert_eq!(summary.sections[5].records[0].0, "b");
        assert_eq!(summary.sections[5].records[1].0, "d");
        assert_eq!(summary.sections[5].total_product_count, 5);
    }

    #[test]
    fn test_priority_escalates_to_medium() {
        let input = map(vec![
            ("a", record(2, "low", "Dairy", 0)),
            ("b", record(2, "medium", "Dairy", 0)),
        ]);
        let summary = summarize(&input);
        assert_eq!(summary.sections[2].label, "Dairy");
        assert_eq!(summary.sections[2].priority, SectionPriority::Medium);
    }

    #[test]
    fn test_label_tie_break_keeps_first_seen() {
        let input = map(vec![
            ("a", record(3, "low", "A", 0)),
            ("b", record(3, "low", "B", 0)),
        ]);
        let summary = summarize(&input);
        assert_eq!(summary.sections[3].label, "A");
    }

    #[test]
    fn test_label_strict_majority_beats_earlier_value() {
        let input = map(vec![
            ("a", record(4, "low", "A", 0)),
            ("b", record(4, "low", "B", 0)),
            ("c", record(4, "low", "B", 0)),
        ]);
        let summary = summarize(&input);
        assert_eq!(summary.sections[4].label, "B");
    }

    #[test]
    fn test_out_of_range_section_is_dropped_and_counted() {
        let input = map(vec![
            ("a", record(20, "high", "Ghost", 4)),
            ("b", record(-1, "high", "Ghost", 4)),
            ("c", record(1, "low", "Real", 1)),
        ]);
        let summary = summarize(&input);

        let placed: usize = summary.sections.iter().map(|s| s.records.len()).sum();
        assert_eq!(placed, 1);
        assert_eq!(summary.dropped_records, 2);
        // Dropped records contribute nothing, anywhere
        assert!(summary
            .sections
            .iter()
            .all(|s| s.priority != SectionPriority::High));
    }

    #[test]
    fn test_absent_optional_fields_are_inert() {
        // Decoded from a body with only `section`: defaults apply
        let bare: PlacementRecord = serde_json::from_str(r#"{"section": 6}"#).unwrap();
        let input = map(vec![("bare", bare)]);
        let summary = summarize(&input);

        let section = &summary.sections[6];
        assert_eq!(section.total_product_count, 0);
        assert_eq!(section.priority, SectionPriority::Low);
        assert_eq!(section.label, UNCATEGORIZED_LABEL);
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let input = map(vec![
            ("a", record(0, "high", "Snacks", 2)),
            ("b", record(9, "medium", "Paper", 1)),
            ("c", record(22, "low", "Ghost", 1)),
        ]);
        assert_eq!(summarize(&input), summarize(&input));
    }

    #[test]
    fn test_sections_ordered_by_ascending_id() {
        let input = map(vec![
            ("a", record(15, "low", "Z", 0)),
            ("b", record(0, "low", "A", 0)),
        ]);
        let summary = summarize(&input);
        let ids: Vec<usize> = summary.sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, (0..SECTION_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SectionPriority::High).unwrap(),
            "\"high\""
        );
        assert_eq!(SectionPriority::Medium.as_str(), "medium");
    }
}
