use crate::domain::a001_placement::PlacementRecord;

/// Split a section's records into the two display racks.
///
/// The left rack takes the first `ceil(n / 2)` records in section order,
/// the right rack the remainder.
pub fn split_racks(
    records: &[(String, PlacementRecord)],
) -> (&[(String, PlacementRecord)], &[(String, PlacementRecord)]) {
    records.split_at(records.len().div_ceil(2))
}

/// Name shown for a record on a rack: the first product's name, or the
/// record id when the record carries no products.
pub fn display_name<'a>(id: &'a str, record: &'a PlacementRecord) -> &'a str {
    record
        .products
        .first()
        .map(|product| product.name.as_str())
        .unwrap_or(id)
}
