//! Nearest-item lookup on the slider axis.

use super::catalog::{Catalog, SelectableItem};

/// Index of the item whose position is closest to `value`.
///
/// Scans in catalog order and only replaces the current best on a strictly
/// smaller distance, so on a tie the earlier item wins. Callers clamp
/// `value` onto the axis first.
pub fn resolve_index(catalog: &Catalog, value: f64) -> usize {
    catalog
        .items()
        .iter()
        .enumerate()
        .fold((0, f64::INFINITY), |(best, best_distance), (index, item)| {
            let distance = item.distance_to(value);
            if distance < best_distance {
                (index, distance)
            } else {
                (best, best_distance)
            }
        })
        .0
}

/// Return the item whose position is closest to `value`.
pub fn resolve(catalog: &Catalog, value: f64) -> &SelectableItem {
    &catalog.items()[resolve_index(catalog, value)]
}

/// The item lying within `threshold` of `value`, if any.
///
/// Used both for live snapping while dragging and for label highlighting.
pub fn item_within(catalog: &Catalog, value: f64, threshold: f64) -> Option<&SelectableItem> {
    let nearest = resolve(catalog, value);
    (nearest.distance_to(value) < threshold).then_some(nearest)
}
