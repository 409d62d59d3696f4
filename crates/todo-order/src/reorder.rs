//! Reorder Helpers
//!
//! Single-element moves for drag-and-drop.

/// Move the element at `source` to `destination`.
///
/// `destination` indexes the list after removal. `None` means the drag was
/// cancelled and the list comes back unchanged, as does an out-of-range
/// `source`. A destination past the end lands at the end.
pub fn reorder<T>(mut items: Vec<T>, source: usize, destination: Option<usize>) -> Vec<T> {
    let Some(destination) = destination else {
        return items;
    };
    if source >= items.len() {
        return items;
    }
    let moved = items.remove(source);
    let destination = destination.min(items.len());
    items.insert(destination, moved);
    items
}

/// Translate a drop slot (gap `0..=len` before each row, plus the tail)
/// into a `reorder` destination for an element dragged from `source`.
pub fn slot_destination(source: usize, slot: usize) -> usize {
    if slot > source {
        slot - 1
    } else {
        slot
    }
}
