//! Neighbor discovery for resize resolution.
//!
//! The shrinking side of a delta may be pinned at its minimum, so it is
//! found with a skip-search over preceding (or following) entries. The
//! growing side gains space and cannot be blocked, so it is always the
//! immediate neighboring entry — which must itself be a pane.

use crate::child::Child;
use crate::registry::ChildRegistry;

/// The pane before the splitter that takes part in the resize, or `None`
/// when no eligible pane exists on that side.
pub(super) fn find_prev_pane(
    registry: &ChildRegistry,
    splitter_order: i32,
    delta: f64,
) -> Option<i32> {
    if delta < 0.0 {
        scan_backward(registry, splitter_order)
    } else {
        immediate_prev(registry, splitter_order)
    }
}

/// The pane after the splitter that takes part in the resize.
pub(super) fn find_next_pane(
    registry: &ChildRegistry,
    splitter_order: i32,
    delta: f64,
) -> Option<i32> {
    if delta > 0.0 {
        scan_forward(registry, splitter_order)
    } else {
        immediate_next(registry, splitter_order)
    }
}

fn immediate_prev(registry: &ChildRegistry, order: i32) -> Option<i32> {
    registry
        .prev_entry(order)
        .and_then(|(k, c)| c.as_pane().map(|_| k))
}

fn immediate_next(registry: &ChildRegistry, order: i32) -> Option<i32> {
    registry
        .next_entry(order)
        .and_then(|(k, c)| c.as_pane().map(|_| k))
}

/// Walk backward from the splitter, skipping splitters and pinned panes,
/// until a pane that can give up space is found.
fn scan_backward(registry: &ChildRegistry, order: i32) -> Option<i32> {
    let mut cursor = order;
    while let Some((k, child)) = registry.prev_entry(cursor) {
        if let Child::Pane(pane) = child {
            if pane.can_shrink() {
                return Some(k);
            }
        }
        cursor = k;
    }
    None
}

fn scan_forward(registry: &ChildRegistry, order: i32) -> Option<i32> {
    let mut cursor = order;
    while let Some((k, child)) = registry.next_entry(cursor) {
        if let Child::Pane(pane) = child {
            if pane.can_shrink() {
                return Some(k);
            }
        }
        cursor = k;
    }
    None
}
