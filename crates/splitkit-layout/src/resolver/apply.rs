//! Delta application: clamp and collapse arithmetic across two panes.

use crate::registry::ChildRegistry;
use crate::units::to_fr;

use super::neighbors;

/// Sizes persisted for the two panes adjacent to a resolved delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOutcome {
    pub prev_order: i32,
    pub prev_size: f64,
    pub next_order: i32,
    pub next_size: f64,
}

/// Per-pane inputs to the clamp arithmetic, with units already normalized.
#[derive(Debug, Clone, Copy)]
struct Side {
    order: i32,
    current: f64,
    min: f64,
    collapsible: bool,
    collapsed: f64,
}

impl Side {
    fn read(registry: &ChildRegistry, order: i32, extent: f64) -> Option<Self> {
        let pane = registry.pane_at(order)?;
        Some(Self {
            order,
            current: pane.current_size,
            min: to_fr(pane.min_size, extent),
            collapsible: pane.collapsible,
            collapsed: to_fr(pane.collapsed_size, extent),
        })
    }
}

/// Apply `delta` (a signed fraction of available space) across the panes
/// adjacent to the splitter at `splitter_order`, against container extent
/// `extent`.
///
/// Positive delta grows the preceding pane at the expense of the following
/// pane (`prev += delta`, `next -= delta`). Returns `None` when either side
/// has no eligible pane — a tolerated no-op, not an error.
pub fn resolve(
    registry: &mut ChildRegistry,
    splitter_order: i32,
    delta: f64,
    extent: f64,
) -> Option<ResolveOutcome> {
    let prev_order = neighbors::find_prev_pane(registry, splitter_order, delta)?;
    let next_order = neighbors::find_next_pane(registry, splitter_order, delta)?;

    let prev = Side::read(registry, prev_order, extent)?;
    let next = Side::read(registry, next_order, extent)?;

    let mut prev_size = prev.current + delta;
    let mut next_size = next.current - delta;

    // Threshold decisions are made on the tentative sizes, before any
    // transfer. Crossing half the minimum collapses; touching the minimum
    // pins.
    let prev_collapsing = prev.collapsible && prev_size <= prev.min / 2.0;
    let next_collapsing = next.collapsible && next_size <= next.min / 2.0;
    let prev_pinned = prev_size <= prev.min;
    let next_pinned = next_size <= next.min;

    if prev_collapsing || next_collapsing {
        // Collapse resolution runs in fixed prev-then-next order; when both
        // sides collapse in one call the first transfer feeds the second.
        if prev_collapsing {
            next_size += prev_size - prev.collapsed;
            prev_size = prev.collapsed;
            tracing::debug!(order = prev.order, size = prev_size, "pane collapsed");
        }
        if next_collapsing {
            prev_size += next_size - next.collapsed;
            next_size = next.collapsed;
            tracing::debug!(order = next.order, size = next_size, "pane collapsed");
        }
    } else {
        // Same fixed order for plain min clamping: the pinned side snaps to
        // its minimum and the remainder moves to the other side.
        if prev_pinned {
            next_size += prev_size - prev.min;
            prev_size = prev.min;
        }
        if next_pinned {
            prev_size += next_size - next.min;
            next_size = next.min;
        }
    }

    persist(registry, prev_order, prev_size, prev.min);
    persist(registry, next_order, next_size, next.min);

    Some(ResolveOutcome {
        prev_order,
        prev_size,
        next_order,
        next_size,
    })
}

fn persist(registry: &mut ChildRegistry, order: i32, size: f64, min_fr: f64) {
    if let Some(pane) = registry.pane_at_mut(order) {
        pane.current_size = size;
        pane.refresh_flags(min_fr);
    }
}
