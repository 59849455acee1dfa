//! Child registration, teardown, and the size re-derivation pass.

use crate::child::{Child, Pane, Splitter};
use crate::units::to_fr;

use super::SplitLayout;

impl SplitLayout {
    /// Register a pane at `order`. Registration happens once per mount;
    /// repeat registration of the same order is a no-op. Any change to the
    /// registered set re-derives every pane's size.
    pub fn register_pane(&mut self, order: i32, pane: Pane) -> bool {
        if !self.registry.register(order, Child::Pane(pane)) {
            return false;
        }
        self.rederive();
        true
    }

    /// Register a splitter at `order`. Same idempotence rule as panes.
    pub fn register_splitter(&mut self, order: i32, splitter: Splitter) -> bool {
        if !self.registry.register(order, Child::Splitter(splitter)) {
            return false;
        }
        self.rederive();
        true
    }

    /// Remove the child at `order` on unmount.
    pub fn unregister(&mut self, order: i32) -> bool {
        if !self.registry.unregister(order) {
            return false;
        }
        self.rederive();
        true
    }

    /// Tear down the layout. Unconditionally releases a live drag session —
    /// the host's listeners come down on every exit path — and clears the
    /// registry.
    pub fn unmount(&mut self) {
        self.release_drag();
        self.registry.clear();
        tracing::debug!("layout unmounted");
    }

    /// Reset every pane to its initial size or an equal division of
    /// available space, keeping already-collapsed panes at their collapsed
    /// size, then refresh flags and accessibility values.
    pub(super) fn rederive(&mut self) {
        let extent = self.host.container_extent();
        let panes = self.registry.pane_orders();
        if panes.is_empty() {
            return;
        }
        let share = 1.0 / panes.len() as f64;
        tracing::debug!(panes = panes.len(), share, "re-deriving pane sizes");
        for order in panes {
            let Some(pane) = self.registry.pane_at_mut(order) else {
                continue;
            };
            pane.current_size = if pane.is_collapsed {
                to_fr(pane.collapsed_size, extent)
            } else {
                pane.initial_size.unwrap_or(share)
            };
            let min = to_fr(pane.min_size, extent);
            pane.refresh_flags(min);
        }
        self.sync_splitter_values();
    }
}
