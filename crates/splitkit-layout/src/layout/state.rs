//! State surface: derived-flag reads, bulk size writes, render slots, and
//! the accessibility value sync.

use splitkit_common::errors::EngineError;
use splitkit_common::types::Unit;

use crate::child::Child;
use crate::units::to_fr;

use super::SplitLayout;

/// Decimal scaling of the splitter accessibility value (2 decimals).
const VALUE_SCALE: f64 = 100.0;

impl SplitLayout {
    /// Whether the pane at `order` is collapsed. False for unregistered
    /// orders — reads never fail.
    pub fn pane_collapsed(&self, order: i32) -> bool {
        self.registry
            .pane_at(order)
            .is_some_and(|pane| pane.is_collapsed)
    }

    /// Whether the pane at `order` sits at or below its minimum size.
    pub fn pane_at_min_size(&self, order: i32) -> bool {
        self.registry
            .pane_at(order)
            .is_some_and(|pane| pane.is_at_min_size)
    }

    /// Current fraction size of the pane at `order`; `0.0` if unregistered.
    pub fn pane_size(&self, order: i32) -> f64 {
        self.registry
            .pane_at(order)
            .map_or(0.0, |pane| pane.current_size)
    }

    /// Normalized accessibility value of the splitter at `order`; `0.0` if
    /// unregistered.
    pub fn splitter_value(&self, order: i32) -> f64 {
        self.registry
            .splitter_at(order)
            .map_or(0.0, |splitter| splitter.value)
    }

    /// Ordered size slots for the rendering surface: one per child,
    /// fractions for panes and fixed pixels for splitters.
    pub fn slots(&self) -> Vec<(i32, Unit)> {
        self.registry
            .iter()
            .map(|(order, child)| match child {
                Child::Pane(pane) => (order, Unit::Fr(pane.current_size)),
                Child::Splitter(splitter) => (order, Unit::Px(splitter.size)),
            })
            .collect()
    }

    /// Atomic bulk overwrite of pane sizes, applied in ascending order.
    /// Each pane's flags are recomputed against its own thresholds.
    /// Unchanged panes fire no hooks and keep their flags.
    pub fn set_pane_sizes(&mut self, sizes: &[f64]) -> Result<(), EngineError> {
        self.ensure_mounted("set_pane_sizes")?;
        let extent = self.host.container_extent();
        let orders = self.registry.pane_orders();
        let mut changed = Vec::new();
        for (order, &size) in orders.iter().zip(sizes) {
            let Some(pane) = self.registry.pane_at_mut(*order) else {
                continue;
            };
            if pane.current_size == size {
                continue;
            }
            pane.current_size = size;
            let min = to_fr(pane.min_size, extent);
            pane.refresh_flags(min);
            changed.push((*order, size));
        }
        for (order, size) in changed {
            if let Some(pane) = self.registry.pane_at_mut(order) {
                pane.hooks.fire_resize(size);
            }
        }
        self.sync_splitter_values();
        Ok(())
    }

    /// Recompute every splitter's accessibility value from its controlled
    /// (nearest preceding) pane, pushing changes to the host. Runs after
    /// every resolver pass, bulk write, and re-derivation.
    pub(super) fn sync_splitter_values(&mut self) {
        for order in self.registry.splitter_orders() {
            let Some((_, pane)) = self.registry.nearest_pane_before(order) else {
                continue;
            };
            let value = (pane.current_size.clamp(0.0, 1.0) * VALUE_SCALE).round() / VALUE_SCALE;
            let Some(splitter) = self.registry.splitter_at_mut(order) else {
                continue;
            };
            if splitter.value != value {
                splitter.value = value;
                self.host.splitter_value_changed(order, value);
            }
        }
    }
}
