//! Pointer and keyboard interaction: the drag session state machine.
//!
//! Idle -> Dragging on pointer-down, back to Idle on pointer-up. Key
//! presses are stateless and independent of any drag session.

use splitkit_common::errors::EngineError;

use crate::commands::{InputEvent, ResizeKey};
use crate::resolver;

use super::{DragSession, SplitLayout};

/// Restore size used by Enter when the pinned pane has no initial size, in fr.
const DEFAULT_RESTORE_SIZE: f64 = 1.0;
/// Delta that drives a pane across the full available space.
const FULL_SPAN: f64 = 1.0;

impl SplitLayout {
    /// Dispatch a host input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), EngineError> {
        match event {
            InputEvent::PointerDown { order } => self.pointer_down(order),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Key { order, key } => self.key_press(order, key),
        }
    }

    /// Begin a drag session on the splitter at `order`.
    ///
    /// A second pointer-down while already dragging is not reachable under
    /// correct listener hygiene and is ignored. An order that is not a
    /// registered splitter is tolerated as a no-op.
    pub fn pointer_down(&mut self, order: i32) -> Result<(), EngineError> {
        self.ensure_mounted("pointer_down")?;
        if self.drag.is_some() {
            return Ok(());
        }
        match self.registry.splitter_at_mut(order) {
            Some(splitter) => splitter.is_active = true,
            None => return Ok(()),
        }
        self.drag = Some(DragSession {
            splitter_order: order,
            last_position: None,
        });
        self.host.attach_drag_listeners();
        self.host.set_drag_overrides(true);
        tracing::debug!(order, "drag session started");
        self.fire_adjacent(order, false);
        Ok(())
    }

    /// Feed a pointer position along the active axis into a live drag.
    /// The first move after pointer-down seeds the reference position and
    /// applies no delta.
    pub fn pointer_move(&mut self, position: f64) -> Result<(), EngineError> {
        self.ensure_mounted("pointer_move")?;
        let Some(session) = self.drag.as_mut() else {
            return Ok(());
        };
        let order = session.splitter_order;
        let movement = match session.last_position {
            Some(last) => position - last,
            None => {
                session.last_position = Some(position);
                return Ok(());
            }
        };
        session.last_position = Some(position);

        let extent = self.host.container_extent();
        let available = self.available_space(extent);
        if available <= 0.0 {
            return Ok(());
        }
        let delta = movement / available;
        if delta == 0.0 {
            return Ok(());
        }
        self.apply_resolve(order, delta);
        Ok(())
    }

    /// End the live drag session, if any.
    pub fn pointer_up(&mut self) -> Result<(), EngineError> {
        self.ensure_mounted("pointer_up")?;
        let Some(session) = self.drag.take() else {
            return Ok(());
        };
        let order = session.splitter_order;
        if let Some(splitter) = self.registry.splitter_at_mut(order) {
            splitter.is_active = false;
        }
        self.host.detach_drag_listeners();
        self.host.set_drag_overrides(false);
        tracing::debug!(order, "drag session ended");
        self.fire_adjacent(order, true);
        Ok(())
    }

    /// Apply a discrete keyboard resize step at the splitter.
    pub fn key_press(&mut self, order: i32, key: ResizeKey) -> Result<(), EngineError> {
        self.ensure_mounted("key_press")?;
        let delta = match key {
            ResizeKey::ArrowLeft | ResizeKey::ArrowUp => -self.options.key_step,
            ResizeKey::ArrowRight | ResizeKey::ArrowDown => self.options.key_step,
            ResizeKey::Home => -FULL_SPAN,
            ResizeKey::End => FULL_SPAN,
            ResizeKey::Enter => self.enter_delta(order),
        };
        self.apply_resolve(order, delta);
        Ok(())
    }

    /// Enter toggles: restore a pinned/collapsed prev pane to its initial
    /// size, otherwise drive it all the way down.
    fn enter_delta(&self, order: i32) -> f64 {
        match self.registry.nearest_pane_before(order) {
            Some((_, pane)) if pane.is_at_min_size || pane.is_collapsed => {
                pane.initial_size.unwrap_or(DEFAULT_RESTORE_SIZE)
            }
            _ => -FULL_SPAN,
        }
    }

    /// Release a live drag session without firing end hooks. Used on
    /// teardown, where the owning layout may already be gone.
    pub(super) fn release_drag(&mut self) {
        let Some(session) = self.drag.take() else {
            return;
        };
        if let Some(splitter) = self.registry.splitter_at_mut(session.splitter_order) {
            splitter.is_active = false;
        }
        self.host.detach_drag_listeners();
        self.host.set_drag_overrides(false);
        tracing::debug!(order = session.splitter_order, "drag session released");
    }

    /// Resolve, then notify: during-resize hooks for both panes plus the
    /// accessibility value sync.
    pub(super) fn apply_resolve(&mut self, order: i32, delta: f64) {
        let extent = self.host.container_extent();
        if extent <= 0.0 {
            return;
        }
        let Some(outcome) = resolver::resolve(&mut self.registry, order, delta, extent) else {
            return;
        };
        self.fire_resize(outcome.prev_order, outcome.prev_size);
        self.fire_resize(outcome.next_order, outcome.next_size);
        self.sync_splitter_values();
    }

    fn fire_resize(&mut self, order: i32, size: f64) {
        if let Some(pane) = self.registry.pane_at_mut(order) {
            pane.hooks.fire_resize(size);
        }
    }

    /// Fire start or end hooks on the panes adjacent to a splitter, with
    /// their current sizes.
    fn fire_adjacent(&mut self, splitter_order: i32, end: bool) {
        let targets = [
            self.registry
                .nearest_pane_before(splitter_order)
                .map(|(order, _)| order),
            self.registry
                .nearest_pane_after(splitter_order)
                .map(|(order, _)| order),
        ];
        for order in targets.into_iter().flatten() {
            if let Some(pane) = self.registry.pane_at_mut(order) {
                let size = pane.current_size;
                if end {
                    pane.hooks.fire_end(size);
                } else {
                    pane.hooks.fire_start(size);
                }
            }
        }
    }
}
