//! Core types and constructors for SplitLayout.

use splitkit_common::errors::EngineError;

use crate::host::HostSurface;
use crate::registry::ChildRegistry;

/// Tunable engine options.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Fraction of available space moved per arrow-key press.
    pub key_step: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { key_step: 0.01 }
    }
}

/// The transient drag session. At most one exists at a time and it is
/// exclusively owned by the layout — never process-wide state.
#[derive(Debug, Clone, Copy)]
pub(super) struct DragSession {
    pub(super) splitter_order: i32,
    /// Last pointer position along the active axis. `None` until the first
    /// move seeds the reference point.
    pub(super) last_position: Option<f64>,
}

/// Owns the child registry, the transient drag session, and the host
/// binding. All engine operations run synchronously on the caller's thread
/// in host-delivery order.
pub struct SplitLayout {
    pub(super) registry: ChildRegistry,
    pub(super) drag: Option<DragSession>,
    pub(super) host: Box<dyn HostSurface>,
    pub(super) options: LayoutOptions,
}

impl SplitLayout {
    pub fn new(host: Box<dyn HostSurface>) -> Self {
        Self {
            registry: ChildRegistry::new(),
            drag: None,
            host,
            options: LayoutOptions::default(),
        }
    }

    pub fn with_options(host: Box<dyn HostSurface>, options: LayoutOptions) -> Self {
        let mut layout = Self::new(host);
        layout.options = options;
        layout
    }

    // -- Accessors --

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn pane_count(&self) -> usize {
        self.registry.pane_count()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Order of the splitter with a live drag session, if any.
    pub fn active_splitter(&self) -> Option<i32> {
        self.drag.as_ref().map(|session| session.splitter_order)
    }

    pub fn registry(&self) -> &ChildRegistry {
        &self.registry
    }

    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Setup contract: controller and state-surface mutations require an
    /// active, registered layout. Programmer error, never retried.
    pub(super) fn ensure_mounted(&self, op: &'static str) -> Result<(), EngineError> {
        if self.registry.pane_count() == 0 {
            return Err(EngineError::NotMounted(op));
        }
        Ok(())
    }

    /// Container extent minus the combined fixed size of all splitters.
    pub(super) fn available_space(&self, extent: f64) -> f64 {
        extent - self.registry.splitter_px_total()
    }
}
