//! Host surface bindings: the rendering/input environment the engine
//! runs inside.

pub mod fixed;

/// Environment contract the layout engine calls out to.
///
/// The container extent is queried fresh on every resolver call — never
/// cached across a drag. Listeners attached on drag start must be released
/// on every exit path, including layout teardown.
pub trait HostSurface {
    /// Container pixel extent along the active axis.
    fn container_extent(&self) -> f64;

    /// Attach global pointer-move/up listeners for a live drag.
    fn attach_drag_listeners(&mut self) {}

    /// Detach the global pointer listeners.
    fn detach_drag_listeners(&mut self) {}

    /// Enable or disable text-selection/cursor overrides during a drag.
    fn set_drag_overrides(&mut self, _active: bool) {}

    /// A splitter's normalized accessibility value changed.
    fn splitter_value_changed(&mut self, _order: i32, _value: f64) {}
}
