//! Fixed-extent host implementation.
//!
//! Used by headless hosts that manage their own listeners, and by tests.

use super::HostSurface;

/// A host with a constant container extent and no listener plumbing.
#[derive(Debug, Clone, Copy)]
pub struct FixedHost {
    pub extent: f64,
}

impl FixedHost {
    pub fn new(extent: f64) -> Self {
        Self { extent }
    }
}

impl HostSurface for FixedHost {
    fn container_extent(&self) -> f64 {
        self.extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_extent() {
        let host = FixedHost::new(800.0);
        assert_eq!(host.container_extent(), 800.0);
    }

    #[test]
    fn listener_hooks_are_noops() {
        let mut host = FixedHost::new(800.0);
        host.attach_drag_listeners();
        host.detach_drag_listeners();
        host.set_drag_overrides(true);
        host.splitter_value_changed(1, 0.5);
    }
}
