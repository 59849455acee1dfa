//! Child descriptors: resizable panes and fixed-size splitters.

use std::fmt;

use splitkit_common::types::Unit;

/// Fire-and-forget resize notification hooks for a pane.
///
/// Invoked synchronously after each resolver pass; the engine never waits
/// on or inspects their result.
#[derive(Default)]
pub struct ResizeHooks {
    pub on_resize_start: Option<Box<dyn FnMut(f64)>>,
    pub on_resize: Option<Box<dyn FnMut(f64)>>,
    pub on_resize_end: Option<Box<dyn FnMut(f64)>>,
}

impl ResizeHooks {
    pub(crate) fn fire_start(&mut self, size: f64) {
        if let Some(hook) = self.on_resize_start.as_mut() {
            hook(size);
        }
    }

    pub(crate) fn fire_resize(&mut self, size: f64) {
        if let Some(hook) = self.on_resize.as_mut() {
            hook(size);
        }
    }

    pub(crate) fn fire_end(&mut self, size: f64) {
        if let Some(hook) = self.on_resize_end.as_mut() {
            hook(size);
        }
    }
}

impl fmt::Debug for ResizeHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeHooks")
            .field("on_resize_start", &self.on_resize_start.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .field("on_resize_end", &self.on_resize_end.is_some())
            .finish()
    }
}

/// A resizable content region.
///
/// `is_at_min_size` and `is_collapsed` are derived from `current_size` and
/// the pane's thresholds; they are never set independently of size.
#[derive(Debug)]
pub struct Pane {
    /// Current size as a fraction of the container extent.
    pub current_size: f64,
    /// Smallest size the pane may take while expanded.
    pub min_size: Unit,
    /// Whether the pane snaps to `collapsed_size` past half its minimum.
    pub collapsible: bool,
    /// Size the pane takes when collapsed. Meaningful only if collapsible.
    pub collapsed_size: Unit,
    /// Preferred size applied on (re-)derivation, in fr.
    pub initial_size: Option<f64>,
    /// Derived: current size is at or below the minimum.
    pub is_at_min_size: bool,
    /// Derived: the pane has been driven past its collapse threshold.
    pub is_collapsed: bool,
    /// Resize notification hooks.
    pub hooks: ResizeHooks,
}

impl Pane {
    /// A non-collapsible pane with the given minimum size.
    pub fn new(min_size: Unit) -> Self {
        Self {
            current_size: 0.0,
            min_size,
            collapsible: false,
            collapsed_size: Unit::Fr(0.0),
            initial_size: None,
            is_at_min_size: false,
            is_collapsed: false,
            hooks: ResizeHooks::default(),
        }
    }

    /// A collapsible pane that snaps to `collapsed_size` past half its minimum.
    pub fn collapsible(min_size: Unit, collapsed_size: Unit) -> Self {
        Self {
            collapsible: true,
            collapsed_size,
            ..Self::new(min_size)
        }
    }

    /// Set the preferred size applied on (re-)derivation, in fr.
    pub fn with_initial_size(mut self, fr: f64) -> Self {
        self.initial_size = Some(fr);
        self
    }

    /// Recompute the derived flags from the current size, with the minimum
    /// already normalized to a fraction.
    pub(crate) fn refresh_flags(&mut self, min_fr: f64) {
        self.is_at_min_size = self.current_size <= min_fr;
        self.is_collapsed = self.collapsible && self.current_size <= min_fr / 2.0;
    }

    /// Whether this pane can give up more space. A pinned pane is skipped
    /// by the resolver's neighbor search.
    pub(crate) fn can_shrink(&self) -> bool {
        if !self.is_at_min_size {
            return true;
        }
        self.collapsible && !self.is_collapsed
    }
}

/// A fixed-size draggable/keyboard-operable handle between panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    /// Fixed size in pixels.
    pub size: f64,
    /// True only while a drag session is live on this splitter.
    pub is_active: bool,
    /// Accessibility value: the controlled pane's fraction size in [0, 1],
    /// rounded to 2 decimals. Kept in lock-step with every resolver call.
    pub value: f64,
}

impl Splitter {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            is_active: false,
            value: 0.0,
        }
    }
}

/// A registered layout child.
#[derive(Debug)]
pub enum Child {
    Pane(Pane),
    Splitter(Splitter),
}

impl Child {
    pub fn is_pane(&self) -> bool {
        matches!(self, Child::Pane(_))
    }

    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            Child::Pane(pane) => Some(pane),
            Child::Splitter(_) => None,
        }
    }

    pub fn as_pane_mut(&mut self) -> Option<&mut Pane> {
        match self {
            Child::Pane(pane) => Some(pane),
            Child::Splitter(_) => None,
        }
    }

    pub fn as_splitter(&self) -> Option<&Splitter> {
        match self {
            Child::Splitter(splitter) => Some(splitter),
            Child::Pane(_) => None,
        }
    }

    pub fn as_splitter_mut(&mut self) -> Option<&mut Splitter> {
        match self {
            Child::Splitter(splitter) => Some(splitter),
            Child::Pane(_) => None,
        }
    }
}
