//! Input events delivered by the host.

use serde::{Deserialize, Serialize};

/// Keys recognized by the keyboard resize handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Enter,
}

/// A host input event, dispatched through `SplitLayout::handle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { order: i32 },
    PointerMove { position: f64 },
    PointerUp,
    Key { order: i32, key: ResizeKey },
}
