pub mod child;
pub mod commands;
pub mod host;
pub mod layout;
pub mod registry;
pub mod resolver;
pub mod units;

pub use child::{Child, Pane, ResizeHooks, Splitter};
pub use commands::{InputEvent, ResizeKey};
pub use host::fixed::FixedHost;
pub use host::HostSurface;
pub use layout::{LayoutOptions, SplitLayout};
pub use registry::ChildRegistry;
pub use resolver::ResolveOutcome;
