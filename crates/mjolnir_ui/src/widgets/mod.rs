// Widget implementations

mod config;
mod drag;
mod region;
mod scrollbar;

pub use config::ScrollBarConfig;
pub use drag::{DragMove, DragSession};
pub use region::{Region, RegionKind, Visibility};
pub use scrollbar::{Extremity, Interaction, ScrollBar};
