//! Bottom Sheet Core Library
//!
//! Platform-agnostic configuration, gesture handling, snapping and
//! animation for a draggable bottom sheet.

pub mod animation;
pub mod config;
pub mod input;
pub mod layout;
pub mod sheet;
pub mod snap;

pub use animation::{SpringConfig, SpringTransition};
pub use config::{ConfigError, ConfigResult, SheetColor, SheetConfig};
pub use input::{DRAG_MIN_DISTANCE, DragTracker, MouseButton, PointerEvent};
pub use layout::SheetLayout;
pub use sheet::{ChangeCause, SheetChange, SheetController, SheetPosition};
pub use snap::{SnapDecision, clamp_offset};
