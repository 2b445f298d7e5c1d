//! The bottom sheet state machine.
//!
//! A sheet has two logical states, open and closed, and a continuous
//! offset that follows them:
//! - a drag moves the offset with the pointer, clamped to the sheet range
//! - releasing past the snap threshold commits a new state
//! - every state change springs the offset to the matching resting position
//!
//! The controller is toolkit-agnostic. Rendering adapters translate their
//! input into [`crate::input::PointerEvent`]s and draw [`crate::layout::SheetLayout`].

mod controller;
mod state;

pub use controller::SheetController;
pub use state::{ChangeCause, SheetChange, SheetPosition};
