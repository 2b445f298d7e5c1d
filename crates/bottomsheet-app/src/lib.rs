//! Bottom sheet demo application
//!
//! A native window that draws a placeholder page with vello and shows the
//! bottom sheet over it with egui.

mod app;
mod error;
mod scene;
mod ui;

pub use app::{App, AppConfig};
pub use error::{AppError, AppResult};
pub use ui::{UiState, render_ui};
