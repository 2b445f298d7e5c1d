//! Errors of the demo host.

use bottomsheet_core::ConfigError;
use thiserror::Error;

/// Errors that stop the demo.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Renderer error: {0}")]
    Render(#[from] vello::Error),

    #[error("Invalid sheet config: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for the demo host.
pub type AppResult<T> = Result<T, AppError>;
