//! egui rendering of the bottom sheet.
//!
//! - **Sheet**: the [`BottomSheet`] widget, feeding egui input to a
//!   [`bottomsheet_core::SheetController`] and painting the result
//! - **Convert**: conversions between egui and kurbo/peniko types

pub mod convert;
pub mod sheet;

pub use convert::{pointer_event, pointer_events, to_color32, to_egui_rect, to_kurbo_rect};
pub use sheet::{BottomSheet, SheetResponse};

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;
    use egui::epaint::Shadow;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Page background behind the sheet
    pub const PAGE_BG: Color32 = Color32::from_rgb(241, 245, 249);
    /// Shadow cast upwards by the sheet
    pub const SHEET_SHADOW: Shadow = Shadow {
        spread: 0,
        blur: 16,
        offset: [0, -2],
        color: Color32::from_black_alpha(25),
    };
}
