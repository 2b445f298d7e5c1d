//! Demo UI: a toolbar over the page and the bottom sheet.

use bottomsheet_core::SheetConfig;
use bottomsheet_widgets::{BottomSheet, theme};
use egui::{Align, Color32, Layout, RichText};

/// Number of sheet changes kept in the history list.
const HISTORY_LEN: usize = 5;

/// UI state of the demo.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Open flag bound to the sheet.
    pub sheet_open: bool,
    pub sheet_config: SheetConfig,
    /// Most recent changes reported by the sheet, newest first.
    pub history: Vec<String>,
}

impl UiState {
    pub fn new(sheet_config: SheetConfig) -> Self {
        Self {
            sheet_open: false,
            sheet_config,
            history: Vec::new(),
        }
    }

    fn record(&mut self, open: bool) {
        log::info!("Sheet {}", if open { "opened" } else { "closed" });
        self.history
            .insert(0, if open { "Opened" } else { "Closed" }.to_string());
        self.history.truncate(HISTORY_LEN);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(SheetConfig::default())
    }
}

/// Render the demo UI.
pub fn render_ui(ctx: &egui::Context, state: &mut UiState) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new())
        .show(ctx, |ui| {
            toolbar(ui, state);

            let mut reported = Vec::new();
            let response = BottomSheet::new("demo_sheet", &mut state.sheet_open)
                .config(state.sheet_config.clone())
                .on_change(|open| reported.push(open))
                .show(ui, |ui| sheet_contents(ui, &state.history));

            for open in reported {
                state.record(open);
            }
            if response.animating {
                log::trace!("Sheet offset {:.1}", response.layout.sheet.y0);
            }
        });
}

fn toolbar(ui: &mut egui::Ui, state: &mut UiState) {
    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), 64.0),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.add_space(24.0);
            ui.label(
                RichText::new("Bottom sheet demo")
                    .size(18.0)
                    .color(Color32::WHITE),
            );
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.add_space(24.0);
                let label = if state.sheet_open { "Close sheet" } else { "Open sheet" };
                if ui.button(label).clicked() {
                    // Changed outside the sheet; it animates on the next frame
                    state.sheet_open = !state.sheet_open;
                }
            });
        },
    );
}

fn sheet_contents(ui: &mut egui::Ui, history: &[String]) {
    // Selectable text would keep presses from dragging the sheet
    ui.style_mut().interaction.selectable_labels = false;
    ui.label(
        RichText::new("Drag me up or down")
            .size(16.0)
            .color(theme::TEXT),
    );
    ui.label(
        RichText::new("Tap the handle to toggle")
            .size(12.0)
            .color(theme::TEXT_MUTED),
    );
    ui.add_space(12.0);

    if history.is_empty() {
        return;
    }
    ui.label(RichText::new("Recent changes").size(12.0).color(theme::TEXT_MUTED));
    for entry in history {
        ui.label(RichText::new(entry).color(theme::TEXT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded_and_newest_first() {
        let mut state = UiState::default();
        for i in 0..8 {
            state.record(i % 2 == 0);
        }

        assert_eq!(state.history.len(), HISTORY_LEN);
        // Last record was i = 7, a close
        assert_eq!(state.history[0], "Closed");
        assert_eq!(state.history[1], "Opened");
    }

    #[test]
    fn test_render_ui_runs_headless() {
        let ctx = egui::Context::default();
        let mut state = UiState::default();
        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| render_ui(ctx, &mut state));
        }
        assert!(!state.sheet_open);
        assert!(state.history.is_empty());
    }
}
