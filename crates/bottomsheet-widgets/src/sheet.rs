//! The bottom sheet widget.

use std::hash::Hash;
use std::time::Duration;

use bottomsheet_core::{PointerEvent, SheetChange, SheetConfig, SheetController, SheetLayout};
use egui::{CursorIcon, Id, Order, Response, Sense, Ui, UiBuilder};

use crate::convert::{pointer_events, to_color32, to_corner_radius, to_egui_rect, to_kurbo_rect};
use crate::theme;

/// Longest frame time fed to the transition.
const MAX_FRAME_SECS: f32 = 0.1;

/// Result of showing a [`BottomSheet`].
pub struct SheetResponse<R> {
    /// Value returned by the content closure.
    pub inner: R,
    /// Changes the sheet made to the open flag this frame, in order.
    pub changes: Vec<SheetChange>,
    /// Layout the sheet was painted with.
    pub layout: SheetLayout,
    /// Whether the sheet is still moving and needs more frames.
    pub animating: bool,
    /// Response of the sheet's background.
    pub response: Response,
}

/// A panel anchored to the bottom of the surrounding ui that the user
/// drags up to open and down to close.
///
/// The open flag stays with the caller:
///
/// ```ignore
/// BottomSheet::new("details", &mut self.details_open)
///     .on_change(|open| log::info!("details open: {}", open))
///     .show(ui, |ui| ui.label("Hello"));
/// ```
///
/// Presses on interactive content (sliders, scroll areas, text fields)
/// stay with that content and never move the sheet.
pub struct BottomSheet<'a> {
    id: Id,
    open: &'a mut bool,
    config: SheetConfig,
    shadow: bool,
    on_change: Option<Box<dyn FnMut(bool) + 'a>>,
}

impl<'a> BottomSheet<'a> {
    /// Create a sheet bound to `open`. The id must be unique per sheet.
    pub fn new(id_salt: impl Hash, open: &'a mut bool) -> Self {
        Self {
            id: Id::new(id_salt),
            open,
            config: SheetConfig::default(),
            shadow: true,
            on_change: None,
        }
    }

    /// Set the sheet config.
    pub fn config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Draw a drop shadow above the sheet.
    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Call `f` with the new value whenever the sheet changes the open flag.
    pub fn on_change(mut self, f: impl FnMut(bool) + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Process this frame's input and paint the sheet over `ui`'s
    /// available rect, with `add_contents` below the indicator.
    pub fn show<R>(
        mut self,
        ui: &mut Ui,
        add_contents: impl FnOnce(&mut Ui) -> R,
    ) -> SheetResponse<R> {
        let ctx = ui.ctx().clone();
        let state_id = self.id.with("controller");
        let background_id = self.id.with("background");
        let indicator_id = self.id.with("indicator");
        let container = ui.max_rect();

        let mut controller = ctx
            .data_mut(|d| d.get_temp::<SheetController>(state_id))
            .unwrap_or_else(|| {
                log::debug!("Creating sheet controller for {:?}", self.id);
                SheetController::new(self.config.clone(), *self.open)
            });
        controller.set_config(self.config);
        controller.set_container(to_kurbo_rect(container));

        // egui hit-tests this frame's press against last frame's widgets.
        // Content widgets sit above the background, so a press on one of
        // them leaves both sheet responses untouched.
        let owns_press = [background_id, indicator_id].into_iter().any(|id| {
            ctx.read_response(id).is_some_and(|response| {
                response.hovered() || response.is_pointer_button_down_on() || response.clicked()
            })
        });

        let mut changes = Vec::new();
        for event in ui.input(|i| pointer_events(&i.events)) {
            if !owns_press && matches!(event, PointerEvent::Down { .. }) {
                continue;
            }
            if let Some(change) = controller.handle_pointer_event(event, self.open) {
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(change.is_open());
                }
                changes.push(change);
            }
        }

        // max() also maps NaN to zero
        let dt = ui.input(|i| i.stable_dt).max(0.0).min(MAX_FRAME_SECS);
        let animating = controller.step(Duration::from_secs_f32(dt), *self.open);
        if animating {
            ctx.request_repaint();
        }

        let layout = controller.layout();
        let dragging = controller.is_dragging();
        let config = controller.config().clone();
        ctx.data_mut(|d| d.insert_temp(state_id, controller));

        let sheet_rect = to_egui_rect(layout.sheet);
        let indicator_rect = to_egui_rect(layout.indicator);
        let content_rect = to_egui_rect(layout.content);
        let clip_rect = container.intersect(ui.clip_rect());
        let radius = to_corner_radius(config.corner_radius());

        let area = egui::Area::new(self.id.with("area"))
            .fixed_pos(sheet_rect.min)
            .order(Order::Foreground)
            .constrain(false)
            .show(&ctx, |ui| {
                ui.set_clip_rect(clip_rect);
                // Covers the sheet so widgets below never get its presses
                ui.expand_to_include_rect(sheet_rect);

                // Registered before the content, which wins the hit test
                let background = ui.interact(sheet_rect, background_id, Sense::drag());
                let handle = ui.interact(indicator_rect, indicator_id, Sense::click());

                let painter = ui.painter();
                if self.shadow {
                    painter.add(theme::SHEET_SHADOW.as_shape(sheet_rect, radius));
                }
                painter.rect_filled(
                    sheet_rect,
                    radius,
                    to_color32(config.indicator_background_color()),
                );
                painter.rect_filled(indicator_rect, radius, to_color32(config.indicator_color()));

                if dragging {
                    ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
                } else {
                    handle.on_hover_cursor(CursorIcon::Grab);
                }

                let mut content_ui = ui.new_child(
                    UiBuilder::new()
                        .id_salt("content")
                        .max_rect(content_rect)
                        .layout(egui::Layout::top_down(egui::Align::Center)),
                );
                content_ui.set_clip_rect(content_rect.intersect(clip_rect));
                (add_contents(&mut content_ui), background)
            });
        let (inner, response) = area.inner;

        SheetResponse {
            inner,
            changes,
            layout,
            animating,
            response,
        }
    }
}
