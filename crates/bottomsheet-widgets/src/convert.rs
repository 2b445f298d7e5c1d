//! Conversions between egui and the toolkit-agnostic core types.

use bottomsheet_core::input::{MouseButton, PointerEvent};
use egui::{Color32, CornerRadius, Event, Pos2, Rect, TouchPhase};

/// Convert a peniko color to an egui color.
pub fn to_color32(color: peniko::Color) -> Color32 {
    let rgba = color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Convert an egui position to a kurbo point.
pub fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

/// Convert a kurbo rect to an egui rect.
pub fn to_egui_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.x0 as f32, rect.y0 as f32),
        Pos2::new(rect.x1 as f32, rect.y1 as f32),
    )
}

/// Convert an egui rect to a kurbo rect.
pub fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

/// Convert a radius in points to an egui corner radius (saturating).
pub fn to_corner_radius(radius: f64) -> CornerRadius {
    CornerRadius::same(radius.round().clamp(0.0, u8::MAX as f64) as u8)
}

fn mouse_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Translate an egui input event into a pointer event, if it is one.
///
/// Touches arrive as emulated pointer events from the integration; only a
/// cancelled touch is taken from the raw touch stream.
pub fn pointer_event(event: &Event) -> Option<PointerEvent> {
    match event {
        Event::PointerMoved(pos) => Some(PointerEvent::Move {
            position: to_point(*pos),
        }),
        Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = mouse_button(*button)?;
            let position = to_point(*pos);
            Some(if *pressed {
                PointerEvent::Down { position, button }
            } else {
                PointerEvent::Up { position, button }
            })
        }
        Event::PointerGone => Some(PointerEvent::Cancel),
        Event::Touch {
            phase: TouchPhase::Cancel,
            ..
        } => Some(PointerEvent::Cancel),
        _ => None,
    }
}

/// Collect the pointer events of a frame, in order.
pub fn pointer_events(events: &[Event]) -> Vec<PointerEvent> {
    events.iter().filter_map(pointer_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Modifiers;

    #[test]
    fn test_color_conversion() {
        let color = peniko::Color::from_rgba8(10, 20, 30, 255);
        assert_eq!(to_color32(color), Color32::from_rgb(10, 20, 30));
        assert_eq!(to_color32(peniko::Color::BLACK), Color32::BLACK);
    }

    #[test]
    fn test_rect_conversion() {
        let rect = kurbo::Rect::new(1.0, 2.0, 30.0, 40.0);
        let egui_rect = to_egui_rect(rect);
        assert_eq!(egui_rect, Rect::from_min_max(Pos2::new(1.0, 2.0), Pos2::new(30.0, 40.0)));
        assert_eq!(to_kurbo_rect(egui_rect), rect);
    }

    #[test]
    fn test_corner_radius_saturates() {
        assert_eq!(to_corner_radius(20.0), CornerRadius::same(20));
        assert_eq!(to_corner_radius(-3.0), CornerRadius::same(0));
        assert_eq!(to_corner_radius(1000.0), CornerRadius::same(255));
    }

    #[test]
    fn test_pointer_events() {
        let events = vec![
            Event::PointerButton {
                pos: Pos2::new(5.0, 6.0),
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::default(),
            },
            Event::Text("ignored".to_string()),
            Event::PointerMoved(Pos2::new(5.0, 50.0)),
            Event::PointerButton {
                pos: Pos2::new(5.0, 50.0),
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::default(),
            },
            Event::PointerGone,
        ];

        assert_eq!(
            pointer_events(&events),
            vec![
                PointerEvent::Down {
                    position: kurbo::Point::new(5.0, 6.0),
                    button: MouseButton::Left,
                },
                PointerEvent::Move {
                    position: kurbo::Point::new(5.0, 50.0),
                },
                PointerEvent::Up {
                    position: kurbo::Point::new(5.0, 50.0),
                    button: MouseButton::Left,
                },
                PointerEvent::Cancel,
            ]
        );
    }

    #[test]
    fn test_extra_buttons_are_dropped() {
        let event = Event::PointerButton {
            pos: Pos2::ZERO,
            button: egui::PointerButton::Extra1,
            pressed: true,
            modifiers: Modifiers::default(),
        };
        assert_eq!(pointer_event(&event), None);
    }
}
