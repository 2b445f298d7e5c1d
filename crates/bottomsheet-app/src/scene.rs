//! Vello backdrop drawn behind the egui layer.

use kurbo::{Affine, Rect, RoundedRect, Size};
use peniko::{Color, Fill};
use vello::Scene;

const HEADER_HEIGHT: f64 = 64.0;
const MARGIN: f64 = 24.0;
const CARD_HEIGHT: f64 = 96.0;
const CARD_GAP: f64 = 16.0;
const CARD_RADIUS: f64 = 12.0;

const HEADER_COLOR: Color = Color::from_rgb8(59, 130, 246);
const CARD_COLOR: Color = Color::from_rgb8(255, 255, 255);
const LINE_COLOR: Color = Color::from_rgb8(226, 232, 240);

/// Rectangles of the placeholder cards that fill a page of `size`.
pub fn card_rects(size: Size) -> Vec<Rect> {
    let width = size.width - 2.0 * MARGIN;
    if width <= 0.0 {
        return Vec::new();
    }

    let mut cards = Vec::new();
    let mut y = HEADER_HEIGHT + MARGIN;
    while y + CARD_HEIGHT <= size.height {
        cards.push(Rect::new(MARGIN, y, MARGIN + width, y + CARD_HEIGHT));
        y += CARD_HEIGHT + CARD_GAP;
    }
    cards
}

/// Draw the page the sheet slides over, in physical pixels.
pub fn draw_backdrop(scene: &mut Scene, size: Size, scale: f64) {
    let transform = Affine::scale(scale);
    let logical = Size::new(size.width / scale, size.height / scale);

    let header = Rect::new(0.0, 0.0, logical.width, HEADER_HEIGHT);
    scene.fill(Fill::NonZero, transform, HEADER_COLOR, None, &header);

    for card in card_rects(logical) {
        let shape = RoundedRect::from_rect(card, CARD_RADIUS);
        scene.fill(Fill::NonZero, transform, CARD_COLOR, None, &shape);

        // Two placeholder text lines per card
        for (i, fraction) in [0.6, 0.4].into_iter().enumerate() {
            let top = card.y0 + 24.0 + i as f64 * 24.0;
            let line = Rect::new(
                card.x0 + 16.0,
                top,
                card.x0 + 16.0 + (card.width() - 32.0) * fraction,
                top + 12.0,
            );
            scene.fill(
                Fill::NonZero,
                transform,
                LINE_COLOR,
                None,
                &RoundedRect::from_rect(line, 6.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_fit_page() {
        let size = Size::new(400.0, 800.0);
        let cards = card_rects(size);

        assert!(!cards.is_empty());
        for card in &cards {
            assert!(card.y0 >= HEADER_HEIGHT);
            assert!(card.y1 <= size.height);
            assert_eq!(card.x0, MARGIN);
            assert_eq!(card.x1, size.width - MARGIN);
        }
    }

    #[test]
    fn test_no_cards_on_tiny_page() {
        assert!(card_rects(Size::new(30.0, 800.0)).is_empty());
        assert!(card_rects(Size::new(400.0, 100.0)).is_empty());
    }
}
