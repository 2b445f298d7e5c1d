//! Sheet geometry within its container.

use kurbo::{Point, Rect};

use crate::config::SheetConfig;

/// Padding around the indicator handle on every side.
pub const INDICATOR_PADDING: f64 = 16.0;

/// Extra margin around the indicator accepted as a tap on it.
pub const INDICATOR_HIT_SLOP: f64 = 8.0;

/// Rectangles of a sheet at a given offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    /// The container the sheet is anchored to (its bottom edge).
    pub container: Rect,
    /// The full sheet panel, `max_height` tall. May extend below the container.
    pub sheet: Rect,
    /// The indicator handle.
    pub indicator: Rect,
    /// Area below the indicator available to child content.
    pub content: Rect,
}

impl SheetLayout {
    /// Compute the layout for `container` with the sheet moved down by `offset`.
    pub fn compute(container: Rect, config: &SheetConfig, offset: f64) -> Self {
        let max_height = config.max_height();
        let top = container.y1 - max_height + offset;
        let sheet = Rect::new(container.x0, top, container.x1, top + max_height);

        let size = config.indicator_size();
        let indicator_top = sheet.y0 + INDICATOR_PADDING;
        let indicator = Rect::from_center_size(
            Point::new(sheet.center().x, indicator_top + size.height / 2.0),
            size,
        );

        let content_top = (indicator.y1 + INDICATOR_PADDING).min(sheet.y1);
        let content = Rect::new(sheet.x0, content_top, sheet.x1, sheet.y1);

        Self {
            container,
            sheet,
            indicator,
            content,
        }
    }

    /// Check if a point lies on the sheet.
    pub fn contains_sheet(&self, point: Point) -> bool {
        self.sheet.contains(point)
    }

    /// Check if a point counts as a hit on the indicator.
    pub fn hits_indicator(&self, point: Point) -> bool {
        self.indicator.inflate(INDICATOR_HIT_SLOP, INDICATOR_HIT_SLOP).contains(point)
    }

    /// Part of the sheet inside the container.
    pub fn visible_sheet(&self) -> Rect {
        self.sheet.intersect(self.container)
    }
}
