use eframe::egui::{Color32, FontId, Painter, Pos2, Rect, Vec2, pos2, vec2};

use crate::chart::Tooltip;

const TOOLTIP_WIDTH: f32 = 240.0;
const TOOLTIP_PADDING: f32 = 8.0;
const POINTER_OFFSET: Vec2 = vec2(20.0, 10.0);

/// Fixed-width tooltip that trails the pointer and flips to stay on screen.
#[derive(Default)]
pub(in crate::app) struct FloatingTooltip {
    content: Option<String>,
    pointer: Pos2,
}

impl Tooltip for FloatingTooltip {
    fn show(&mut self, content: &str, pointer: Pos2) {
        self.content = Some(content.to_owned());
        self.pointer = pointer;
    }

    fn hide(&mut self) {
        self.content = None;
    }
}

impl FloatingTooltip {
    pub(in crate::app) fn paint(&self, painter: &Painter, bounds: Rect) {
        let Some(content) = &self.content else {
            return;
        };

        let text_color = Color32::from_gray(235);
        let galley = painter.layout(
            content.clone(),
            FontId::proportional(13.0),
            text_color,
            TOOLTIP_WIDTH - TOOLTIP_PADDING * 2.0,
        );
        let size = vec2(TOOLTIP_WIDTH, galley.size().y + TOOLTIP_PADDING * 2.0);
        let frame = Rect::from_min_size(tooltip_origin(self.pointer, size, bounds), size);

        painter.rect_filled(frame.expand(1.0), 4.0, Color32::from_rgb(90, 98, 110));
        painter.rect_filled(frame, 4.0, Color32::from_rgba_unmultiplied(24, 28, 34, 240));
        painter.galley(
            frame.min + vec2(TOOLTIP_PADDING, TOOLTIP_PADDING),
            galley,
            text_color,
        );
    }
}

fn tooltip_origin(pointer: Pos2, size: Vec2, bounds: Rect) -> Pos2 {
    let mut x = pointer.x + POINTER_OFFSET.x;
    if x + size.x > bounds.right() {
        x = pointer.x - POINTER_OFFSET.x - size.x;
    }

    let mut y = pointer.y + POINTER_OFFSET.y;
    if y + size.y > bounds.bottom() {
        y = pointer.y - POINTER_OFFSET.y - size.y;
    }

    pos2(x.max(bounds.left()), y.max(bounds.top()))
}
