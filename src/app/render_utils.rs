use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

pub(super) fn draw_background(painter: &Painter, rect: Rect, transform: CanvasTransform) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = (60.0 * transform.scale()).max(20.0);
    let origin = transform.origin();

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70)),
        );
        x += step;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70)),
        );
        y += step;
    }
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

/// Maps chart pixels onto the canvas rect, fitted to the rect and then
/// scaled by the user zoom and shifted by the user pan.
#[derive(Clone, Copy, Debug)]
pub(super) struct CanvasTransform {
    origin: Pos2,
    chart_center: Vec2,
    scale: f32,
}

impl CanvasTransform {
    pub(super) fn new(rect: Rect, pan: Vec2, zoom: f32, chart_size: Vec2) -> Self {
        let fit = (rect.width() / chart_size.x)
            .min(rect.height() / chart_size.y)
            .max(0.05);

        Self {
            origin: rect.center() + pan,
            chart_center: chart_size * 0.5,
            scale: fit * zoom,
        }
    }

    pub(super) fn origin(self) -> Pos2 {
        self.origin
    }

    pub(super) fn scale(self) -> f32 {
        self.scale
    }

    pub(super) fn to_screen(self, chart: Vec2) -> Pos2 {
        self.origin + (chart - self.chart_center) * self.scale
    }

    pub(super) fn to_chart(self, screen: Pos2) -> Vec2 {
        (screen - self.origin) / self.scale + self.chart_center
    }

    /// Pan that keeps `chart_point` under `screen_point` at this scale.
    pub(super) fn pan_anchoring(self, rect: Rect, chart_point: Vec2, screen_point: Pos2) -> Vec2 {
        screen_point - rect.center() - (chart_point - self.chart_center) * self.scale
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};

    use super::*;

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), vec2(1880.0, 1200.0))
    }

    #[test]
    fn chart_center_maps_to_canvas_center() {
        let transform = CanvasTransform::new(canvas(), Vec2::ZERO, 1.0, vec2(940.0, 600.0));
        assert_eq!(transform.scale(), 2.0);
        assert_eq!(transform.to_screen(vec2(470.0, 300.0)), canvas().center());
        assert_eq!(transform.to_screen(vec2(0.0, 0.0)), canvas().min);
    }

    #[test]
    fn screen_points_map_back_to_chart() {
        let transform = CanvasTransform::new(canvas(), vec2(30.0, -12.0), 1.7, vec2(940.0, 600.0));
        let chart_point = vec2(123.0, 456.0);
        let back = transform.to_chart(transform.to_screen(chart_point));
        assert!((back - chart_point).length() < 1e-3);
    }

    #[test]
    fn anchored_pan_keeps_point_under_cursor() {
        let rect = canvas();
        let before = CanvasTransform::new(rect, Vec2::ZERO, 1.0, vec2(940.0, 600.0));
        let cursor = pos2(400.0, 300.0);
        let chart_point = before.to_chart(cursor);

        let zoomed = CanvasTransform::new(rect, Vec2::ZERO, 2.5, vec2(940.0, 600.0));
        let pan = zoomed.pan_anchoring(rect, chart_point, cursor);
        let after = CanvasTransform::new(rect, pan, 2.5, vec2(940.0, 600.0));
        assert!((after.to_screen(chart_point) - cursor).length() < 1e-3);
    }

    #[test]
    fn circles_off_canvas_are_culled() {
        let rect = canvas();
        assert!(circle_visible(rect, pos2(90.0, 60.0), 20.0));
        assert!(!circle_visible(rect, pos2(10.0, 60.0), 20.0));
        assert!(!circle_visible(rect, pos2(500.0, 1300.0), 40.0));
    }
}
