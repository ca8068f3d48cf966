use eframe::egui::{self, Align2, Color32, FontId, PointerButton, Sense, Stroke, Ui};

use super::super::ViewModel;
use super::super::render_utils::{circle_visible, draw_background};

impl ViewModel {
    pub(in crate::app) fn draw_canvas(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.handle_canvas_zoom(ui, rect, &response);
        self.handle_canvas_pan(&response);

        let frame_delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let animating = self.chart.advance(frame_delta_seconds);
        if animating || response.dragged() {
            ui.ctx().request_repaint();
        }

        let transform = self.canvas_transform(rect);
        draw_background(&painter, rect, transform);

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .filter(|pointer| rect.contains(*pointer));
        let hovered = self.hovered_index(pointer, transform);
        match pointer {
            Some(pointer) => self.chart.update_hover(hovered, pointer, &mut self.tooltip),
            None => self.chart.pointer_leave(&mut self.tooltip),
        }

        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        if response.clicked_by(PointerButton::Primary)
            && let Some(index) = hovered
        {
            self.chart.click(index);
        }

        let title_size = (22.0 * transform.scale()).clamp(11.0, 36.0);
        for title in self.chart.year_titles() {
            painter.text(
                transform.to_screen(title.position),
                Align2::CENTER_BOTTOM,
                title.label,
                FontId::proportional(title_size),
                Color32::from_gray(225),
            );
        }

        for sprite in self.chart.sprites() {
            let center = transform.to_screen(sprite.center);
            let radius = sprite.radius * transform.scale();
            if radius <= 0.0 || !circle_visible(rect, center, radius) {
                continue;
            }

            painter.circle(
                center,
                radius,
                sprite.fill,
                Stroke::new(sprite.stroke_width, sprite.stroke),
            );
        }

        self.tooltip.paint(&painter, rect);
    }
}
