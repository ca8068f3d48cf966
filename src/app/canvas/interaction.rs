use eframe::egui::{self, Rect, Ui};

use super::super::ViewModel;
use super::super::render_utils::CanvasTransform;

impl ViewModel {
    pub(in crate::app) fn canvas_transform(&self, rect: Rect) -> CanvasTransform {
        CanvasTransform::new(rect, self.pan, self.zoom, self.chart.size())
    }

    pub(in crate::app) fn handle_canvas_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let chart_before = self.canvas_transform(rect).to_chart(pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.2, 8.0);
        self.pan = CanvasTransform::new(rect, self.pan, self.zoom, self.chart.size())
            .pan_anchoring(rect, chart_before, pointer);
    }

    pub(in crate::app) fn handle_canvas_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }

        if response.double_clicked() {
            self.pan = egui::Vec2::ZERO;
            self.zoom = 1.0;
        }
    }

    /// Index of the bubble under the pointer, if the pointer is on the canvas.
    pub(in crate::app) fn hovered_index(
        &self,
        pointer: Option<egui::Pos2>,
        transform: CanvasTransform,
    ) -> Option<usize> {
        pointer.and_then(|pointer| self.chart.hit_test(transform.to_chart(pointer)))
    }
}
