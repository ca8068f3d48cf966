use eframe::egui::{self, Align, Context, Layout};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("toolbar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Disaster losses");
                    ui.separator();
                    self.draw_mode_buttons(ui);
                    ui.separator();
                    self.draw_legend(ui);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(self.layout_status_text());
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.chart.nodes().is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.label("The dataset contained no records.");
                });
            } else {
                self.draw_canvas(ui);
            }
        });
    }

    fn layout_status_text(&self) -> String {
        let state = if self.chart.is_settled() {
            "settled".to_owned()
        } else {
            format!("heat {:.3}", self.chart.heat())
        };
        format!("{} bubbles | layout {state}", self.chart.nodes().len())
    }
}
