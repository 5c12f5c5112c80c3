// src/chart/window.rs
use eframe::egui;

use super::{Chart, ChartKind, bar, pie};

pub struct ChartWindow {
    charts: [Chart; 2],
}

impl ChartWindow {
    pub fn new(cc: &eframe::CreationContext<'_>, charts: [Chart; 2]) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self { charts }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |cols| {
                for (ui, chart) in cols.iter_mut().zip(&self.charts) {
                    ui.vertical_centered(|ui| {
                        ui.heading(chart.title.as_str());
                    });
                    match chart.kind {
                        ChartKind::Pie => pie::draw(ui, chart),
                        ChartKind::Bar => bar::draw(ui, chart),
                    }
                }
            });
        });
    }
}
