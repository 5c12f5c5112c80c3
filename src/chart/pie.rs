// src/chart/pie.rs
// Slices start at 3 o'clock and run counter-clockwise.

use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Sense, Shape, Stroke, Ui};

use super::Chart;

const RADIUS_FRAC: f32 = 0.34;
const LABEL_RADIUS: f32 = 1.1;
const PCT_RADIUS: f32 = 0.6;
// Arc points per radian.
const ARC_DENSITY: f64 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    /// Radians, counter-clockwise from the positive x axis.
    pub start: f64,
    pub sweep: f64,
    /// Fraction of the whole, 0..=1.
    pub share: f64,
}

impl Slice {
    pub fn mid(&self) -> f64 { self.start + self.sweep / 2.0 }
}

/// One slice per value. A zero (or empty) total yields zero-width slices.
pub fn slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().sum();
    let mut start = 0.0;
    values
        .iter()
        .map(|&v| {
            let share = if total > 0.0 { v / total } else { 0.0 };
            let s = Slice { start, sweep: share * TAU, share };
            start += s.sweep;
            s
        })
        .collect()
}

/// One decimal place, like "12.3%".
pub fn percent_label(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

pub fn draw(ui: &mut Ui, chart: &Chart) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = RADIUS_FRAC * rect.width().min(rect.height());
    if radius <= 0.0 { return; }

    let text_color = ui.visuals().text_color();
    let label_font = FontId::proportional(13.0);
    let pct_font = FontId::proportional(12.0);

    let cuts = slices(&chart.values());
    for (entry, slice) in chart.entries.iter().zip(&cuts) {
        if slice.sweep <= 0.0 { continue; }
        fill_sector(&painter, center, radius, slice, entry.color);
    }

    // Text on top of every wedge.
    for (entry, slice) in chart.entries.iter().zip(&cuts) {
        if slice.sweep <= 0.0 { continue; }
        let mid = slice.mid();
        let anchor = if mid.cos() >= 0.0 { Align2::LEFT_CENTER } else { Align2::RIGHT_CENTER };
        painter.text(polar(center, radius * LABEL_RADIUS, mid), anchor, &entry.label, label_font.clone(), text_color);
        painter.text(
            polar(center, radius * PCT_RADIUS, mid),
            Align2::CENTER_CENTER,
            percent_label(slice.share),
            pct_font.clone(),
            Color32::BLACK,
        );
    }
}

/// Screen point at `angle` (math orientation; screen y grows downward).
fn polar(center: Pos2, r: f32, angle: f64) -> Pos2 {
    Pos2::new(center.x + r * angle.cos() as f32, center.y - r * angle.sin() as f32)
}

// A wedge wider than a half turn is not convex; paint it as quarter-turn pieces.
fn fill_sector(painter: &Painter, center: Pos2, radius: f32, slice: &Slice, color: Color32) {
    let pieces = (slice.sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = slice.sweep / pieces as f64;

    for k in 0..pieces {
        let a0 = slice.start + step * k as f64;
        let n = ((step * ARC_DENSITY).ceil() as usize).max(2);
        let mut pts = Vec::with_capacity(n + 2);
        pts.push(center);
        for j in 0..=n {
            pts.push(polar(center, radius, a0 + step * j as f64 / n as f64));
        }
        painter.add(Shape::convex_polygon(pts, color, Stroke::NONE));
    }

    let edge = Stroke::new(1.0, Color32::WHITE);
    painter.line_segment([center, polar(center, radius, slice.start)], edge);
    painter.line_segment([center, polar(center, radius, slice.start + slice.sweep)], edge);
}
