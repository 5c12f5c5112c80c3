// src/chart/bar.rs

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, Ui, epaint::TextShape,
};

use super::Chart;

// Room around the plot area for tick labels, the y label and rotated names.
const MARGIN_LEFT: f32 = 72.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 8.0;
const MARGIN_BOTTOM: f32 = 110.0;
const BAR_FILL: f32 = 0.8;
const TICK_LEN: f32 = 4.0;
const TICK_PAD: f32 = 10.0;

/// Y axis ticks from 0 up to the first "nice" value at or above the maximum.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub step: f64,
    decimals: usize,
}

impl Ticks {
    pub fn new(max: f64) -> Self {
        if !(max > 0.0) || !max.is_finite() {
            return Self { values: vec![0.0, 1.0], step: 1.0, decimals: 0 };
        }

        let raw = max / 5.0;
        let mut mag = 10f64.powf(raw.log10().floor());
        let norm = raw / mag;
        let nice = match norm {
            n if n <= 1.0 => 1.0,
            n if n <= 2.0 => 2.0,
            n if n <= 5.0 => 5.0,
            _ => { mag *= 10.0; 1.0 }
        };
        let step = nice * mag;
        let decimals = if mag >= 1.0 { 0 } else { (-mag.log10()).round() as usize };

        let count = (max / step - 1e-9).ceil().max(1.0) as usize;
        let values = (0..=count).map(|k| k as f64 * step).collect();
        Self { values, step, decimals }
    }

    pub fn top(&self) -> f64 {
        self.values.last().copied().unwrap_or(1.0)
    }

    pub fn label(&self, v: f64) -> String {
        format!("{:.*}", self.decimals, v)
    }
}

pub fn draw(ui: &mut Ui, chart: &Chart) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let plot = Rect::from_min_max(
        Pos2::new(rect.left() + MARGIN_LEFT, rect.top() + MARGIN_TOP),
        Pos2::new(rect.right() - MARGIN_RIGHT, rect.bottom() - MARGIN_BOTTOM),
    );
    if plot.width() <= 0.0 || plot.height() <= 0.0 || chart.entries.is_empty() { return; }

    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(12.0);
    let axis = Stroke::new(1.0, text_color);

    let values = chart.values();
    let ticks = Ticks::new(values.iter().copied().fold(0.0, f64::max));
    let top = ticks.top();
    let y_of = |v: f64| plot.bottom() - (v / top) as f32 * plot.height();

    // Bars
    let slot = plot.width() / chart.entries.len() as f32;
    for (i, entry) in chart.entries.iter().enumerate() {
        let xc = plot.left() + slot * (i as f32 + 0.5);
        let half = slot * BAR_FILL / 2.0;
        let bar = Rect::from_min_max(Pos2::new(xc - half, y_of(entry.value)), Pos2::new(xc + half, plot.bottom()));
        painter.rect_filled(bar, 0.0, entry.color);

        painter.line_segment([Pos2::new(xc, plot.bottom()), Pos2::new(xc, plot.bottom() + TICK_LEN)], axis);
        rotated_label(&painter, &entry.label, Pos2::new(xc, plot.bottom() + TICK_PAD), chart.label_rotation_deg, &font, text_color);
    }

    // Axes
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    for &t in &ticks.values {
        let y = y_of(t);
        painter.line_segment([Pos2::new(plot.left() - TICK_LEN, y), Pos2::new(plot.left(), y)], axis);
        painter.text(Pos2::new(plot.left() - TICK_PAD, y), Align2::RIGHT_CENTER, ticks.label(t), font.clone(), text_color);
    }

    if let Some(label) = &chart.y_label {
        let galley = painter.layout_no_wrap(label.clone(), font.clone(), text_color);
        let w = galley.size().x;
        let pos = Pos2::new(rect.left() + 2.0, plot.center().y + w / 2.0);
        painter.add(Shape::Text(TextShape::new(pos, galley, text_color).with_angle(-std::f32::consts::FRAC_PI_2)));
    }
}

/// Text rotated counter-clockwise by `deg`, ending at `end`.
fn rotated_label(painter: &Painter, text: &str, end: Pos2, deg: f32, font: &FontId, color: Color32) {
    let galley = painter.layout_no_wrap(s!(text), font.clone(), color);
    let angle = -deg.to_radians();
    let w = galley.size().x;
    let pos = Pos2::new(end.x - w * angle.cos(), end.y - w * angle.sin());
    painter.add(Shape::Text(TextShape::new(pos, galley, color).with_angle(angle)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_round_up_to_a_nice_top() {
        let t = Ticks::new(111.0);
        assert_eq!(t.step, 50.0);
        assert_eq!(t.values, vec![0.0, 50.0, 100.0, 150.0]);
        assert_eq!(t.label(100.0), "100");
    }

    #[test]
    fn ticks_for_small_values_keep_decimals() {
        let t = Ticks::new(0.37);
        assert_eq!(t.values.len(), 5);
        assert!((t.top() - 0.4).abs() < 1e-12);
        assert_eq!(t.label(t.values[1]), "0.1");
    }

    #[test]
    fn exact_multiple_is_the_top() {
        let t = Ticks::new(10.0);
        assert_eq!(t.step, 2.0);
        assert_eq!(t.top(), 10.0);
    }

    #[test]
    fn degenerate_max_falls_back() {
        assert_eq!(Ticks::new(0.0).values, vec![0.0, 1.0]);
        assert_eq!(Ticks::new(f64::NAN).top(), 1.0);
    }
}
