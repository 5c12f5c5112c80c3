// src/chart/mod.rs
//! Two side-by-side charts of the extracted table.
//!
//! `layout` turns a table + mode into plain chart descriptions (testable,
//! no GUI). `show` paints them in an eframe window and blocks until it closes.

pub mod bar;
pub mod pie;
pub mod window;

use eframe::egui::{self, Color32};

use crate::config::consts::{
    ACTIVE_CASES, BAR_PALETTE, PIE_PALETTE, TOTAL_CASES, WINDOW_SIZE, WINDOW_TITLE,
};
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::table::StatsTable;

pub const BAR_LABEL_ROTATION_DEG: f32 = 35.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    /// Share of the whole, one slice per row.
    Pie,
    /// Absolute value, one bar per row.
    Bar,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub y_label: Option<String>,
    /// Counter-clockwise rotation of the category labels.
    pub label_rotation_deg: f32,
    pub entries: Vec<Entry>,
}

impl Chart {
    fn pie(title: &str, labels: &[String], values: &[f64]) -> Self {
        Self {
            kind: ChartKind::Pie,
            title: s!(title),
            y_label: None,
            label_rotation_deg: 0.0,
            entries: entries(labels, values, &PIE_PALETTE),
        }
    }

    fn bar(title: &str, y_label: &str, labels: &[String], values: &[f64]) -> Self {
        Self {
            kind: ChartKind::Bar,
            title: s!(title),
            y_label: Some(s!(y_label)),
            label_rotation_deg: BAR_LABEL_ROTATION_DEG,
            entries: entries(labels, values, &BAR_PALETTE),
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}

/// Colours cycle through the palette.
fn entries(labels: &[String], values: &[f64], palette: &[[u8; 3]]) -> Vec<Entry> {
    labels
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (label, &value))| {
            let [r, g, b] = palette[i % palette.len()];
            Entry { label: label.clone(), value, color: Color32::from_rgb(r, g, b) }
        })
        .collect()
}

pub fn layout(table: &StatsTable, mode: Mode) -> Result<[Chart; 2]> {
    let labels = table.labels()?;
    let total = table.numbers(TOTAL_CASES)?;
    let active = table.numbers(ACTIVE_CASES)?;

    Ok(match mode {
        Mode::Continents => [
            Chart::pie("Share of Total Cases by Continent", &labels, &total),
            Chart::pie("Share of Active Cases by Continent", &labels, &active),
        ],
        Mode::Countries => [
            Chart::bar("Top 10 Countries - Total Cases", "Total Cases in Millions", &labels, &total),
            Chart::bar("Top 10 Countries - Active Cases", "Active Cases in Millions", &labels, &active),
        ],
    })
}

/// Open the chart window. Returns once the operator closes it.
pub fn show(table: &StatsTable, mode: Mode) -> Result<()> {
    let charts = layout(table, mode)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    logf!("Chart: opening window ({mode}, {} rows)", table.len());
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(window::ChartWindow::new(cc, charts)))),
    )
    .map_err(|e| {
        loge!("Chart: window failed: {e}");
        Error::Display(e.to_string())
    })
}
