// src/table.rs
//
// The extracted statistics: header schema plus the selected rows.
// Built once per run by the extractor, then read by export and charts.

use std::fmt;

use crate::config::consts::{CASES_SCALE, LABEL_COLUMN, NUMERIC_COLUMNS};
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(v) => f.write_str(&fmt_float(*v)),
        }
    }
}

/// Floats always carry a decimal point: 111 → "111.0", 0.5 → "0.5".
pub fn fmt_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatsTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl StatsTable {
    /// Every row must have exactly one cell per header.
    /// Row ids are source body-row indices, used only in error messages.
    pub fn from_text_rows(headers: Vec<String>, rows: Vec<(usize, Vec<String>)>) -> Result<Self> {
        let expected = headers.len();
        let mut out = Vec::with_capacity(rows.len());
        for (row, cells) in rows {
            if cells.len() != expected {
                return Err(Error::RowShape { row, found: cells.len(), expected });
            }
            out.push(cells.into_iter().map(Cell::Text).collect());
        }
        Ok(Self { headers, rows: out })
    }

    pub fn headers(&self) -> &[String] { &self.headers }
    pub fn rows(&self) -> &[Vec<Cell>] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(s!(name)))
    }

    /// Convert the case columns to floats, in millions.
    /// Fails on the first cell that is not a non-negative number.
    pub fn normalize(&mut self) -> Result<()> {
        for name in NUMERIC_COLUMNS {
            let col = self.column_index(name)?;
            for (row, cells) in self.rows.iter_mut().enumerate() {
                let Cell::Text(raw) = &cells[col] else { continue };
                let value = parse_count(raw).ok_or_else(|| Error::NotNumeric {
                    column: s!(name),
                    row,
                    value: raw.clone(),
                })?;
                if value < 0.0 {
                    return Err(Error::Negative { column: s!(name), row, value });
                }
                cells[col] = Cell::Number(value / CASES_SCALE);
            }
        }
        Ok(())
    }

    /// Values of a numeric column, in row order.
    pub fn numbers(&self, name: &str) -> Result<Vec<f64>> {
        let col = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells[col].as_number().ok_or_else(|| Error::NotNumeric {
                    column: s!(name),
                    row,
                    value: cells[col].to_string(),
                })
            })
            .collect()
    }

    /// Region / country names, in row order.
    pub fn labels(&self) -> Result<Vec<String>> {
        let col = self.column_index(LABEL_COLUMN)?;
        Ok(self.rows.iter().map(|cells| cells[col].to_string()).collect())
    }

    /// Rows as text with the leading index column, header first.
    /// The index header is empty.
    pub fn to_export_rows(&self) -> Vec<Vec<String>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);

        let mut header = Vec::with_capacity(self.headers.len() + 1);
        header.push(s!());
        header.extend(self.headers.iter().cloned());
        out.push(header);

        for (i, cells) in self.rows.iter().enumerate() {
            let mut row = Vec::with_capacity(cells.len() + 1);
            row.push(i.to_string());
            row.extend(cells.iter().map(Cell::to_string));
            out.push(row);
        }
        out
    }
}

// "N/A", "" and non-finite values fail; a leading '+' is accepted.
fn parse_count(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
