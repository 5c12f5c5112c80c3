// src/specs/worldometers.rs
//! Scraping spec for the Worldometers coronavirus table.
//!
//! Layout relied upon:
//! - one `<table id="main_table_countries_today">`;
//! - column labels are the `<th>` cells of its `<thead>`;
//! - data rows are the `<tr>` elements of its first `<tbody>`. The first six are
//!   continents, the next two are other aggregates, then countries by total cases.
//!
//! Header and cell text is read with whitespace collapsed to single spaces and
//! trimmed, so labels can differ from the raw page text: `Tests/<br>\n1M pop`
//! reads "Tests/ 1M pop", not "Tests/\n1M pop". Body cells also lose their
//! thousands separators.
//!
//! Row windows are fixed offsets into that body (see `config::consts`). A layout
//! change on the page shifts them silently; nothing here detects it.

use scraper::{ElementRef, Html};

use crate::core::html::{cell_text, selector, text_of};
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::table::StatsTable;

pub fn extract(doc: &Html, table_id: &str, mode: Mode) -> Result<StatsTable> {
    let table = find_table(doc, table_id)?;
    let headers = header_labels(table, table_id)?;
    let rows = select_rows(table, table_id, mode)?;

    logd!(
        "Extract: {} columns, {} rows selected for {mode}",
        headers.len(),
        rows.len()
    );

    let mut stats = StatsTable::from_text_rows(headers, rows)?;
    stats.normalize()?;
    Ok(stats)
}

fn find_table<'a>(doc: &'a Html, table_id: &str) -> Result<ElementRef<'a>> {
    let sel = selector(&format!("table#{table_id}"))?;
    doc.select(&sel)
        .next()
        .ok_or_else(|| Error::TableNotFound(s!(table_id)))
}

fn section<'a>(table: ElementRef<'a>, table_id: &str, name: &'static str) -> Result<ElementRef<'a>> {
    let sel = selector(name)?;
    table
        .select(&sel)
        .next()
        .ok_or_else(|| Error::MissingSection { table: s!(table_id), section: name })
}

/// `<th>` labels in left-to-right order.
pub fn header_labels(table: ElementRef<'_>, table_id: &str) -> Result<Vec<String>> {
    let thead = section(table, table_id, "thead")?;
    let th = selector("th")?;
    Ok(thead.select(&th).map(text_of).collect())
}

/// Body rows inside the mode's window, tagged with their body index.
/// Every `<tr>` counts toward the index whether it is kept or not.
pub fn select_rows(table: ElementRef<'_>, table_id: &str, mode: Mode) -> Result<Vec<(usize, Vec<String>)>> {
    let tbody = section(table, table_id, "tbody")?;
    let tr = selector("tr")?;
    let td = selector("td")?;
    let window = mode.row_window();

    let mut out = Vec::with_capacity(window.len());
    for (i, row) in tbody.select(&tr).enumerate() {
        if i >= window.end { break; }
        if !window.contains(&i) { continue; }
        out.push((i, row.select(&td).map(cell_text).collect()));
    }
    Ok(out)
}
