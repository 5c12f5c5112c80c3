// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific extraction: *where the data lives in the HTML* and *how to read it*.
//! Specs only parse. Fetching, persistence and presentation live elsewhere
//! (`core::net`, `file`, `chart`), tied together by `runner`.
//!
//! ## Current specs
//! - `worldometers` – the `#main_table_countries_today` statistics table.
//!
//! Specs are tested offline against fixtures in `tests/fixtures/`.
pub mod worldometers;
