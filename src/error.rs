// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: String, reason: String },

    #[error("table #{0} not found in document")]
    TableNotFound(String),

    #[error("table #{table} has no <{section}> section")]
    MissingSection { table: String, section: &'static str },

    #[error("column {0:?} missing from table header")]
    MissingColumn(String),

    #[error("row {row} has {found} cells but the header has {expected}")]
    RowShape { row: usize, found: usize, expected: usize },

    #[error("{column} in row {row} is not numeric: {value:?}")]
    NotNumeric { column: String, row: usize, value: String },

    #[error("{column} in row {row} is negative: {value}")]
    Negative { column: String, row: usize, value: f64 },

    #[error("input closed before a mode was chosen")]
    InputClosed,

    #[error("cannot write {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("chart window failed: {0}")]
    Display(String),
}
