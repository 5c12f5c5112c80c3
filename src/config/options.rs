// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// Where the run reads from and writes to.
/// The binary always uses `Default`; tests point these at local resources.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub table_id: String,
    pub out_path: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            url: s!(URL),
            table_id: s!(TABLE_ID),
            out_path: PathBuf::from(OUT_FILE),
        }
    }
}

impl RunOptions {
    pub fn with_out_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_path = path.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
