// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod chart;
pub mod csv;
pub mod file;
pub mod mode;
pub mod progress;
pub mod runner;
pub mod table;

pub use error::{Error, Result};
pub use mode::Mode;
pub use table::StatsTable;
