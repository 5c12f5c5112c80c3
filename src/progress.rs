// src/progress.rs
use std::fmt;

/// Pipeline stages, in run order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Fetched,
    Parsed,
    ModeChosen,
    Extracted,
    Persisted,
}

impl Step {
    pub const ALL: [Step; 5] = [Step::Fetched, Step::Parsed, Step::ModeChosen, Step::Extracted, Step::Persisted];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::Fetched => "Fetched page",
            Step::Parsed => "Parsed document",
            Step::ModeChosen => "Mode chosen",
            Step::Extracted => "Extracted table",
            Step::Persisted => "Saved CSV",
        })
    }
}

/// Lightweight progress reporting for the pipeline.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps ahead.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    fn step_done(&mut self, _step: Step) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
