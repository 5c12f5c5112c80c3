// src/runner.rs
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::{
    config::RunOptions,
    core::{html, net},
    error::Result,
    file,
    mode::{self, Mode},
    progress::{Progress, Step},
    specs::worldometers,
    table::StatsTable,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub mode: Mode,
    /// Lines refused at the mode prompt.
    pub rejected: usize,
    pub table: StatsTable,
    pub written: PathBuf,
}

/// Fetch → parse → ask mode → extract → save.
/// Charts are left to the caller. A failed fetch returns before anything
/// touches the filesystem.
pub fn run<R: BufRead, W: Write>(
    opts: &RunOptions,
    input: R,
    output: W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Step::ALL.len());
        p.log(&format!("Fetching {}", opts.url));
    }

    let raw = net::fetch_page(&opts.url)?;
    step(&mut progress, Step::Fetched);

    pipeline(opts, &raw, input, output, progress)
}

/// Same as `run`, starting from markup already in hand.
pub fn run_with_document<R: BufRead, W: Write>(
    opts: &RunOptions,
    raw: &str,
    input: R,
    output: W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Step::ALL.len() - 1);
    }
    pipeline(opts, raw, input, output, progress)
}

fn pipeline<R: BufRead, W: Write>(
    opts: &RunOptions,
    raw: &str,
    input: R,
    output: W,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let doc = html::parse_document(raw);
    step(&mut progress, Step::Parsed);

    let choice = mode::prompt_mode(input, output)?;
    step(&mut progress, Step::ModeChosen);

    let table = worldometers::extract(&doc, &opts.table_id, choice.mode)?;
    if table.len() != choice.mode.expected_rows() {
        logd!(
            "Extract: {} rows for {}, window holds {}",
            table.len(),
            choice.mode,
            choice.mode.expected_rows()
        );
    }
    step(&mut progress, Step::Extracted);

    let written = file::write_table(&opts.out_path, &table)?;
    step(&mut progress, Step::Persisted);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { mode: choice.mode, rejected: choice.rejected, table, written })
}

fn step(progress: &mut Option<&mut dyn Progress>, s: Step) {
    logd!("Run: {s}");
    if let Some(p) = progress.as_deref_mut() {
        p.step_done(s);
    }
}
