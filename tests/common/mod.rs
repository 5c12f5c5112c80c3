// tests/common/mod.rs
#![allow(dead_code)]

use std::io::Cursor;
use std::path::Path;

use covid_charts::{
    Result,
    config::RunOptions,
    progress::{Progress, Step},
    runner::{self, RunSummary},
};

pub const PAGE: &str = include_str!("../fixtures/main_table.html");

pub const CONTINENTS: [&str; 6] =
    ["North America", "Asia", "Europe", "South America", "Oceania", "Africa"];

// Body rows 8..=17 of the fixture.
pub const TOP_TEN: [&str; 10] =
    ["USA", "India", "France", "Germany", "Brazil", "S. Korea", "Japan", "Italy", "UK", "Russia"];

pub fn opts(out: &Path) -> RunOptions {
    RunOptions::default().with_out_path(out)
}

/// Run the offline pipeline with `answers` typed at the prompt.
pub fn run_fixture(out: &Path, answers: &str) -> (Result<RunSummary>, String) {
    let mut prompt = Vec::new();
    let res = runner::run_with_document(&opts(out), PAGE, Cursor::new(answers), &mut prompt, None);
    (res, String::from_utf8(prompt).unwrap())
}

#[derive(Default)]
pub struct Recorder {
    pub total: usize,
    pub steps: Vec<Step>,
    pub finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn step_done(&mut self, step: Step) { self.steps.push(step); }
    fn finish(&mut self) { self.finished = true; }
}

/// Read back an exported file: comma-separated, double-quote escaping, one row per line.
pub fn read_rows(text: &str) -> Vec<Vec<String>> {
    text.lines().map(read_line).collect()
}

fn read_line(line: &str) -> Vec<String> {
    let mut fields = vec![String::new()];
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                chars.next();
                fields.last_mut().unwrap().push('"');
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(String::new()),
            _ => fields.last_mut().unwrap().push(ch),
        }
    }
    fields
}
