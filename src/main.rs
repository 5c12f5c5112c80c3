// src/main.rs
// Fetch the Worldometers table, ask which slice to chart, save it as CSV, show the charts.
// Usage:
//   cargo run --release
//   RUST_LOG=debug cargo run --release

use std::io;

use covid_charts::{
    chart,
    config::RunOptions,
    progress::{Progress, Step},
    runner,
};

/// Step lines on stderr so they never mix with the prompt on stdout.
struct ConsoleProgress {
    done: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn step_done(&mut self, step: Step) {
        self.done += 1;
        eprintln!("[{}/{}] {step}", self.done, self.total);
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    covid_charts::log::init();

    let opts = RunOptions::default();
    let mut progress = ConsoleProgress { done: 0, total: 0 };

    let summary = runner::run(&opts, io::stdin().lock(), io::stdout(), Some(&mut progress))?;
    eprintln!("Wrote {} ({} rows)", summary.written.display(), summary.table.len());

    chart::show(&summary.table, summary.mode)?;
    Ok(())
}
