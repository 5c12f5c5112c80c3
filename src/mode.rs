// src/mode.rs
// The operator picks the run variant once; it drives row selection and chart shape.

use std::fmt;
use std::io::{BufRead, Write};
use std::ops::Range;

use crate::config::consts::{CONTINENT_ROWS, COUNTRY_ROWS};
use crate::error::{Error, Result};

pub const PROMPT: &str = "Please enter 'Countries' or 'Continents': ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Countries,
    Continents,
}

impl Mode {
    /// Exact, case-sensitive match. No trimming.
    pub fn from_token(token: &str) -> Option<Mode> {
        match token {
            "Countries" => Some(Mode::Countries),
            "Continents" => Some(Mode::Continents),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Countries => "Countries",
            Mode::Continents => "Continents",
        }
    }

    /// Body-row indices kept for this mode.
    pub fn row_window(&self) -> Range<usize> {
        match self {
            Mode::Countries => COUNTRY_ROWS,
            Mode::Continents => CONTINENT_ROWS,
        }
    }

    pub fn expected_rows(&self) -> usize {
        self.row_window().len()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeChoice {
    pub mode: Mode,
    /// Lines read and refused before the accepted one.
    pub rejected: usize,
}

/// Prompt on `output` and read lines from `input` until one is a mode token.
/// Only the line terminator is removed before comparing.
pub fn prompt_mode<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<ModeChoice> {
    let mut rejected = 0;
    let mut line = s!();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        let token = strip_line_end(&line);
        if let Some(mode) = Mode::from_token(token) {
            logd!("Mode: {mode} after {rejected} rejected");
            return Ok(ModeChoice { mode, rejected });
        }

        rejected += 1;
        logd!("Mode: rejected {token:?}");
    }
}

fn strip_line_end(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn choose(input: &str) -> (Result<ModeChoice>, String) {
        let mut out = Vec::new();
        let res = prompt_mode(Cursor::new(input), &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn two_rejections_then_countries() {
        let (res, out) = choose("foo\nbar\nCountries\n");
        let choice = res.unwrap();
        assert_eq!(choice.mode, Mode::Countries);
        assert_eq!(choice.rejected, 2);
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn first_line_continents() {
        let (res, _) = choose("Continents\n");
        assert_eq!(res.unwrap(), ModeChoice { mode: Mode::Continents, rejected: 0 });
    }

    #[test]
    fn match_is_exact() {
        let (res, _) = choose("countries\n Countries\nCountries \nCONTINENTS\nContinents\n");
        let choice = res.unwrap();
        assert_eq!(choice.mode, Mode::Continents);
        assert_eq!(choice.rejected, 4);
    }

    #[test]
    fn crlf_and_missing_final_newline_are_accepted() {
        assert_eq!(choose("x\r\nCountries\r\n").0.unwrap().mode, Mode::Countries);
        assert_eq!(choose("Continents").0.unwrap().mode, Mode::Continents);
    }

    #[test]
    fn eof_ends_the_loop() {
        let (res, out) = choose("foo\nbar\n");
        assert!(matches!(res, Err(Error::InputClosed)));
        assert_eq!(out.matches(PROMPT).count(), 3);
    }

    #[test]
    fn windows_match_the_page_layout() {
        assert_eq!(Mode::Continents.row_window(), 0..6);
        assert_eq!(Mode::Countries.row_window(), 8..18);
        assert_eq!(Mode::Continents.expected_rows(), 6);
        assert_eq!(Mode::Countries.expected_rows(), 10);
    }
}
