// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::OUT_SEP;
use crate::csv::rows_to_string;
use crate::error::{Error, Result};
use crate::table::StatsTable;

/// Write the table (index column + header schema) to `path`, replacing any
/// existing file. Parent directories are created. Returns the path written.
pub fn write_table(path: &Path, table: &StatsTable) -> Result<PathBuf> {
    let file_err = |source| Error::File { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(file_err)?;
        }
    }

    let contents = rows_to_string(&table.to_export_rows(), OUT_SEP);
    fs::write(path, contents).map_err(file_err)?;

    logf!("Wrote {} rows to {}", table.len(), path.display());
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StatsTable {
        let headers = vec![s!("#"), s!("Country,Other"), s!("TotalCases"), s!("ActiveCases")];
        let rows = vec![
            (0, vec![s!(""), s!("Europe"), s!("250000000"), s!("1500000")]),
            (1, vec![s!(""), s!("Asia"), s!("220000000"), s!("2000000")]),
        ];
        let mut t = StatsTable::from_text_rows(headers, rows).unwrap();
        t.normalize().unwrap();
        t
    }

    #[test]
    fn writes_header_plus_one_line_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");

        let written = write_table(&path, &sample()).unwrap();
        assert_eq!(written, path);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            ",#,\"Country,Other\",TotalCases,ActiveCases\n\
             0,,Europe,250.0,1.5\n\
             1,,Asia,220.0,2.0\n"
        );
    }

    #[test]
    fn existing_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final_project.csv");
        fs::write(&path, "stale\nstale\nstale\nstale\nstale\n").unwrap();

        write_table(&path, &sample()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn parent_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = write_table(&blocker.join("out.csv"), &sample()).unwrap_err();
        assert!(matches!(err, Error::File { .. }), "{err:?}");
    }
}
