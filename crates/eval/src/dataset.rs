//! Golden dataset loading
//!
//! The dataset is a newline-delimited JSON file of test cases. Malformed
//! lines are skipped with a warning and counted; they never abort the run.
//! Only a missing/unreadable file is an error here — an empty dataset is
//! left to the harness verdict.

use careline_core::{Error, Result, TestCase};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A loaded dataset plus the number of lines that failed to parse
#[derive(Debug)]
pub struct LoadedDataset {
    pub cases: Vec<TestCase>,
    pub skipped_lines: usize,
}

/// Load test cases from an NDJSON file, preserving file order
pub fn load_dataset(path: &Path) -> Result<LoadedDataset> {
    let file = File::open(path).map_err(|e| {
        Error::Dataset(format!("cannot open {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    let mut cases = Vec::new();
    let mut skipped_lines = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<TestCase>(trimmed) {
            Ok(case) => cases.push(case),
            Err(e) => {
                tracing::warn!(line = line_no + 1, error = %e, "skipping malformed fixture line");
                skipped_lines += 1;
            }
        }
    }

    tracing::info!(
        loaded = cases.len(),
        skipped = skipped_lines,
        path = %path.display(),
        "golden dataset loaded"
    );

    Ok(LoadedDataset {
        cases,
        skipped_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_skips_malformed_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id":"a","transcriptText":"hello"}}"#).unwrap();
        writeln!(file, "not json at all").unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"id":"b","transcriptText":"world"}}"#).unwrap();

        let loaded = load_dataset(file.path()).unwrap();
        assert_eq!(loaded.cases.len(), 2);
        assert_eq!(loaded.skipped_lines, 1);
        // File order preserved
        assert_eq!(loaded.cases[0].id, "a");
        assert_eq!(loaded.cases[1].id, "b");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_dataset(Path::new("/nonexistent/golden.jsonl"));
        assert!(result.is_err());
    }
}
