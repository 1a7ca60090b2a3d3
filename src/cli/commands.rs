use crate::error::InspectError;
use crate::inspector;
use crate::writer;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;

/// Success - report printed and summary written.
pub const EXIT_SUCCESS: u8 = 0;

/// Any failure other than a missing input file.
pub const EXIT_ERROR: u8 = 1;

/// The input workbook does not exist.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Execute the inspect command: report to stdout, then write the summary.
///
/// Nothing is written to `output` unless the whole workbook was inspected.
pub fn inspect(file: &Path, output: &Path) -> anyhow::Result<()> {
    let result = inspector::inspect(file)?;

    writer::persist(&result, output)
        .with_context(|| format!("Failed to write summary to {}", output.display()))?;

    println!(
        "\n{}",
        format!("Analysis saved to {}", output.display()).bold().green()
    );
    Ok(())
}

fn not_found(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InspectError>()
        .is_some_and(InspectError::is_not_found)
}

pub fn exit_code(err: &anyhow::Error) -> u8 {
    if not_found(err) {
        EXIT_NOT_FOUND
    } else {
        EXIT_ERROR
    }
}

/// Print a failure: one line for a missing file, the full cause chain otherwise
pub fn report_failure(err: &anyhow::Error) {
    println!("{} {}", "Error:".bold().red(), err);
    if !not_found(err) {
        eprintln!("{:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_missing_file_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("summary.json");

        let err = inspect(&dir.path().join("missing.xlsx"), &output).unwrap_err();

        assert_eq!(exit_code(&err), EXIT_NOT_FOUND);
        assert!(err.to_string().starts_with("File not found at"));
        assert!(!output.exists());
    }

    #[test]
    fn test_inspect_corrupt_file_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("corrupt.xlsx");
        fs::write(&input, b"this is not a zip archive").unwrap();
        let output = dir.path().join("summary.json");

        let err = inspect(&input, &output).unwrap_err();

        assert_eq!(exit_code(&err), EXIT_ERROR);
        assert!(matches!(
            err.downcast_ref::<InspectError>(),
            Some(InspectError::Analysis { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = anyhow::Error::new(InspectError::NotFound(PathBuf::from("x.xlsx")))
            .context("while inspecting");
        assert_eq!(exit_code(&err), EXIT_NOT_FOUND);

        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code(&err), EXIT_ERROR);
    }
}
