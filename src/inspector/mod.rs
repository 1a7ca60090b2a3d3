//! Workbook inspection
//!
//! Opens a workbook, walks its sheets in stored order and builds an
//! `AnalysisResult`, streaming a human-readable report as it goes.
//!
//! # Example
//!
//! ```no_run
//! use sheet_inspector::config::InspectorConfig;
//! use sheet_inspector::inspector::Inspector;
//!
//! let mut inspector = Inspector::new(InspectorConfig::default(), std::io::stdout());
//! let result = inspector.inspect("dashboard.xlsx")?;
//! println!("Sheets: {}", result.total_sheets);
//! # Ok::<(), sheet_inspector::error::InspectError>(())
//! ```

mod report;
mod scan;

pub use report::truncate_chars;
pub use scan::{named_ranges_for, scan_sheet};

use crate::config::InspectorConfig;
use crate::error::InspectResult;
use crate::excel::WorkbookLoader;
use crate::types::AnalysisResult;
use std::io::{self, Stdout, Write};
use std::path::Path;
use tracing::debug;

pub struct Inspector<W: Write> {
    config: InspectorConfig,
    out: W,
}

impl Inspector<Stdout> {
    pub fn stdout(config: InspectorConfig) -> Self {
        Self::new(config, io::stdout())
    }
}

impl<W: Write> Inspector<W> {
    /// Create an inspector that writes its report to `out`
    pub fn new(config: InspectorConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Inspect the workbook at `path`.
    ///
    /// All or nothing: any failure while loading or scanning discards the
    /// sheets gathered so far. The source file is only read.
    pub fn inspect<P: AsRef<Path>>(&mut self, path: P) -> InspectResult<AnalysisResult> {
        let path = path.as_ref();
        let mut loader = WorkbookLoader::open(path)?;

        let sheet_names = loader.sheet_names();
        let defined_names = loader.defined_names();
        report::file_banner(&mut self.out, path, sheet_names.len())?;

        let mut result = AnalysisResult {
            sheets: Vec::with_capacity(sheet_names.len()),
            total_sheets: sheet_names.len(),
        };

        for name in &sheet_names {
            let grid = loader.load_sheet(name)?;
            report::sheet_banner(&mut self.out, &grid)?;

            let mut summary = scan_sheet(&grid, &self.config);
            summary.named_ranges = named_ranges_for(name, &defined_names);

            report::preview(&mut self.out, &grid, &self.config.preview)?;
            report::findings(&mut self.out, &summary, &self.config.preview)?;

            debug!(
                sheet = %name,
                formulas = summary.formulas.len(),
                key_cells = summary.key_cells.len(),
                named_ranges = summary.named_ranges.len(),
                "scanned sheet"
            );
            result.sheets.push(summary);
        }

        report::completion_banner(&mut self.out)?;
        self.out.flush()?;

        Ok(result)
    }

    /// Recover the report sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Inspect `path` with default settings, reporting to stdout
pub fn inspect<P: AsRef<Path>>(path: P) -> InspectResult<AnalysisResult> {
    Inspector::stdout(InspectorConfig::default()).inspect(path)
}
