//! Summary artifact writer

use crate::error::InspectResult;
use crate::types::AnalysisResult;
use std::fs;
use std::path::Path;
use tracing::info;

/// Default artifact file name, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "excel_analysis_summary.json";

/// Serialize `result` as indented JSON, replacing any existing file
pub fn persist<P: AsRef<Path>>(result: &AnalysisResult, output: P) -> InspectResult<()> {
    let output = output.as_ref();
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    fs::write(output, json)?;

    info!(
        path = %output.display(),
        sheets = result.total_sheets,
        "wrote analysis summary"
    );
    Ok(())
}
