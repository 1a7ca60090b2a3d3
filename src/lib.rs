//! Sheet Inspector - workbook diagnostics
//!
//! Opens a spreadsheet workbook read-only, walks its sheets and reports the
//! extent of each sheet, the formulas it contains and the text cells that
//! mention a tracked keyword. The result can be persisted as a flat JSON
//! summary.
//!
//! # Features
//!
//! - xlsx, xlsm, xlsb, xls and ods input (via calamine)
//! - Formula-preserving reads: formula cells are reported by formula text
//! - Bounded scan window (100 rows × 50 columns by default)
//! - Keyword matching as case-insensitive substrings
//! - Per-sheet defined names
//!
//! # Example
//!
//! ```no_run
//! use sheet_inspector::inspector::inspect;
//! use sheet_inspector::writer::{persist, DEFAULT_OUTPUT};
//!
//! let result = inspect("dashboard.xlsx")?;
//! for sheet in &result.sheets {
//!     println!("{}: {} formulas", sheet.name, sheet.formulas.len());
//! }
//! persist(&result, DEFAULT_OUTPUT)?;
//! # Ok::<(), sheet_inspector::error::InspectError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod inspector;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::{InspectorConfig, KeywordSet};
pub use error::{InspectError, InspectResult};
pub use inspector::Inspector;
pub use types::{AnalysisResult, CellValue, FormulaRecord, KeywordCellRecord, SheetSummary};
