//! Data model for a single inspection run
//!
//! Everything here is produced and consumed within one run. `AnalysisResult`
//! is the aggregate root and is serialized verbatim to the summary artifact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value held by one cell, as read in formula-preserving mode
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    /// Formula text, always starting with `=`
    Formula(String),
    Text(String),
    Number(f64),
    Boolean(bool),
    /// Dates, durations, error codes and anything else, in display form
    Other(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) | CellValue::Formula(s) | CellValue::Other(s) => s.is_empty(),
            CellValue::Number(_) | CellValue::Boolean(_) => false,
        }
    }

    /// Formula text if this cell holds a formula.
    ///
    /// Text that begins with `=` counts as a formula as well.
    pub fn formula(&self) -> Option<&str> {
        match self {
            CellValue::Formula(f) => Some(f.as_str()),
            CellValue::Text(s) if s.starts_with('=') => Some(s.as_str()),
            _ => None,
        }
    }

    /// Text eligible for keyword matching: labels and formula text alike
    pub fn label(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) | CellValue::Formula(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Formula(s) | CellValue::Text(s) | CellValue::Other(s) => f.write_str(s),
            CellValue::Number(n) => write_number(f, *n),
            CellValue::Boolean(b) => f.write_str(if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

/// Plain notation in [1e-4, 1e16), exponent form (`1e+21`, `1.5e-05`) outside
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let magnitude = n.abs();
    if n == 0.0 || !n.is_finite() || (1e-4..1e16).contains(&magnitude) {
        return write!(f, "{}", n);
    }

    let scientific = format!("{:e}", n);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => f.write_str(&scientific),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRecord {
    pub cell: String,
    pub formula: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCellRecord {
    pub cell: String,
    pub value: String,
}

/// Workbook-level defined name whose reference targets a given sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRangeRecord {
    pub name: String,
    pub refers_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    pub name: String,
    pub max_row: u32,
    pub max_col: u32,
    pub formulas: Vec<FormulaRecord>,
    #[serde(default)]
    pub named_ranges: Vec<NamedRangeRecord>,
    pub key_cells: Vec<KeywordCellRecord>,
}

impl SheetSummary {
    pub fn new(name: impl Into<String>, max_row: u32, max_col: u32) -> Self {
        Self {
            name: name.into(),
            max_row,
            max_col,
            formulas: Vec::new(),
            named_ranges: Vec::new(),
            key_cells: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sheets: Vec<SheetSummary>,
    pub total_sheets: usize,
}

impl AnalysisResult {
    pub fn sheet(&self, name: &str) -> Option<&SheetSummary> {
        self.sheets.iter().find(|s| s.name == name)
    }
}
