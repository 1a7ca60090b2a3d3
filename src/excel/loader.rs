//! Workbook loading - any calamine-supported file → sparse sheet grids

use crate::error::{InspectError, InspectResult};
use crate::types::CellValue;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

static EMPTY: CellValue = CellValue::Empty;

/// One worksheet with values and formulas merged, keyed by zero-based
/// (row, col). Only non-empty cells are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    /// 1-based index of the last occupied row
    pub max_row: u32,
    /// 1-based index of the last occupied column
    pub max_col: u32,
    cells: BTreeMap<(u32, u32), CellValue>,
}

impl SheetGrid {
    /// Empty sheet; reports a 1×1 extent like an untouched worksheet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_row: 1,
            max_col: 1,
            cells: BTreeMap::new(),
        }
    }

    /// Merge a value layer and an optional formula layer.
    ///
    /// A non-empty formula wins over the cached value at the same position.
    pub fn from_ranges(
        name: impl Into<String>,
        values: &Range<Data>,
        formulas: Option<&Range<String>>,
    ) -> Self {
        let mut grid = Self::new(name);

        if let Some((row0, col0)) = values.start() {
            for (row, col, data) in values.cells() {
                let value = convert_data(data);
                if !value.is_empty() {
                    grid.set(row0 + row as u32, col0 + col as u32, value);
                }
            }
        }
        grid.extend_extent(values.end());

        if let Some(formulas) = formulas {
            if let Some((row0, col0)) = formulas.start() {
                for (row, col, formula) in formulas.cells() {
                    if formula.is_empty() {
                        continue;
                    }
                    // calamine strips the leading '='
                    let text = if formula.starts_with('=') {
                        formula.clone()
                    } else {
                        format!("={}", formula)
                    };
                    grid.set(row0 + row as u32, col0 + col as u32, CellValue::Formula(text));
                }
            }
            grid.extend_extent(formulas.end());
        }

        grid
    }

    /// Insert a value at a zero-based position, growing the extent to cover it
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        self.extend_extent(Some((row, col)));
        if value.is_empty() {
            self.cells.remove(&(row, col));
        } else {
            self.cells.insert((row, col), value);
        }
    }

    pub fn get(&self, row: u32, col: u32) -> &CellValue {
        self.cells.get(&(row, col)).unwrap_or(&EMPTY)
    }

    /// Non-empty cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue)> + '_ {
        self.cells.iter().map(|(&(row, col), value)| (row, col, value))
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Grow the extent to cover a zero-based (row, col) corner without adding a cell
    pub fn include_extent(&mut self, end: (u32, u32)) {
        self.extend_extent(Some(end));
    }

    fn extend_extent(&mut self, end: Option<(u32, u32)>) {
        if let Some((row, col)) = end {
            self.max_row = self.max_row.max(row + 1);
            self.max_col = self.max_col.max(col + 1);
        }
    }
}

fn convert_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        other => CellValue::Other(other.to_string()),
    }
}

/// Read-only handle on a workbook file
pub struct WorkbookLoader {
    path: PathBuf,
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookLoader {
    /// Open a workbook, detecting the format from the file.
    ///
    /// Fails with `NotFound` when `path` is not an existing file.
    pub fn open<P: AsRef<Path>>(path: P) -> InspectResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(InspectError::NotFound(path.to_path_buf()));
        }

        let workbook = open_workbook_auto(path).map_err(|e| InspectError::analysis(path, e))?;
        debug!(
            path = %path.display(),
            sheets = workbook.sheet_names().len(),
            "opened workbook"
        );

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in stored order
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Workbook-level defined names as (name, reference)
    pub fn defined_names(&self) -> Vec<(String, String)> {
        self.workbook.defined_names().to_vec()
    }

    /// Load one sheet with formulas preserved
    pub fn load_sheet(&mut self, name: &str) -> InspectResult<SheetGrid> {
        let values = self
            .workbook
            .worksheet_range(name)
            .map_err(|e| InspectError::analysis(&self.path, e))?;

        let formulas = match self.workbook.worksheet_formula(name) {
            Ok(range) => Some(range),
            Err(e) => {
                warn!(sheet = name, error = %e, "formula layer unavailable, using cached values");
                None
            }
        };

        let mut grid = SheetGrid::from_ranges(name, &values, formulas.as_ref());

        // Formatted blank cells count toward the used area but never reach
        // the ranges; xlsx records the full area in the sheet's <dimension>.
        if let Sheets::Xlsx(xlsx) = &mut self.workbook {
            match xlsx.worksheet_cells_reader(name) {
                Ok(reader) => grid.include_extent(reader.dimensions().end),
                Err(e) => {
                    warn!(sheet = name, error = %e, "sheet dimension unavailable, using cell bounds")
                }
            }
        }

        debug!(
            sheet = name,
            max_row = grid.max_row,
            max_col = grid.max_col,
            cells = grid.cell_count(),
            "loaded sheet"
        );
        Ok(grid)
    }
}
