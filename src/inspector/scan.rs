//! Cell classification inside the scan window

use crate::config::InspectorConfig;
use crate::excel::{coordinate, references_sheet, SheetGrid};
use crate::types::{FormulaRecord, KeywordCellRecord, NamedRangeRecord, SheetSummary};

/// Build the summary for one sheet.
///
/// Only cells inside `config.window` are classified; the reported extent is
/// always the sheet's full extent.
pub fn scan_sheet(grid: &SheetGrid, config: &InspectorConfig) -> SheetSummary {
    let mut summary = SheetSummary::new(grid.name.clone(), grid.max_row, grid.max_col);

    for (row, col, value) in grid.cells() {
        if !config.window.contains(row, col) {
            continue;
        }

        if let Some(formula) = value.formula() {
            summary.formulas.push(FormulaRecord {
                cell: coordinate(row, col),
                formula: formula.to_string(),
            });
        }

        if let Some(label) = value.label() {
            if config.keywords.matches(label) {
                summary.key_cells.push(KeywordCellRecord {
                    cell: coordinate(row, col),
                    value: label.to_string(),
                });
            }
        }
    }

    summary
}

/// Defined names whose reference points into `sheet`, in workbook order
pub fn named_ranges_for(sheet: &str, defined_names: &[(String, String)]) -> Vec<NamedRangeRecord> {
    defined_names
        .iter()
        .filter(|(_, refers_to)| references_sheet(refers_to, sheet))
        .map(|(name, refers_to)| NamedRangeRecord {
            name: name.clone(),
            refers_to: refers_to.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeywordSet, ScanWindow};
    use crate::types::CellValue;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn overview_grid() -> SheetGrid {
        let mut grid = SheetGrid::new("Overview");
        grid.set(1, 1, text("Energy Ratio"));
        grid.set(4, 2, CellValue::Formula("=A1+A2".to_string()));
        grid.set(0, 0, CellValue::Number(1.0));
        grid.set(9, 4, text("Revenue"));
        grid
    }

    #[test]
    fn test_scan_overview_example() {
        let summary = scan_sheet(&overview_grid(), &InspectorConfig::default());

        assert_eq!(summary.name, "Overview");
        assert_eq!((summary.max_row, summary.max_col), (10, 5));
        assert_eq!(
            summary.key_cells,
            vec![KeywordCellRecord {
                cell: "B2".to_string(),
                value: "Energy Ratio".to_string(),
            }]
        );
        assert_eq!(
            summary.formulas,
            vec![FormulaRecord {
                cell: "C5".to_string(),
                formula: "=A1+A2".to_string(),
            }]
        );
    }

    #[test]
    fn test_window_boundary_excludes_row_101_and_col_51() {
        let mut grid = SheetGrid::new("Large");
        grid.set(99, 49, CellValue::Formula("=1".to_string()));
        grid.set(100, 0, CellValue::Formula("=2".to_string()));
        grid.set(0, 50, CellValue::Formula("=3".to_string()));
        grid.set(99, 0, text("Pillar"));
        grid.set(100, 1, text("Pillar"));
        grid.set(1, 50, text("Pillar"));

        let summary = scan_sheet(&grid, &InspectorConfig::default());

        let formula_cells: Vec<&str> = summary.formulas.iter().map(|f| f.cell.as_str()).collect();
        let key_cells: Vec<&str> = summary.key_cells.iter().map(|k| k.cell.as_str()).collect();
        assert_eq!(formula_cells, vec!["AX100"]);
        assert_eq!(key_cells, vec!["A100"]);
        // extent is the full sheet, not the window
        assert_eq!((summary.max_row, summary.max_col), (101, 51));
    }

    #[test]
    fn test_formula_text_is_keyword_matched() {
        let mut grid = SheetGrid::new("Calc");
        grid.set(0, 0, CellValue::Formula("=IF(B1>0,\"Energy\",\"none\")".to_string()));
        grid.set(0, 1, text("=not a formula, golden"));
        grid.set(0, 2, CellValue::Formula("=SUM(A2:A9)".to_string()));

        let summary = scan_sheet(&grid, &InspectorConfig::default());

        let formula_cells: Vec<&str> = summary.formulas.iter().map(|f| f.cell.as_str()).collect();
        assert_eq!(formula_cells, vec!["A1", "B1", "C1"]);
        assert_eq!(
            summary.key_cells,
            vec![
                KeywordCellRecord {
                    cell: "A1".to_string(),
                    value: "=IF(B1>0,\"Energy\",\"none\")".to_string(),
                },
                KeywordCellRecord {
                    cell: "B1".to_string(),
                    value: "=not a formula, golden".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_each_cell_recorded_once() {
        let mut grid = SheetGrid::new("Dupes");
        // matches several keywords
        grid.set(2, 3, text("Golden Phi Axis Ratio"));

        let summary = scan_sheet(&grid, &InspectorConfig::default());
        assert_eq!(summary.key_cells.len(), 1);
        assert_eq!(summary.key_cells[0].cell, "D3");
    }

    #[test]
    fn test_non_text_cells_are_ignored() {
        let mut grid = SheetGrid::new("Numbers");
        grid.set(0, 0, CellValue::Number(1.618));
        grid.set(0, 1, CellValue::Boolean(true));
        grid.set(0, 2, CellValue::Other("#DIV/0!".to_string()));

        let summary = scan_sheet(&grid, &InspectorConfig::default());
        assert!(summary.formulas.is_empty());
        assert!(summary.key_cells.is_empty());
    }

    #[test]
    fn test_custom_config() {
        let config = InspectorConfig {
            keywords: KeywordSet::new(["revenue"]),
            window: ScanWindow {
                max_rows: 5,
                max_cols: 5,
            },
            ..InspectorConfig::default()
        };

        let summary = scan_sheet(&overview_grid(), &config);

        // "Energy Ratio" no longer matches, "Revenue" at E10 is outside the window
        assert!(summary.key_cells.is_empty());
        assert_eq!(summary.formulas.len(), 1);
    }

    #[test]
    fn test_named_ranges_for_sheet() {
        let defined = vec![
            ("Phi".to_string(), "Overview!$B$2".to_string()),
            ("Total".to_string(), "'Data Sheet'!$A$1:$A$9".to_string()),
            ("Base".to_string(), "Overview!$A$1".to_string()),
        ];

        let records = named_ranges_for("Overview", &defined);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Phi", "Base"]);

        let records = named_ranges_for("Data Sheet", &defined);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].refers_to, "'Data Sheet'!$A$1:$A$9");

        assert!(named_ranges_for("Other", &defined).is_empty());
    }
}
