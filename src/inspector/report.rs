//! Console report
//!
//! Layout, per run:
//! file banner → per sheet (banner, extent, preview, formulas, key cells)
//! → completion banner.

use crate::config::PreviewLimits;
use crate::excel::SheetGrid;
use crate::types::SheetSummary;
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

const WIDTH: usize = 80;
const PREVIEW_RULE: usize = 120;

/// First `max` characters of `s`
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub fn file_banner<W: Write>(out: &mut W, path: &Path, total_sheets: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(WIDTH))?;
    writeln!(
        out,
        "{}",
        format!("EXCEL FILE ANALYSIS: {}", path.display()).bold()
    )?;
    writeln!(out, "{}\n", "=".repeat(WIDTH))?;
    writeln!(out, "Total Sheets: {}\n", total_sheets)?;
    Ok(())
}

pub fn sheet_banner<W: Write>(out: &mut W, grid: &SheetGrid) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(WIDTH))?;
    writeln!(
        out,
        "{}",
        format!("SHEET: {}", grid.name).bold().bright_blue()
    )?;
    writeln!(out, "{}", "─".repeat(WIDTH))?;
    writeln!(
        out,
        "Dimensions: {} rows × {} columns\n",
        grid.max_row, grid.max_col
    )?;
    Ok(())
}

/// Top-left corner of the whole sheet, independent of the scan window.
///
/// Always prints `limits.rows` lines; columns stop at the sheet's extent.
pub fn preview<W: Write>(out: &mut W, grid: &SheetGrid, limits: &PreviewLimits) -> io::Result<()> {
    writeln!(out, "{}", format!("First {} rows preview:", limits.rows).cyan())?;
    writeln!(out, "{}", "-".repeat(PREVIEW_RULE))?;

    let cols = grid.max_col.min(limits.cols);
    for row in 0..limits.rows {
        let values: Vec<String> = (0..cols)
            .map(|col| {
                let display = grid.get(row, col).to_string();
                truncate_chars(&display, limits.cell_width).to_string()
            })
            .collect();
        writeln!(out, "Row {:3}: {}", row + 1, values.join(" | "))?;
    }
    Ok(())
}

/// Formula, key-cell and named-range listings; nothing for empty categories
pub fn findings<W: Write>(
    out: &mut W,
    summary: &SheetSummary,
    limits: &PreviewLimits,
) -> io::Result<()> {
    if !summary.formulas.is_empty() {
        writeln!(
            out,
            "\n{}",
            format!("Formulas found: {}", summary.formulas.len()).green()
        )?;
        writeln!(out, "Sample formulas (first {}):", limits.formulas)?;
        for record in summary.formulas.iter().take(limits.formulas) {
            writeln!(
                out,
                "  {}: {}",
                record.cell,
                truncate_chars(&record.formula, limits.formula_width)
            )?;
        }
    }

    if !summary.key_cells.is_empty() {
        writeln!(
            out,
            "\n{}",
            format!("Key cells found: {}", summary.key_cells.len()).green()
        )?;
        writeln!(out, "Sample key cells (first {}):", limits.key_cells)?;
        for record in summary.key_cells.iter().take(limits.key_cells) {
            writeln!(out, "  {}: {}", record.cell, record.value)?;
        }
    }

    if !summary.named_ranges.is_empty() {
        writeln!(out, "\nNamed ranges: {}", summary.named_ranges.len())?;
        for record in &summary.named_ranges {
            writeln!(out, "  {}: {}", record.name, record.refers_to)?;
        }
    }
    Ok(())
}

pub fn completion_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(WIDTH))?;
    writeln!(out, "{}", "ANALYSIS COMPLETE".bold().green())?;
    writeln!(out, "{}\n", "=".repeat(WIDTH))?;
    Ok(())
}
