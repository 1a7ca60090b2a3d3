//! Workbook access
//!
//! - `loader`: open a workbook read-only and merge value/formula layers
//! - `address`: A1-style coordinates and defined-name sheet matching

mod address;
mod loader;

pub use address::{column_letter, coordinate, references_sheet};
pub use loader::{SheetGrid, WorkbookLoader};
