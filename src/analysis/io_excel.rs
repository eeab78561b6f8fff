// Primitives for reading Excel files (xlsx and xls).

use calamine::{open_workbook_auto, DataType, Reader};
use log::debug;
use snafu::prelude::*;
use topsis::{RawCell, RawTable};

use crate::analysis::*;

/// Reads one worksheet of a workbook. Without a name, the first worksheet is used.
pub fn read_excel_table(path: &str, worksheet_name: Option<&str>) -> TopsisResult<RawTable> {
    debug!(
        "read_excel_table: path: {:?} worksheet: {:?}",
        path, worksheet_name
    );
    let mut workbook = open_workbook_auto(path).context(OpeningExcelSnafu { path })?;

    let wrange = match worksheet_name {
        // A worksheet name was provided, use it.
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { path, name })?
            .context(OpeningExcelSnafu { path })?,
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(OpeningExcelSnafu { path })?,
    };

    let res: RawTable = wrange.rows().map(read_row).collect();
    debug!("read_excel_table: {} rows", res.len());
    Ok(res)
}

// The trailing empty cells come from the rectangular shape of the range, they are not part of the row.
fn read_row(row: &[DataType]) -> Vec<RawCell> {
    let mut cells: Vec<RawCell> = row.iter().map(read_cell).collect();
    while let Some(RawCell::Empty) = cells.last() {
        cells.pop();
    }
    cells
}

fn read_cell(cell: &DataType) -> RawCell {
    match cell {
        DataType::Int(i) => RawCell::Number(*i as f64),
        DataType::Float(f) => RawCell::Number(*f),
        // Dates are kept as their serial number.
        DataType::DateTime(f) => RawCell::Number(*f),
        DataType::String(s) => RawCell::Text(s.clone()),
        DataType::Bool(b) => RawCell::Bool(*b),
        DataType::Empty => RawCell::Empty,
        #[allow(unreachable_patterns)]
        other => RawCell::Text(format!("{:?}", other)),
    }
}
