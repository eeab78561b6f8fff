// Primitives for reading CSV files.

use std::io::Read;

use log::debug;
use snafu::prelude::*;
use topsis::{RawCell, RawTable};

use crate::analysis::*;

/// Reads a CSV file. The path `-` stands for the standard input.
pub fn read_csv_table(path: &str) -> TopsisResult<RawTable> {
    if path == "-" {
        return read_csv_from_reader(std::io::stdin());
    }
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    read_records(rdr)
}

pub fn read_csv_from_reader<R: Read>(input: R) -> TopsisResult<RawTable> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);
    read_records(rdr)
}

// All the cells are kept as text: the conversion to numbers happens when the dataset is prepared.
fn read_records<R: Read>(rdr: csv::Reader<R>) -> TopsisResult<RawTable> {
    let mut res: RawTable = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        let row: Vec<RawCell> = line.iter().map(|s| RawCell::Text(s.to_string())).collect();
        debug!("read_csv_table: lineno: {:?} row: {:?}", lineno, &row);
        res.push(row);
    }
    Ok(res)
}
