use snafu::prelude::*;
use std::path::Path;

use topsis::RawTable;

use crate::analysis::io_csv::read_csv_table;
use crate::analysis::io_excel::read_excel_table;
use crate::analysis::*;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Csv,
    Xlsx,
    Xls,
}

impl InputType {
    pub fn from_name(name: &str) -> TopsisResult<InputType> {
        match name.to_lowercase().as_str() {
            "csv" => Ok(InputType::Csv),
            "xlsx" => Ok(InputType::Xlsx),
            "xls" => Ok(InputType::Xls),
            _ => UnsupportedFormatSnafu { path: name }.fail(),
        }
    }

    /// Infers the type from the extension of the file.
    pub fn from_path(path: &str) -> TopsisResult<InputType> {
        if path == "-" {
            return Ok(InputType::Csv);
        }
        let ext = Path::new(path)
            .extension()
            .and_then(|s| s.to_str())
            .context(UnsupportedFormatSnafu { path })?;
        InputType::from_name(ext).map_err(|_| TopsisError::UnsupportedFormat {
            path: path.to_string(),
        })
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> TopsisResult<OutputFormat> {
        match name.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => UnknownOptionSnafu {
                option: "outputFormat",
                value: name,
            }
            .fail(),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Reads the first worksheet (or the named worksheet) or the CSV file into a table of cells.
pub fn read_table(
    path: &str,
    input_type: InputType,
    worksheet_name: Option<&str>,
) -> TopsisResult<RawTable> {
    match input_type {
        InputType::Csv => read_csv_table(path),
        InputType::Xlsx | InputType::Xls => read_excel_table(path, worksheet_name),
    }
}

/// The file name of the export when the target is a directory.
pub fn default_output_name(format: OutputFormat) -> String {
    format!("topsis-result.{}", format.extension())
}
