// Rendering and export of the results.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use serde_json::json;
use serde_json::Value as JSValue;
use snafu::prelude::*;
use topsis::RankedResult;

use crate::analysis::io_common::default_output_name;
use crate::analysis::*;

const HEADERS: [&str; 3] = ["Alternative", "TOPSIS Score", "Rank"];

/// Renders the result as a table of text, one line per alternative.
pub fn render_table(result: &RankedResult) -> String {
    let rows: Vec<[String; 3]> = result
        .iter()
        .map(|r| {
            [
                r.alternative.clone(),
                r.score.to_string(),
                r.rank.to_string(),
            ]
        })
        .collect();
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows.iter() {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let separator = format!(
        "|{}|",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<String>>()
            .join("|")
    );

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let mut lines: Vec<String> = vec![format_line(&header, &widths), separator];
    for row in rows.iter() {
        lines.push(format_line(row, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(c, w)| format!("{:<width$}", c, width = *w))
        .collect();
    format!("| {} |", parts.join(" | "))
}

/// Writes the result in CSV, with a header row.
pub fn write_csv<W: Write>(result: &RankedResult, out: W) -> TopsisResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in result.iter() {
        wtr.serialize(row).context(WritingCsvSnafu {})?;
    }
    if result.is_empty() {
        wtr.write_record(HEADERS).context(WritingCsvSnafu {})?;
    }
    wtr.flush()
        .map_err(csv::Error::from)
        .context(WritingCsvSnafu {})?;
    Ok(())
}

/// The summary of an analysis in JSON: the parameters and the results.
pub fn build_summary_js(analysis: &Analysis) -> JSValue {
    let impacts: Vec<&str> = analysis.impacts.iter().map(|i| i.symbol()).collect();
    json!({
        "config": {
            "criteria": analysis.dataset.criteria,
            "weights": analysis.weights,
            "impacts": impacts,
        },
        "results": analysis.result,
    })
}

fn output_path(target: &str, format: OutputFormat) -> PathBuf {
    let p = Path::new(target);
    if p.is_dir() {
        p.join(default_output_name(format))
    } else {
        p.to_path_buf()
    }
}

/// Exports the result to a file (or a directory, or `stdout`).
pub fn export_result(analysis: &Analysis, target: &str, format: OutputFormat) -> TopsisResult<()> {
    if target == "stdout" {
        let stdout = std::io::stdout();
        return write_result(analysis, stdout.lock(), format, target);
    }
    let path = output_path(target, format);
    let path_s = path.display().to_string();
    info!("Writing the result to {:?}", path_s);
    let file = File::create(&path).context(WritingOutputSnafu { path: path_s.clone() })?;
    write_result(analysis, file, format, &path_s)
}

fn write_result<W: Write>(
    analysis: &Analysis,
    mut out: W,
    format: OutputFormat,
    path: &str,
) -> TopsisResult<()> {
    match format {
        OutputFormat::Csv => write_csv(&analysis.result, out),
        OutputFormat::Json => {
            let pretty = serde_json::to_string_pretty(&build_summary_js(analysis))
                .context(ParsingJsonSnafu {})?;
            writeln!(out, "{}", pretty).context(WritingOutputSnafu { path })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topsis::*;

    fn analysis() -> Analysis {
        Analysis {
            dataset: Dataset {
                names: vec!["M1".to_string(), "Second one".to_string()],
                matrix: vec![vec![1.0, 2.0], vec![2.0, 1.0]],
                criteria: vec!["A".to_string(), "B".to_string()],
            },
            weights: vec![1.0, 0.5],
            impacts: vec![Impact::Beneficial, Impact::Cost],
            result: vec![
                ScoreRow {
                    alternative: "M1".to_string(),
                    score: 0.25,
                    rank: 2,
                },
                ScoreRow {
                    alternative: "Second one".to_string(),
                    score: 0.75,
                    rank: 1,
                },
            ],
        }
    }

    #[test]
    fn csv_export() {
        let mut buf: Vec<u8> = Vec::new();
        write_csv(&analysis().result, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(
            s,
            "Alternative,TOPSIS Score,Rank\nM1,0.25,2\nSecond one,0.75,1\n"
        );
    }

    #[test]
    fn csv_export_empty() {
        let mut buf: Vec<u8> = Vec::new();
        write_csv(&Vec::new(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Alternative,TOPSIS Score,Rank\n"
        );
    }

    #[test]
    fn table() {
        let s = render_table(&analysis().result);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "| Alternative | TOPSIS Score | Rank |");
        assert_eq!(lines[1], "|-------------|--------------|------|");
        assert_eq!(lines[2], "| M1          | 0.25         | 2    |");
        assert_eq!(lines[3], "| Second one  | 0.75         | 1    |");
    }

    #[test]
    fn summary() {
        let js = build_summary_js(&analysis());
        assert_eq!(js["config"]["impacts"], json!(["+", "-"]));
        assert_eq!(js["config"]["weights"], json!([1.0, 0.5]));
        assert_eq!(js["results"][1]["Alternative"], json!("Second one"));
        assert_eq!(js["results"][1]["TOPSIS Score"], json!(0.75));
        assert_eq!(js["results"][1]["Rank"], json!(1));
    }

    #[test]
    fn export_to_directory() {
        let dir = std::env::temp_dir().join(format!("topsis-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let target = dir.display().to_string();
        export_result(&analysis(), &target, OutputFormat::Csv).unwrap();
        let written = std::fs::read_to_string(dir.join("topsis-result.csv")).unwrap();
        assert!(written.starts_with("Alternative,TOPSIS Score,Rank\n"));
        export_result(&analysis(), &target, OutputFormat::Json).unwrap();
        let written = std::fs::read_to_string(dir.join("topsis-result.json")).unwrap();
        let js: JSValue = serde_json::from_str(&written).unwrap();
        assert_eq!(js, build_summary_js(&analysis()));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
