mod config_reader;
mod io_common;
mod io_csv;
mod io_excel;
mod io_export;

use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use topsis::*;

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::analysis::config_reader::*;
use crate::analysis::io_common::*;
use crate::analysis::io_export::*;
use crate::args::Args;

#[derive(Debug, Snafu)]
pub enum TopsisError {
    #[snafu(display("Please select a CSV/XLSX file."))]
    MissingInput {},
    #[snafu(display("Unsupported file format. Use .csv, .xls, or .xlsx."))]
    UnsupportedFormat { path: String },
    #[snafu(display("Unable to parse CSV file {path}: {source}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Unable to parse CSV file: line {lineno}: {source}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Unable to parse Excel file {path}: {source}"))]
    OpeningExcel {
        source: calamine::Error,
        path: String,
    },
    #[snafu(display("Unable to parse Excel file {path}: no worksheet found"))]
    EmptyExcel { path: String },
    #[snafu(display("Unable to parse Excel file {path}: missing worksheet {name}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON: {source}"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("{source}"))]
    Validation { source: ValidationError },
    #[snafu(display("Unknown option for {option}: {value}"))]
    UnknownOption { option: String, value: String },
    #[snafu(display("Error writing the result to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error writing the result in CSV: {source}"))]
    WritingCsv { source: csv::Error },
    #[snafu(display("Difference detected between calculated result and reference result"))]
    ReferenceMismatch {},
}

pub type TopsisResult<T> = Result<T, TopsisError>;

/// Everything that is needed to run one analysis.
///
/// It is assembled from the configuration file and the command line.
#[derive(PartialEq, Debug, Clone)]
pub struct RunSettings {
    pub input: String,
    pub input_type: InputType,
    pub excel_worksheet_name: Option<String>,
    pub weights: String,
    pub impacts: String,
    pub out: Option<String>,
    pub out_format: OutputFormat,
    pub reference: Option<String>,
    pub rules: RankRules,
}

/// The outcome of a successful analysis.
#[derive(PartialEq, Debug, Clone)]
pub struct Analysis {
    pub dataset: Dataset,
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
    pub result: RankedResult,
}

/// Holds the latest successful analysis.
///
/// A new analysis replaces the previous one completely. A failed analysis leaves
/// the previous one in place.
#[derive(Debug, Default)]
pub struct Session {
    latest: Option<Analysis>,
}

impl Session {
    pub fn new() -> Session {
        Session { latest: None }
    }

    pub fn latest(&self) -> Option<&Analysis> {
        self.latest.as_ref()
    }

    /// Validates the table and the parameters, and ranks the alternatives.
    pub fn analyze(
        &mut self,
        table: &[Vec<RawCell>],
        weights: &str,
        impacts: &str,
        rules: &RankRules,
    ) -> TopsisResult<&Analysis> {
        let dataset = prepare(table).context(ValidationSnafu {})?;
        let num_criteria = dataset.criteria_count();
        let weights = parse_weights_with(weights, num_criteria, rules.weight_parsing)
            .context(ValidationSnafu {})?;
        let impacts = parse_impacts(impacts, num_criteria).context(ValidationSnafu {})?;
        let result = rank_dataset(&dataset, &weights, &impacts, rules).context(ValidationSnafu {})?;
        for row in result.iter().filter(|r| !r.score.is_finite()) {
            warn!(
                "Alternative {:?} has no defined score: {}",
                row.alternative, row.score
            );
        }
        let analysis: &Analysis = self.latest.insert(Analysis {
            dataset,
            weights,
            impacts,
            result,
        });
        Ok(analysis)
    }

    /// Writes the latest result to the target. Nothing is written if no analysis succeeded yet.
    pub fn export(&self, target: &str, format: OutputFormat) -> TopsisResult<()> {
        match self.latest() {
            Some(analysis) => export_result(analysis, target, format),
            None => {
                warn!("export: no result to export");
                Ok(())
            }
        }
    }
}

/// Merges the configuration file (if any) and the command line flags.
pub fn build_settings(args: &Args) -> TopsisResult<RunSettings> {
    let config: RunConfig = match &args.config {
        Some(config_path) => read_config(config_path)?,
        None => RunConfig::default(),
    };
    debug!("build_settings: config: {:?}", config);

    let input = args
        .input
        .clone()
        .or_else(|| config.input_file.clone())
        .filter(|s| !s.is_empty())
        .context(MissingInputSnafu {})?;
    let input_type = match args.input_type.clone().or_else(|| config.input_type.clone()) {
        Some(name) => InputType::from_name(&name)?,
        None => InputType::from_path(&input)?,
    };
    let out_format = match args.out_format.clone().or_else(|| config.output_format.clone()) {
        Some(name) => OutputFormat::from_name(&name)?,
        None => OutputFormat::Csv,
    };

    let mut rules = config.rank_rules()?;
    if args.strict_weights {
        rules.weight_parsing = WeightParsing::Strict;
    }
    if args.zero_distance_midpoint {
        rules.zero_distance = ZeroDistancePolicy::Midpoint;
    }

    Ok(RunSettings {
        input,
        input_type,
        excel_worksheet_name: args
            .excel_worksheet_name
            .clone()
            .or(config.excel_worksheet_name),
        weights: args.weights.clone().or(config.weights).unwrap_or_default(),
        impacts: args.impacts.clone().or(config.impacts).unwrap_or_default(),
        out: args.out.clone().or(config.output_file),
        out_format,
        reference: args.reference.clone(),
        rules,
    })
}

/// Reads the table, runs the analysis in the session and exports the result.
pub fn run_analysis(settings: &RunSettings, session: &mut Session) -> TopsisResult<()> {
    info!("Attempting to read table {:?}", settings.input);
    let table = read_table(
        &settings.input,
        settings.input_type,
        settings.excel_worksheet_name.as_deref(),
    )?;
    debug!("run_analysis: {} rows read", table.len());

    let analysis = session.analyze(
        &table,
        &settings.weights,
        &settings.impacts,
        &settings.rules,
    )?;
    info!(
        "Ranked {} alternatives on {} criteria",
        analysis.dataset.alternatives_count(),
        analysis.dataset.criteria_count()
    );
    println!("{}", render_table(&analysis.result));

    // The reference result, if provided for comparison
    if let Some(reference_p) = &settings.reference {
        check_reference(reference_p, analysis)?;
    }

    if let Some(out) = &settings.out {
        session.export(out, settings.out_format)?;
    }
    Ok(())
}

fn check_reference(reference_path: &str, analysis: &Analysis) -> TopsisResult<()> {
    let reference = read_summary(reference_path)?;
    let pretty_reference =
        serde_json::to_string_pretty(&reference).context(ParsingJsonSnafu {})?;
    let computed: JSValue = build_summary_js(analysis);
    let pretty_computed = serde_json::to_string_pretty(&computed).context(ParsingJsonSnafu {})?;
    if pretty_reference != pretty_computed {
        warn!("Found differences with the reference result");
        print_diff(pretty_reference.as_str(), pretty_computed.as_str(), "\n");
        return ReferenceMismatchSnafu {}.fail();
    }
    info!("The result matches the reference {:?}", reference_path);
    Ok(())
}

pub fn run(args: &Args) -> TopsisResult<Session> {
    let settings = build_settings(args)?;
    info!("settings: {:?}", settings);
    let mut session = Session::new();
    run_analysis(&settings, &mut session)?;
    Ok(session)
}
