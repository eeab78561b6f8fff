use clap::Parser;

/// This is a program to rank alternatives with the TOPSIS method.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the analysis. The other flags override its content.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The table of alternatives, in CSV or Excel format. The first row is the header,
    /// the first column contains the names of the alternatives. Use '-' to read CSV from the standard input.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (csv, xlsx or xls) The type of the input. By default, it is inferred from the extension of the file.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (default: the first worksheet) When using an Excel file, the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (list of comma-separated numbers) The weight of each criterion, for example "1,1,2,1".
    #[clap(short, long, value_parser, allow_hyphen_values = true)]
    pub weights: Option<String>,

    /// (list of comma-separated + or -) The impact of each criterion: + if higher values are better,
    /// - if lower values are better. For example "+,+,-,+".
    #[clap(long, value_parser, allow_hyphen_values = true)]
    pub impacts: Option<String>,

    /// (file path, directory, 'stdout' or empty) If specified, the result will be exported to this location.
    /// If the path is a directory, the file is named topsis-result.csv (or .json).
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (csv or json, default csv) The format of the exported result.
    #[clap(long, value_parser)]
    pub out_format: Option<String>,

    /// (file path) A reference file containing the result of an analysis in JSON format. If provided, the
    /// program will check that the computed result matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, weights that are not numbers are reported instead of being ignored.
    #[clap(long, takes_value = false)]
    pub strict_weights: bool,

    /// If passed as an argument, alternatives at zero distance of both ideal points get a score of 0.5
    /// instead of NaN.
    #[clap(long, takes_value = false)]
    pub zero_distance_midpoint: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
