// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

use serde::Serialize;

/// A cell value, as produced by the file decoders.
///
/// Decoders do not interpret the content: the conversion to a number is
/// done explicitly by [RawCell::to_number] when the dataset is prepared.
#[derive(PartialEq, Debug, Clone)]
pub enum RawCell {
    /// A missing cell, or a cell without any content.
    Empty,
    /// Some text. It may still contain a number (all the CSV cells are text).
    Text(String),
    /// A numeric cell, as found in spreadsheets.
    Number(f64),
    /// A boolean cell. It is never treated as a number.
    Bool(bool),
}

/// The table of cells, row by row. The rows do not need to have the same length.
pub type RawTable = Vec<Vec<RawCell>>;

impl RawCell {
    /// True if the cell carries no visible content.
    pub fn is_blank(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Converts the cell to a number.
    ///
    /// Text is trimmed before being parsed. Blank text, booleans and
    /// anything that does not read as a number return `None`. In particular
    /// a blank cell is never read as zero.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            RawCell::Number(x) if !x.is_nan() => Some(*x),
            RawCell::Text(s) => parse_number(s),
            _ => None,
        }
    }

    /// The label of the cell, as it would be displayed. `None` for blank cells.
    pub fn to_label(&self) -> Option<String> {
        match self {
            RawCell::Empty => None,
            RawCell::Text(s) if s.is_empty() => None,
            RawCell::Text(s) => Some(s.clone()),
            RawCell::Number(x) => Some(x.to_string()),
            RawCell::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for RawCell {
    fn from(s: &str) -> Self {
        RawCell::Text(s.to_string())
    }
}

impl From<f64> for RawCell {
    fn from(x: f64) -> Self {
        RawCell::Number(x)
    }
}

/// The numeric conversion shared by the cells and the weights.
pub(crate) fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Only the spelled-out infinity is a number, not `inf` or `INFINITY`.
    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(x) if !x.is_nan() => Some(x),
        _ => None,
    }
}

/// The direction of a criterion.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Impact {
    /// Higher values are better (`+`).
    Beneficial,
    /// Lower values are better (`-`).
    Cost,
}

impl Impact {
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Beneficial => "+",
            Impact::Cost => "-",
        }
    }
}

/// A validated dataset: one name and one row of criteria values per alternative.
///
/// Invariants (checked by [crate::prepare]):
/// - `names` and `matrix` have the same length, which is at least 1
/// - every row of the matrix has exactly `criteria.len()` entries, which is at least 2
#[derive(PartialEq, Debug, Clone)]
pub struct Dataset {
    pub names: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
    /// The labels of the criteria, from the header. Only used for display.
    pub criteria: Vec<String>,
}

impl Dataset {
    pub fn criteria_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn alternatives_count(&self) -> usize {
        self.names.len()
    }
}

// ******** Output data structures *********

/// The outcome for one alternative.
///
/// The serialized field names are part of the exported format.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct ScoreRow {
    #[serde(rename = "Alternative")]
    pub alternative: String,
    #[serde(rename = "TOPSIS Score")]
    pub score: f64,
    #[serde(rename = "Rank")]
    pub rank: u32,
}

/// The scores of all the alternatives, in the order of the input.
pub type RankedResult = Vec<ScoreRow>;

/// Reasons for rejecting the input before any computation takes place.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ValidationError {
    /// Fewer than two non-blank rows (a header and at least one alternative).
    NotEnoughRows,
    /// The header has fewer than three columns.
    NotEnoughColumns { width: usize },
    /// A criterion cell could not be read as a number. The row starts at 1.
    NonNumericValue { row: usize },
    /// The number of weights does not match the number of criteria.
    WeightCount { expected: usize },
    /// Strict parsing only: a weight that is not a number. The position starts at 1.
    InvalidWeight { token: String, position: usize },
    /// Wrong number of impacts, or a symbol other than `+` or `-`.
    Impacts { expected: usize },
    /// A dataset built by hand whose names, rows and criteria do not agree.
    InconsistentDataset,
}

impl Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NotEnoughRows => {
                write!(f, "File must include header row and at least one data row.")
            }
            ValidationError::NotEnoughColumns { .. } => {
                write!(f, "Dataset must have at least 3 columns.")
            }
            ValidationError::NonNumericValue { row } => {
                write!(f, "Non-numeric value detected in row {}.", row)
            }
            ValidationError::WeightCount { expected } => {
                write!(f, "Please provide exactly {} weights.", expected)
            }
            ValidationError::InvalidWeight { token, position } => {
                write!(f, "Invalid weight '{}' at position {}.", token, position)
            }
            ValidationError::Impacts { expected } => write!(
                f,
                "Impacts must include exactly {} values using only + or -.",
                expected
            ),
            ValidationError::InconsistentDataset => {
                write!(f, "Dataset rows do not match its names and criteria.")
            }
        }
    }
}

// ********* Configuration **********

/// What to do when an alternative is at the same distance (zero) from
/// both ideal points, which happens when all the alternatives are identical.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ZeroDistancePolicy {
    /// Keep the result of the division (NaN).
    Propagate,
    /// Give the alternative a score of 0.5.
    Midpoint,
}

/// How to treat the weight tokens that are not numbers.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum WeightParsing {
    /// Drop them, and then check the number of remaining weights.
    Lenient,
    /// Reject the first one.
    Strict,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RankRules {
    pub zero_distance: ZeroDistancePolicy,
    pub weight_parsing: WeightParsing,
}

impl RankRules {
    pub const DEFAULT_RULES: RankRules = RankRules {
        zero_distance: ZeroDistancePolicy::Propagate,
        weight_parsing: WeightParsing::Lenient,
    };
}

impl Default for RankRules {
    fn default() -> Self {
        RankRules::DEFAULT_RULES
    }
}
