/*!

A small implementation of TOPSIS (Technique for Order of Preference by Similarity to Ideal Solution),
to rank a list of alternatives measured on several criteria.

The crate works on tables that have already been read from a file (see [RawCell]), and exposes the three steps
of an analysis:
- [prepare] validates the table and extracts the names and the numbers
- [parse_weights] and [parse_impacts] read the parameters, as typed by a user
- [rank] computes the scores and the ranks

```
use topsis::*;

let rows: Vec<Vec<RawCell>> = vec![
    vec!["Model".into(), "Price".into(), "Storage".into()],
    vec!["M1".into(), RawCell::Number(250.0), RawCell::Number(16.0)],
    vec!["M2".into(), RawCell::Number(200.0), RawCell::Number(32.0)],
];
let (_, result) = analyze(&rows, "1,1", "-,+", &RankRules::DEFAULT_RULES)?;
assert_eq!(result[1].alternative, "M2");
assert_eq!(result[1].rank, 1);
# Ok::<(), ValidationError>(())
```

See the [manual] for the file formats and the command line program.
*/

mod config;
pub mod manual;
mod params;
mod prepare;

use log::{debug, info};
use std::cmp::Ordering;

pub use crate::config::*;
pub use crate::params::*;
pub use crate::prepare::*;

/// Runs a full analysis: validation of the table, parsing of the parameters and ranking.
///
/// This is the sequence of checks that an interactive tool would run when the user asks
/// for an analysis. The first failing check aborts the analysis.
pub fn analyze(
    raw_rows: &[Vec<RawCell>],
    weights: &str,
    impacts: &str,
    rules: &RankRules,
) -> Result<(Dataset, RankedResult), ValidationError> {
    let dataset = prepare(raw_rows)?;
    let weights = parse_weights_with(weights, dataset.criteria_count(), rules.weight_parsing)?;
    let impacts = parse_impacts(impacts, dataset.criteria_count())?;
    let result = rank_with_rules(
        &dataset.names,
        &dataset.matrix,
        &weights,
        &impacts,
        rules,
    );
    Ok((dataset, result))
}

/// Ranks a prepared dataset, after checking that the parameters match its criteria.
pub fn rank_dataset(
    dataset: &Dataset,
    weights: &[f64],
    impacts: &[Impact],
    rules: &RankRules,
) -> Result<RankedResult, ValidationError> {
    let expected = dataset.criteria_count();
    if dataset.names.len() != dataset.matrix.len()
        || dataset.matrix.iter().any(|row| row.len() != expected)
    {
        return Err(ValidationError::InconsistentDataset);
    }
    if weights.len() != expected {
        return Err(ValidationError::WeightCount { expected });
    }
    if impacts.len() != expected {
        return Err(ValidationError::Impacts { expected });
    }
    Ok(rank_with_rules(
        &dataset.names,
        &dataset.matrix,
        weights,
        impacts,
        rules,
    ))
}

/// Computes the TOPSIS scores and ranks with the default rules.
///
/// Arguments:
/// * `names` the name of each alternative
/// * `matrix` one row of criteria values per alternative
/// * `weights` one weight per criterion
/// * `impacts` one impact per criterion
///
/// The result is in the same order as the alternatives. Degenerate inputs (a column of
/// zeros, or identical alternatives) are not errors: the scores are not finite in this case.
///
/// # Panics
///
/// If the dimensions of the inputs do not agree: one name per row of the matrix, one weight
/// and one impact per column. [rank_dataset] checks them and returns an error instead.
pub fn rank(
    names: &[String],
    matrix: &[Vec<f64>],
    weights: &[f64],
    impacts: &[Impact],
) -> RankedResult {
    rank_with_rules(names, matrix, weights, impacts, &RankRules::DEFAULT_RULES)
}

/// Computes the TOPSIS scores and ranks.
///
/// Panics if the dimensions of the inputs do not agree. Use [rank_dataset] for
/// inputs that have not been checked.
pub fn rank_with_rules(
    names: &[String],
    matrix: &[Vec<f64>],
    weights: &[f64],
    impacts: &[Impact],
    rules: &RankRules,
) -> RankedResult {
    assert_eq!(names.len(), matrix.len(), "one name per row");
    assert_eq!(weights.len(), impacts.len(), "one impact per weight");
    assert!(
        matrix.iter().all(|row| row.len() == weights.len()),
        "one weight per column"
    );
    info!(
        "Processing {} alternatives, {} criteria, rules: {:?}",
        matrix.len(),
        weights.len(),
        rules
    );
    if matrix.is_empty() {
        return Vec::new();
    }
    let num_criteria = weights.len();

    let denoms: Vec<f64> = (0..num_criteria)
        .map(|j| matrix.iter().map(|row| row[j] * row[j]).sum::<f64>().sqrt())
        .collect();
    debug!("rank: column norms: {:?}", denoms);

    let weighted: Vec<Vec<f64>> = matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(denoms.iter().zip(weights.iter()))
                .map(|(x, (d, w))| x / d * w)
                .collect()
        })
        .collect();

    let mut ideal_best: Vec<f64> = Vec::with_capacity(num_criteria);
    let mut ideal_worst: Vec<f64> = Vec::with_capacity(num_criteria);
    for (j, impact) in impacts.iter().enumerate() {
        let (max, min) = column_extremes(weighted.iter().map(|row| row[j]));
        match impact {
            Impact::Beneficial => {
                ideal_best.push(max);
                ideal_worst.push(min);
            }
            Impact::Cost => {
                ideal_best.push(min);
                ideal_worst.push(max);
            }
        }
    }
    debug!("rank: ideal best: {:?}", ideal_best);
    debug!("rank: ideal worst: {:?}", ideal_worst);

    let scores: Vec<f64> = weighted
        .iter()
        .map(|row| {
            let d_plus = distance(row, &ideal_best);
            let d_minus = distance(row, &ideal_worst);
            let total = d_plus + d_minus;
            let score = match rules.zero_distance {
                ZeroDistancePolicy::Midpoint if total == 0.0 => 0.5,
                _ => d_minus / total,
            };
            round_score(score)
        })
        .collect();
    debug!("rank: scores: {:?}", scores);

    // The sort is stable: equal scores keep the order of the input.
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|a, b| compare_scores(scores[*a], scores[*b]));
    let mut ranks: Vec<u32> = vec![0; scores.len()];
    for (pos, idx) in order.iter().enumerate() {
        ranks[*idx] = (pos + 1) as u32;
    }

    names
        .iter()
        .zip(scores.iter().zip(ranks.iter()))
        .map(|(name, (score, rank))| ScoreRow {
            alternative: name.clone(),
            score: *score,
            rank: *rank,
        })
        .collect()
}

/// The (max, min) of a column. Any NaN makes both NaN.
fn column_extremes(column: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for x in column {
        if x.is_nan() {
            return (f64::NAN, f64::NAN);
        }
        max = max.max(x);
        min = min.min(x);
    }
    (max, min)
}

fn distance(row: &[f64], point: &[f64]) -> f64 {
    row.iter()
        .zip(point.iter())
        .map(|(x, p)| (x - p) * (x - p))
        .sum::<f64>()
        .sqrt()
}

/// Rounds to 6 decimal digits, from the exact decimal value of the number.
/// An exact half goes away from zero.
fn round_score(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    // x * 1e6 ends in exactly .5 iff x * 128 is an odd integer.
    let scaled = x * 128.0;
    let nudged = if scaled.fract() == 0.0 && scaled % 2.0 != 0.0 {
        x + x.signum() * 1e-9
    } else {
        x
    };
    format!("{:.6}", nudged).parse::<f64>().unwrap_or(x)
}

// Highest scores first, NaN last.
fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
