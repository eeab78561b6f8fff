use log::debug;

use crate::config::*;

/// Turns the raw rows of a file into a dataset.
///
/// The blank rows are dropped. The first remaining row is the header: its
/// first cell labels the names and the other cells label the criteria. Each
/// following row is one alternative, with its name in the first cell.
///
/// ```
/// use topsis::{prepare, RawCell};
///
/// let rows = vec![
///     vec![RawCell::from("Model"), RawCell::from("Price"), RawCell::from("Storage")],
///     vec![RawCell::from("M1"), RawCell::from("250"), RawCell::Number(16.0)],
/// ];
/// let dataset = prepare(&rows)?;
/// assert_eq!(dataset.names, vec!["M1".to_string()]);
/// assert_eq!(dataset.matrix, vec![vec![250.0, 16.0]]);
/// # Ok::<(), topsis::ValidationError>(())
/// ```
pub fn prepare(raw_rows: &[Vec<RawCell>]) -> Result<Dataset, ValidationError> {
    // Keep the position in the file for the error messages.
    let cleaned: Vec<(usize, &Vec<RawCell>)> = raw_rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.iter().all(|c| c.is_blank()))
        .collect();
    debug!(
        "prepare: {} rows, {} non-blank rows",
        raw_rows.len(),
        cleaned.len()
    );

    let (header, data_rows) = match cleaned.as_slice() {
        [(_, header), rest @ ..] if !rest.is_empty() => (*header, rest),
        _ => return Err(ValidationError::NotEnoughRows),
    };

    if header.len() < 3 {
        return Err(ValidationError::NotEnoughColumns {
            width: header.len(),
        });
    }
    let num_criteria = header.len() - 1;
    let criteria: Vec<String> = header[1..]
        .iter()
        .enumerate()
        .map(|(idx, c)| c.to_label().unwrap_or_else(|| format!("C{}", idx + 1)))
        .collect();
    debug!("prepare: criteria: {:?}", criteria);

    let mut names: Vec<String> = Vec::with_capacity(data_rows.len());
    let mut matrix: Vec<Vec<f64>> = Vec::with_capacity(data_rows.len());
    for (idx, (lineno, row)) in data_rows.iter().enumerate() {
        let name = row
            .first()
            .and_then(|c| c.to_label())
            .unwrap_or_else(|| format!("Option {}", idx + 1));

        let mut values: Vec<f64> = Vec::with_capacity(num_criteria);
        for col in 1..=num_criteria {
            let cell = row.get(col).unwrap_or(&RawCell::Empty);
            match cell.to_number() {
                Some(x) => values.push(x),
                None => {
                    debug!(
                        "prepare: row {}: column {}: not a number: {:?}",
                        lineno + 1,
                        col + 1,
                        cell
                    );
                    return Err(ValidationError::NonNumericValue { row: lineno + 1 });
                }
            }
        }
        debug!("prepare: {:?}: {:?}", name, values);
        names.push(name);
        matrix.push(values);
    }

    Ok(Dataset {
        names,
        matrix,
        criteria,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_row(cells: &[&str]) -> Vec<RawCell> {
        cells.iter().map(|s| RawCell::from(*s)).collect()
    }

    #[test]
    fn reads_header_and_rows() {
        let rows = vec![
            text_row(&["Model", "Price", "Storage", "Camera"]),
            text_row(&["M1", "250", "16", "12"]),
            vec![
                RawCell::from("M2"),
                RawCell::Number(200.0),
                RawCell::Number(16.0),
                RawCell::from(" 8 "),
            ],
        ];
        let ds = prepare(&rows).unwrap();
        assert_eq!(ds.names, vec!["M1".to_string(), "M2".to_string()]);
        assert_eq!(
            ds.matrix,
            vec![vec![250.0, 16.0, 12.0], vec![200.0, 16.0, 8.0]]
        );
        assert_eq!(ds.criteria_count(), 3);
        assert_eq!(ds.criteria, vec!["Price", "Storage", "Camera"]);
        assert_eq!(ds.alternatives_count(), 2);
    }

    #[test]
    fn drops_blank_rows() {
        let rows = vec![
            vec![],
            text_row(&["Name", "A", "B"]),
            text_row(&["", "  ", ""]),
            text_row(&["X", "1", "2"]),
            vec![RawCell::Empty, RawCell::Empty],
        ];
        let ds = prepare(&rows).unwrap();
        assert_eq!(ds.names, vec!["X".to_string()]);
        assert_eq!(ds.matrix, vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn requires_two_rows() {
        let rows = vec![text_row(&["Name", "A", "B"]), text_row(&["", ""])];
        assert_eq!(prepare(&rows), Err(ValidationError::NotEnoughRows));
        assert_eq!(prepare(&[]), Err(ValidationError::NotEnoughRows));
    }

    #[test]
    fn requires_three_columns() {
        let rows = vec![text_row(&["Name", "CriterionA"]), text_row(&["X", "1"])];
        let err = prepare(&rows).unwrap_err();
        assert_eq!(err, ValidationError::NotEnoughColumns { width: 2 });
        assert_eq!(err.to_string(), "Dataset must have at least 3 columns.");
    }

    #[test]
    fn placeholder_names() {
        let rows = vec![
            text_row(&["Name", "A", "B"]),
            text_row(&["First", "1", "2"]),
            text_row(&["", "3", "4"]),
            vec![RawCell::Empty, RawCell::Number(5.0), RawCell::Number(6.0)],
        ];
        let ds = prepare(&rows).unwrap();
        assert_eq!(ds.names, vec!["First", "Option 2", "Option 3"]);
    }

    #[test]
    fn numeric_names() {
        let rows = vec![
            text_row(&["Name", "A", "B"]),
            vec![RawCell::Number(2.0), RawCell::Number(1.0), RawCell::Number(1.0)],
            vec![RawCell::Number(2.5), RawCell::Number(1.0), RawCell::Number(1.0)],
        ];
        let ds = prepare(&rows).unwrap();
        assert_eq!(ds.names, vec!["2", "2.5"]);
    }

    #[test]
    fn empty_cell_is_not_zero() {
        let rows = vec![
            text_row(&["Name", "A", "B"]),
            text_row(&["X", "1", "2"]),
            text_row(&["Y", "", "2"]),
        ];
        let err = prepare(&rows).unwrap_err();
        assert_eq!(err, ValidationError::NonNumericValue { row: 3 });
        assert_eq!(err.to_string(), "Non-numeric value detected in row 3.");
    }

    #[test]
    fn only_spelled_out_infinity_is_a_number() {
        for token in ["inf", "-INF", "infinity", "nan"] {
            let rows = vec![
                text_row(&["Name", "A", "B"]),
                text_row(&["X", token, "1"]),
                text_row(&["Y", "2", "1"]),
            ];
            assert_eq!(
                prepare(&rows),
                Err(ValidationError::NonNumericValue { row: 2 }),
                "{}",
                token
            );
        }
        let rows = vec![
            text_row(&["Name", "A", "B"]),
            text_row(&["X", "-Infinity", "1e3"]),
        ];
        assert_eq!(
            prepare(&rows).unwrap().matrix,
            vec![vec![f64::NEG_INFINITY, 1000.0]]
        );
    }

    #[test]
    fn non_numeric_row_counts_blank_rows() {
        let rows = vec![
            text_row(&["Name", "A", "B"]),
            text_row(&["", "", ""]),
            text_row(&["X", "1", "abc"]),
        ];
        assert_eq!(
            prepare(&rows),
            Err(ValidationError::NonNumericValue { row: 3 })
        );
    }

    #[test]
    fn short_rows_are_rejected() {
        let rows = vec![text_row(&["Name", "A", "B"]), text_row(&["X", "1"])];
        assert_eq!(
            prepare(&rows),
            Err(ValidationError::NonNumericValue { row: 2 })
        );
    }

    #[test]
    fn long_rows_are_truncated() {
        let rows = vec![
            text_row(&["Name", "A", "B"]),
            text_row(&["X", "1", "2", "not used"]),
        ];
        let ds = prepare(&rows).unwrap();
        assert_eq!(ds.matrix, vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn booleans_and_nan_are_rejected() {
        let rows = vec![
            text_row(&["Name", "A", "B"]),
            vec![RawCell::from("X"), RawCell::Bool(true), RawCell::Number(1.0)],
        ];
        assert!(prepare(&rows).is_err());
        let rows = vec![text_row(&["Name", "A", "B"]), text_row(&["X", "NaN", "1"])];
        assert!(prepare(&rows).is_err());
    }
}
