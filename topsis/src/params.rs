use log::debug;

use crate::config::*;

/// Reads a comma-separated list of weights, one per criterion.
///
/// Tokens that are not numbers are dropped before counting. A malformed token
/// is thus reported as a wrong number of weights. An empty token counts as a
/// weight of zero, so a trailing comma adds one weight.
pub fn parse_weights(text: &str, expected: usize) -> Result<Vec<f64>, ValidationError> {
    parse_weights_with(text, expected, WeightParsing::Lenient)
}

/// Reads the weights with the given policy for the tokens that are not numbers.
pub fn parse_weights_with(
    text: &str,
    expected: usize,
    mode: WeightParsing,
) -> Result<Vec<f64>, ValidationError> {
    let mut weights: Vec<f64> = Vec::new();
    for (idx, token) in text.split(',').enumerate() {
        match (parse_number(token), mode) {
            (Some(w), _) => weights.push(w),
            (None, WeightParsing::Lenient) if token.trim().is_empty() => weights.push(0.0),
            (None, WeightParsing::Lenient) => {
                debug!("parse_weights: dropping token {:?}", token);
            }
            (None, WeightParsing::Strict) => {
                return Err(ValidationError::InvalidWeight {
                    token: token.trim().to_string(),
                    position: idx + 1,
                });
            }
        }
    }
    if weights.len() != expected {
        return Err(ValidationError::WeightCount { expected });
    }
    Ok(weights)
}

/// Reads a comma-separated list of `+` (beneficial) and `-` (cost) symbols.
pub fn parse_impacts(text: &str, expected: usize) -> Result<Vec<Impact>, ValidationError> {
    let impacts: Vec<Option<Impact>> = text
        .split(',')
        .map(|s| match s.trim() {
            "+" => Some(Impact::Beneficial),
            "-" => Some(Impact::Cost),
            _ => None,
        })
        .collect();
    if impacts.len() != expected {
        return Err(ValidationError::Impacts { expected });
    }
    impacts
        .into_iter()
        .collect::<Option<Vec<Impact>>>()
        .ok_or(ValidationError::Impacts { expected })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(
            parse_weights("0.25, 0.25,0.25 ,0.25", 4),
            Ok(vec![0.25, 0.25, 0.25, 0.25])
        );
        assert_eq!(parse_weights("1,2,3", 3), Ok(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn malformed_weight_is_a_count_error() {
        let err = parse_weights("0.25, 0.25, abc, 0.25", 4).unwrap_err();
        assert_eq!(err, ValidationError::WeightCount { expected: 4 });
        assert_eq!(err.to_string(), "Please provide exactly 4 weights.");
    }

    #[test]
    fn malformed_weight_is_dropped_before_counting() {
        // Looks like 3 valid weights, which is what is expected.
        assert_eq!(parse_weights("1, x, 2, 3", 3), Ok(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn empty_weight_counts_as_zero() {
        assert_eq!(
            parse_weights("0.25,0.25,0.25,0.25,", 4),
            Err(ValidationError::WeightCount { expected: 4 })
        );
        assert_eq!(
            parse_weights("1,,2", 2),
            Err(ValidationError::WeightCount { expected: 2 })
        );
        assert_eq!(parse_weights("1,,2", 3), Ok(vec![1.0, 0.0, 2.0]));
        assert_eq!(parse_weights("1, ,2", 3), Ok(vec![1.0, 0.0, 2.0]));
        assert_eq!(
            parse_weights_with("1,,2", 3, WeightParsing::Strict),
            Err(ValidationError::InvalidWeight {
                token: "".to_string(),
                position: 2
            })
        );
    }

    #[test]
    fn infinite_weights() {
        assert_eq!(
            parse_weights("inf,1", 2),
            Err(ValidationError::WeightCount { expected: 2 })
        );
        assert_eq!(
            parse_weights("Infinity,1", 2),
            Ok(vec![f64::INFINITY, 1.0])
        );
    }

    #[test]
    fn strict_weights() {
        assert_eq!(
            parse_weights_with("1, x, 2, 3", 3, WeightParsing::Strict),
            Err(ValidationError::InvalidWeight {
                token: "x".to_string(),
                position: 2
            })
        );
        assert_eq!(
            parse_weights_with("1, 2", 3, WeightParsing::Strict),
            Err(ValidationError::WeightCount { expected: 3 })
        );
        assert_eq!(
            parse_weights_with("1, 2, 3", 3, WeightParsing::Strict),
            Ok(vec![1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn impacts() {
        assert_eq!(
            parse_impacts("+, +,- ,+", 4),
            Ok(vec![
                Impact::Beneficial,
                Impact::Beneficial,
                Impact::Cost,
                Impact::Beneficial
            ])
        );
    }

    #[test]
    fn invalid_impacts() {
        let err = parse_impacts("+,+,x,+", 4).unwrap_err();
        assert_eq!(err, ValidationError::Impacts { expected: 4 });
        assert_eq!(
            err.to_string(),
            "Impacts must include exactly 4 values using only + or -."
        );
        assert!(parse_impacts("+,+,-", 4).is_err());
        assert!(parse_impacts("+,+,-,+,+", 4).is_err());
        assert!(parse_impacts("", 2).is_err());
    }
}
