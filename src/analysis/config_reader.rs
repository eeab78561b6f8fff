use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value as JSValue;
use snafu::prelude::*;
use topsis::{RankRules, WeightParsing, ZeroDistancePolicy};

use crate::analysis::*;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(rename = "strictWeights")]
    pub strict_weights: Option<bool>,
    #[serde(rename = "zeroDistance")]
    pub zero_distance: Option<String>,
}

/// The description of an analysis, in JSON.
#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(rename = "inputFile")]
    pub input_file: Option<String>,
    #[serde(rename = "inputType")]
    pub input_type: Option<String>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    pub weights: Option<String>,
    pub impacts: Option<String>,
    #[serde(rename = "outputFile")]
    pub output_file: Option<String>,
    #[serde(rename = "outputFormat")]
    pub output_format: Option<String>,
    pub rules: Option<RulesConfig>,
}

impl RunConfig {
    pub fn rank_rules(&self) -> TopsisResult<RankRules> {
        let mut rules = RankRules::DEFAULT_RULES;
        let rc = match &self.rules {
            Some(rc) => rc,
            None => return Ok(rules),
        };
        if rc.strict_weights.unwrap_or(false) {
            rules.weight_parsing = WeightParsing::Strict;
        }
        rules.zero_distance = match rc.zero_distance.as_deref() {
            None | Some("propagate") => ZeroDistancePolicy::Propagate,
            Some("midpoint") => ZeroDistancePolicy::Midpoint,
            Some(x) => {
                return UnknownOptionSnafu {
                    option: "zeroDistance",
                    value: x,
                }
                .fail()
            }
        };
        Ok(rules)
    }

    // The paths in the file are relative to the location of the file.
    fn resolve_paths(self, root: &Path) -> RunConfig {
        let resolve = |p: Option<String>| {
            p.map(|s| {
                if s == "-" || s == "stdout" || Path::new(&s).is_absolute() {
                    s
                } else {
                    root.join(&s).display().to_string()
                }
            })
        };
        RunConfig {
            input_file: resolve(self.input_file),
            output_file: resolve(self.output_file),
            ..self
        }
    }
}

pub fn read_config(path: &str) -> TopsisResult<RunConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: RunConfig = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    let root = Path::new(path).parent().unwrap_or_else(|| Path::new(""));
    let config = config.resolve_paths(root);
    debug!("read_config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: &str) -> TopsisResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
