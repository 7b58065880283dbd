//! Conversion options
//!
//! Every option struct has a `Default` matching the plain tree notation and
//! deserializes from JSON with missing fields falling back to that default.

use crate::error::{Result, TreeStrategiesError};
use serde::Deserialize;
use std::str::FromStr;

/// Indentation unit marking one tree level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indent {
    /// One tab per level
    #[default]
    Tab,
    /// A fixed number of spaces per level
    Spaces(usize),
}

/// Line parser options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    pub indent: Indent,
    /// Reject leaf values outside [0, 1]
    pub probability_leaves: bool,
}

/// Strategy extraction options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractOptions {
    /// Drop strategies whose conjunction can never hold
    pub skip_unsatisfiable: bool,
}

/// Rendered line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// `a=x & b!=y : 0.1`
    #[default]
    Text,
    /// One JSON object per line
    JsonLines,
}

impl FromStr for OutputFormat {
    type Err = TreeStrategiesError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json_lines" | "jsonl" => Ok(OutputFormat::JsonLines),
            _ => Err(TreeStrategiesError::InvalidOptions(format!(
                "unknown output format {:?}, expected \"text\" or \"json_lines\"",
                s
            ))),
        }
    }
}

/// Order of rendered lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputOrder {
    /// Root-to-leaf, yes before no
    #[default]
    Traversal,
    /// Lexicographic on the rendered line, duplicates removed
    Sorted,
}

/// Renderer options
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub order: OutputOrder,
    /// Write one flat rule per combination of OR predicates
    pub expand_disjunctions: bool,
}

/// All options of a tree-to-strategies conversion
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    pub parse: ParseOptions,
    pub extract: ExtractOptions,
    pub render: RenderOptions,
}

impl ConvertOptions {
    /// Flat rules in sorted order, the layout the Python bindings default to
    pub fn expanded_sorted() -> Self {
        Self {
            render: RenderOptions {
                order: OutputOrder::Sorted,
                expand_disjunctions: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Deserialize options from JSON, e.g. `{"parse": {"indent": {"spaces": 4}}}`
    pub fn from_json(json: &str) -> Result<Self> {
        let options: ConvertOptions =
            serde_json::from_str(json).map_err(|e| TreeStrategiesError::InvalidOptions(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.parse.indent == Indent::Spaces(0) {
            return Err(TreeStrategiesError::InvalidOptions(
                "indent width must be at least one space".to_string(),
            ));
        }
        Ok(())
    }
}
