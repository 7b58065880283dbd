//! End-to-end conversion entry points

use crate::config::ConvertOptions;
use crate::error::Result;
use crate::render::{render_to_vec, write_strategies};
use crate::strategy::extract;
use crate::tree::parse_tree;
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Counts reported by a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub leaves: usize,
    /// Strategies left after the satisfiability filter
    pub strategies: usize,
    pub lines: usize,
    /// Leaves plus expanded rules dropped as always false
    pub skipped: usize,
}

/// Convert a tree dump held in memory into rendered lines
pub fn convert_tree_to_strategies(tree: &str, options: &ConvertOptions) -> Result<Vec<String>> {
    options.validate()?;
    let tree = parse_tree(tree, &options.parse)?;
    let (lines, _) = render_to_vec(extract(&tree, &options.extract), &options.render, &options.extract)?;
    Ok(lines)
}

/// Read a tree file and write its strategies file
///
/// The output file is only created once the whole tree parsed and validated.
pub fn convert_file(tree_path: &Path, strategies_path: &Path, options: &ConvertOptions) -> Result<ConversionSummary> {
    options.validate()?;
    let text = fs::read_to_string(tree_path)?;
    let tree = parse_tree(&text, &options.parse)?;

    let mut out = BufWriter::new(File::create(strategies_path)?);
    let rendered = write_strategies(
        &mut out,
        extract(&tree, &options.extract),
        &options.render,
        &options.extract,
    )?;
    out.flush()?;

    let summary = ConversionSummary {
        leaves: tree.leaf_count(),
        strategies: rendered.strategies,
        lines: rendered.lines,
        skipped: tree.leaf_count() - rendered.strategies + rendered.skipped_rules,
    };
    info!(
        "Converted {} into {}: {} leaves, {} lines written, {} skipped",
        tree_path.display(),
        strategies_path.display(),
        summary.leaves,
        summary.lines,
        summary.skipped
    );

    Ok(summary)
}
