//! Strategy serialization
//!
//! Turns extracted strategies into output lines, either one per strategy or
//! one per expanded rule, as text or JSON.

use crate::config::{ExtractOptions, OutputFormat, OutputOrder, RenderOptions};
use crate::error::Result;
use crate::strategy::Strategy;
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::Write;

/// Counts reported after rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    /// Strategies consumed from the extractor
    pub strategies: usize,
    /// Lines handed to the sink
    pub lines: usize,
    /// Expanded rules dropped as always false
    pub skipped_rules: usize,
}

/// Render strategies line by line into `emit`
///
/// With [`OutputOrder::Sorted`] every line is buffered first so it can be
/// sorted and deduplicated; otherwise lines are emitted as produced.
pub fn render<'a, I, F>(
    strategies: I,
    options: &RenderOptions,
    extract: &ExtractOptions,
    mut emit: F,
) -> Result<RenderSummary>
where
    I: IntoIterator<Item = Strategy<'a>>,
    F: FnMut(&str) -> Result<()>,
{
    let mut summary = RenderSummary::default();
    let mut sorted: BTreeSet<String> = BTreeSet::new();

    let mut push = |line: String, summary: &mut RenderSummary| -> Result<()> {
        match options.order {
            OutputOrder::Traversal => {
                emit(&line)?;
                summary.lines += 1;
            }
            OutputOrder::Sorted => {
                sorted.insert(line);
            }
        }
        Ok(())
    };

    for strategy in strategies {
        summary.strategies += 1;

        if !options.expand_disjunctions {
            push(format_line(&strategy, options.format)?, &mut summary)?;
            continue;
        }

        for rule in strategy.rules() {
            if extract.skip_unsatisfiable && !rule.is_satisfiable() {
                debug!("Skipping always false rule for leaf {}: {}", rule.leaf, rule);
                summary.skipped_rules += 1;
                continue;
            }
            push(format_line(&rule, options.format)?, &mut summary)?;
        }
    }

    for line in &sorted {
        emit(line)?;
        summary.lines += 1;
    }

    Ok(summary)
}

/// Render strategies into owned lines
pub fn render_to_vec<'a, I>(
    strategies: I,
    options: &RenderOptions,
    extract: &ExtractOptions,
) -> Result<(Vec<String>, RenderSummary)>
where
    I: IntoIterator<Item = Strategy<'a>>,
{
    let mut lines = Vec::new();
    let summary = render(strategies, options, extract, |line| {
        lines.push(line.to_string());
        Ok(())
    })?;
    Ok((lines, summary))
}

/// Write every rendered line followed by a newline
pub fn write_strategies<'a, I, W>(
    out: &mut W,
    strategies: I,
    options: &RenderOptions,
    extract: &ExtractOptions,
) -> Result<RenderSummary>
where
    I: IntoIterator<Item = Strategy<'a>>,
    W: Write,
{
    render(strategies, options, extract, |line| {
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    })
}

fn format_line<T: Display + Serialize>(item: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(item.to_string()),
        OutputFormat::JsonLines => Ok(serde_json::to_string(item)?),
    }
}
