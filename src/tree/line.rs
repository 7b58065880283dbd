//! Line parser for the indented tree notation
//!
//! Each non-blank line holds one node:
//!
//! ```text
//! <indent><id>:[<field>=<value>||or||<field>=<value>] yes=<id>,no=<id>
//! <indent><id>:leaf=<number>
//! ```

use crate::condition;
use crate::config::{Indent, ParseOptions};
use crate::error::{FormatErrorKind, Result, TreeStrategiesError};
use crate::tree::node::{Node, NodeId};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

const LEAF_PREFIX: &str = "leaf=";

static INTERNAL_NODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<condition>.*)\]\s*yes=(?P<yes>[^,]*),no=(?P<no>.*)$")
        .expect("internal node pattern compiles")
});

/// One parsed node line, before any structural check
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    /// 1-based line number in the source text
    pub line: usize,
    pub depth: usize,
    pub id: NodeId,
    pub node: Node,
}

/// Parse one source line; blank lines yield `Ok(None)`
pub fn parse_line(line: usize, text: &str, options: &ParseOptions) -> Result<Option<ParsedLine>> {
    let trimmed = text.trim_end();
    if trimmed.trim_start().is_empty() {
        debug!("Skipping empty line: {}", line);
        return Ok(None);
    }

    let format_error = |kind: FormatErrorKind| TreeStrategiesError::Format {
        line,
        text: text.to_string(),
        kind,
    };

    let (depth, body) =
        split_indent(trimmed, options.indent).ok_or_else(|| format_error(FormatErrorKind::InvalidIndentation))?;
    let (id, payload) = body
        .split_once(':')
        .ok_or_else(|| format_error(FormatErrorKind::MissingIdSeparator))?;
    let id = parse_id(id).ok_or_else(|| format_error(FormatErrorKind::InvalidId(id.to_string())))?;
    let node = parse_payload(payload, options).map_err(format_error)?;

    Ok(Some(ParsedLine {
        line,
        depth,
        id,
        node,
    }))
}

/// Count leading indent units; `None` when the indentation is not whole units
fn split_indent(text: &str, indent: Indent) -> Option<(usize, &str)> {
    let (unit, width) = match indent {
        Indent::Tab => ('\t', 1),
        Indent::Spaces(width) => (' ', width),
    };

    let rest = text.trim_start_matches(unit);
    let leading = text.len() - rest.len();
    if rest.starts_with(char::is_whitespace) {
        return None;
    }

    match leading.checked_rem(width) {
        Some(0) => Some((leading / width, rest)),
        None if leading == 0 => Some((0, rest)),
        _ => None,
    }
}

fn parse_id(id: &str) -> Option<NodeId> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

fn parse_payload(payload: &str, options: &ParseOptions) -> std::result::Result<Node, FormatErrorKind> {
    if let Some(value) = payload.strip_prefix(LEAF_PREFIX) {
        return parse_leaf(value, options).map(|value| Node::Leaf { value });
    }

    if !payload.starts_with('[') {
        return Err(FormatErrorKind::UnknownPayload);
    }

    let Some(caps) = INTERNAL_NODE.captures(payload) else {
        if payload.contains(']') {
            return Err(FormatErrorKind::MissingBranches);
        }
        return Err(FormatErrorKind::UnmatchedBracket);
    };

    let condition = condition::parse(&caps["condition"])?;
    let yes = parse_child(&caps["yes"])?;
    let no = parse_child(&caps["no"])?;

    Ok(Node::Internal { condition, yes, no })
}

fn parse_child(id: &str) -> std::result::Result<NodeId, FormatErrorKind> {
    parse_id(id.trim()).ok_or_else(|| FormatErrorKind::InvalidChildId(id.to_string()))
}

fn parse_leaf(value: &str, options: &ParseOptions) -> std::result::Result<f64, FormatErrorKind> {
    let raw = value.trim();
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FormatErrorKind::InvalidLeafValue(raw.to_string()))?;

    if options.probability_leaves && !(0.0..=1.0).contains(&value) {
        return Err(FormatErrorKind::LeafValueOutOfRange(value));
    }

    Ok(value)
}
