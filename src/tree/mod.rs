//! Tree parsing and reconstruction
//!
//! Two phases: every line is parsed and registered with a [`TreeBuilder`], then
//! [`TreeBuilder::finish`] validates the whole structure and returns an
//! immutable [`Tree`].

mod builder;
mod line;
mod node;


pub use builder::TreeBuilder;
pub use line::{parse_line, ParsedLine};
pub use node::{Node, NodeId, Tree};

use crate::config::ParseOptions;
use crate::error::Result;

/// Parse a whole tree dump
pub fn parse_tree(text: &str, options: &ParseOptions) -> Result<Tree> {
    parse_lines(text.lines().enumerate().map(|(i, line)| (i + 1, line)), options)
}

/// Parse numbered lines, stopping at the first malformed one
pub fn parse_lines<'a, I>(lines: I, options: &ParseOptions) -> Result<Tree>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut builder = TreeBuilder::new();
    for (number, text) in lines {
        if let Some(record) = parse_line(number, text, options)? {
            builder.push(record)?;
        }
    }
    builder.finish()
}
