//! Condition string parser
//!
//! Parses the text between the brackets of an internal node line, e.g.
//! `device_type=pc||or||browser=7`.

use crate::condition::ast::{Comparison, Condition, Predicate, OR_SEPARATOR};
use crate::error::FormatErrorKind;

/// Parse an OR condition into its predicates, in source order
pub fn parse(condition: &str) -> Result<Condition, FormatErrorKind> {
    if condition.trim().is_empty() {
        return Err(FormatErrorKind::EmptyCondition);
    }

    let predicates = condition
        .split(OR_SEPARATOR)
        .map(parse_predicate)
        .collect::<Result<Vec<_>, _>>()?;

    Condition::new(predicates).ok_or(FormatErrorKind::EmptyCondition)
}

/// Parse `field=value` or `field!=value`, splitting on the first `=`
///
/// Field and value are kept verbatim, whitespace included.
pub fn parse_predicate(predicate: &str) -> Result<Predicate, FormatErrorKind> {
    let invalid = || FormatErrorKind::InvalidPredicate(predicate.to_string());

    let (lhs, value) = predicate.split_once('=').ok_or_else(invalid)?;
    let (field, comparison) = match lhs.strip_suffix('!') {
        Some(field) => (field, Comparison::NotEqual),
        None => (lhs, Comparison::Equal),
    };

    if field.is_empty() {
        return Err(invalid());
    }

    Ok(Predicate::new(field, comparison, value))
}
