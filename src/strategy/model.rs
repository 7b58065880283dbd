//! Strategy records emitted by the extractor

use crate::condition::{Condition, Predicate};
use crate::tree::NodeId;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Rendered in place of an empty conjunction
pub const ALWAYS: &str = "*";

/// One branch decision on the path to a leaf
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term<'a> {
    /// Yes branch: at least one predicate of the condition holds
    Yes(&'a Condition),
    /// No branch: none of the predicates holds
    No(&'a Condition),
}

impl<'a> Term<'a> {
    pub fn condition(&self) -> &'a Condition {
        match *self {
            Term::Yes(condition) | Term::No(condition) => condition,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Term::Yes(_))
    }
}

impl fmt::Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Yes(condition) => write!(f, "{}", condition),
            Term::No(condition) => write_conjunction(f, condition.negation()),
        }
    }
}

/// `{"branch": "yes"|"no", "predicates": [...]}`; a no-term lists its negated
/// predicates, to be read as an AND
impl Serialize for Term<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Term", 2)?;
        match *self {
            Term::Yes(condition) => {
                state.serialize_field("branch", "yes")?;
                state.serialize_field("predicates", condition.predicates())?;
            }
            Term::No(condition) => {
                let negated: SmallVec<[Predicate; 2]> = condition.negation().collect();
                state.serialize_field("branch", "no")?;
                state.serialize_field("predicates", negated.as_slice())?;
            }
        }
        state.end()
    }
}

/// Conjunction of path terms leading to one leaf, plus the leaf value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strategy<'a> {
    pub leaf: NodeId,
    pub terms: Vec<Term<'a>>,
    pub value: f64,
}

impl fmt::Display for Strategy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            f.write_str(ALWAYS)?;
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, " : {:?}", self.value)
    }
}

/// A strategy with its OR conditions resolved to single predicates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub leaf: NodeId,
    pub predicates: Vec<Predicate>,
    pub value: f64,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.predicates.is_empty() {
            f.write_str(ALWAYS)?;
        } else {
            write_conjunction(f, self.predicates.iter())?;
        }
        write!(f, " : {:?}", self.value)
    }
}

fn write_conjunction<P: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    predicates: impl Iterator<Item = P>,
) -> fmt::Result {
    for (i, predicate) in predicates.enumerate() {
        if i > 0 {
            f.write_str(" & ")?;
        }
        write!(f, "{}", predicate)?;
    }
    Ok(())
}
