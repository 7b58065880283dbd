//! Predicate and condition types attached to internal tree nodes

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// Separator between predicates of an OR condition in the tree notation
pub const OR_SEPARATOR: &str = "||or||";

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Equal (=)
    Equal,
    /// Not equal (!=)
    NotEqual,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Equal => "=",
            Comparison::NotEqual => "!=",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Comparison::Equal => Comparison::NotEqual,
            Comparison::NotEqual => Comparison::Equal,
        }
    }
}

/// Atomic test such as `device_type=pc`
///
/// Field and value are kept as the raw tokens from the tree file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Predicate {
    pub field: String,
    pub comparison: Comparison,
    pub value: String,
}

impl Predicate {
    pub fn new(field: impl Into<String>, comparison: Comparison, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            comparison,
            value: value.into(),
        }
    }

    pub fn equal(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Comparison::Equal, value)
    }

    pub fn not_equal(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, Comparison::NotEqual, value)
    }

    /// The predicate that holds exactly when this one does not
    pub fn negated(&self) -> Predicate {
        Predicate {
            field: self.field.clone(),
            comparison: self.comparison.flipped(),
            value: self.value.clone(),
        }
    }

    /// True when both predicates can never hold at the same time
    pub fn contradicts(&self, other: &Predicate) -> bool {
        if self.field != other.field {
            return false;
        }
        match (self.comparison, other.comparison) {
            (Comparison::Equal, Comparison::Equal) => self.value != other.value,
            (Comparison::Equal, Comparison::NotEqual) | (Comparison::NotEqual, Comparison::Equal) => {
                self.value == other.value
            }
            (Comparison::NotEqual, Comparison::NotEqual) => false,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.comparison.symbol(), self.value)
    }
}

/// Non-empty OR of predicates attached to an internal node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Condition {
    predicates: SmallVec<[Predicate; 2]>,
}

impl Condition {
    /// Build a condition, returning `None` when no predicate is given
    pub fn new(predicates: impl IntoIterator<Item = Predicate>) -> Option<Self> {
        let predicates: SmallVec<[Predicate; 2]> = predicates.into_iter().collect();
        if predicates.is_empty() {
            None
        } else {
            Some(Self { predicates })
        }
    }

    pub fn single(predicate: Predicate) -> Self {
        let mut predicates = SmallVec::new();
        predicates.push(predicate);
        Self { predicates }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Always false, conditions are never empty
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// De Morgan negation: every predicate negated, to be read as an AND
    pub fn negation(&self) -> impl Iterator<Item = Predicate> + '_ {
        self.predicates.iter().map(Predicate::negated)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                f.write_str(OR_SEPARATOR)?;
            }
            write!(f, "{}", predicate)?;
        }
        Ok(())
    }
}
