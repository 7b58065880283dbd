//! Error types for tree parsing and strategy extraction

use crate::tree::NodeId;
use thiserror::Error;

/// Main error type for the conversion pipeline
#[derive(Error, Debug)]
pub enum TreeStrategiesError {
    /// A line does not match the tree line grammar
    #[error("line {line}: {kind}: {text:?}")]
    Format {
        line: usize,
        text: String,
        kind: FormatErrorKind,
    },

    /// The parsed lines do not form a single well-formed binary tree
    #[error("invalid tree structure: {0}")]
    Structural(#[from] StructuralError),

    /// No non-blank line was found, so there is no root
    #[error("empty input: no tree lines found")]
    EmptyInput,

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single line failed to parse
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatErrorKind {
    #[error("indentation is not a whole number of indent units")]
    InvalidIndentation,

    #[error("missing ':' after node id")]
    MissingIdSeparator,

    #[error("invalid node id {0:?}")]
    InvalidId(String),

    #[error("invalid leaf value {0:?}")]
    InvalidLeafValue(String),

    #[error("leaf value {0} is outside [0, 1]")]
    LeafValueOutOfRange(f64),

    #[error("unmatched '[' in condition")]
    UnmatchedBracket,

    #[error("missing 'yes=<id>,no=<id>' branches")]
    MissingBranches,

    #[error("invalid child id {0:?}")]
    InvalidChildId(String),

    #[error("empty condition")]
    EmptyCondition,

    #[error("invalid predicate {0:?}, expected <field>=<value>")]
    InvalidPredicate(String),

    #[error("expected '[<condition>] yes=<id>,no=<id>' or 'leaf=<number>'")]
    UnknownPayload,
}

/// A tree invariant that failed after the lines were parsed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructuralError {
    #[error("orphan node {id} at line {line}: depth {depth} has no open parent at depth {}", .depth - 1)]
    OrphanNode { id: NodeId, line: usize, depth: usize },

    #[error("duplicate id {id} at line {line}, first defined at line {first_line}")]
    DuplicateId {
        id: NodeId,
        line: usize,
        first_line: usize,
    },

    #[error("multiple roots: node {id} at line {line} is a second depth-0 node")]
    MultipleRoots { id: NodeId, line: usize },

    #[error("node {id} at line {line} is nested under leaf {leaf}")]
    ChildOfLeaf { id: NodeId, line: usize, leaf: NodeId },

    #[error("node {parent} at line {line} references missing child {child}")]
    DanglingChild {
        parent: NodeId,
        child: NodeId,
        line: usize,
    },

    #[error("node {child} is referenced as a child by both {first_parent} and {second_parent}")]
    SharedChild {
        child: NodeId,
        first_parent: NodeId,
        second_parent: NodeId,
    },

    #[error(
        "node {id} at line {line} is nested under {} but referenced by {}",
        describe_parent(.indented_under),
        describe_parent(.referenced_by)
    )]
    IndentationMismatch {
        id: NodeId,
        line: usize,
        indented_under: Option<NodeId>,
        referenced_by: Option<NodeId>,
    },
}

fn describe_parent(parent: &Option<NodeId>) -> String {
    match parent {
        Some(id) => format!("node {}", id),
        None => "no node".to_string(),
    }
}

#[cfg(feature = "python")]
mod python {
    use super::TreeStrategiesError;
    use crate::python::{EmptyInputError, FormatError, StructuralError};
    use pyo3::exceptions::{PyOSError, PyRuntimeError, PyValueError};
    use pyo3::PyErr;

    impl From<TreeStrategiesError> for PyErr {
        fn from(err: TreeStrategiesError) -> PyErr {
            let message = err.to_string();
            match err {
                TreeStrategiesError::Format { .. } => FormatError::new_err(message),
                TreeStrategiesError::Structural(_) => StructuralError::new_err(message),
                TreeStrategiesError::EmptyInput => EmptyInputError::new_err(message),
                TreeStrategiesError::InvalidOptions(_) => PyValueError::new_err(message),
                TreeStrategiesError::Json(_) => PyRuntimeError::new_err(message),
                TreeStrategiesError::Io(_) => PyOSError::new_err(message),
            }
        }
    }
}

/// Result type alias for the conversion pipeline
pub type Result<T> = std::result::Result<T, TreeStrategiesError>;
