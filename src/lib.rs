//! Tree Strategies - Flattens decision-tree dumps into per-leaf strategies
//!
//! A tree dump lists one node per line, nested by indentation:
//!
//! ```text
//! 0:[device_type=pc||or||browser=7] yes=2,no=1
//! 	2:leaf=0.000559453
//! 	1:leaf=0.000999001
//! ```
//!
//! Each root-to-leaf path becomes a strategy: the conjunction of the
//! conditions taken along the way (negated on `no` branches) paired with the
//! leaf value. Python bindings are available behind the `python` feature.
//!
//! ```
//! use tree_strategies::config::ConvertOptions;
//! use tree_strategies::convert::convert_tree_to_strategies;
//!
//! let tree = "0:[a=1] yes=1,no=2\n\t1:leaf=0.1\n\t2:leaf=0.2";
//! let lines = convert_tree_to_strategies(tree, &ConvertOptions::default()).unwrap();
//! assert_eq!(lines, vec!["a=1 : 0.1", "a!=1 : 0.2"]);
//! ```

pub mod condition;
pub mod config;
pub mod convert;
pub mod error;
pub mod render;
pub mod strategy;
pub mod tree;

#[cfg(feature = "python")]
mod python;

#[cfg(test)]
mod fixtures;

pub use crate::config::ConvertOptions;
pub use crate::convert::{convert_file, convert_tree_to_strategies, ConversionSummary};
pub use crate::error::{Result, TreeStrategiesError};
pub use crate::strategy::{extract, Strategy};
pub use crate::tree::{parse_tree, Tree};
