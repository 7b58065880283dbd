//! Condition model and parser
//!
//! This module handles condition strings like "device_type=pc||or||browser=7"
//! found between the brackets of internal tree nodes.

mod ast;
pub mod parser;

#[cfg(test)]
mod property_tests;

pub use ast::*;
pub use parser::*;
