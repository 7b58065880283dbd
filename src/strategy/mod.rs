//! Strategy extraction
//!
//! A strategy is the conjunction of branch terms on one root-to-leaf path,
//! paired with the leaf value. Strategies borrow conditions from the
//! [`Tree`](crate::tree::Tree) and are produced lazily, one per leaf.

mod expand;
mod extractor;
mod model;
mod satisfiability;


pub use expand::Rules;
pub use extractor::{extract, Strategies};
pub use model::{Rule, Strategy, Term, ALWAYS};
pub use satisfiability::conjunction_is_satisfiable;
