//! Expansion of OR conditions into flat rules
//!
//! A strategy with yes-terms `(a || b)` and `(c || d)` expands into the rules
//! `a & c`, `a & d`, `b & c`, `b & d`, each carrying the strategy's value.
//! No-terms contribute their negated predicates to every rule.

use crate::condition::Predicate;
use crate::strategy::model::{Rule, Strategy, Term};
use std::iter::FusedIterator;

impl<'a> Strategy<'a> {
    /// Iterate the flat rules of this strategy; the first yes-term varies slowest
    pub fn rules(&self) -> Rules<'_, 'a> {
        Rules {
            strategy: self,
            choice: vec![0; self.terms.len()],
            done: false,
        }
    }

    /// Number of rules [`Strategy::rules`] yields
    pub fn rule_count(&self) -> usize {
        self.terms
            .iter()
            .filter(|term| term.is_yes())
            .map(|term| term.condition().len())
            .product()
    }
}

/// Iterator over the rules of one strategy
#[derive(Debug, Clone)]
pub struct Rules<'s, 'a> {
    strategy: &'s Strategy<'a>,
    /// Selected predicate index per term, unused for no-terms
    choice: Vec<usize>,
    done: bool,
}

impl Rules<'_, '_> {
    fn current(&self) -> Rule {
        let mut predicates: Vec<Predicate> = Vec::with_capacity(self.strategy.terms.len());
        for (term, &index) in self.strategy.terms.iter().zip(&self.choice) {
            match term {
                Term::Yes(condition) => predicates.push(condition.predicates()[index].clone()),
                Term::No(condition) => predicates.extend(condition.negation()),
            }
        }

        Rule {
            leaf: self.strategy.leaf,
            predicates,
            value: self.strategy.value,
        }
    }

    /// Move to the next combination; false once every combination was seen
    fn advance(&mut self) -> bool {
        for (term, index) in self.strategy.terms.iter().zip(self.choice.iter_mut()).rev() {
            if let Term::Yes(condition) = term {
                if *index + 1 < condition.len() {
                    *index += 1;
                    return true;
                }
                *index = 0;
            }
        }
        false
    }
}

impl Iterator for Rules<'_, '_> {
    type Item = Rule;

    fn next(&mut self) -> Option<Rule> {
        if self.done {
            return None;
        }
        let rule = self.current();
        self.done = !self.advance();
        Some(rule)
    }
}

impl FusedIterator for Rules<'_, '_> {}
