//! Detection of strategies that can never hold
//!
//! Predicates are equality tests over unbounded value sets, so a set of
//! predicates is satisfiable exactly when no two of them contradict each
//! other. Yes-terms add a choice of one predicate per OR condition, which is
//! searched with backtracking; conditions hold one or two predicates in
//! practice.

use crate::condition::Predicate;
use crate::strategy::model::{Rule, Strategy, Term};

/// True when no two predicates of the conjunction contradict each other
pub fn conjunction_is_satisfiable(predicates: &[Predicate]) -> bool {
    predicates
        .iter()
        .enumerate()
        .all(|(i, p)| predicates[i + 1..].iter().all(|q| !p.contradicts(q)))
}

impl Strategy<'_> {
    /// True when some assignment of field values reaches this leaf
    pub fn is_satisfiable(&self) -> bool {
        let mut fixed: Vec<Predicate> = Vec::new();
        let mut choices: Vec<&[Predicate]> = Vec::new();

        for term in &self.terms {
            match term {
                Term::No(condition) => fixed.extend(condition.negation()),
                Term::Yes(condition) if condition.len() == 1 => {
                    fixed.extend(condition.predicates().iter().cloned())
                }
                Term::Yes(condition) => choices.push(condition.predicates()),
            }
        }

        if !conjunction_is_satisfiable(&fixed) {
            return false;
        }

        let mut chosen: Vec<&Predicate> = fixed.iter().collect();
        search(&mut chosen, &choices)
    }
}

impl Rule {
    pub fn is_satisfiable(&self) -> bool {
        conjunction_is_satisfiable(&self.predicates)
    }
}

fn search<'p>(chosen: &mut Vec<&'p Predicate>, choices: &[&'p [Predicate]]) -> bool {
    let Some((first, rest)) = choices.split_first() else {
        return true;
    };

    first.iter().any(|candidate| {
        if chosen.iter().any(|p| p.contradicts(candidate)) {
            return false;
        }
        chosen.push(candidate);
        let found = search(chosen, rest);
        chosen.pop();
        found
    })
}
