//! Tree dumps shared by unit tests

/// Four levels deep, OR conditions on both sides of the root
pub const COMPLEX_TREE: &str = "\
0:[device_type=pc||or||browser=7] yes=2,no=1
\t2:[os_family=5] yes=6,no=5
\t\t6:[browser=8] yes=12,no=11
\t\t\t12:[language=2] yes=20,no=19
\t\t\t\t20:leaf=0.000559453
\t\t\t\t19:leaf=0.00041
\t\t\t11:leaf=0.00032
\t\t5:leaf=0.00078
\t1:[browser=8] yes=4,no=3
\t\t4:leaf=0.00112
\t\t3:[region=FR-75||or||region=FR-92] yes=8,no=7
\t\t\t8:leaf=0.0021
\t\t\t7:[ad_size=300x250] yes=14,no=13
\t\t\t\t14:leaf=0.00065
\t\t\t\t13:leaf=0.000999001
";

/// Text rendering of every `COMPLEX_TREE` leaf, in traversal order
pub const COMPLEX_TREE_STRATEGIES: [&str; 8] = [
    "device_type=pc||or||browser=7 & os_family=5 & browser=8 & language=2 : 0.000559453",
    "device_type=pc||or||browser=7 & os_family=5 & browser=8 & language!=2 : 0.00041",
    "device_type=pc||or||browser=7 & os_family=5 & browser!=8 : 0.00032",
    "device_type=pc||or||browser=7 & os_family!=5 : 0.00078",
    "device_type!=pc & browser!=7 & browser=8 : 0.00112",
    "device_type!=pc & browser!=7 & browser!=8 & region=FR-75||or||region=FR-92 : 0.0021",
    "device_type!=pc & browser!=7 & browser!=8 & region!=FR-75 & region!=FR-92 & ad_size=300x250 : 0.00065",
    "device_type!=pc & browser!=7 & browser!=8 & region!=FR-75 & region!=FR-92 & ad_size!=300x250 : 0.000999001",
];

pub const NESTED_TREE: &str = "\
0:[device_type=pc] yes=1,no=2
\t1:[country=argentina] yes=3,no=4
\t\t3:leaf=0.3
\t\t4:leaf=0.4
\t2:leaf=0.2
";

pub const OR_TREE: &str = "\
0:[device_type=pc||or||support=mobile] yes=1,no=2
\t1:leaf=0.1
\t2:leaf=0.2
";

/// Randomly shaped trees for property tests
pub mod shapes {
    use crate::condition::{Comparison, Predicate, OR_SEPARATOR};
    use proptest::prelude::*;
    use std::fmt::Write;

    /// Tree shape with yes subtree first; ids are assigned in pre-order
    #[derive(Debug, Clone)]
    pub enum Shape {
        Leaf(f64),
        Split(Vec<Predicate>, Box<Shape>, Box<Shape>),
    }

    /// One expected path term: (taken the yes branch, condition predicates)
    pub type ExpectedTerm = (bool, Vec<Predicate>);

    impl Shape {
        pub fn size(&self) -> usize {
            match self {
                Shape::Leaf(_) => 1,
                Shape::Split(_, yes, no) => 1 + yes.size() + no.size(),
            }
        }

        pub fn leaves(&self) -> usize {
            match self {
                Shape::Leaf(_) => 1,
                Shape::Split(_, yes, no) => yes.leaves() + no.leaves(),
            }
        }

        /// Render as a tab-indented dump
        pub fn render(&self) -> String {
            let mut out = String::new();
            self.write(0, 0, &mut out);
            out
        }

        fn write(&self, id: u32, depth: usize, out: &mut String) {
            out.push_str(&"\t".repeat(depth));
            match self {
                Shape::Leaf(value) => {
                    writeln!(out, "{}:leaf={:?}", id, value).unwrap();
                }
                Shape::Split(predicates, yes, no) => {
                    let yes_id = id + 1;
                    let no_id = yes_id + yes.size() as u32;
                    let condition = predicates
                        .iter()
                        .map(|p| p.to_string())
                        .collect::<Vec<_>>()
                        .join(OR_SEPARATOR);
                    writeln!(out, "{}:[{}] yes={},no={}", id, condition, yes_id, no_id).unwrap();
                    yes.write(yes_id, depth + 1, out);
                    no.write(no_id, depth + 1, out);
                }
            }
        }

        /// Recursive reference enumeration, yes before no
        pub fn expected_paths(&self) -> Vec<(Vec<ExpectedTerm>, f64)> {
            let mut paths = Vec::new();
            self.collect_paths(&mut Vec::new(), &mut paths);
            paths
        }

        fn collect_paths(&self, prefix: &mut Vec<ExpectedTerm>, paths: &mut Vec<(Vec<ExpectedTerm>, f64)>) {
            match self {
                Shape::Leaf(value) => paths.push((prefix.clone(), *value)),
                Shape::Split(predicates, yes, no) => {
                    prefix.push((true, predicates.clone()));
                    yes.collect_paths(prefix, paths);
                    prefix.pop();
                    prefix.push((false, predicates.clone()));
                    no.collect_paths(prefix, paths);
                    prefix.pop();
                }
            }
        }
    }

    fn predicate_strategy() -> impl Strategy<Value = Predicate> {
        (
            prop_oneof![
                Just("device_type"),
                Just("browser"),
                Just("os_family"),
                Just("language"),
            ],
            prop_oneof![4 => Just(Comparison::Equal), 1 => Just(Comparison::NotEqual)],
            prop_oneof![Just("pc"), Just("7"), Just("8"), Just("FR-75"), Just("300x250")],
        )
            .prop_map(|(field, comparison, value)| Predicate::new(field, comparison, value))
    }

    pub fn shape_strategy() -> impl Strategy<Value = Shape> {
        let leaf = (0.0..1.0f64).prop_map(Shape::Leaf);
        leaf.prop_recursive(6, 64, 2, |inner| {
            (
                prop::collection::vec(predicate_strategy(), 1..=3),
                inner.clone(),
                inner,
            )
                .prop_map(|(predicates, yes, no)| Shape::Split(predicates, Box::new(yes), Box::new(no)))
        })
    }
}
