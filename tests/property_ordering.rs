use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use dependgen::dag::{InitPlan, PlanBuilder};
use dependgen::errors::DependgenError;
use dependgen_test_utils::emitted_lines;

/// Random acyclic graph: node N may only depend on nodes 0..N-1.
/// Some nodes are left unregistered to act as ordering placeholders.
#[derive(Debug, Clone)]
struct AcyclicGraph {
    deps: Vec<BTreeSet<usize>>,
    registered: Vec<bool>,
}

impl AcyclicGraph {
    fn name(i: usize) -> String {
        // Reverse the index in the name so ascending name order does not
        // coincide with dependency order.
        format!("node_{:03}", 999 - i)
    }

    fn text(i: usize) -> String {
        format!("init_{i}();")
    }

    fn plan(&self, needed: &[usize]) -> InitPlan {
        let mut builder = PlanBuilder::new();
        for (i, deps) in self.deps.iter().enumerate() {
            for &d in deps {
                builder.add_dependency(&Self::name(i), &Self::name(d));
            }
            if self.registered[i] {
                builder.add_init(&Self::name(i), &Self::text(i));
            }
        }
        for &n in needed {
            builder.add_needed(&Self::name(n));
        }
        builder.build()
    }

    /// Transitive dependencies of `i`.
    fn ancestors(&self, i: usize) -> BTreeSet<usize> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<usize> = self.deps[i].iter().copied().collect();
        while let Some(n) = stack.pop() {
            if seen.insert(n) {
                stack.extend(self.deps[n].iter().copied());
            }
        }
        seen
    }
}

fn acyclic_graph_strategy(max_nodes: usize) -> impl Strategy<Value = AcyclicGraph> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..4),
            num_nodes,
        );
        let registered_strat = proptest::collection::vec(prop::bool::weighted(0.8), num_nodes);

        (deps_strat, registered_strat).prop_map(|(raw_deps, registered)| {
            let deps = raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential.into_iter().map(|d| d % i).collect()
                    }
                })
                .collect();
            AcyclicGraph { deps, registered }
        })
    })
}

fn positions(lines: &[String]) -> BTreeMap<&str, usize> {
    lines
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect()
}

proptest! {
    #[test]
    fn full_mode_is_topological_and_complete(g in acyclic_graph_strategy(12)) {
        let lines = emitted_lines(g.plan(&[])).expect("acyclic graph orders");
        let pos = positions(&lines);

        let registered: Vec<usize> = (0..g.deps.len()).filter(|&i| g.registered[i]).collect();
        prop_assert_eq!(lines.len(), registered.len());
        prop_assert_eq!(pos.len(), registered.len());

        for &a in &registered {
            for b in g.ancestors(a) {
                if g.registered[b] {
                    let ta = AcyclicGraph::text(a);
                    let tb = AcyclicGraph::text(b);
                    prop_assert!(pos[tb.as_str()] < pos[ta.as_str()], "{} before {}", tb, ta);
                }
            }
        }
    }

    #[test]
    fn needed_mode_is_subsequence_of_full_mode(
        g in acyclic_graph_strategy(12),
        seed in proptest::collection::vec(any::<usize>(), 1..3),
    ) {
        let n = g.deps.len();
        let needed: Vec<usize> = seed.into_iter().map(|s| s % n).collect();

        let full = emitted_lines(g.plan(&[])).expect("acyclic graph orders");
        let restricted = emitted_lines(g.plan(&needed)).expect("acyclic graph orders");

        let mut closure: BTreeSet<usize> = needed.iter().copied().collect();
        for &s in &needed {
            closure.extend(g.ancestors(s));
        }
        let expected: BTreeSet<String> = closure
            .iter()
            .filter(|&&i| g.registered[i])
            .map(|&i| AcyclicGraph::text(i))
            .collect();
        let got: BTreeSet<String> = restricted.iter().cloned().collect();
        prop_assert_eq!(got, expected);

        let mut cursor = full.iter();
        for line in &restricted {
            prop_assert!(cursor.any(|l| l == line), "{} out of order", line);
        }
    }

    #[test]
    fn adding_a_back_edge_makes_the_run_fail(g in acyclic_graph_strategy(8)) {
        let n = g.deps.len();
        prop_assume!(n >= 2);

        // Edges both ways between the first and last node close a cycle.
        let mut builder = PlanBuilder::new();
        builder.add_dependency(&AcyclicGraph::name(n - 1), &AcyclicGraph::name(0));
        builder.add_dependency(&AcyclicGraph::name(0), &AcyclicGraph::name(n - 1));
        for (i, deps) in g.deps.iter().enumerate() {
            for &d in deps {
                builder.add_dependency(&AcyclicGraph::name(i), &AcyclicGraph::name(d));
            }
        }

        let is_cycle = matches!(
            emitted_lines(builder.build()),
            Err(DependgenError::CycleDetected { .. })
        );
        prop_assert!(is_cycle);
    }
}
