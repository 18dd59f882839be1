use crate::common::{Lit, Pair};
use petgraph::algo::tarjan_scc;
use petgraph::prelude::DiGraphMap;
use std::collections::HashMap;

/// A clause of arity 1 or 2, the only shapes the 2-SAT oracle accepts.
/// These arise as intermediate artifacts of the 3-SAT reduction, never
/// as solver input.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TwoClause {
    /// A single-literal clause.
    Unit(Lit),
    /// A two-literal clause in canonical form.
    Pair(Pair),
}

/// Canonical key form of a 1- or 2-literal tuple as used by the
/// implication indices. A pair sorts its literals so the smaller code
/// comes first; a unit is keyed by its negation.
///
/// Panics on any other arity; such a call is a programming defect, not
/// a recoverable condition.
pub fn normalize(lits: &[Lit]) -> TwoClause {
    match *lits {
        [l] => TwoClause::Unit(!l),
        [x, y] => TwoClause::Pair(Pair::new(x, y)),
        _ => panic!("normalize: arity must be 1 or 2, got {}", lits.len()),
    }
}

/// Exact 2-SAT decision procedure. Returns true iff the clause set is
/// satisfiable; the empty set is trivially satisfiable.
///
/// Builds the implication graph over literal nodes: a unit `(x)`
/// contributes the edge `¬x → x` plus a self-loop on `x`, a pair
/// `(x, y)` contributes `¬x → y` and `¬y → x`. The set is
/// unsatisfiable iff some variable occurs in the graph in both
/// polarities within a single strongly connected component.
pub fn two_sat(clauses: &[TwoClause]) -> bool {
    let mut graph: DiGraphMap<Lit, ()> = DiGraphMap::new();
    for &clause in clauses {
        match clause {
            TwoClause::Unit(x) => {
                graph.add_edge(!x, x, ());
                graph.add_edge(x, x, ());
            }
            TwoClause::Pair(p) => {
                let (x, y) = (p.lo(), p.hi());
                graph.add_edge(!x, y, ());
                graph.add_edge(!y, x, ());
            }
        }
    }

    let mut component = HashMap::new();
    for (i, scc) in tarjan_scc(&graph).into_iter().enumerate() {
        for node in scc {
            component.insert(node, i);
        }
    }

    for lit in graph.nodes() {
        if graph.contains_node(!lit) && component[&lit] == component[&!lit] {
            return false;
        }
    }
    true
}
