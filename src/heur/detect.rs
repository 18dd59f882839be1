use super::index::ImplicationIndex;
use crate::common::{Pair, Var};
use crate::twosat::{two_sat, TwoClause};
use std::collections::BTreeSet;

/// Three-stage unsatisfiability detection over the built indices.
/// Returns true when the formula is reported unsatisfiable.
///
/// Stage A runs the oracle on each forward entry: if falsifying a
/// literal `k` leaves its implied pair set contradictory, `k`'s
/// variable is flagged for unit treatment. Stage B runs the oracle on
/// each negated pair together with its witness units and their forward
/// pair sets: a contradiction licenses the De Morgan dual of the pair
/// as a derived binary clause. Stage C aggregates the flagged units and
/// derived clauses into one final 2-SAT instance, whose verdict is the
/// reported verdict.
pub(crate) fn detect(index: &ImplicationIndex) -> bool {
    let mut unsat_pos: BTreeSet<Var> = BTreeSet::new();
    let mut unsat_neg: BTreeSet<Var> = BTreeSet::new();
    let mut unsat_tup: BTreeSet<Pair> = BTreeSet::new();

    for (&k, pairs) in index.fwd() {
        let clauses: Vec<TwoClause> = pairs.iter().map(|&p| TwoClause::Pair(p)).collect();
        if !two_sat(&clauses) {
            if k.is_pos() {
                unsat_pos.insert(k.var());
            } else {
                unsat_neg.insert(k.var());
            }
        }
    }

    for (&key, witnesses) in index.bkw() {
        let mut clauses = vec![TwoClause::Pair(key)];
        for &witness in witnesses {
            clauses.push(TwoClause::Unit(witness));
            if let Some(pairs) = index.fwd_pairs(witness) {
                clauses.extend(pairs.iter().map(|&p| TwoClause::Pair(p)));
            }
        }
        if !two_sat(&clauses) {
            unsat_tup.insert(key.dual());
        }
    }

    let mut clauses: Vec<TwoClause> = Vec::new();
    clauses.extend(unsat_pos.iter().map(|&v| TwoClause::Unit(v.neg())));
    clauses.extend(unsat_neg.iter().map(|&v| TwoClause::Unit(v.pos())));
    clauses.extend(unsat_tup.iter().map(|&p| TwoClause::Pair(p)));

    !two_sat(&clauses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Clause;

    fn index_of(codes: &[[i32; 3]]) -> ImplicationIndex {
        let mut index = ImplicationIndex::new();
        for c in codes {
            index.append(Clause::from_codes(c).unwrap());
        }
        index
    }

    #[test]
    fn empty_index_reports_sat() {
        assert!(!detect(&ImplicationIndex::new()));
    }

    #[test]
    fn single_clause_reports_sat() {
        assert!(!detect(&index_of(&[[1, 2, 3]])));
        assert!(!detect(&index_of(&[[-1, -2, -3]])));
    }

    #[test]
    fn forced_contradiction_reports_unsat() {
        // (1) and (-1 or 2) and (-2 or -1), written as degenerate
        // 3-clauses, admit no assignment.
        assert!(detect(&index_of(&[[1, 1, 1], [-1, 2, 2], [-2, -2, -1]])));
    }

    #[test]
    fn complementary_pair_of_clauses_reports_sat() {
        assert!(!detect(&index_of(&[[1, 2, 3], [-1, -2, -3]])));
    }

    #[test]
    fn six_variable_instance_reports_sat() {
        assert!(!detect(&index_of(&[
            [1, 2, 3],
            [-1, 4, 5],
            [-2, -4, 6],
            [-3, 5, -6],
            [2, -5, -1],
            [-4, -5, -6],
        ])));
    }
}
