use rand::prelude::*;
use tsat::common::Clause;
use tsat::heur::{self, Solver};

/// Documented UNSAT instance from the reference runs.
const UNSAT_CASE: [[i32; 3]; 10] = [
    [-4, -1, 3],
    [-3, -2, -1],
    [-4, 1, 3],
    [-2, -1, 4],
    [-4, -2, 1],
    [1, 2, 4],
    [-1, 2, 3],
    [-4, -3, 2],
    [-3, -1, 4],
    [-2, 1, 4],
];

/// Documented SAT instance from the reference runs.
const SAT_CASE: [[i32; 3]; 16] = [
    [-4, 1, 3],
    [-4, -3, -2],
    [-4, -3, -1],
    [-4, -2, 3],
    [-3, 1, 4],
    [-3, -2, 4],
    [-3, 1, 2],
    [-4, 1, 2],
    [-3, -2, -1],
    [-2, 1, 4],
    [1, 3, 4],
    [-4, -1, 3],
    [-3, -1, 2],
    [1, 2, 4],
    [-2, -1, 4],
    [-2, 3, 4],
];

fn formula(codes: &[[i32; 3]]) -> Vec<Clause> {
    codes
        .iter()
        .map(|c| Clause::from_codes(c).unwrap())
        .collect()
}

fn solve(clauses: &[Clause]) -> bool {
    let mut solver = Solver::new();
    for &clause in clauses {
        solver.add_clause(clause);
    }
    solver.solve()
}

#[test]
fn documented_unsat_scenario() {
    assert!(!solve(&formula(&UNSAT_CASE)));
}

#[test]
fn documented_sat_scenario() {
    assert!(solve(&formula(&SAT_CASE)));
}

#[test]
fn empty_formula_is_sat() {
    assert!(solve(&[]));
}

#[test]
fn verdict_is_order_independent() {
    let mut rng = StdRng::seed_from_u64(7);
    for (codes, expected) in &[(&UNSAT_CASE[..], false), (&SAT_CASE[..], true)] {
        let mut clauses = formula(codes);
        for _ in 0..20 {
            clauses.shuffle(&mut rng);
            assert_eq!(solve(&clauses), *expected);
        }
    }
}

#[test]
fn duplicated_clauses_do_not_change_verdict() {
    for (codes, expected) in &[(&UNSAT_CASE[..], false), (&SAT_CASE[..], true)] {
        let mut clauses = formula(codes);
        clauses.extend(formula(codes));
        assert_eq!(solve(&clauses), *expected);
    }
}

#[test]
fn solving_twice_gives_the_same_verdict() {
    let clauses = formula(&SAT_CASE);
    assert_eq!(solve(&clauses), solve(&clauses));
}

#[test]
fn reads_dimacs_input() {
    let input = "
    c a satisfiable instance
    p cnf 3 4
    1 -2 3 0
    -1 2 -3 0
    2 3 -1 0
    -2 -3 1 0
    ";
    let solver = Solver::new_from_buf_reader(&mut input.as_bytes()).unwrap();
    assert_eq!(solver.n_clauses(), 4);
    assert!(solver.solve());
}

#[test]
fn reads_dimacs_file() {
    let dimacs = tsat::parser::parse_dimacs_from_file("tests/data/uf3-4.cnf").unwrap();
    assert_eq!(dimacs.n_vars, 3);
    assert_eq!(dimacs.clauses.len(), 4);

    let solver = Solver::new_from_file("tests/data/uf3-4.cnf").unwrap();
    assert_eq!(solver.n_clauses(), 4);
    assert!(solver.solve());
}

#[test]
fn rejects_non_ternary_dimacs_input() {
    let input = "
    p cnf 2 1
    1 2 0
    ";
    assert!(Solver::new_from_buf_reader(&mut input.as_bytes()).is_err());
}

#[test]
fn parallel_batch_matches_serial() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut formulas = vec![formula(&UNSAT_CASE), formula(&SAT_CASE), vec![]];
    for _ in 0..8 {
        let mut shuffled = formula(&UNSAT_CASE);
        shuffled.shuffle(&mut rng);
        formulas.push(shuffled);
        let mut shuffled = formula(&SAT_CASE);
        shuffled.shuffle(&mut rng);
        formulas.push(shuffled);
    }

    let serial = heur::solve_batch(&formulas, false);
    let parallel = heur::solve_batch(&formulas, true);
    assert_eq!(serial, parallel);
    assert!(!serial[0]);
    assert!(serial[1]);
    assert!(serial[2]);
}
