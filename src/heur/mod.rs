mod detect;
mod index;

pub use index::ImplicationIndex;

use crate::common::Clause;
use crate::errors::*;
use crate::parser::{self, Dimacs};
use rayon::prelude::*;
use std::io;

/// Heuristic 3-SAT solver.
///
/// Compiles the input clauses into forward and backward implication
/// indices and aggregates three rounds of exact 2-SAT analysis into a
/// single SAT/UNSAT verdict. No satisfying assignment is produced.
///
/// The procedure is a heuristic: neither soundness nor completeness has
/// been established. In practice it classifies instances of up to about
/// six variables reliably; verdicts on larger formulas are unverified
/// and may be wrong. Do not use it where an exact answer is required.
pub struct Solver {
    index: ImplicationIndex,
    n_clauses: usize,
}

impl Solver {
    /// Create a solver with no clauses.
    pub fn new() -> Self {
        Solver {
            index: ImplicationIndex::new(),
            n_clauses: 0,
        }
    }

    /// Read a formula in DIMACS format from STDIN.
    pub fn new_from_stdin() -> Result<Self> {
        Solver::new_from_buf_reader(&mut io::stdin().lock())
    }

    /// Read a formula in DIMACS format from a file.
    pub fn new_from_file(filename: &str) -> Result<Self> {
        Ok(Solver::from_dimacs(parser::parse_dimacs_from_file(
            filename,
        )?))
    }

    /// Read a formula in DIMACS format from a buffer reader.
    pub fn new_from_buf_reader<F>(reader: &mut F) -> Result<Self>
    where
        F: io::BufRead,
    {
        Ok(Solver::from_dimacs(parser::parse_dimacs_from_buf_reader(
            reader,
        )?))
    }

    fn from_dimacs(parsed: Dimacs) -> Self {
        let mut solver = Solver::new();
        for clause in parsed.clauses {
            solver.add_clause(clause);
        }
        solver
    }

    /// Returns the number of clauses added to the formula.
    pub fn n_clauses(&self) -> usize {
        self.n_clauses
    }

    /// Add a 3-literal clause to the formula.
    pub fn add_clause(&mut self, clause: Clause) {
        self.index.append(clause);
        self.n_clauses += 1;
    }

    /// Report a satisfiability verdict for the formula: true for SAT,
    /// false for UNSAT.
    ///
    /// The verdict does not depend on the order in which clauses were
    /// added, and repeated calls return the same answer. See the type
    /// docs for the accuracy caveat on larger instances.
    pub fn solve(&self) -> bool {
        !detect::detect(&self.index)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new()
    }
}

/// Solve several independent formulas, optionally in parallel. Every
/// formula gets its own solver state, so the verdicts are exactly what
/// `Solver::solve` reports for each formula alone, in input order.
pub fn solve_batch(formulas: &[Vec<Clause>], parallel: bool) -> Vec<bool> {
    let solve_one = |clauses: &Vec<Clause>| {
        let mut solver = Solver::new();
        for &clause in clauses {
            solver.add_clause(clause);
        }
        solver.solve()
    };

    if parallel {
        formulas.par_iter().map(solve_one).collect()
    } else {
        formulas.iter().map(solve_one).collect()
    }
}
