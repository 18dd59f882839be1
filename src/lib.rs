//! `tsat` is a heuristic 3-SAT solver based on repeated 2-SAT
//! reductions.
//!
//! Fragments of a 3-CNF formula are compiled into pairwise
//! implications, and three rounds of exact 2-SAT analysis (implication
//! graph plus strongly-connected-component checks) are aggregated into
//! a single SAT/UNSAT verdict.
//!
//! The procedure is a fast approximation, not a decision procedure:
//! neither soundness nor completeness has been proven, and verdicts are
//! only known to be reliable on small instances (up to about six
//! variables). It is meant as a cheap feasibility check where exact
//! exponential solvers are too slow, and it never produces a satisfying
//! assignment.
//!
//! ## An example
//!
//! ```rust
//! use tsat::common::Clause;
//! use tsat::heur::Solver;
//!
//! let mut solver = Solver::new();
//! for codes in &[[-4, -1, 3], [-3, -2, -1], [-4, 1, 3]] {
//!     solver.add_clause(Clause::from_codes(codes).unwrap());
//! }
//! assert!(solver.solve());
//! ```

#![deny(missing_docs)]

/// Common types and utils
pub mod common;

/// DIMACS CNF parsing
pub mod parser;

/// twosat, the exact 2-SAT oracle
pub mod twosat;

/// heur, the heuristic 3-SAT solver module
pub mod heur;

pub use common::errors;
