use structopt::StructOpt;
use tsat::common::Clause;
use tsat::errors::Result;
use tsat::{heur, parser};

/// Heuristic 3-SAT solver: reads DIMACS CNF files and prints one
/// SAT/UNSAT verdict per file. Verdicts are approximate on instances
/// with more than a handful of variables.
#[derive(StructOpt)]
#[structopt(name = "tsat")]
struct Opt {
    /// Input files in DIMACS CNF format.
    #[structopt(name = "FILE", required = true)]
    files: Vec<String>,

    /// Solve the inputs in parallel.
    #[structopt(short, long)]
    parallel: bool,
}

fn read_formula(filename: &str) -> Result<Vec<Clause>> {
    Ok(parser::parse_dimacs_from_file(filename)?.clauses)
}

fn main() {
    let opt = Opt::from_args();

    let mut formulas = vec![];
    for filename in &opt.files {
        match read_formula(filename) {
            Ok(clauses) => formulas.push(clauses),
            Err(e) => {
                eprintln!("{}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }

    let verdicts = heur::solve_batch(&formulas, opt.parallel);
    for (filename, sat) in opt.files.iter().zip(verdicts) {
        let verdict = if sat { "SAT" } else { "UNSAT" };
        if opt.files.len() > 1 {
            println!("{}: {}", filename, verdict);
        } else {
            println!("{}", verdict);
        }
    }
}
