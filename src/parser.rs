use crate::common::Clause;
use crate::errors::*;
use regex::Regex;
use std::fs::File;
use std::io::BufRead;

/// A parsed DIMACS CNF formula.
pub struct Dimacs {
    /// Number of variables declared in the problem line.
    pub n_vars: usize,
    /// The 3-literal clauses.
    pub clauses: Vec<Clause>,
}

/// Parse a DIMACS CNF formula from a file.
pub fn parse_dimacs_from_file(filename: &str) -> Result<Dimacs> {
    let file = File::open(filename)?;
    let mut reader = std::io::BufReader::new(file);
    parse_dimacs_from_buf_reader(&mut reader)
}

/// Parse a DIMACS CNF formula from a buffer reader. Every clause must
/// have exactly three literals; anything else is an `InvalidClause`
/// error.
pub fn parse_dimacs_from_buf_reader<F>(reader: &mut F) -> Result<Dimacs>
where
    F: std::io::BufRead,
{
    let mut n_clauses = 0usize;
    let mut n_vars = 0usize;
    let mut clauses = vec![];

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            let re_cnf = Regex::new(r"p\s+cnf\s+(\d+)\s+(\d+)").unwrap();
            if let Some(cap) = re_cnf.captures(line) {
                n_vars = cap[1].parse()?;
                n_clauses = cap[2].parse()?;
            }
        } else {
            let re = Regex::new(r"(-?\d+)").unwrap();
            let mut codes = vec![];
            for cap in re.captures_iter(line) {
                match cap[1].parse::<i32>()? {
                    0 => continue,
                    l => codes.push(l),
                }
            }
            clauses.push(Clause::from_codes(&codes)?);
            if clauses.len() == n_clauses {
                break;
            }
        }
    }

    Ok(Dimacs { n_vars, clauses })
}
