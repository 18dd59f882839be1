use self::errors::*;
use std::ops::Not;

/// A variable, identified by a positive integer id.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Var(u32);

impl Var {
    /// Create new var
    pub(crate) fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the positive integer id of the variable.
    pub fn id(self) -> u32 {
        self.0
    }

    /// Create positive literal from variable.
    pub fn pos(self) -> Lit {
        Lit(self.0 as i32)
    }

    /// Create negative literal from variable.
    pub fn neg(self) -> Lit {
        Lit(-(self.0 as i32))
    }
}

/// A literal, stored as its nonzero integer code. The absolute value is
/// the variable id; a negative code denotes the negated occurrence.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Lit(i32);

impl Lit {
    /// Create a literal from its integer code. Zero denotes no literal,
    /// and `i32::MIN` has no representable negation; both are rejected.
    pub fn new(code: i32) -> Result<Self> {
        if code == 0 || code == i32::MIN {
            Err(ErrorKind::InvalidClause(format!("bad literal code {}", code)).into())
        } else {
            Ok(Lit(code))
        }
    }

    /// Returns the integer code of the literal.
    pub fn code(self) -> i32 {
        self.0
    }

    /// Returns the var corresponding to the literal.
    pub fn var(self) -> Var {
        Var::new(self.0.unsigned_abs())
    }

    /// Returns true if the literal is positive (i.e. not negated).
    pub fn is_pos(self) -> bool {
        self.0 > 0
    }
}

impl Not for Lit {
    type Output = Self;

    /// Returns x for -x and -x for x.
    fn not(self) -> Self {
        Lit(-self.0)
    }
}

/// An unordered 2-literal clause in canonical form: the literal with
/// the smaller integer code always comes first, so `Pair::new(x, y)`
/// and `Pair::new(y, x)` are the same value and pairs can serve as map
/// keys.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Pair {
    lo: Lit,
    hi: Lit,
}

impl Pair {
    /// Create a pair from two literals in either order.
    pub fn new(x: Lit, y: Lit) -> Self {
        if x <= y {
            Pair { lo: x, hi: y }
        } else {
            Pair { lo: y, hi: x }
        }
    }

    /// The smaller literal of the pair.
    pub fn lo(self) -> Lit {
        self.lo
    }

    /// The larger literal of the pair.
    pub fn hi(self) -> Lit {
        self.hi
    }

    /// The De Morgan dual of the pair: both literals negated.
    pub fn dual(self) -> Self {
        Pair::new(!self.hi, !self.lo)
    }
}

/// A 3-literal input clause. Duplicate or degenerate literals are
/// accepted silently.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Clause {
    /// The three literals forming the clause.
    pub lits: [Lit; 3],
}

impl Clause {
    /// Create a clause from three literals.
    pub fn new(a: Lit, b: Lit, c: Lit) -> Self {
        Clause { lits: [a, b, c] }
    }

    /// Create a clause from integer literal codes. Anything other than
    /// exactly three nonzero codes is an `InvalidClause` error.
    pub fn from_codes(codes: &[i32]) -> Result<Self> {
        match *codes {
            [a, b, c] => Ok(Clause::new(Lit::new(a)?, Lit::new(b)?, Lit::new(c)?)),
            _ => Err(ErrorKind::InvalidClause(format!(
                "expected 3 literals, found {}",
                codes.len()
            ))
            .into()),
        }
    }
}

/// Errors module.
#[allow(missing_docs)]
pub mod errors {
    error_chain::error_chain! {
        foreign_links {
            Io(std::io::Error);
            ParseIntError(std::num::ParseIntError);
        }
        errors {
            InvalidClause(reason: String) {
                description("invalid clause")
                display("invalid clause: {}", reason)
            }
        }
    }
}
