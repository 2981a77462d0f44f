//! In-memory 3-CNF formulas

use super::{Assignment, Truth};
use crate::error::{ReduceError, Result};
use crate::reduce::Clique;
use itertools::Itertools;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Literals per clause
pub const CLAUSE_WIDTH: usize = 3;

/// Largest accepted variable number; assignments hold one entry per variable
pub const MAX_VARIABLE: u32 = 1 << 20;

/// A 3-CNF formula stored as a flat list of signed literals, three per clause.
///
/// Variables are numbered `1..=variable_count`; a negative literal is the
/// negation of its variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CnfInstance {
    literals: Vec<i32>,
    variable_count: usize,
}

impl CnfInstance {
    /// Build a formula from a token sequence.
    ///
    /// Fails when the token count is not a positive multiple of three, a
    /// literal is zero, or a variable number exceeds [`MAX_VARIABLE`].
    pub fn parse(tokens: &[i32]) -> Result<Self> {
        if tokens.is_empty() || tokens.len() % CLAUSE_WIDTH != 0 {
            return Err(ReduceError::MalformedCnf {
                tokens: tokens.len(),
            });
        }
        if let Some(position) = tokens.iter().position(|&lit| lit == 0) {
            return Err(ReduceError::ZeroLiteral { position });
        }
        if let Some(position) = tokens.iter().position(|lit| lit.unsigned_abs() > MAX_VARIABLE) {
            return Err(ReduceError::LiteralOutOfRange {
                position,
                literal: tokens[position],
            });
        }

        let variable_count = tokens
            .iter()
            .map(|lit| lit.unsigned_abs() as usize)
            .max()
            .unwrap_or(1);

        Ok(Self {
            literals: tokens.to_vec(),
            variable_count,
        })
    }

    pub fn literals(&self) -> &[i32] {
        &self.literals
    }

    /// Literal at a flat position (`3 * clause + slot`)
    pub fn literal(&self, position: usize) -> i32 {
        self.literals[position]
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.literals.len() / CLAUSE_WIDTH
    }

    pub fn clauses(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.literals.chunks_exact(CLAUSE_WIDTH)
    }

    /// Render each literal as its truth value under `assignment`
    pub fn render_with_assignment(&self, assignment: &Assignment) -> String {
        self.clauses()
            .map(|clause| {
                format!(
                    "({})",
                    clause
                        .iter()
                        .map(|&lit| format!("{:>2}", assignment.literal_value(lit).symbol()))
                        .join("|")
                )
            })
            .join("∧")
    }

    /// Read a solution off a clique in the literal graph.
    ///
    /// Every selected literal is made true. Unselected positions leave their
    /// variable untouched, so variables no clause relies on stay unassigned.
    pub fn assignment_from_clique(&self, clique: &Clique) -> Result<Assignment> {
        if clique.len() != self.literals.len() {
            return Err(ReduceError::CoverLength {
                expected: self.literals.len(),
                actual: clique.len(),
            });
        }

        let mut values = vec![Truth::Unassigned; self.variable_count];
        for position in clique.vertices() {
            let lit = self.literals[position];
            let slot = &mut values[lit.unsigned_abs() as usize - 1];
            let value = Truth::from(lit > 0);
            debug_assert!(
                *slot == Truth::Unassigned || *slot == value,
                "clique selects both {} and {}",
                lit,
                -lit
            );
            *slot = value;
        }

        Ok(Assignment::from_values(values))
    }

    /// Each variable independently true or false with probability 1/2.
    ///
    /// Only a display fallback when no solution exists; it satisfies nothing
    /// in particular.
    pub fn random_assignment<R: Rng>(&self, rng: &mut R) -> Assignment {
        let values = (0..self.variable_count)
            .map(|_| Truth::from(rng.random_bool(0.5)))
            .collect();
        Assignment::from_values(values)
    }
}

impl FromStr for CnfInstance {
    type Err = ReduceError;

    /// Parse whitespace-separated signed integers
    fn from_str(s: &str) -> Result<Self> {
        let tokens = s
            .split_whitespace()
            .map(|token| {
                token.parse::<i32>().map_err(|_| ReduceError::Parse {
                    line: 1,
                    message: format!("invalid literal '{}'", token),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::parse(&tokens)
    }
}

impl fmt::Display for CnfInstance {
    /// Clauses as `( 1| 2|-3)∧(-1| 2| 4)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .clauses()
            .map(|clause| format!("({})", clause.iter().map(|lit| format!("{:>2}", lit)).join("|")))
            .join("∧");
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse() {
        let cnf = CnfInstance::parse(&[2, -1, -1, -3, -2, -4]).unwrap();
        assert_eq!(cnf.clause_count(), 2);
        assert_eq!(cnf.variable_count(), 4);
        assert_eq!(cnf.literal(3), -3);
        assert_eq!(cnf.clauses().nth(1), Some(&[-3, -2, -4][..]));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            CnfInstance::parse(&[]),
            Err(ReduceError::MalformedCnf { tokens: 0 })
        );
        assert_eq!(
            CnfInstance::parse(&[1, 2, 3, 4]),
            Err(ReduceError::MalformedCnf { tokens: 4 })
        );
        assert_eq!(
            CnfInstance::parse(&[1, 0, 3]),
            Err(ReduceError::ZeroLiteral { position: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range_literals() {
        assert_eq!(
            CnfInstance::parse(&[1, 2, 3, i32::MIN, 1, 1]),
            Err(ReduceError::LiteralOutOfRange {
                position: 3,
                literal: i32::MIN
            })
        );
        assert_eq!(
            CnfInstance::parse(&[1, 2_000_000_000, 3]),
            Err(ReduceError::LiteralOutOfRange {
                position: 1,
                literal: 2_000_000_000
            })
        );

        let max = MAX_VARIABLE as i32;
        let cnf = CnfInstance::parse(&[max, -max, 1]).unwrap();
        assert_eq!(cnf.variable_count(), MAX_VARIABLE as usize);
    }

    #[test]
    fn test_from_str() {
        let cnf: CnfInstance = " 1 -2  3 ".parse().unwrap();
        assert_eq!(cnf.literals(), &[1, -2, 3]);
        assert!("1 two 3".parse::<CnfInstance>().is_err());
        assert!("".parse::<CnfInstance>().is_err());
    }

    #[test]
    fn test_render() {
        let cnf = CnfInstance::parse(&[2, -1, -1, -3, -2, -4]).unwrap();
        assert_eq!(cnf.to_string(), "( 2|-1|-1)∧(-3|-2|-4)");
    }

    #[test]
    fn test_render_with_assignment() {
        let cnf = CnfInstance::parse(&[1, -2, 3]).unwrap();
        let assignment = Assignment::from_values(vec![Truth::True, Truth::True, Truth::Unassigned]);
        assert_eq!(cnf.render_with_assignment(&assignment), "( T| F| X)");
    }

    #[test]
    fn test_assignment_from_clique() {
        let cnf = CnfInstance::parse(&[1, 2, 3, -1, -2, -3]).unwrap();
        // Select literal 2 in the first clause and -3 in the second
        let clique = Clique::from(bitvec![0, 1, 0, 0, 0, 1]);
        let assignment = cnf.assignment_from_clique(&clique).unwrap();
        assert_eq!(assignment.get(1), Truth::Unassigned);
        assert_eq!(assignment.get(2), Truth::True);
        assert_eq!(assignment.get(3), Truth::False);
    }

    #[test]
    fn test_assignment_from_clique_length() {
        let cnf = CnfInstance::parse(&[1, 2, 3]).unwrap();
        let clique = Clique::from(bitvec![1, 0]);
        assert!(cnf.assignment_from_clique(&clique).is_err());
    }

    #[test]
    fn test_random_assignment_is_total() {
        let cnf = CnfInstance::parse(&[1, 2, -5]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let assignment = cnf.random_assignment(&mut rng);
        assert_eq!(assignment.variable_count(), 5);
        assert_eq!(assignment.assigned_count(), 5);

        let mut again = StdRng::seed_from_u64(7);
        assert_eq!(cnf.random_assignment(&mut again), assignment);
    }
}
