//! Variable assignments for 3-CNF formulas

use serde::{Deserialize, Serialize};
use std::fmt;

/// Truth value of a single variable or literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Truth {
    True,
    False,
    /// Not fixed by the solution; either value works
    Unassigned,
}

impl Truth {
    pub fn negate(self) -> Self {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            Truth::Unassigned => Truth::Unassigned,
        }
    }

    /// Single-character form: `T`, `F`, or `X` for either
    pub fn symbol(self) -> char {
        match self {
            Truth::True => 'T',
            Truth::False => 'F',
            Truth::Unassigned => 'X',
        }
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value {
            Truth::True
        } else {
            Truth::False
        }
    }
}

/// Mapping from variables `1..=variable_count` to truth values.
///
/// Built once by [`crate::sat::CnfInstance`] and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    values: Vec<Truth>,
}

impl Assignment {
    pub(crate) fn from_values(values: Vec<Truth>) -> Self {
        Self { values }
    }

    pub fn variable_count(&self) -> usize {
        self.values.len()
    }

    /// Value of variable `var` (1-based). Out-of-range variables are unassigned.
    pub fn get(&self, var: usize) -> Truth {
        var.checked_sub(1)
            .and_then(|idx| self.values.get(idx))
            .copied()
            .unwrap_or(Truth::Unassigned)
    }

    /// Value of a signed literal; a negative literal negates its variable
    pub fn literal_value(&self, literal: i32) -> Truth {
        let value = self.get(literal.unsigned_abs() as usize);
        if literal < 0 {
            value.negate()
        } else {
            value
        }
    }

    /// Iterate `(variable, value)` pairs in variable order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Truth)> + '_ {
        self.values.iter().enumerate().map(|(i, &v)| (i + 1, v))
    }

    pub fn assigned_count(&self) -> usize {
        self.values.iter().filter(|&&v| v != Truth::Unassigned).count()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", var, value.symbol())?;
        }
        write!(f, "]")
    }
}
