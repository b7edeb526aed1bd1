use crate::problem::{Constraint, ConstraintOp};

/// What an equation stands for in the intersection search
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquationKind {
    /// User constraint, by 0-based position in the problem
    Constraint(usize),
    /// The vertical axis, the line `x = 0`
    AxisY,
    /// The horizontal axis, the line `y = 0`
    AxisX,
}

impl EquationKind {
    pub fn is_axis(self) -> bool {
        matches!(self, EquationKind::AxisX | EquationKind::AxisY)
    }

    pub fn constraint_index(self) -> Option<usize> {
        match self {
            EquationKind::Constraint(index) => Some(index),
            _ => None,
        }
    }
}

/// A line `a·x + b·y = c` with the comparison sense of its constraint
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: ConstraintOp,
    pub kind: EquationKind,
}

impl Equation {
    pub fn from_constraint(index: usize, constraint: &Constraint) -> Self {
        Self {
            a: constraint.a,
            b: constraint.b,
            c: constraint.c,
            d: constraint.d,
            kind: EquationKind::Constraint(index),
        }
    }

    /// The two coordinate axes, vertical first.
    ///
    /// Both are `>= 0` so a renderer shading them covers the first
    /// quadrant; they never take part in the feasibility check.
    pub fn axes() -> [Equation; 2] {
        [
            Equation {
                a: 1.0,
                b: 0.0,
                c: 0.0,
                d: ConstraintOp::Ge,
                kind: EquationKind::AxisY,
            },
            Equation {
                a: 0.0,
                b: 1.0,
                c: 0.0,
                d: ConstraintOp::Ge,
                kind: EquationKind::AxisX,
            },
        ]
    }

    /// Left-hand side `a·x + b·y` at a point
    pub fn lhs(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y
    }
}

/// Build the equation list the intersection search runs over: every
/// constraint in input order, followed by the two axes.
pub fn build_equations(constraints: &[Constraint]) -> Vec<Equation> {
    constraints
        .iter()
        .enumerate()
        .map(|(i, c)| Equation::from_constraint(i, c))
        .chain(Equation::axes())
        .collect()
}
