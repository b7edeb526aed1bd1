use std::cmp::Ordering;

use crate::equation::Equation;
use crate::numeric::Precision;
use crate::problem::ConstraintOp;

/// Whether `(x, y)` satisfies one equation's comparison
pub fn satisfies(equation: &Equation, x: f64, y: f64, precision: &Precision) -> bool {
    let lhs = equation.lhs(x, y);
    if !lhs.is_finite() {
        return false;
    }
    let ordering = precision.compare(lhs, equation.c);
    match equation.d {
        ConstraintOp::Eq => ordering == Ordering::Equal,
        ConstraintOp::Ge => ordering != Ordering::Less,
        ConstraintOp::Le => ordering != Ordering::Greater,
    }
}

/// Whether `(x, y)` satisfies every constraint.
///
/// Axis equations are skipped; they only close the region for the
/// intersection search.
pub fn is_feasible(constraints: &[Equation], x: f64, y: f64, precision: &Precision) -> bool {
    constraints
        .iter()
        .filter(|e| !e.kind.is_axis())
        .all(|e| satisfies(e, x, y, precision))
}
