use crate::equation::{Equation, EquationKind};
use crate::numeric::{DETERMINANT_EPSILON, Precision};
use crate::pairing::pairwise;
use crate::problem::ConstraintOp;
use crate::solution::SolveError;

/// Crossing point of two equations, rounded to the solver precision
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionPoint {
    pub x: f64,
    pub y: f64,
    /// Equation that came first in the search order
    pub first: EquationKind,
    /// Equation that came second in the search order
    pub second: EquationKind,
    /// Comparison sense of the first equation
    pub d: ConstraintOp,
}

impl IntersectionPoint {
    /// Whether this is the crossing of a constraint with one of the axes
    pub fn is_axis_crossing(&self) -> bool {
        !self.first.is_axis() && self.second.is_axis()
    }
}

/// Whether two lines are parallel or coincident.
///
/// Each row is scaled so its larger coefficient has magnitude 1 first, so
/// the test does not depend on the size of the coefficients.
pub fn are_parallel(first: &Equation, second: &Equation) -> bool {
    let (a1, b1, _) = normalized(first);
    let (a2, b2, _) = normalized(second);
    (a1 * b2 - a2 * b1).abs() <= DETERMINANT_EPSILON
}

fn normalized(equation: &Equation) -> (f64, f64, f64) {
    let norm = equation.a.abs().max(equation.b.abs());
    (equation.a / norm, equation.b / norm, equation.c / norm)
}

/// Solve the 2×2 system of two equations with Cramer's rule.
///
/// Parallel and coincident lines have no single crossing and produce
/// `SolveError::ParallelPair`. A crossing too far out to represent as a
/// finite `f64` produces `SolveError::NoFiniteIntersection`.
pub fn intersect(
    first: &Equation,
    second: &Equation,
    precision: &Precision,
) -> Result<IntersectionPoint, SolveError> {
    if are_parallel(first, second) {
        return Err(SolveError::ParallelPair {
            first: first.kind,
            second: second.kind,
        });
    }

    let (a1, b1, c1) = normalized(first);
    let (a2, b2, c2) = normalized(second);
    let det = a1 * b2 - a2 * b1;
    let x = precision.round((c1 * b2 - c2 * b1) / det);
    let y = precision.round((a1 * c2 - a2 * c1) / det);

    if !x.is_finite() || !y.is_finite() {
        return Err(SolveError::NoFiniteIntersection {
            first: first.kind,
            second: second.kind,
        });
    }

    Ok(IntersectionPoint {
        x,
        y,
        first: first.kind,
        second: second.kind,
        d: first.d,
    })
}

/// Every crossing between the equations, in pairing order.
///
/// The two axes are never paired with each other: their crossing is the
/// origin, which is not a boundary point of the feasible region unless a
/// constraint passes through it.
pub fn intersections(equations: &[Equation], precision: &Precision) -> Vec<IntersectionPoint> {
    pairwise(equations, |first, second| {
        if first.kind.is_axis() && second.kind.is_axis() {
            tracing::trace!(first = ?first.kind, second = ?second.kind, "skipping axis pair");
            return None;
        }
        match intersect(first, second, precision) {
            Ok(point) => Some(point),
            Err(err) => {
                tracing::trace!(%err, "no intersection");
                None
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::build_equations;
    use crate::problem::Constraint;

    fn constraint_eq(index: usize, c: Constraint) -> Equation {
        Equation::from_constraint(index, &c)
    }

    #[test]
    fn test_simple_crossing() {
        // x + y = 4 and x - y = 2 cross at (3, 1)
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::le(1.0, 1.0, 4.0));
        let e2 = constraint_eq(1, Constraint::ge(1.0, -1.0, 2.0));
        let point = intersect(&e1, &e2, &p).unwrap();

        assert!((point.x - 3.0).abs() < 1e-9, "x = {} (expected 3)", point.x);
        assert!((point.y - 1.0).abs() < 1e-9, "y = {} (expected 1)", point.y);
        assert_eq!(point.first, EquationKind::Constraint(0));
        assert_eq!(point.second, EquationKind::Constraint(1));
        assert_eq!(point.d, ConstraintOp::Le);
    }

    #[test]
    fn test_parallel_pair_is_not_a_point() {
        // x + y <= 5 and 2x + 2y <= 20 never meet
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::le(1.0, 1.0, 5.0));
        let e2 = constraint_eq(1, Constraint::le(2.0, 2.0, 20.0));

        match intersect(&e1, &e2, &p) {
            Err(SolveError::ParallelPair { first, second }) => {
                assert_eq!(first, EquationKind::Constraint(0));
                assert_eq!(second, EquationKind::Constraint(1));
            }
            other => panic!("Expected parallel pair, got {:?}", other),
        }
    }

    #[test]
    fn test_coincident_lines_are_parallel() {
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::le(1.0, 2.0, 4.0));
        let e2 = constraint_eq(1, Constraint::ge(2.0, 4.0, 8.0));
        assert!(intersect(&e1, &e2, &p).is_err());
    }

    #[test]
    fn test_zero_a_coefficient() {
        // y = 3 meets x + y = 5 at (2, 3); the first operand has a = 0
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::le(0.0, 1.0, 3.0));
        let e2 = constraint_eq(1, Constraint::le(1.0, 1.0, 5.0));

        let point = intersect(&e1, &e2, &p).unwrap();
        assert_eq!((point.x, point.y), (2.0, 3.0));

        let swapped = intersect(&e2, &e1, &p).unwrap();
        assert_eq!((swapped.x, swapped.y), (2.0, 3.0));
    }

    #[test]
    fn test_coordinates_are_rounded() {
        // x + y = 1 and x - 2y = 0 cross at (2/3, 1/3)
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::le(1.0, 1.0, 1.0));
        let e2 = constraint_eq(1, Constraint::le(1.0, -2.0, 0.0));
        let point = intersect(&e1, &e2, &p).unwrap();
        assert_eq!(point.x, 0.67);
        assert_eq!(point.y, 0.33);
    }

    #[test]
    fn test_small_coefficients_still_cross() {
        // 1e-7x + 2e-7y = 1 and 2e-7x + 1e-7y = 1 cross at (10^7/3, 10^7/3)
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::le(1e-7, 2e-7, 1.0));
        let e2 = constraint_eq(1, Constraint::le(2e-7, 1e-7, 1.0));

        assert!(!are_parallel(&e1, &e2));
        let point = intersect(&e1, &e2, &p).unwrap();
        assert!((point.x - 3333333.33).abs() < 1e-6, "x = {}", point.x);
        assert!((point.y - 3333333.33).abs() < 1e-6, "y = {}", point.y);
    }

    #[test]
    fn test_large_coefficients_do_not_overflow() {
        // 1e200x + 1e200y = 1e200 and 1e200x - 1e200y = 1e200 cross at (1, 0)
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::ge(1e200, 1e200, 1e200));
        let e2 = constraint_eq(1, Constraint::ge(1e200, -1e200, 1e200));

        let point = intersect(&e1, &e2, &p).unwrap();
        assert_eq!((point.x, point.y), (1.0, 0.0));
    }

    #[test]
    fn test_unrepresentable_crossing() {
        // Nearly parallel lines with huge constants meet beyond f64::MAX
        let p = Precision::default();
        let e1 = constraint_eq(0, Constraint::le(1.0, 1.0, 1e308));
        let e2 = constraint_eq(1, Constraint::le(1.0, 1.0001, -1e308));

        match intersect(&e1, &e2, &p) {
            Err(SolveError::NoFiniteIntersection { first, second }) => {
                assert_eq!(first, EquationKind::Constraint(0));
                assert_eq!(second, EquationKind::Constraint(1));
            }
            other => panic!("Expected no finite intersection, got {:?}", other),
        }

        let equations = [e1, e2];
        assert!(intersections(&equations, &p).is_empty());
    }

    #[test]
    fn test_axis_pair_excluded() {
        let p = Precision::default();
        let equations = build_equations(&[Constraint::le(1.0, 2.0, 10.0)]);
        let points = intersections(&equations, &p);

        // 3 equations -> 3 pairs, minus the axis pair
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|pt| pt.is_axis_crossing()));
        assert_eq!((points[0].x, points[0].y), (0.0, 5.0));
        assert_eq!(points[0].second, EquationKind::AxisY);
        assert_eq!((points[1].x, points[1].y), (10.0, 0.0));
        assert_eq!(points[1].second, EquationKind::AxisX);
    }

    #[test]
    fn test_parallel_to_axis_drops_one_crossing() {
        // x <= 4 is parallel to the vertical axis
        let p = Precision::default();
        let equations = build_equations(&[Constraint::le(1.0, 0.0, 4.0)]);
        let points = intersections(&equations, &p);

        assert_eq!(points.len(), 1);
        assert_eq!((points[0].x, points[0].y), (4.0, 0.0));
        assert_eq!(points[0].second, EquationKind::AxisX);
    }
}
