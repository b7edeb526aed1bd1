use crate::equation::{Equation, EquationKind};
use crate::intersect::IntersectionPoint;
use crate::numeric::Precision;
use crate::solution::{BoundarySegment, Vertex};

/// Largest coordinate a plot of these points has to show, at least 1
pub fn plot_extent(candidates: &[IntersectionPoint], vertices: &[Vertex]) -> f64 {
    candidates
        .iter()
        .filter(|p| p.is_axis_crossing())
        .flat_map(|p| [p.x, p.y])
        .chain(vertices.iter().flat_map(|v| [v.x, v.y]))
        .fold(1.0, f64::max)
}

/// One segment per constraint, in constraint order.
///
/// A segment joins the constraint's crossing with the vertical axis to its
/// crossing with the horizontal axis. When there is only one crossing, or
/// both are the origin, the segment starts there and runs `extent` along
/// the line towards the first quadrant.
pub fn boundary_segments(
    equations: &[Equation],
    candidates: &[IntersectionPoint],
    extent: f64,
    precision: &Precision,
) -> Vec<BoundarySegment> {
    let mut segments = Vec::new();

    for equation in equations {
        let EquationKind::Constraint(index) = equation.kind else {
            continue;
        };

        let crossing = |axis: EquationKind| {
            candidates
                .iter()
                .find(|p| p.first == equation.kind && p.second == axis)
        };

        let (start, end) = match (crossing(EquationKind::AxisY), crossing(EquationKind::AxisX)) {
            (Some(v), Some(h)) if (v.x, v.y) != (h.x, h.y) => ((v.x, v.y), (h.x, h.y)),
            (Some(p), _) | (None, Some(p)) => {
                let (dx, dy) = first_quadrant_direction(equation);
                let end = (
                    precision.round(p.x + dx * extent),
                    precision.round(p.y + dy * extent),
                );
                ((p.x, p.y), end)
            }
            (None, None) => {
                tracing::warn!(constraint = index + 1, "constraint crosses neither axis");
                continue;
            }
        };

        segments.push(BoundarySegment {
            x1: start.0,
            y1: start.1,
            x2: end.0,
            y2: end.1,
            d: equation.d,
            constraint: index,
        });
    }

    segments
}

/// Unit vector along the line, picking the orientation with the larger
/// component sum. Lines with `a = b` tie on that sum and take the
/// orientation with positive x.
fn first_quadrant_direction(equation: &Equation) -> (f64, f64) {
    let norm = equation.a.hypot(equation.b);
    let (dx, dy) = (equation.b / norm, -equation.a / norm);
    let sum = dx + dy;
    if sum > 0.0 || (sum == 0.0 && dx > 0.0) {
        (dx, dy)
    } else {
        (-dx, -dy)
    }
}
