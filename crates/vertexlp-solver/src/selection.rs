use std::cmp::Ordering;

use crate::equation::Equation;
use crate::feasibility::is_feasible;
use crate::intersect::IntersectionPoint;
use crate::numeric::Precision;
use crate::problem::{Objective, Sense};
use crate::solution::Vertex;

/// Objective value at every feasible candidate.
///
/// Candidates that land on an already accepted point (several lines
/// through one corner) are reported once, at their first occurrence.
pub fn evaluate_vertices(
    objective: &Objective,
    equations: &[Equation],
    candidates: &[IntersectionPoint],
    precision: &Precision,
) -> Vec<Vertex> {
    let mut vertices: Vec<Vertex> = Vec::new();

    for point in candidates {
        if !is_feasible(equations, point.x, point.y, precision) {
            tracing::trace!(x = point.x, y = point.y, "rejected infeasible candidate");
            continue;
        }
        if vertices.iter().any(|v| v.x == point.x && v.y == point.y) {
            continue;
        }
        let z = precision.round(objective.evaluate(point.x, point.y));
        if z.is_nan() {
            tracing::trace!(x = point.x, y = point.y, "objective is undefined at candidate");
            continue;
        }
        vertices.push(Vertex {
            x: point.x,
            y: point.y,
            z,
            sources: (point.first, point.second),
        });
    }

    vertices
}

/// Order vertices best first: descending z when maximizing, ascending when
/// minimizing, ties by ascending x then ascending y
pub fn sort_vertices(vertices: &mut [Vertex], sense: Sense) {
    vertices.sort_by(|a, b| {
        let by_z = match sense {
            Sense::Maximize => b.z.total_cmp(&a.z),
            Sense::Minimize => a.z.total_cmp(&b.z),
        };
        by_z.then_with(|| a.x.total_cmp(&b.x))
            .then_with(|| a.y.total_cmp(&b.y))
    });
}

/// Whether `vertex` is at least as good as every other vertex
pub fn is_optimal(vertex: &Vertex, vertices: &[Vertex], sense: Sense) -> bool {
    vertices.iter().all(|v| match sense {
        Sense::Maximize => v.z.total_cmp(&vertex.z) != Ordering::Greater,
        Sense::Minimize => v.z.total_cmp(&vertex.z) != Ordering::Less,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equation::{EquationKind, build_equations};
    use crate::intersect::intersections;
    use crate::problem::Constraint;

    fn vertex(x: f64, y: f64, z: f64) -> Vertex {
        Vertex {
            x,
            y,
            z,
            sources: (EquationKind::Constraint(0), EquationKind::Constraint(1)),
        }
    }

    #[test]
    fn test_sort_maximize_and_minimize() {
        let mut vertices = vec![
            vertex(0.0, 5.0, 10.0),
            vertex(10.0, 0.0, 30.0),
            vertex(2.0, 2.0, 10.0),
        ];

        sort_vertices(&mut vertices, Sense::Maximize);
        let zs: Vec<_> = vertices.iter().map(|v| v.z).collect();
        assert_eq!(zs, vec![30.0, 10.0, 10.0]);
        // Tie on z = 10 broken by x
        assert_eq!(vertices[1].x, 0.0);

        sort_vertices(&mut vertices, Sense::Minimize);
        let xs: Vec<_> = vertices.iter().map(|v| v.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 10.0]);
    }

    #[test]
    fn test_tie_break_on_y() {
        let mut vertices = vec![
            vertex(1.0, 3.0, 0.0),
            vertex(1.0, -2.0, 0.0),
            vertex(0.0, 9.0, 0.0),
        ];
        sort_vertices(&mut vertices, Sense::Maximize);
        let points: Vec<_> = vertices.iter().map(|v| (v.x, v.y)).collect();
        assert_eq!(points, vec![(0.0, 9.0), (1.0, -2.0), (1.0, 3.0)]);
    }

    #[test]
    fn test_evaluate_filters_and_dedups() {
        // x + y <= 4, x - y >= 0 and y <= 2 all pass through (2, 2)
        let p = Precision::default();
        let equations = build_equations(&[
            Constraint::le(1.0, 1.0, 4.0),
            Constraint::ge(1.0, -1.0, 0.0),
            Constraint::le(0.0, 1.0, 2.0),
        ]);
        let candidates = intersections(&equations, &p);
        let vertices = evaluate_vertices(&Objective::new(1.0, 1.0), &equations, &candidates, &p);

        let corner_count = vertices.iter().filter(|v| (v.x, v.y) == (2.0, 2.0)).count();
        assert_eq!(corner_count, 1);
        assert!(vertices.iter().all(|v| is_feasible(&equations, v.x, v.y, &p)));
        for v in &vertices {
            assert_eq!(v.z, v.x + v.y);
        }
    }

    #[test]
    fn test_is_optimal() {
        let vertices = vec![vertex(0.0, 0.0, 1.0), vertex(1.0, 0.0, 3.0)];
        assert!(is_optimal(&vertices[1], &vertices, Sense::Maximize));
        assert!(!is_optimal(&vertices[0], &vertices, Sense::Maximize));
        assert!(is_optimal(&vertices[0], &vertices, Sense::Minimize));
    }
}
