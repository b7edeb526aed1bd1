use thiserror::Error;

use crate::equation::EquationKind;
use crate::intersect::IntersectionPoint;
use crate::problem::{ConstraintOp, Sense};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Constraint {} has a = 0 and b = 0 and is not a line", .index + 1)]
    DegenerateConstraint { index: usize },
    #[error("Equations {first:?} and {second:?} are parallel and do not intersect")]
    ParallelPair {
        first: EquationKind,
        second: EquationKind,
    },
    #[error("Equations {first:?} and {second:?} cross too far out to represent")]
    NoFiniteIntersection {
        first: EquationKind,
        second: EquationKind,
    },
    #[error("No feasible solution: no intersection point satisfies every constraint")]
    NoFeasibleSolution,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A corner of the feasible region with its objective value
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    /// Objective value `a·x + b·y`
    pub z: f64,
    /// Equations whose crossing produced this vertex
    #[cfg_attr(feature = "serde", serde(skip_serializing, default = "unknown_source"))]
    pub sources: (EquationKind, EquationKind),
}

#[cfg(feature = "serde")]
fn unknown_source() -> (EquationKind, EquationKind) {
    (EquationKind::AxisY, EquationKind::AxisX)
}

/// Part of a constraint line between its axis crossings, for plotting
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Comparison sense of the constraint, shading side for the renderer
    pub d: ConstraintOp,
    /// 0-based position of the constraint in the problem
    pub constraint: usize,
}

/// The result of solving an LP problem by the graphical method
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Whether the objective was maximized or minimized
    pub sense: Sense,
    /// Feasible vertices, best first
    pub vertices: Vec<Vertex>,
    /// Best vertex, equal to `vertices[0]`
    pub optimum: Vertex,
    /// Constraint lines clipped to the axes, one per constraint in input order
    pub segments: Vec<BoundarySegment>,
    /// Every crossing the search found, feasible or not, in pairing order
    #[cfg_attr(feature = "serde", serde(skip))]
    pub candidates: Vec<IntersectionPoint>,
}

impl Solution {
    pub fn objective_value(&self) -> f64 {
        self.optimum.z
    }

    /// Vertices tied with the optimum on objective value
    pub fn optimal_vertices(&self) -> impl Iterator<Item = &Vertex> {
        let best = self.optimum.z;
        self.vertices.iter().filter(move |v| v.z == best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, y: f64, z: f64) -> Vertex {
        Vertex {
            x,
            y,
            z,
            sources: (EquationKind::Constraint(0), EquationKind::AxisX),
        }
    }

    #[test]
    fn test_optimal_vertices_lists_ties() {
        let vertices = vec![vertex(0.0, 4.0, 8.0), vertex(2.0, 3.0, 8.0), vertex(4.0, 0.0, 4.0)];
        let solution = Solution {
            sense: Sense::Maximize,
            optimum: vertices[0],
            vertices,
            segments: Vec::new(),
            candidates: Vec::new(),
        };

        assert_eq!(solution.objective_value(), 8.0);
        assert_eq!(solution.optimal_vertices().count(), 2);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SolveError::DegenerateConstraint { index: 2 }.to_string(),
            "Constraint 3 has a = 0 and b = 0 and is not a line"
        );
        assert!(SolveError::NoFeasibleSolution.to_string().starts_with("No feasible solution"));
    }
}
