use crate::equation::build_equations;
use crate::intersect::intersections;
use crate::numeric::{DEFAULT_DECIMALS, Precision};
use crate::problem::LpProblem;
use crate::segments::{boundary_segments, plot_extent};
use crate::selection::{evaluate_vertices, sort_vertices};
use crate::solution::{Solution, SolveError};

/// Graphical-method solver for two-variable LP problems
#[derive(Debug, Clone)]
pub struct Solver {
    /// Rounding policy for coordinates and comparisons
    precision: Precision,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            precision: Precision::new(DEFAULT_DECIMALS),
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of decimal places coordinates are rounded to
    pub fn with_precision(mut self, decimals: u32) -> Self {
        self.precision = Precision::new(decimals);
        self
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// Solve by enumerating the crossings of every pair of constraint lines
    /// and axes, keeping the feasible ones and ranking them by objective
    /// value.
    pub fn solve(&self, problem: &LpProblem) -> Result<Solution, SolveError> {
        problem.validate()?;

        let equations = build_equations(&problem.constraints);
        let candidates = intersections(&equations, &self.precision);
        let mut vertices =
            evaluate_vertices(&problem.objective, &equations, &candidates, &self.precision);

        tracing::debug!(
            equations = equations.len(),
            candidates = candidates.len(),
            vertices = vertices.len(),
            "enumerated intersections"
        );

        sort_vertices(&mut vertices, problem.sense);
        let Some(&optimum) = vertices.first() else {
            tracing::debug!("no candidate satisfies every constraint");
            return Err(SolveError::NoFeasibleSolution);
        };

        let extent = plot_extent(&candidates, &vertices);
        let segments = boundary_segments(&equations, &candidates, extent, &self.precision);

        tracing::debug!(
            x = optimum.x,
            y = optimum.y,
            z = optimum.z,
            sense = ?problem.sense,
            "selected optimum"
        );

        Ok(Solution {
            sense: problem.sense,
            vertices,
            optimum,
            segments,
            candidates,
        })
    }
}
