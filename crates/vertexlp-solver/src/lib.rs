mod equation;
mod feasibility;
mod intersect;
mod numeric;
mod pairing;
mod problem;
mod segments;
mod selection;
mod solution;
mod solver;

pub use equation::{Equation, EquationKind, build_equations};
pub use feasibility::{is_feasible, satisfies};
pub use intersect::{IntersectionPoint, are_parallel, intersect, intersections};
pub use numeric::{DEFAULT_DECIMALS, DETERMINANT_EPSILON, Precision};
pub use pairing::pairwise;
pub use problem::{Constraint, ConstraintOp, LpProblem, Objective, Sense};
pub use segments::{boundary_segments, plot_extent};
pub use selection::{evaluate_vertices, is_optimal, sort_vertices};
pub use solution::{BoundarySegment, Solution, SolveError, Vertex};
pub use solver::Solver;
