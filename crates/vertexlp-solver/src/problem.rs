use crate::solution::SolveError;

/// Represents a two-variable linear programming problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LpProblem {
    /// Objective function `z = a·x + b·y`
    pub objective: Objective,
    /// Constraints, in the order they were entered
    pub constraints: Vec<Constraint>,
    /// Whether to maximize or minimize
    pub sense: Sense,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objective {
    /// Coefficient of x
    pub a: f64,
    /// Coefficient of y
    pub b: f64,
}

impl Objective {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    /// Coefficient of x
    pub a: f64,
    /// Coefficient of y
    pub b: f64,
    /// Right-hand side value
    pub c: f64,
    /// Comparison operator
    pub d: ConstraintOp,
}

impl Constraint {
    pub fn new(a: f64, b: f64, op: ConstraintOp, c: f64) -> Self {
        Self { a, b, c, d: op }
    }

    pub fn le(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, ConstraintOp::Le, c)
    }

    pub fn ge(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, ConstraintOp::Ge, c)
    }

    pub fn eq(a: f64, b: f64, c: f64) -> Self {
        Self::new(a, b, ConstraintOp::Eq, c)
    }
}

/// Comparison operator of a constraint.
///
/// On the wire the operator travels as the numeric code the input form
/// uses: `0` for equality, `1` for `>=` and `2` for `<=`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintOp {
    /// Equal (=)
    Eq,
    /// Greater than or equal (>=)
    Ge,
    /// Less than or equal (<=)
    Le,
}

impl ConstraintOp {
    pub fn code(self) -> u8 {
        match self {
            ConstraintOp::Eq => 0,
            ConstraintOp::Ge => 1,
            ConstraintOp::Le => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ConstraintOp::Eq),
            1 => Some(ConstraintOp::Ge),
            2 => Some(ConstraintOp::Le),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintOp::Eq => "=",
            ConstraintOp::Ge => ">=",
            ConstraintOp::Le => "<=",
        }
    }
}

impl TryFrom<u8> for ConstraintOp {
    type Error = SolveError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        ConstraintOp::from_code(code)
            .ok_or_else(|| SolveError::InvalidInput(format!("unknown direction code {}", code)))
    }
}

impl From<ConstraintOp> for u8 {
    fn from(op: ConstraintOp) -> u8 {
        op.code()
    }
}

impl std::fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

impl Sense {
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize {
            Sense::Maximize
        } else {
            Sense::Minimize
        }
    }

    pub fn is_maximize(self) -> bool {
        self == Sense::Maximize
    }

    /// Verb used when presenting the optimum ("maximizes"/"minimizes")
    pub fn verb(self) -> &'static str {
        match self {
            Sense::Maximize => "maximizes",
            Sense::Minimize => "minimizes",
        }
    }
}

impl LpProblem {
    pub fn new(sense: Sense) -> Self {
        Self {
            objective: Objective::new(0.0, 0.0),
            constraints: Vec::new(),
            sense,
        }
    }

    pub fn maximize(a: f64, b: f64) -> Self {
        let mut problem = Self::new(Sense::Maximize);
        problem.set_objective(a, b);
        problem
    }

    pub fn minimize(a: f64, b: f64) -> Self {
        let mut problem = Self::new(Sense::Minimize);
        problem.set_objective(a, b);
        problem
    }

    pub fn set_objective(&mut self, a: f64, b: f64) {
        self.objective = Objective::new(a, b);
    }

    pub fn add_constraint(&mut self, a: f64, b: f64, op: ConstraintOp, c: f64) {
        self.constraints.push(Constraint::new(a, b, op, c));
    }

    /// Builder form of [`LpProblem::add_constraint`]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Check coefficients before anything is solved.
    ///
    /// Non-finite numbers are `InvalidInput`; a constraint whose `a` and `b`
    /// are both zero is not a line and is `DegenerateConstraint`.
    pub fn validate(&self) -> Result<(), SolveError> {
        let Objective { a, b } = self.objective;
        if !a.is_finite() || !b.is_finite() {
            return Err(SolveError::InvalidInput(format!(
                "objective coefficients must be finite, got a={} b={}",
                a, b
            )));
        }

        for (index, c) in self.constraints.iter().enumerate() {
            if !c.a.is_finite() || !c.b.is_finite() || !c.c.is_finite() {
                return Err(SolveError::InvalidInput(format!(
                    "constraint {} has a non-finite coefficient",
                    index + 1
                )));
            }
            if c.a == 0.0 && c.b == 0.0 {
                return Err(SolveError::DegenerateConstraint { index });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_codes() {
        assert_eq!(ConstraintOp::from_code(0), Some(ConstraintOp::Eq));
        assert_eq!(ConstraintOp::from_code(1), Some(ConstraintOp::Ge));
        assert_eq!(ConstraintOp::from_code(2), Some(ConstraintOp::Le));
        assert_eq!(ConstraintOp::from_code(3), None);
        assert_eq!(u8::from(ConstraintOp::Le), 2);
        assert!(ConstraintOp::try_from(7).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_line() {
        let problem = LpProblem::maximize(1.0, 1.0)
            .with_constraint(Constraint::le(1.0, 1.0, 4.0))
            .with_constraint(Constraint::le(0.0, 0.0, 4.0));

        match problem.validate() {
            Err(SolveError::DegenerateConstraint { index }) => assert_eq!(index, 1),
            other => panic!("Expected degenerate constraint, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let problem = LpProblem::minimize(f64::NAN, 1.0)
            .with_constraint(Constraint::le(1.0, 1.0, 4.0));
        assert!(matches!(problem.validate(), Err(SolveError::InvalidInput(_))));

        let problem = LpProblem::minimize(1.0, 1.0)
            .with_constraint(Constraint::ge(1.0, f64::INFINITY, 4.0));
        assert!(matches!(problem.validate(), Err(SolveError::InvalidInput(_))));
    }

    #[test]
    fn test_objective_evaluate() {
        let objective = Objective::new(3.0, 2.0);
        assert_eq!(objective.evaluate(10.0, 0.0), 30.0);
        assert_eq!(objective.evaluate(1.0, 1.0), 5.0);
    }
}
