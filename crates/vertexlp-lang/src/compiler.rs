use thiserror::Error;
use vertexlp_solver::{
    Constraint, ConstraintOp, LpProblem, Objective, Sense, Solution, SolveError, Solver,
};

use crate::ast::*;
use crate::form::{Field, ProblemForm};
use crate::{ParseError, Parser};

/// Fewest constraints the input form accepts
pub const MIN_CONSTRAINTS: usize = 2;
/// Most constraints the input form accepts
pub const MAX_CONSTRAINTS: usize = 4;

/// Failure to turn a single expression into a number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Division by zero in expression")]
    DivisionByZero,
    #[error("Expression does not evaluate to a finite number")]
    NotFinite,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Invalid {field}: {source}")]
    InvalidField {
        field: String,
        #[source]
        source: EvalError,
    },
    #[error("Expected between {min} and {max} constraints, found {found}")]
    ConstraintCount { min: usize, max: usize, found: usize },
    #[error("Constraint {} has unknown direction code {code}", .index + 1)]
    InvalidDirection { index: usize, code: u8 },
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Evaluate a parsed coefficient expression
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    let value = match expr {
        Expr::Number(n) => *n,
        Expr::Neg(inner) => -evaluate(inner)?,
        Expr::BinaryOp { left, op, right } => {
            let left_val = evaluate(left)?;
            let right_val = evaluate(right)?;
            match op {
                BinaryOp::Add => left_val + right_val,
                BinaryOp::Sub => left_val - right_val,
                BinaryOp::Mul => left_val * right_val,
                BinaryOp::Div => {
                    if right_val == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    left_val / right_val
                }
            }
        }
        Expr::Paren(inner) => evaluate(inner)?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::NotFinite)
    }
}

/// Parse and evaluate the text of a coefficient field
pub fn evaluate_str(source: &str) -> Result<f64, EvalError> {
    let expr = Parser::parse(source)?;
    evaluate(&expr)
}

/// Compiler for turning a submitted form into an `LpProblem`
#[derive(Debug, Clone)]
pub struct Compiler {
    min_constraints: usize,
    max_constraints: usize,
}

impl Default for Compiler {
    fn default() -> Self {
        Self {
            min_constraints: MIN_CONSTRAINTS,
            max_constraints: MAX_CONSTRAINTS,
        }
    }
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the accepted number of constraint rows
    pub fn with_constraint_limits(mut self, min: usize, max: usize) -> Self {
        self.min_constraints = min;
        self.max_constraints = max.max(min);
        self
    }

    /// Compile a form, stopping at the first error
    pub fn compile(&self, form: &ProblemForm) -> Result<LpProblem, CompileError> {
        match self.collect(form) {
            Ok(problem) => Ok(problem),
            Err(mut errors) => Err(errors.remove(0)),
        }
    }

    /// Every problem with a form, in field order. Empty when it compiles.
    pub fn check(&self, form: &ProblemForm) -> Vec<CompileError> {
        self.collect(form).err().unwrap_or_default()
    }

    /// Compile a form and solve it
    pub fn solve(&self, form: &ProblemForm, solver: &Solver) -> Result<Solution, CompileError> {
        let problem = self.compile(form)?;
        Ok(solver.solve(&problem)?)
    }

    fn collect(&self, form: &ProblemForm) -> Result<LpProblem, Vec<CompileError>> {
        let mut errors = Vec::new();

        let found = form.constraints.len();
        if found < self.min_constraints || found > self.max_constraints {
            errors.push(CompileError::ConstraintCount {
                min: self.min_constraints,
                max: self.max_constraints,
                found,
            });
        }

        let a = field_value("objective coefficient a", &form.objective.a, &mut errors);
        let b = field_value("objective coefficient b", &form.objective.b, &mut errors);
        let (a, b) = (a.unwrap_or(0.0), b.unwrap_or(0.0));
        let mut problem = LpProblem::new(Sense::from_maximize(form.maximize));
        problem.objective = Objective::new(a, b);

        for (index, row) in form.constraints.iter().enumerate() {
            let name = |coefficient: &str| {
                format!("constraint {} coefficient {}", index + 1, coefficient)
            };
            let a = field_value(&name("a"), &row.a, &mut errors);
            let b = field_value(&name("b"), &row.b, &mut errors);
            let c = field_value(&name("c"), &row.c, &mut errors);

            let Some(op) = ConstraintOp::from_code(row.d) else {
                errors.push(CompileError::InvalidDirection { index, code: row.d });
                continue;
            };
            // Only rows whose a and b both evaluated can be judged degenerate
            if a == Some(0.0) && b == Some(0.0) {
                errors.push(SolveError::DegenerateConstraint { index }.into());
            }
            problem.constraints.push(Constraint::new(
                a.unwrap_or(0.0),
                b.unwrap_or(0.0),
                op,
                c.unwrap_or(0.0),
            ));
        }

        if errors.is_empty() {
            tracing::debug!(
                constraints = problem.num_constraints(),
                sense = ?problem.sense,
                "compiled problem form"
            );
            Ok(problem)
        } else {
            tracing::debug!(errors = errors.len(), "problem form has errors");
            Err(errors)
        }
    }
}

/// Evaluate one field, recording a failure under its name
fn field_value(name: &str, field: &Field, errors: &mut Vec<CompileError>) -> Option<f64> {
    let result = match field {
        Field::Number(n) if n.is_finite() => Ok(*n),
        Field::Number(_) => Err(EvalError::NotFinite),
        Field::Expr(source) => evaluate_str(source),
    };

    match result {
        Ok(value) => {
            tracing::trace!(field = name, value, "evaluated field");
            Some(value)
        }
        Err(source) => {
            errors.push(CompileError::InvalidField {
                field: name.to_string(),
                source,
            });
            None
        }
    }
}
