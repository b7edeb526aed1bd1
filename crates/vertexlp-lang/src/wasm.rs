//! WASM bindings for vertexlp
//!
//! This module provides JavaScript-friendly APIs so a browser form can
//! evaluate coefficient fields and plot the solved problem.

use wasm_bindgen::prelude::*;

use vertexlp_solver::{BoundarySegment, SolveError, Solver, Vertex};

use crate::compiler::{CompileError, Compiler, evaluate_str};
use crate::form::ProblemForm;

fn read_form(form: JsValue) -> Result<ProblemForm, JsValue> {
    serde_wasm_bindgen::from_value(form).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Evaluate a single coefficient field
#[wasm_bindgen]
pub fn evaluate(source: &str) -> Result<f64, JsValue> {
    evaluate_str(source).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a problem form and return diagnostics as JSON
#[wasm_bindgen]
pub fn validate(form: JsValue) -> JsValue {
    let diagnostics = match read_form(form) {
        Ok(form) => Compiler::new()
            .check(&form)
            .iter()
            .map(Diagnostic::from_error)
            .collect(),
        Err(e) => vec![Diagnostic {
            field: None,
            severity: "error".to_string(),
            message: e.as_string().unwrap_or_default(),
        }],
    };
    serde_wasm_bindgen::to_value(&diagnostics).unwrap_or(JsValue::NULL)
}

#[derive(serde::Serialize)]
struct Diagnostic {
    field: Option<String>,
    severity: String,
    message: String,
}

impl Diagnostic {
    fn from_error(error: &CompileError) -> Self {
        let field = match error {
            CompileError::InvalidField { field, .. } => Some(field.clone()),
            CompileError::InvalidDirection { index, .. } => {
                Some(format!("constraint {} direction", index + 1))
            }
            _ => None,
        };
        Self {
            field,
            severity: "error".to_string(),
            message: error.to_string(),
        }
    }
}

/// Solve a problem form and return the plot data as JSON
///
/// An infeasible problem is a regular result with status `infeasible`;
/// malformed forms reject with the first error message.
#[wasm_bindgen]
pub fn solve(form: JsValue, decimals: Option<u32>) -> Result<JsValue, JsValue> {
    let form = read_form(form)?;

    let mut solver = Solver::new();
    if let Some(decimals) = decimals {
        solver = solver.with_precision(decimals);
    }

    let result = match Compiler::new().solve(&form, &solver) {
        Ok(solution) => SolveResult {
            status: "optimal".to_string(),
            direction: solution.sense.verb().to_string(),
            optimum: Some(solution.optimum),
            vertices: solution.vertices,
            segments: solution.segments,
            message: None,
        },
        Err(CompileError::Solve(SolveError::NoFeasibleSolution)) => SolveResult {
            status: "infeasible".to_string(),
            direction: if form.maximize { "maximizes" } else { "minimizes" }.to_string(),
            optimum: None,
            vertices: Vec::new(),
            segments: Vec::new(),
            message: Some(SolveError::NoFeasibleSolution.to_string()),
        },
        Err(e) => return Err(JsValue::from_str(&e.to_string())),
    };

    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(serde::Serialize)]
struct SolveResult {
    status: String,
    direction: String,
    optimum: Option<Vertex>,
    vertices: Vec<Vertex>,
    segments: Vec<BoundarySegment>,
    message: Option<String>,
}
