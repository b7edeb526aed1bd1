/// A coefficient as submitted by the input form: either a plain number or
/// an arithmetic expression such as `"1,5 * 2"`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Number(f64),
    Expr(String),
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl From<&str> for Field {
    fn from(source: &str) -> Self {
        Field::Expr(source.to_string())
    }
}

impl From<String> for Field {
    fn from(source: String) -> Self {
        Field::Expr(source)
    }
}

/// Objective row of the form, `z = a·x + b·y`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveForm {
    pub a: Field,
    pub b: Field,
}

/// One constraint row, `a·x + b·y (d) c`
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintForm {
    pub a: Field,
    pub b: Field,
    pub c: Field,
    /// Direction code: 0 `=`, 1 `>=`, 2 `<=`
    pub d: u8,
}

impl ConstraintForm {
    pub fn new(a: impl Into<Field>, b: impl Into<Field>, d: u8, c: impl Into<Field>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d,
        }
    }
}

/// The problem exactly as a user filled it in, before any expression is
/// evaluated.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemForm {
    pub objective: ObjectiveForm,
    pub constraints: Vec<ConstraintForm>,
    #[cfg_attr(feature = "serde", serde(default = "default_maximize"))]
    pub maximize: bool,
}

#[cfg(feature = "serde")]
fn default_maximize() -> bool {
    true
}

impl ProblemForm {
    pub fn new(a: impl Into<Field>, b: impl Into<Field>, maximize: bool) -> Self {
        Self {
            objective: ObjectiveForm {
                a: a.into(),
                b: b.into(),
            },
            constraints: Vec::new(),
            maximize,
        }
    }

    pub fn with_constraint(mut self, constraint: ConstraintForm) -> Self {
        self.constraints.push(constraint);
        self
    }
}
