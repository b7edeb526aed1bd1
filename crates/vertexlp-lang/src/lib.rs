pub mod ast;
pub mod compiler;
pub mod form;
pub mod lexer;
pub mod parser;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use ast::*;
pub use compiler::{
    CompileError, Compiler, EvalError, MAX_CONSTRAINTS, MIN_CONSTRAINTS, evaluate, evaluate_str,
};
pub use form::{ConstraintForm, Field, ObjectiveForm, ProblemForm};
pub use lexer::{Lexer, Span, Token, TokenKind};
pub use parser::{MAX_NESTING, ParseError, Parser};
