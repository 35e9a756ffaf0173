//! # Sprig
//!
//! A small tree-walking evaluator for Go-style variable declarations.
//!
//! Source such as `var a, b = 5 * -5, "go"` is parsed by a language
//! frontend into declarations whose initializers are `syn` expressions.
//! The evaluator reduces each initializer to a typed [`Value`] and binds
//! it in an [`Environment`].
//!
//! ## Architecture
//!
//! - **Language Frontend**: Parse source code to declarations
//! - **Evaluator**: Reduce `syn` expressions to values
//! - **Environment**: Flat symbol table over a protected prelude
//! - **Session**: One environment shared across evaluations
//!
//! ```
//! use sprig::{Session, Value};
//!
//! let mut session = Session::new();
//! let results = session.evaluate("var a, b, c = 5 * -5, 5 / 5, 10 % 5").unwrap();
//! assert_eq!(
//!     results,
//!     vec![
//!         Some(Value::Integer(-25)),
//!         Some(Value::Integer(1)),
//!         Some(Value::Integer(0)),
//!     ]
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod frontends;
pub mod session;
pub mod value;

// Re-export main types
pub use ast::{
    DeclKeyword, Declaration, SkippedDecl, SkippedKind, TypeExpr, ValueDecl, ValueSpec,
};
pub use context::EvalContext;
pub use environment::{Environment, Prelude};
pub use error::{EvalError, Result};
pub use eval::{eval_expr, BinaryOp, Evaluate};
pub use frontend::{LanguageFrontend, ParseError, SourceLocation};
pub use session::{evaluate, evaluate_with, Session};
pub use value::{Kind, Value};

/// Sprig version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
