//! Evaluation sessions
//!
//! A session owns one environment for its whole lifetime. Every call to
//! [`Session::evaluate`] sees the bindings made by the calls before it.

use tracing::debug;

use crate::eval::eval_declarations;
use crate::frontend::{LanguageFrontend, ParseError};
use crate::frontends::GoFrontend;
use crate::{Environment, EvalContext, Value};

/// Parse `source` as Go declarations and evaluate it against `env`.
///
/// Returns one slot per declared name, in declaration order. A parse
/// error aborts the whole call before anything is bound.
///
/// # Example
///
/// ```
/// use sprig::{evaluate, Environment, EvalContext, Value};
///
/// let mut env = Environment::new();
/// let ctx = EvalContext::default();
/// let results = evaluate("var a, b = 4 * 2.0, 1 / 0", &mut env, &ctx).unwrap();
/// assert_eq!(results, vec![Some(Value::Float(8.0)), None]);
/// ```
pub fn evaluate(
    source: &str,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Vec<Option<Value>>, ParseError> {
    evaluate_with(&GoFrontend::new(), source, env, ctx)
}

/// Like [`evaluate`], with an explicit frontend.
pub fn evaluate_with<F: LanguageFrontend + ?Sized>(
    frontend: &F,
    source: &str,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Vec<Option<Value>>, ParseError> {
    let decls = frontend.parse(source)?;
    debug!(declarations = decls.len(), frontend = frontend.name(), "evaluating");
    Ok(eval_declarations(&decls, env, ctx))
}

/// One evaluation session: environment, context and frontend together.
#[derive(Debug, Clone)]
pub struct Session<F: LanguageFrontend = GoFrontend> {
    env: Environment,
    ctx: EvalContext,
    frontend: F,
}

impl Default for Session<GoFrontend> {
    fn default() -> Self {
        Self::new()
    }
}

impl Session<GoFrontend> {
    /// Create a session with the Go frontend and default settings.
    pub fn new() -> Self {
        Self::with_frontend(GoFrontend::new(), EvalContext::default())
    }
}

impl<F: LanguageFrontend> Session<F> {
    /// Create a session with a specific frontend and context.
    pub fn with_frontend(frontend: F, ctx: EvalContext) -> Self {
        Self {
            env: Environment::new(),
            ctx,
            frontend,
        }
    }

    /// Evaluate one batch of source.
    pub fn evaluate(&mut self, source: &str) -> Result<Vec<Option<Value>>, ParseError> {
        evaluate_with(&self.frontend, source, &mut self.env, &self.ctx)
    }

    /// Evaluate one batch and render the results as a comma-joined line.
    pub fn evaluate_line(&mut self, source: &str) -> Result<String, ParseError> {
        let results = self.evaluate(source)?;
        Ok(self.frontend.format_results(&results))
    }

    /// The session's environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Mutable access to the session's environment.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// The session's evaluation context.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// The session's frontend.
    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Forget every user binding.
    pub fn reset(&mut self) {
        self.env.clear();
    }
}
