//! Path evaluation (identifier lookup)

use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

impl Evaluate for syn::ExprPath {
    fn eval(&self, env: &mut Environment, _ctx: &EvalContext) -> Result<Value, EvalError> {
        let ident = self
            .path
            .get_ident()
            .filter(|_| self.qself.is_none())
            .ok_or_else(|| EvalError::UnsupportedExpr {
                kind: format!("qualified path `{}`", path_to_string(&self.path)),
            })?;

        env.lookup(&ident.to_string()).cloned()
    }
}

/// Render a path for error messages.
pub fn path_to_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}
