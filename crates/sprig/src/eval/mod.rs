//! Expression and declaration evaluation

pub mod binary;
pub mod decl;
pub mod literal;
pub mod path;
pub mod unary;

use quote::ToTokens;

use crate::{Environment, EvalContext, EvalError, Value};

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking evaluator.
/// Each `syn` expression shape sprig understands implements this trait.
pub trait Evaluate {
    /// Evaluate this AST node in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for syn::Expr {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        env.enter_expr(ctx.max_depth)?;
        let result = dispatch(self, env, ctx);
        env.exit_expr();
        result
    }
}

fn dispatch(expr: &syn::Expr, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
    match expr {
        syn::Expr::Lit(expr) => expr.eval(env, ctx),
        syn::Expr::Path(expr) => expr.eval(env, ctx),
        syn::Expr::Unary(expr) => expr.eval(env, ctx),
        syn::Expr::Binary(expr) => expr.eval(env, ctx),

        // Parenthesized expressions - just unwrap
        syn::Expr::Paren(expr) => expr.expr.eval(env, ctx),

        // Group expressions (for precedence) - just unwrap
        syn::Expr::Group(expr) => expr.expr.eval(env, ctx),

        // Everything else
        other => Err(EvalError::UnsupportedExpr {
            kind: format!(
                "{} `{}`",
                expr_kind_name(other),
                other.to_token_stream()
            ),
        }),
    }
}

/// Name an expression shape the evaluator does not reduce, in Go terms
/// where Go has one.
pub(crate) fn expr_kind_name(expr: &syn::Expr) -> &'static str {
    match expr {
        syn::Expr::Call(_) | syn::Expr::MethodCall(_) => "call",
        syn::Expr::Field(_) => "selector",
        syn::Expr::Index(_) => "index expression",
        syn::Expr::Range(_) => "slice expression",
        syn::Expr::Cast(_) => "conversion",
        syn::Expr::Array(_) | syn::Expr::Struct(_) | syn::Expr::Tuple(_) => "composite literal",
        syn::Expr::Reference(_) => "address-of",
        syn::Expr::Closure(_) => "function literal",
        syn::Expr::Assign(_) => "assignment",
        syn::Expr::Block(_) | syn::Expr::If(_) | syn::Expr::Loop(_) | syn::Expr::While(_) => {
            "statement"
        }
        syn::Expr::Macro(_) => "macro",
        _ => "expression",
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(
    expr: &syn::Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    expr.eval(env, ctx)
}

pub use binary::{eval_binary_op, BinaryOp};
pub use decl::{eval_declaration, eval_declarations, eval_value_spec, zero_value};
