//! Unary operation evaluation

use quote::ToTokens;

use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

impl Evaluate for syn::ExprUnary {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let operand = self.expr.eval(env, ctx)?;

        match &self.op {
            syn::UnOp::Neg(_) => eval_neg(operand),
            syn::UnOp::Not(_) => eval_not(operand),
            other => Err(EvalError::UnsupportedOperator {
                op: other.to_token_stream().to_string(),
            }),
        }
    }
}

/// Evaluate unary negation (`-x`). Integers only; wraps on `i64::MIN`.
pub(crate) fn eval_neg(operand: Value) -> Result<Value, EvalError> {
    match operand {
        Value::Integer(n) => Ok(Value::Integer(n.wrapping_neg())),
        other => Err(EvalError::InvalidUnaryOperand {
            op: "-".to_string(),
            operand: other.kind(),
        }),
    }
}

/// Evaluate logical NOT (`!x`). Booleans only.
pub(crate) fn eval_not(operand: Value) -> Result<Value, EvalError> {
    match operand {
        Value::Bool(b) => Ok(Value::from_bool(!b)),
        other => Err(EvalError::InvalidUnaryOperand {
            op: "!".to_string(),
            operand: other.kind(),
        }),
    }
}
