//! Binary operation evaluation
//!
//! Dispatch is a single match over the pair of operand values with no
//! wildcard arm. Each same-kind pair has its own operator table; an
//! integer paired with a float is promoted to `f32` and uses the float
//! table. Every other pairing is an error.

use std::fmt;

use quote::ToTokens;

use crate::value::Kind;
use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

/// Binary operators with at least one table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl BinaryOp {
    /// Map a `syn` operator; `None` for operators sprig does not evaluate.
    pub fn from_syn(op: &syn::BinOp) -> Option<Self> {
        match op {
            syn::BinOp::Add(_) => Some(BinaryOp::Add),
            syn::BinOp::Sub(_) => Some(BinaryOp::Sub),
            syn::BinOp::Mul(_) => Some(BinaryOp::Mul),
            syn::BinOp::Div(_) => Some(BinaryOp::Div),
            syn::BinOp::Rem(_) => Some(BinaryOp::Rem),
            syn::BinOp::Lt(_) => Some(BinaryOp::Lt),
            syn::BinOp::Gt(_) => Some(BinaryOp::Gt),
            syn::BinOp::Le(_) => Some(BinaryOp::Le),
            syn::BinOp::Ge(_) => Some(BinaryOp::Ge),
            _ => None,
        }
    }

    /// The operator as written in source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Evaluate for syn::ExprBinary {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        let left = self.left.eval(env, ctx)?;
        let right = self.right.eval(env, ctx)?;

        let op = BinaryOp::from_syn(&self.op).ok_or_else(|| EvalError::UnsupportedOperator {
            op: self.op.to_token_stream().to_string(),
        })?;

        eval_binary_op(op, left, right)
    }
}

/// Apply `op` to two evaluated operands.
pub fn eval_binary_op(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer(op, a, b),
        (Value::Integer(a), Value::Float(b)) => eval_float(op, a as f32, b),
        (l @ Value::Integer(_), r @ (Value::String(_) | Value::Char(_) | Value::Bool(_))) => {
            Err(mismatch(op, l.kind(), r.kind()))
        }

        (Value::Float(a), Value::Float(b)) => eval_float(op, a, b),
        (Value::Float(a), Value::Integer(b)) => eval_float(op, a, b as f32),
        (l @ Value::Float(_), r @ (Value::String(_) | Value::Char(_) | Value::Bool(_))) => {
            Err(mismatch(op, l.kind(), r.kind()))
        }

        (Value::String(a), Value::String(b)) => eval_string(op, &a, &b),
        (
            l @ Value::String(_),
            r @ (Value::Integer(_) | Value::Float(_) | Value::Char(_) | Value::Bool(_)),
        ) => Err(mismatch(op, l.kind(), r.kind())),

        (Value::Char(a), Value::Char(b)) => eval_char(op, a, b),
        (
            l @ Value::Char(_),
            r @ (Value::Integer(_) | Value::Float(_) | Value::String(_) | Value::Bool(_)),
        ) => Err(mismatch(op, l.kind(), r.kind())),

        (
            l @ Value::Bool(_),
            r @ (Value::Integer(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Char(_)
            | Value::Bool(_)),
        ) => Err(mismatch(op, l.kind(), r.kind())),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Operator Tables
// ═══════════════════════════════════════════════════════════════════════

/// `int` ⊕ `int`. Arithmetic wraps like a two's complement machine word.
fn eval_integer(op: BinaryOp, a: i64, b: i64) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => Ok(Value::Integer(a.wrapping_add(b))),
        BinaryOp::Sub => Ok(Value::Integer(a.wrapping_sub(b))),
        BinaryOp::Mul => Ok(Value::Integer(a.wrapping_mul(b))),
        BinaryOp::Div => nonzero(b == 0).map(|_| Value::Integer(a.wrapping_div(b))),
        BinaryOp::Rem => nonzero(b == 0).map(|_| Value::Integer(a.wrapping_rem(b))),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => compare(op, &a, &b),
    }
}

/// `rune` ⊕ `rune`. Arithmetic happens on 32-bit code points; a result
/// outside the Unicode scalar range has no value.
fn eval_char(op: BinaryOp, a: char, b: char) -> Result<Value, EvalError> {
    // Scalar values are at most 0x10FFFF, so they always fit an i32.
    let (x, y) = (u32::from(a) as i32, u32::from(b) as i32);
    match op {
        BinaryOp::Add => code_point(x.wrapping_add(y)),
        BinaryOp::Sub => code_point(x.wrapping_sub(y)),
        BinaryOp::Mul => code_point(x.wrapping_mul(y)),
        BinaryOp::Div => nonzero(y == 0).and_then(|_| code_point(x / y)),
        BinaryOp::Rem => nonzero(y == 0).and_then(|_| code_point(x % y)),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => compare(op, &a, &b),
    }
}

/// `string` ⊕ `string`: concatenation and lexical comparison only.
fn eval_string(op: BinaryOp, a: &str, b: &str) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => compare(op, a, b),
        BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => {
            Err(mismatch(op, Kind::String, Kind::String))
        }
    }
}

/// `float32` ⊕ `float32`. No remainder; dividing by zero has no value.
fn eval_float(op: BinaryOp, a: f32, b: f32) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => nonzero(b == 0.0).map(|_| Value::Float(a / b)),
        BinaryOp::Rem => Err(mismatch(op, Kind::FloatingPoint, Kind::FloatingPoint)),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => compare(op, &a, &b),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════

fn compare<T: PartialOrd + ?Sized>(op: BinaryOp, a: &T, b: &T) -> Result<Value, EvalError> {
    let holds = match op {
        BinaryOp::Lt => a < b,
        BinaryOp::Gt => a > b,
        BinaryOp::Le => a <= b,
        BinaryOp::Ge => a >= b,
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => {
            return Err(EvalError::UnsupportedOperator {
                op: op.symbol().to_string(),
            })
        }
    };
    Ok(Value::from_bool(holds))
}

fn nonzero(divisor_is_zero: bool) -> Result<(), EvalError> {
    if divisor_is_zero {
        Err(EvalError::DivisionByZero)
    } else {
        Ok(())
    }
}

fn code_point(code: i32) -> Result<Value, EvalError> {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .map(Value::Char)
        .ok_or(EvalError::InvalidCharacter {
            code: i64::from(code),
        })
}

fn mismatch(op: BinaryOp, left: Kind, right: Kind) -> EvalError {
    EvalError::InvalidBinaryOperands {
        op: op.symbol().to_string(),
        left,
        right,
    }
}
