//! Literal evaluation

use crate::value::Kind;
use crate::{Environment, EvalContext, EvalError, Value};

use super::Evaluate;

impl Evaluate for syn::ExprLit {
    fn eval(&self, env: &mut Environment, _ctx: &EvalContext) -> Result<Value, EvalError> {
        eval_lit(&self.lit, env)
    }
}

/// Evaluate a literal token to a Value.
pub fn eval_lit(lit: &syn::Lit, env: &Environment) -> Result<Value, EvalError> {
    match lit {
        syn::Lit::Int(i) => eval_int_literal(i),

        syn::Lit::Float(f) => eval_float_literal(f),

        syn::Lit::Str(s) => Ok(Value::string(s.value())),

        syn::Lit::Char(c) => Ok(Value::Char(c.value())),

        // `true` and `false` are identifiers bound in the prelude, not
        // literals; the tokenizer just happens to lex them as keywords.
        syn::Lit::Bool(b) => env
            .lookup(if b.value() { "true" } else { "false" })
            .cloned(),

        syn::Lit::ByteStr(_) => Err(unsupported("byte string literal")),
        syn::Lit::CStr(_) => Err(unsupported("C string literal")),
        syn::Lit::Byte(_) => Err(unsupported("byte literal")),
        syn::Lit::Verbatim(_) => Err(unsupported("verbatim literal")),
        _ => Err(unsupported("unknown literal")),
    }
}

/// Integer literals are plain base-10 digits. Radix prefixes, `_`
/// separators and suffixes are malformed, as is anything past `i64`.
fn eval_int_literal(lit: &syn::LitInt) -> Result<Value, EvalError> {
    let text = lit.to_string();
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(Kind::Integer, text));
    }
    text.parse::<i64>()
        .map(Value::Integer)
        .map_err(|_| malformed(Kind::Integer, text))
}

/// Float literals are `float32`s written with digits, `.` and an optional
/// exponent. Values outside the `f32` range are malformed rather than
/// infinite.
fn eval_float_literal(lit: &syn::LitFloat) -> Result<Value, EvalError> {
    let text = lit.to_string();
    let well_formed = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    match text.parse::<f32>() {
        Ok(n) if well_formed && n.is_finite() => Ok(Value::Float(n)),
        _ => Err(malformed(Kind::FloatingPoint, text)),
    }
}

fn malformed(kind: Kind, text: String) -> EvalError {
    EvalError::MalformedLiteral { kind, text }
}

fn unsupported(kind: &str) -> EvalError {
    EvalError::UnsupportedLiteral {
        kind: kind.to_string(),
    }
}
