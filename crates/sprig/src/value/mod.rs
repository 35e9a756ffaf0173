//! Value representation for runtime values

mod display;
mod impls;
mod kind;

pub use display::format_scientific;
pub use kind::Kind;

use std::sync::Arc;

/// Runtime value produced by evaluating an initializer expression.
///
/// The set of kinds is closed. Operator tables in [`crate::eval::binary`]
/// match over pairs of variants without a wildcard arm, so adding a
/// variant here will not compile until every table handles it.
#[derive(Clone)]
pub enum Value {
    /// Signed machine-width integer (`int`)
    Integer(i64),

    /// Single-precision float (`float32`)
    Float(f32),

    /// UTF-8 text without its quote delimiters
    String(Arc<String>),

    /// Unicode scalar value (`rune`)
    Char(char),

    /// Boolean. Only ever built through [`Value::TRUE`] and [`Value::FALSE`]
    /// or [`Value::from_bool`].
    Bool(bool),
}

impl Value {
    /// The canonical `true` value
    pub const TRUE: Value = Value::Bool(true);

    /// The canonical `false` value
    pub const FALSE: Value = Value::Bool(false);
}
