//! Error types for sprig evaluation

use thiserror::Error;

use crate::value::Kind;

/// Why a single expression failed to produce a value.
///
/// These never escape a declaration: the evaluator logs the cause and
/// leaves the slot empty. They exist so the core can use `?` and so the
/// cause shows up in trace output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Identifier not bound in the environment
    #[error("undefined variable `{name}`")]
    UndefinedVariable {
        /// The identifier that was looked up
        name: String,
    },

    /// Operator applied to a pair of kinds it has no table entry for
    #[error("invalid operands for `{op}`: {left} and {right}")]
    InvalidBinaryOperands {
        /// The operator
        op: String,
        /// Kind of the left operand
        left: Kind,
        /// Kind of the right operand
        right: Kind,
    },

    /// Unary operator applied to the wrong kind
    #[error("invalid operand for unary `{op}`: {operand}")]
    InvalidUnaryOperand {
        /// The operator
        op: String,
        /// Kind of the operand
        operand: Kind,
    },

    /// Operator that sprig does not evaluate at all (`==`, `&&`, `<<`, ...)
    #[error("unsupported operator `{op}`")]
    UnsupportedOperator {
        /// The operator as written
        op: String,
    },

    /// Right operand of `/` or `%` was zero
    #[error("division by zero")]
    DivisionByZero,

    /// Numeric literal that does not fit its kind or carries a suffix
    #[error("malformed {kind} literal `{text}`")]
    MalformedLiteral {
        /// Literal kind
        kind: Kind,
        /// Literal text as written
        text: String,
    },

    /// Literal token of a kind with no runtime value (byte strings, ...)
    #[error("unsupported literal: {kind}")]
    UnsupportedLiteral {
        /// Description of the literal
        kind: String,
    },

    /// Expression node shape the evaluator does not reduce
    #[error("unsupported expression: {kind}")]
    UnsupportedExpr {
        /// Description of the node
        kind: String,
    },

    /// Character arithmetic left the range of Unicode scalar values
    #[error("character arithmetic produced {code}, which is not a Unicode scalar value")]
    InvalidCharacter {
        /// The out-of-range code point
        code: i64,
    },

    /// Expression nested deeper than the context allows
    #[error("expression nesting exceeds maximum depth of {max}")]
    DepthExceeded {
        /// Configured maximum
        max: usize,
    },

    /// Declared name with no initializer and no zero value to fall back on
    #[error("no initializer for `{name}`")]
    MissingInitializer {
        /// The declared name
        name: String,
    },
}

/// Result type alias for sprig evaluation
pub type Result<T> = std::result::Result<T, EvalError>;
