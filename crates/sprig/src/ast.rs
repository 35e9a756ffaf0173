//! Declaration tree consumed by the evaluator
//!
//! Declarations are sprig's own nodes. Initializer expressions are plain
//! `syn::Expr` values, so any frontend that can produce `syn` expressions
//! can drive the evaluator.

use std::fmt;

use proc_macro2::TokenStream;

/// Keyword that introduced a value declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKeyword {
    /// `var`
    Var,
    /// `const`
    Const,
}

/// One top-level declaration.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// `var ...` or `const ...`, possibly grouped in parentheses
    Value(ValueDecl),

    /// `func`, `type` or `import`: recognised but never evaluated
    Skipped(SkippedDecl),
}

/// A `var`/`const` declaration holding one or more specs.
#[derive(Debug, Clone)]
pub struct ValueDecl {
    /// The introducing keyword
    pub keyword: DeclKeyword,

    /// Specs in source order. A non-grouped declaration has exactly one.
    pub specs: Vec<ValueSpec>,
}

/// `a, b T = x, y`
///
/// Names and values pair up by index. Nothing checks that the counts
/// agree.
#[derive(Debug, Clone)]
pub struct ValueSpec {
    /// Declared names
    pub names: Vec<syn::Ident>,

    /// Declared type, if written
    pub ty: Option<TypeExpr>,

    /// Initializer expressions
    pub values: Vec<syn::Expr>,
}

/// A declared type.
#[derive(Debug, Clone)]
pub enum TypeExpr {
    /// A bare type name: `int`, `string`
    Name(syn::Ident),

    /// Any other type, kept as tokens: `[]int`, `*T`, `time.Duration`
    Composite(TokenStream),
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Name(name) => write!(f, "{}", name),
            TypeExpr::Composite(tokens) => write!(f, "{}", tokens),
        }
    }
}

/// Which keyword introduced a skipped declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippedKind {
    /// `func name(...) { ... }` or a method
    Func,
    /// `type T ...` or a grouped type declaration
    Type,
    /// `import "path"` or a grouped import
    Import,
}

/// A declaration that produces no values. Only its tokens are kept.
#[derive(Debug, Clone)]
pub struct SkippedDecl {
    /// The introducing keyword
    pub kind: SkippedKind,

    /// Everything after the keyword
    pub tokens: TokenStream,
}
