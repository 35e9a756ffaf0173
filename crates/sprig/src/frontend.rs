//! Language frontend trait for sprig
//!
//! A frontend turns source text into the declaration tree of [`crate::ast`]
//! and renders results back into text. The evaluator core never sees
//! source text.
//!
//! ```text
//! Source Code → [Frontend] → Declarations (syn::Expr initializers) → [Evaluator] → Values
//! ```

use std::fmt;

use crate::ast::Declaration;
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
///
/// A parse error is fatal to the whole evaluation call: nothing is
/// evaluated and nothing is bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,

    /// Optional source snippet for context
    pub snippet: Option<String>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            snippet: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a source snippet for context.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Build a parse error from a `syn` error, pointing at the offending
    /// line of `source`.
    pub fn from_syn(err: &syn::Error, file: &str, source: &str) -> Self {
        let start = err.span().start();
        let mut parsed = Self::new(err.to_string());
        // Spans from `parse_str` start at line 1; line 0 means no location.
        if start.line > 0 {
            parsed = parsed.with_location(SourceLocation::new(file, start.line, start.column + 1));
            if let Some(line) = source.lines().nth(start.line - 1) {
                parsed = parsed.with_snippet(format!("{}\n{}^", line, " ".repeat(start.column)));
            }
        }
        parsed
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}:{}", loc.file, loc.line, loc.column)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source code location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LANGUAGE FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Rendering of a slot that produced no value.
pub const NO_VALUE: &str = "<no value>";

/// Language frontend interface for sprig.
///
/// The frontend is responsible for:
/// - **Parsing:** Convert source text to declarations
/// - **Value formatting:** Render result values for display
///
/// The evaluator handles everything in between.
pub trait LanguageFrontend {
    /// Parse source code into top-level declarations.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source cannot be parsed.
    fn parse(&self, source: &str) -> Result<Vec<Declaration>, ParseError>;

    /// Format a value in a language-appropriate style.
    fn format_value(&self, value: &Value) -> String;

    /// Format one result slot; empty slots render as [`NO_VALUE`].
    fn format_slot(&self, slot: Option<&Value>) -> String {
        match slot {
            Some(value) => self.format_value(value),
            None => NO_VALUE.to_string(),
        }
    }

    /// Format a whole batch of results as a comma-joined line.
    fn format_results(&self, results: &[Option<Value>]) -> String {
        results
            .iter()
            .map(|slot| self.format_slot(slot.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Return the name of this language frontend.
    fn name(&self) -> &str;

    /// Return the file extension for this language.
    fn file_extension(&self) -> &str;
}
