//! Evaluation context configuration

/// Configuration for evaluation.
///
/// This is passed through all evaluation calls and controls how
/// declarations and expressions are reduced.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum expression nesting depth (stack overflow protection)
    pub max_depth: usize,

    /// Whether declarations without initializers get the zero value of
    /// their declared type
    pub zero_values: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 256,
            zero_values: true,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Turn zero-value substitution on or off.
    pub fn with_zero_values(mut self, enabled: bool) -> Self {
        self.zero_values = enabled;
        self
    }
}
