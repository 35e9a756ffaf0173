//! Runtime environment: the symbol table consulted by the evaluator

mod prelude;

pub use prelude::Prelude;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::EvalError;
use crate::value::Value;

/// The symbol table for one evaluation session.
///
/// Lookups consult the immutable [`Prelude`] first and the user bindings
/// second. User bindings never receive a prelude name, so `true` and
/// `false` cannot be rebound.
///
/// There is a single flat scope. The most recent binding of a name wins.
///
/// # Example
///
/// ```
/// use sprig::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Integer(1));
/// env.define("x", Value::Integer(2));
/// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
///
/// // Rebinding a prelude name is ignored
/// assert!(!env.define("true", Value::Integer(1)));
/// assert_eq!(env.get("true"), Some(&Value::TRUE));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// Built-in bindings, fixed at construction
    prelude: Prelude,

    /// User bindings in first-definition order
    bindings: IndexMap<String, Value>,

    /// Current expression nesting depth
    depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create an environment with the standard prelude and no user bindings.
    pub fn new() -> Self {
        Self::with_prelude(Prelude::standard())
    }

    /// Create an environment over a custom prelude.
    pub fn with_prelude(prelude: Prelude) -> Self {
        Self {
            prelude,
            bindings: IndexMap::new(),
            depth: 0,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value`, replacing any earlier binding.
    ///
    /// Returns `false` and leaves the environment untouched when `name`
    /// belongs to the prelude.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> bool {
        let name = name.into();
        if self.prelude.contains(&name) {
            trace!(%name, "ignoring rebind of prelude name");
            return false;
        }
        trace!(%name, ?value, "define");
        self.bindings.insert(name, value);
        true
    }

    /// Remove a user binding. Prelude names are never removed.
    pub fn undefine(&mut self, name: &str) -> Option<Value> {
        let removed = self.bindings.shift_remove(name);
        if removed.is_some() {
            trace!(%name, "undefine");
        }
        removed
    }

    /// Record the outcome of one declaration slot: a value binds the
    /// name, an empty slot leaves the name undefined.
    pub fn bind_slot(&mut self, name: &str, slot: Option<&Value>) {
        match slot {
            Some(value) => {
                self.define(name, value.clone());
            }
            None => {
                self.undefine(name);
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding by exact name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.prelude.get(name).or_else(|| self.bindings.get(name))
    }

    /// Look up a binding, reporting an undefined identifier as an error.
    pub fn lookup(&self, name: &str) -> Result<&Value, EvalError> {
        self.get(name).ok_or_else(|| EvalError::UndefinedVariable {
            name: name.to_string(),
        })
    }

    /// Check if a name resolves to anything.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a nested expression. Returns error if `max` would be exceeded.
    pub fn enter_expr(&mut self, max: usize) -> Result<(), EvalError> {
        if self.depth >= max {
            return Err(EvalError::DepthExceeded { max });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a nested expression.
    pub fn exit_expr(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current expression nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over user bindings in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The prelude beneath the user bindings.
    pub fn prelude(&self) -> &Prelude {
        &self.prelude
    }

    /// Number of user bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if there are no user bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop all user bindings. The prelude is untouched.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.depth = 0;
    }
}
