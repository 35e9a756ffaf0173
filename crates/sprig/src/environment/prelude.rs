//! Standard prelude of protected bindings

use indexmap::IndexMap;

use crate::value::Value;

/// Immutable bindings that sit beneath user bindings and can never be
/// rebound. The standard prelude holds the two boolean constants.
#[derive(Debug, Clone, Default)]
pub struct Prelude {
    bindings: IndexMap<&'static str, Value>,
}

impl Prelude {
    /// The standard prelude: `true` and `false`.
    pub fn standard() -> Self {
        Self::empty().with("true", Value::TRUE).with("false", Value::FALSE)
    }

    /// A prelude with no bindings at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a protected binding.
    pub fn with(mut self, name: &'static str, value: Value) -> Self {
        self.bindings.insert(name, value);
        self
    }

    /// Look up a protected binding.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Check if a name is protected.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Protected names in definition order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }
}
