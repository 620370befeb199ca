use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Stores the variable bindings of a run.
///
/// One environment is created empty at startup and lives until the end of
/// input. Bindings are created by declaration-assignment and overwritten in
/// place by copy-assignment and the compound operators; there is no scoping
/// and no shadowing.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns `true` if `name` is currently bound.
    #[must_use]
    pub fn is_bound(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Binds `name` to `value`, replacing any existing binding. A
    /// replacement may change the kind of the variable only through
    /// copy-assignment; the compound operators preserve it.
    pub fn bind(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }
}
