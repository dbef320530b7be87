use std::collections::HashMap;

/// Name of the binding that always holds the most recent result.
pub const LAST_ANSWER: &str = "r";

/// Named values shared by every evaluation of one [`Calculator`].
///
/// Names are case-insensitive; they are lower-cased on every access. A fresh
/// store holds `pi`, `e` and the last answer `r = 0`.
///
/// [`Calculator`]: crate::interpreter::evaluator::core::Calculator
#[derive(Debug, Clone, PartialEq)]
pub struct VariableStore {
    values: HashMap<String, f64>,
}

impl Default for VariableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableStore {
    /// Creates a store seeded with the mathematical constants and the last
    /// answer.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::variables::VariableStore;
    ///
    /// let store = VariableStore::new();
    /// assert_eq!(store.get("PI"), Some(std::f64::consts::PI));
    /// assert_eq!(store.last_answer(), 0.0);
    /// assert_eq!(store.len(), 3);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let values = HashMap::from([("pi".to_string(), std::f64::consts::PI),
                                    ("e".to_string(), std::f64::consts::E),
                                    (LAST_ANSWER.to_string(), 0.0)]);
        Self { values }
    }

    /// Returns the bound value, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(&name.to_lowercase()).copied()
    }

    /// Returns the bound value, or `0` when the name is unbound.
    #[must_use]
    pub fn value_or_default(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    /// Inserts or overwrites a binding.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_lowercase(), value);
    }

    /// Removes a binding and returns its value. Seeded names can be removed
    /// too; they come back with [`VariableStore::reset`].
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(&name.to_lowercase())
    }

    /// The result of the most recent successful evaluation.
    #[must_use]
    pub fn last_answer(&self) -> f64 {
        self.value_or_default(LAST_ANSWER)
    }

    /// Overwrites the last-answer binding.
    pub fn set_last_answer(&mut self, value: f64) {
        self.set(LAST_ANSWER, value);
    }

    /// Drops every user binding and restores the seeded constants.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// All bindings ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        let mut entries: Vec<_> = self.values
                                      .iter()
                                      .map(|(name, value)| (name.as_str(), *value))
                                      .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no bindings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_constants() {
        let store = VariableStore::new();
        assert_eq!(store.get("e"), Some(std::f64::consts::E));
        assert_eq!(store.get(LAST_ANSWER), Some(0.0));
    }

    #[test]
    fn names_are_case_insensitive() {
        let mut store = VariableStore::new();
        store.set("Speed", 3.0);
        assert_eq!(store.get("SPEED"), Some(3.0));
        assert_eq!(store.remove("speed"), Some(3.0));
        assert_eq!(store.get("speed"), None);
    }

    #[test]
    fn unbound_names_default_to_zero() {
        let store = VariableStore::new();
        assert_eq!(store.get("nope"), None);
        assert_eq!(store.value_or_default("nope"), 0.0);
    }

    #[test]
    fn set_overwrites() {
        let mut store = VariableStore::new();
        store.set("pi", 3.0);
        assert_eq!(store.get("pi"), Some(3.0));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn reset_restores_seed() {
        let mut store = VariableStore::new();
        store.set("x", 1.0);
        store.remove("pi");
        store.set_last_answer(9.0);
        store.reset();
        assert_eq!(store, VariableStore::new());
    }

    #[test]
    fn iteration_is_sorted() {
        let mut store = VariableStore::new();
        store.set("a", 1.0);
        let names: Vec<_> = store.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "e", "pi", "r"]);
    }
}
