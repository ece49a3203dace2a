use std::collections::{BTreeMap, btree_map};

/// Maps variable names to their current values.
///
/// Names are unique: assigning an existing name overwrites its value in
/// place. Iteration is in ascending name order. Reading a name never creates
/// an entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Environment {
    variables: BTreeMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    ///
    /// ## Example
    /// ```
    /// use formulon::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", 1.5);
    ///
    /// assert_eq!(env.get("x"), Some(1.5));
    /// assert_eq!(env.get("y"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn assign(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Returns `true` if `name` has been assigned.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of distinct variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over `(name, value)` pairs in ascending name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.variables.iter() }
    }
}

/// Iterator over the bindings of an [`Environment`], in name order.
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, f64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), *value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a str, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
