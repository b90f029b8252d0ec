//! Visitation identifiers assigned in first-visit order

use std::collections::HashMap;

/// Outcome of registering a package path with a [`VisitRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// The path was seen for the first time and received this id
    First(usize),
    /// The path was already registered under this id
    Revisit(usize),
}

impl Arrival {
    pub fn id(self) -> usize {
        match self {
            Arrival::First(id) | Arrival::Revisit(id) => id,
        }
    }

    pub fn is_revisit(self) -> bool {
        matches!(self, Arrival::Revisit(_))
    }
}

/// Maps package paths to the identifier they received on first visit.
///
/// Ids are dense and start at zero: the n-th distinct path gets `n - 1`.
#[derive(Debug, Clone, Default)]
pub struct VisitRegistry {
    ids: HashMap<String, usize>,
}

impl VisitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a visit to `path`, assigning the next id on first arrival
    pub fn register(&mut self, path: &str) -> Arrival {
        if let Some(&id) = self.ids.get(path) {
            return Arrival::Revisit(id);
        }
        let id = self.ids.len();
        self.ids.insert(path.to_string(), id);
        Arrival::First(id)
    }

    /// Identifier previously assigned to `path`
    pub fn get(&self, path: &str) -> Option<usize> {
        self.ids.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Registered paths ordered by identifier
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<(&str, usize)> =
            self.ids.iter().map(|(path, &id)| (path.as_str(), id)).collect();
        paths.sort_by_key(|&(_, id)| id);
        paths.into_iter().map(|(path, _)| path).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_first_arrival() {
        let mut registry = VisitRegistry::new();

        assert_eq!(registry.register("app"), Arrival::First(0));
        assert_eq!(registry.register("fmt"), Arrival::First(1));
        assert_eq!(registry.register("app/util"), Arrival::First(2));
        assert_eq!(registry.register("fmt"), Arrival::Revisit(1));
        assert_eq!(registry.register("app"), Arrival::Revisit(0));

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("app/util"), Some(2));
        assert_eq!(registry.get("os"), None);
        assert_eq!(registry.paths(), vec!["app", "fmt", "app/util"]);
    }

    #[test]
    fn test_arrival_accessors() {
        assert_eq!(Arrival::First(3).id(), 3);
        assert_eq!(Arrival::Revisit(7).id(), 7);
        assert!(Arrival::Revisit(0).is_revisit());
        assert!(!Arrival::First(0).is_revisit());
    }
}
