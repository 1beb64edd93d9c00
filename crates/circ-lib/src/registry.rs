//! Insertion-ordered keyed collections for the catalog and directory.
//!
//! The passive store underneath the lending engine: plain id-keyed
//! insert/remove/find with iteration in insertion order. The engine is the
//! only component that mutates the records held here.

use serde::{Deserialize, Serialize};

/// Anything stored in a [`Registry`] exposes its unique string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// An insertion-ordered collection of uniquely keyed items.
///
/// Backed by a `Vec` with linear search: the catalog and directory of a
/// small library stay well within the range where this beats a map, and the
/// snapshot order contract (iteration = insertion order) falls out for free.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T: Keyed> Registry<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Insert an item. Returns false (and leaves the registry unchanged)
    /// if an item with the same key is already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with the given key. Returns false if absent.
    pub fn remove(&mut self, key: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|item| item.key() == key) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn find(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// All items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;

    #[test]
    fn test_insert_and_find() {
        let mut registry = Registry::new();
        assert!(registry.insert(Book::new("Dune", "Herbert", "b1")));
        assert!(registry.insert(Book::new("Emma", "Austen", "b2")));

        assert_eq!(registry.find("b1").unwrap().title, "Dune");
        assert!(registry.find("b3").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_duplicate_rejected() {
        let mut registry = Registry::new();
        assert!(registry.insert(Book::new("Dune", "Herbert", "b1")));
        assert!(!registry.insert(Book::new("Other", "Author", "b1")));

        // Original untouched
        assert_eq!(registry.find("b1").unwrap().title, "Dune");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut registry = Registry::new();
        registry.insert(Book::new("Dune", "Herbert", "b1"));

        assert!(registry.remove("b1"));
        assert!(!registry.remove("b1"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_iteration_order_is_insertion_order() {
        let mut registry = Registry::new();
        for id in ["b3", "b1", "b2"] {
            registry.insert(Book::new("T", "A", id));
        }

        let ids: Vec<&str> = registry.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b3", "b1", "b2"]);
    }
}
