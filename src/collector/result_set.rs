use std::collections::HashSet;

/// Unique image URLs, kept in the order they were first seen.
#[derive(Debug, Default)]
pub struct ResultSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the URL was already present.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_string());
        self.ordered.push(url.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
