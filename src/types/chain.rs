//! Property Chain
//!
//! The ordered sequence of property sets the application consults for
//! lookups. Append-only while resolution runs: resolvers add at the tail in
//! declaration order, and a mid-declaration failure leaves every set
//! appended so far in place (no rollback).
//!
//! `get` walks sets in append order and returns the first hit, so among this
//! crate's own contributions the earlier declaration wins. Overall
//! precedence against other configuration layers belongs to the host.

use serde::Serialize;

use super::property_set::PropertySet;

#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct PropertyChain {
    sets: Vec<PropertySet>,
}

impl PropertyChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a set at the tail of the chain
    pub fn append(&mut self, set: PropertySet) {
        self.sets.push(set);
    }

    /// First value for `key` in append order
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sets.iter().find_map(|set| set.get(key))
    }

    /// Set names in append order. Duplicate names are possible when the
    /// caller declared the same file twice; surfacing that is the host's
    /// concern.
    pub fn names(&self) -> Vec<&str> {
        self.sets.iter().map(PropertySet::name).collect()
    }

    pub fn sets(&self) -> &[PropertySet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertySet> {
        self.sets.iter()
    }
}
