//! Sources of entity annotations

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to an entity's annotations.
pub trait Annotations {
    /// Value of the annotation `key`, if set.
    fn annotation(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> Annotations for HashMap<String, String, S> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl Annotations for BTreeMap<String, String> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<A: Annotations + ?Sized> Annotations for &A {
    fn annotation(&self, key: &str) -> Option<&str> {
        (**self).annotation(key)
    }
}
