//! Key Path Resolver
//!
//! Walks object members of a JSON document one key path segment at a time.
//! Anything other than an object along the way (arrays included) ends the
//! walk without a match.

use serde_json::Value;

use crate::domain::value_objects::KeyPath;

/// Mutable handle on the member addressed by a key path
#[derive(Debug)]
pub struct Location<'a> {
    slot: &'a mut Value,
    key: &'a str,
}

impl<'a> Location<'a> {
    /// Member name inside the parent object
    pub fn key(&self) -> &str {
        self.key
    }

    /// Current value of the member
    pub fn get(&self) -> &Value {
        &*self.slot
    }

    /// Overwrite the member in place
    pub fn set(&mut self, value: Value) {
        *self.slot = value;
    }
}

/// Resolve `path` inside `document`.
///
/// Returns `None` when a segment is missing or a value on the way is not an
/// object.
pub fn resolve<'a>(document: &'a mut Value, path: &'a KeyPath) -> Option<Location<'a>> {
    let mut current = document;
    for segment in path.parents() {
        current = current.as_object_mut()?.get_mut(segment.as_str())?;
    }

    let key = path.leaf();
    let slot = current.as_object_mut()?.get_mut(key)?;
    Some(Location { slot, key })
}
