//! The in-memory graph object store.
//!
//! The decoded document's `objects` dictionary is the store: every graph
//! entity lives here, keyed by identifier, and relations between entities
//! are identifier strings looked up through the store rather than owned
//! pointers. Passes snapshot the identifiers they need, then mutate through
//! `get_mut`/`attach`/`detach`.

use jettison_pbx::{Dict, Value};

use crate::domain::ObjectId;

/// All graph entities, keyed by identifier, with attach/detach lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectStore {
    objects: Dict,
}

impl ObjectStore {
    /// Wrap a decoded `objects` dictionary.
    pub fn from_dict(objects: Dict) -> Self {
        Self { objects }
    }

    /// The store as a plain dictionary, for re-encoding.
    pub fn as_dict(&self) -> &Dict {
        &self.objects
    }

    /// Number of resident objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether an identifier is resident.
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id.as_str())
    }

    /// Look up an object's field dictionary.
    ///
    /// Returns `None` for absent identifiers and for entries that are not
    /// dictionaries (a malformed graph; such entries are left untouched).
    pub fn get(&self, id: &ObjectId) -> Option<&Dict> {
        self.objects.get(id.as_str()).and_then(Value::as_dict)
    }

    /// Look up an object's field dictionary mutably.
    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut Dict> {
        self.objects.get_mut(id.as_str()).and_then(Value::as_dict_mut)
    }

    /// Attach a new object under the given identifier.
    pub fn attach(&mut self, id: ObjectId, fields: Dict) {
        self.objects.insert(id.0, Value::Dict(fields));
    }

    /// Detach an object from the store, returning its fields.
    pub fn detach(&mut self, id: &ObjectId) -> Option<Dict> {
        match self.objects.remove(id.as_str()) {
            Some(Value::Dict(fields)) => Some(fields),
            _ => None,
        }
    }

    /// Snapshot of all resident identifiers, in document order.
    pub fn ids(&self) -> Vec<ObjectId> {
        self.objects.keys().map(ObjectId::from).collect()
    }

    /// An object's isa discriminator.
    pub fn isa(&self, id: &ObjectId) -> Option<&str> {
        self.get(id).and_then(|fields| fields.get_str("isa"))
    }

    /// A string field of an object.
    pub fn field_str(&self, id: &ObjectId, key: &str) -> Option<&str> {
        self.get(id).and_then(|fields| fields.get_str(key))
    }

    /// An array field of an object, read as a list of identifiers.
    ///
    /// Non-string elements are skipped; pbxproj reference arrays only ever
    /// hold identifier strings.
    pub fn field_ids(&self, id: &ObjectId, key: &str) -> Vec<ObjectId> {
        self.get(id)
            .and_then(|fields| fields.get(key))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ObjectId::from)
                    .collect()
            })
            .unwrap_or_default()
    }
}
