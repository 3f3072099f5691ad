//! The decoded project document and its entity-level accessors.
//!
//! [`XcodeProject`] splits the root dictionary into header fields, the
//! [`ObjectStore`], and the root object identifier, and reassembles them on
//! encode. Everything the mutation passes know about targets, phase lists,
//! configuration lists, and group trees goes through the accessors here.

use std::collections::HashSet;

use jettison_pbx::{Dict, Value};
use thiserror::Error;

use crate::domain::ObjectId;
use crate::store::ObjectStore;

/// Errors that make a document unusable as a project graph.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The text is not a valid property list.
    #[error(transparent)]
    Parse(#[from] jettison_pbx::Error),

    /// The top-level value is not a dictionary.
    #[error("Top-level value is not a dictionary")]
    NotADictionary,

    /// A structurally required root field is absent or mistyped.
    #[error("Missing or invalid root field: {0}")]
    MissingField(&'static str),
}

/// An Xcode project document, decoded into an object graph.
pub struct XcodeProject {
    /// Root dictionary with the `objects` entry emptied out; key order is
    /// preserved so `objects` lands back in its original position.
    root: Dict,
    store: ObjectStore,
    root_object: ObjectId,
}

impl XcodeProject {
    /// Decode a `project.pbxproj` document.
    pub fn from_document(text: &str) -> Result<Self, DocumentError> {
        let value = jettison_pbx::from_str(text)?;
        let Value::Dict(mut root) = value else {
            return Err(DocumentError::NotADictionary);
        };

        let objects = match root.get_mut("objects") {
            Some(slot) => std::mem::replace(slot, Value::Dict(Dict::new())),
            None => return Err(DocumentError::MissingField("objects")),
        };
        let Value::Dict(objects) = objects else {
            return Err(DocumentError::MissingField("objects"));
        };

        let root_object = root
            .get_str("rootObject")
            .map(ObjectId::from)
            .ok_or(DocumentError::MissingField("rootObject"))?;

        Ok(Self {
            root,
            store: ObjectStore::from_dict(objects),
            root_object,
        })
    }

    /// Encode the graph back to pbxproj text.
    pub fn to_document(&self) -> String {
        let mut root = self.root.clone();
        root.insert("objects", Value::Dict(self.store.as_dict().clone()));
        jettison_pbx::to_string(&Value::Dict(root))
    }

    /// The graph object store.
    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    /// The graph object store, mutably.
    pub fn store_mut(&mut self) -> &mut ObjectStore {
        &mut self.store
    }

    /// Identifier of the root `PBXProject` object.
    pub fn root_object(&self) -> &ObjectId {
        &self.root_object
    }

    /// The project's targets, in declaration order.
    pub fn targets(&self) -> Vec<ObjectId> {
        self.store.field_ids(&self.root_object, "targets")
    }

    /// Identifier of the project's main group, if present.
    pub fn main_group(&self) -> Option<ObjectId> {
        self.store
            .field_str(&self.root_object, "mainGroup")
            .map(ObjectId::from)
    }

    /// Every `PBXFileReference` reachable from the main group.
    ///
    /// Walks `PBXGroup`/`PBXVariantGroup` children recursively in document
    /// order; a visited set keeps degenerate graphs with group cycles from
    /// looping.
    pub fn full_file_refs(&self) -> Vec<ObjectId> {
        let mut refs = Vec::new();
        let mut visited: HashSet<ObjectId> = HashSet::new();
        let mut stack: Vec<ObjectId> = self.main_group().into_iter().collect();

        while let Some(id) = stack.pop() {
            if !visited.insert(id.clone()) {
                continue;
            }
            match self.store.isa(&id) {
                Some("PBXGroup") | Some("PBXVariantGroup") => {
                    let children = self.store.field_ids(&id, "children");
                    // Reverse so the stack pops in document order
                    stack.extend(children.into_iter().rev());
                }
                Some("PBXFileReference") => refs.push(id),
                _ => {}
            }
        }

        refs
    }
}

/// A target's build phases, in execution order.
pub fn build_phases(store: &ObjectStore, target: &ObjectId) -> Vec<ObjectId> {
    store.field_ids(target, "buildPhases")
}

/// The build configurations of a target's configuration list.
///
/// Targets without a `buildConfigurationList` yield an empty list.
pub fn build_configurations(store: &ObjectStore, target: &ObjectId) -> Vec<ObjectId> {
    store
        .field_str(target, "buildConfigurationList")
        .map(ObjectId::from)
        .map(|list| store.field_ids(&list, "buildConfigurations"))
        .unwrap_or_default()
}
