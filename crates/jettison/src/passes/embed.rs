//! Embedding of linked frameworks into the Embed Frameworks phase.
//!
//! Every framework linked through a `PBXFrameworksBuildPhase` must also be
//! copied into the product. For each copy-files phase named exactly
//! "Embed Frameworks", this pass inserts a `PBXBuildFile` per linked
//! framework that is not already present, with code-sign-on-copy and
//! remove-headers-on-copy attributes.

use std::collections::HashSet;

use jettison_pbx::{Dict, Value};
use tracing::debug;

use crate::domain::{EMBED_FRAMEWORKS_PHASE, ObjectId, PhaseKind, WRAPPER_FRAMEWORK};
use crate::id_generation;
use crate::project;
use crate::store::ObjectStore;

/// Ensure every linked dynamic framework appears in the target's Embed
/// Frameworks phase(s). Returns whether anything was inserted.
pub fn embed_frameworks(store: &mut ObjectStore, target: &ObjectId) -> bool {
    let phases = project::build_phases(store, target);

    let embed_phases: Vec<ObjectId> = phases
        .iter()
        .filter(|id| {
            store
                .isa(id)
                .map(PhaseKind::from_isa)
                .is_some_and(|kind| kind == PhaseKind::CopyFiles)
                && store.field_str(id, "name") == Some(EMBED_FRAMEWORKS_PHASE)
        })
        .cloned()
        .collect();
    if embed_phases.is_empty() {
        return false;
    }

    let linked: Vec<ObjectId> = phases
        .iter()
        .filter(|id| {
            store
                .isa(id)
                .map(PhaseKind::from_isa)
                .is_some_and(|kind| kind == PhaseKind::Frameworks)
        })
        .flat_map(|id| store.field_ids(id, "files"))
        .collect();

    let mut changed = false;

    for embed_id in embed_phases {
        // File references already present in this copy phase; kept live so
        // one run can never insert the same framework twice.
        let mut present: HashSet<ObjectId> = store
            .field_ids(&embed_id, "files")
            .iter()
            .filter_map(|file_id| store.field_str(file_id, "fileRef"))
            .map(ObjectId::from)
            .collect();

        for build_file_id in &linked {
            let Some(file_ref_id) = store
                .field_str(build_file_id, "fileRef")
                .map(ObjectId::from)
            else {
                continue;
            };
            let Some(file_ref) = store.get(&file_ref_id) else {
                continue;
            };
            if file_ref.get_str("isa") != Some("PBXFileReference") {
                continue;
            }

            let file_type = file_ref
                .get_str("explicitFileType")
                .or_else(|| file_ref.get_str("lastKnownFileType"));
            if file_type != Some(WRAPPER_FRAMEWORK) {
                continue;
            }
            if present.contains(&file_ref_id) {
                continue;
            }

            let display_name = file_ref
                .get_str("name")
                .or_else(|| file_ref.get_str("path"))
                .unwrap_or(file_ref_id.as_str())
                .to_string();

            let new_id = id_generation::allocate(store);
            store.attach(new_id.clone(), embed_build_file(&file_ref_id));
            if let Some(files) = store
                .get_mut(&embed_id)
                .and_then(|fields| fields.get_mut("files"))
                .and_then(Value::as_array_mut)
            {
                files.push(Value::from(new_id.as_str()));
            }
            present.insert(file_ref_id);
            changed = true;
            debug!(framework = %display_name, id = %new_id, "Embedded framework");
        }
    }

    changed
}

/// Build the `PBXBuildFile` entry for an embedded framework.
fn embed_build_file(file_ref: &ObjectId) -> Dict {
    let mut settings = Dict::new();
    settings.insert(
        "ATTRIBUTES",
        Value::Array(vec![
            Value::from("CodeSignOnCopy"),
            Value::from("RemoveHeadersOnCopy"),
        ]),
    );

    let mut fields = Dict::new();
    fields.insert("isa", "PBXBuildFile");
    fields.insert("fileRef", file_ref.as_str());
    fields.insert("settings", Value::Dict(settings));
    fields
}
