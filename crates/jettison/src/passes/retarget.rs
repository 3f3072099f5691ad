//! Retargeting of file references at the build products directory.
//!
//! File references that point into the build directory are rewritten to
//! resolve against `BUILT_PRODUCTS_DIR`. The reference's display name is
//! captured before any field is written (falling back to the old path) so
//! the node stays distinguishable afterwards.

use tracing::debug;

use crate::domain::BUILT_PRODUCTS_DIR;
use crate::project::XcodeProject;

/// Rewrite every file reference under the main group whose path contains
/// the build-dir marker. Returns whether any reference was edited.
///
/// References already resolving against `BUILT_PRODUCTS_DIR` are skipped,
/// which makes the pass idempotent.
pub fn retarget_file_refs(project: &mut XcodeProject, build_dir: &str) -> bool {
    let mut changed = false;

    for ref_id in project.full_file_refs() {
        let store = project.store();
        let Some(file_ref) = store.get(&ref_id) else {
            continue;
        };
        let Some(path) = file_ref.get_str("path") else {
            continue;
        };
        if !path.contains(build_dir) {
            continue;
        }
        if file_ref.get_str("sourceTree") == Some(BUILT_PRODUCTS_DIR) {
            continue;
        }

        let captured = file_ref.get_str("name").unwrap_or(path).to_string();

        let Some(file_ref) = project.store_mut().get_mut(&ref_id) else {
            continue;
        };
        file_ref.insert("sourceTree", BUILT_PRODUCTS_DIR);
        file_ref.insert("path", BUILT_PRODUCTS_DIR);
        file_ref.insert("name", captured.as_str());
        changed = true;
        debug!(name = %captured, "File reference retargeted at build products directory");
    }

    changed
}
