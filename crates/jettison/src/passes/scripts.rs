//! Pruning of Carthage copy-script build phases.
//!
//! A dependency-copy workflow installs a shell-script phase whose input
//! paths point into the build directory. Those phases are removed from the
//! target's phase sequence and detached from the store.

use jettison_pbx::Value;
use tracing::debug;

use crate::domain::{ObjectId, PhaseKind};
use crate::project;
use crate::store::ObjectStore;

/// Remove every shell-script phase on the target whose declared input paths
/// reference the build directory. Returns whether anything was removed.
///
/// Matching is literal substring containment, so the marker hits regardless
/// of the `$(SRCROOT)`-style prefix the path is written with.
pub fn prune_copy_scripts(store: &mut ObjectStore, target: &ObjectId, build_dir: &str) -> bool {
    let mut doomed = Vec::new();

    for phase_id in project::build_phases(store, target) {
        let Some(phase) = store.get(&phase_id) else {
            continue;
        };
        if PhaseKind::from_isa(phase.get_str("isa").unwrap_or_default()) != PhaseKind::ShellScript {
            continue;
        }

        let references_build_dir = phase
            .get("inputPaths")
            .and_then(Value::as_array)
            .is_some_and(|paths| {
                paths
                    .iter()
                    .filter_map(Value::as_str)
                    .any(|path| path.contains(build_dir))
            });

        if references_build_dir {
            let name = phase.get_str("name").unwrap_or_default().to_string();
            doomed.push((phase_id, name));
        }
    }

    if doomed.is_empty() {
        return false;
    }

    for (phase_id, name) in doomed {
        if let Some(phases) = store
            .get_mut(target)
            .and_then(|fields| fields.get_mut("buildPhases"))
            .and_then(Value::as_array_mut)
        {
            phases.retain(|entry| entry.as_str() != Some(phase_id.as_str()));
        }
        store.detach(&phase_id);
        debug!(phase = %name, "Removed copy-script build phase");
    }

    true
}
