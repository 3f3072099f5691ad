//! Scrubbing of framework search paths.
//!
//! Carthage setups add `$(PROJECT_DIR)/<build-dir>` entries to
//! `FRAMEWORK_SEARCH_PATHS`; once frameworks resolve against the build
//! products directory those entries are stale.

use jettison_pbx::Value;
use tracing::debug;

use crate::domain::{FRAMEWORK_SEARCH_PATHS, ObjectId};
use crate::project;
use crate::store::ObjectStore;

/// Drop every `$(PROJECT_DIR)/<build-dir>`-prefixed entry from the
/// framework search paths of each configuration on the target. Returns
/// whether any configuration was edited.
///
/// A missing setting, or one that is not an array, is left alone. Surviving
/// entries keep their relative order.
pub fn clean_search_paths(store: &mut ObjectStore, target: &ObjectId, build_dir: &str) -> bool {
    let prefix = format!("$(PROJECT_DIR)/{build_dir}");
    let mut changed = false;

    for config_id in project::build_configurations(store, target) {
        let Some(config) = store.get(&config_id) else {
            continue;
        };
        let Some(paths) = config
            .get("buildSettings")
            .and_then(Value::as_dict)
            .and_then(|settings| settings.get(FRAMEWORK_SEARCH_PATHS))
            .and_then(Value::as_array)
        else {
            continue;
        };

        let has_stale_entry = paths
            .iter()
            .filter_map(Value::as_str)
            .any(|path| path.starts_with(&prefix));
        if !has_stale_entry {
            continue;
        }

        let filtered: Vec<Value> = paths
            .iter()
            .filter(|path| !path.as_str().is_some_and(|s| s.starts_with(&prefix)))
            .cloned()
            .collect();
        let name = config
            .get_str("name")
            .unwrap_or(config_id.as_str())
            .to_string();

        let Some(settings) = store
            .get_mut(&config_id)
            .and_then(|fields| fields.get_mut("buildSettings"))
            .and_then(Value::as_dict_mut)
        else {
            continue;
        };
        settings.insert(FRAMEWORK_SEARCH_PATHS, Value::Array(filtered));
        changed = true;
        debug!(configuration = %name, "Framework search paths edited");
    }

    changed
}
