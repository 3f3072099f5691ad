//! The mutation passes and their coordinator.
//!
//! Four passes rework the graph: script-phase pruning and search-path
//! scrubbing run per target, file-reference retargeting runs once per
//! project, and framework embedding runs per target last so it sees the
//! retargeted references. Each pass reports whether it changed anything;
//! the flags are OR-accumulated (never short-circuited) so every pass runs
//! and a quiet pass cannot clear an earlier change.

pub mod embed;
pub mod retarget;
pub mod scripts;
pub mod search_paths;

use crate::project::XcodeProject;

/// Run all mutation passes over the project.
///
/// Returns `true` when the graph differs from its decoded state and the
/// document needs to be rewritten.
pub fn clean_project(project: &mut XcodeProject, build_dir: &str) -> bool {
    let mut changed = false;
    let targets = project.targets();

    for target in &targets {
        changed |= scripts::prune_copy_scripts(project.store_mut(), target, build_dir);
        changed |= search_paths::clean_search_paths(project.store_mut(), target, build_dir);
    }

    changed |= retarget::retarget_file_refs(project, build_dir);

    for target in &targets {
        changed |= embed::embed_frameworks(project.store_mut(), target);
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DEFAULT_BUILD_DIR;
    use indoc::indoc;

    fn dirty_project() -> XcodeProject {
        let text = indoc! {r#"
            // !$*UTF8*$!
            {
                archiveVersion = 1;
                objectVersion = 50;
                objects = {
                    P000000000000000000000AA = {
                        isa = PBXProject;
                        mainGroup = G000000000000000000000AA;
                        targets = ( T000000000000000000000AA, );
                    };
                    G000000000000000000000AA = {
                        isa = PBXGroup;
                        children = ( F000000000000000000000AA, );
                    };
                    F000000000000000000000AA = {
                        isa = PBXFileReference;
                        lastKnownFileType = wrapper.framework;
                        path = Carthage/Build/iOS/Foo.framework;
                        sourceTree = "<group>";
                    };
                    T000000000000000000000AA = {
                        isa = PBXNativeTarget;
                        buildConfigurationList = L000000000000000000000AA;
                        buildPhases = (
                            A000000000000000000000AA,
                            S000000000000000000000AA,
                            E000000000000000000000AA,
                        );
                    };
                    A000000000000000000000AA = {
                        isa = PBXFrameworksBuildPhase;
                        files = ( B000000000000000000000AA, );
                    };
                    B000000000000000000000AA = {
                        isa = PBXBuildFile;
                        fileRef = F000000000000000000000AA;
                    };
                    S000000000000000000000AA = {
                        isa = PBXShellScriptBuildPhase;
                        name = "Copy Carthage Frameworks";
                        inputPaths = ( "$(SRCROOT)/Carthage/Build/iOS/Foo.framework", );
                    };
                    E000000000000000000000AA = {
                        isa = PBXCopyFilesBuildPhase;
                        name = "Embed Frameworks";
                        files = ( );
                    };
                    L000000000000000000000AA = {
                        isa = XCConfigurationList;
                        buildConfigurations = ( C000000000000000000000AA, );
                    };
                    C000000000000000000000AA = {
                        isa = XCBuildConfiguration;
                        name = Release;
                        buildSettings = {
                            FRAMEWORK_SEARCH_PATHS = (
                                "$(inherited)",
                                "$(PROJECT_DIR)/Carthage/Build",
                            );
                        };
                    };
                };
                rootObject = P000000000000000000000AA;
            }
        "#};
        XcodeProject::from_document(text).unwrap()
    }

    #[test]
    fn test_all_passes_fire_on_dirty_project() {
        let mut project = dirty_project();

        assert!(clean_project(&mut project, DEFAULT_BUILD_DIR));

        // Script phase gone, from both the target and the store
        let target = crate::domain::ObjectId::new("T000000000000000000000AA");
        let phases = crate::project::build_phases(project.store(), &target);
        assert_eq!(phases.len(), 2); // frameworks + embed survive
        assert!(!project
            .store()
            .contains(&crate::domain::ObjectId::new("S000000000000000000000AA")));
    }

    #[test]
    fn test_changed_flag_accumulates_across_passes() {
        let mut project = dirty_project();
        // Neutralize everything except the search-path pass; the flag must
        // still come back true.
        let script = crate::domain::ObjectId::new("S000000000000000000000AA");
        project
            .store_mut()
            .get_mut(&script)
            .unwrap()
            .insert("inputPaths", jettison_pbx::Value::Array(Vec::new()));
        let file_ref = crate::domain::ObjectId::new("F000000000000000000000AA");
        project
            .store_mut()
            .get_mut(&file_ref)
            .unwrap()
            .insert("lastKnownFileType", "archive.ar");
        project
            .store_mut()
            .get_mut(&file_ref)
            .unwrap()
            .insert("path", "Vendor/Foo.framework");

        assert!(clean_project(&mut project, DEFAULT_BUILD_DIR));
    }

    #[test]
    fn test_second_run_is_a_noop() {
        let mut project = dirty_project();

        assert!(clean_project(&mut project, DEFAULT_BUILD_DIR));
        let after_first = project.to_document();

        assert!(!clean_project(&mut project, DEFAULT_BUILD_DIR));
        assert_eq!(project.to_document(), after_first);
    }

    #[test]
    fn test_clean_project_matches_expected_end_state() {
        let mut project = dirty_project();
        clean_project(&mut project, DEFAULT_BUILD_DIR);

        // Search paths filtered down to the inherited entry
        let config = crate::domain::ObjectId::new("C000000000000000000000AA");
        let settings = project.store().get(&config).unwrap();
        let paths = settings
            .get("buildSettings")
            .unwrap()
            .as_dict()
            .unwrap()
            .get("FRAMEWORK_SEARCH_PATHS")
            .unwrap()
            .as_array()
            .unwrap();
        assert_eq!(paths, &[jettison_pbx::Value::from("$(inherited)")]);

        // File reference retargeted
        let file_ref = crate::domain::ObjectId::new("F000000000000000000000AA");
        let fields = project.store().get(&file_ref).unwrap();
        assert_eq!(fields.get_str("sourceTree"), Some("BUILT_PRODUCTS_DIR"));
        assert_eq!(fields.get_str("path"), Some("BUILT_PRODUCTS_DIR"));
        assert_eq!(
            fields.get_str("name"),
            Some("Carthage/Build/iOS/Foo.framework")
        );

        // Exactly one embedded build file referencing the framework
        let embed = crate::domain::ObjectId::new("E000000000000000000000AA");
        let files = project.store().field_ids(&embed, "files");
        assert_eq!(files.len(), 1);
        assert_eq!(
            project.store().field_str(&files[0], "fileRef"),
            Some("F000000000000000000000AA")
        );
    }
}
