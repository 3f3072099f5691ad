//! Domain types for the Xcode project object graph.
//!
//! This module contains the identifier newtype, the well-known tokens the
//! mutation passes match against, and the tagged view over build-phase
//! variants.

use std::fmt;

/// Default build directory a Carthage-style workflow copies frameworks into.
pub const DEFAULT_BUILD_DIR: &str = "Carthage/Build";

/// Source-tree origin (and path token) for the build products directory.
pub const BUILT_PRODUCTS_DIR: &str = "BUILT_PRODUCTS_DIR";

/// Exact name of the copy-files phase that bundles dynamic frameworks.
pub const EMBED_FRAMEWORKS_PHASE: &str = "Embed Frameworks";

/// Build setting holding the framework search path list.
pub const FRAMEWORK_SEARCH_PATHS: &str = "FRAMEWORK_SEARCH_PATHS";

/// File-type hint identifying a dynamic framework bundle.
pub const WRAPPER_FRAMEWORK: &str = "wrapper.framework";

/// Unique identifier for an object in the project graph.
///
/// Xcode addresses graph objects with 24 uppercase hex characters; the
/// format is opaque to everything except [`crate::id_generation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(pub String);

impl ObjectId {
    /// Create a new object ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The build-phase variants the mutation passes care about.
///
/// Every other isa value is lumped into `Other`; no pass touches those
/// phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// `PBXShellScriptBuildPhase` - a script step with declared input paths.
    ShellScript,

    /// `PBXCopyFilesBuildPhase` - a named copy step with build file entries.
    CopyFiles,

    /// `PBXFrameworksBuildPhase` - the link step listing framework files.
    Frameworks,

    /// Any other phase variant (sources, resources, headers, ...).
    Other,
}

impl PhaseKind {
    /// Classify a build phase by its isa discriminator.
    pub fn from_isa(isa: &str) -> Self {
        match isa {
            "PBXShellScriptBuildPhase" => PhaseKind::ShellScript,
            "PBXCopyFilesBuildPhase" => PhaseKind::CopyFiles,
            "PBXFrameworksBuildPhase" => PhaseKind::Frameworks,
            _ => PhaseKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::shell_script("PBXShellScriptBuildPhase", PhaseKind::ShellScript)]
    #[case::copy_files("PBXCopyFilesBuildPhase", PhaseKind::CopyFiles)]
    #[case::frameworks("PBXFrameworksBuildPhase", PhaseKind::Frameworks)]
    #[case::sources("PBXSourcesBuildPhase", PhaseKind::Other)]
    #[case::resources("PBXResourcesBuildPhase", PhaseKind::Other)]
    #[case::empty("", PhaseKind::Other)]
    fn test_phase_kind_from_isa(#[case] isa: &str, #[case] expected: PhaseKind) {
        assert_eq!(PhaseKind::from_isa(isa), expected);
    }

    #[test]
    fn test_object_id_display() {
        let id = ObjectId::new("24BC71E01F2A3B4C5D6E7F80");
        assert_eq!(id.to_string(), "24BC71E01F2A3B4C5D6E7F80");
        assert_eq!(id.as_str(), "24BC71E01F2A3B4C5D6E7F80");
    }
}
