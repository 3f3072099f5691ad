//! Application context for CLI command execution.
//!
//! This module owns the document lifecycle: resolve the `.xcodeproj`
//! bundle, read and decode `project.pbxproj` into an [`XcodeProject`], and
//! write the updated document back atomically when a mutation pass changed
//! something.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::project::XcodeProject;

/// Name of the document inside a `.xcodeproj` bundle.
pub const PBXPROJ_FILE_NAME: &str = "project.pbxproj";

/// Extension of an Xcode project bundle.
pub const XCODEPROJ_EXTENSION: &str = "xcodeproj";

/// Application context for one clean-and-embed invocation.
pub struct App {
    /// The decoded project graph.
    project: XcodeProject,

    /// Path to the `.xcodeproj` bundle.
    project_path: PathBuf,

    /// Path to the `project.pbxproj` document inside the bundle.
    pbxproj_path: PathBuf,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("project_path", &self.project_path)
            .field("pbxproj_path", &self.pbxproj_path)
            .field("project", &"<XcodeProject>")
            .finish()
    }
}

impl App {
    /// Create an App instance from a `.xcodeproj` path or a directory to
    /// search.
    ///
    /// # Errors
    ///
    /// Returns an error if no project bundle is found, or the document
    /// cannot be read or decoded.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let project_path = find_xcodeproj(path)?;
        let pbxproj_path = project_path.join(PBXPROJ_FILE_NAME);

        let text = tokio::fs::read_to_string(&pbxproj_path)
            .await
            .map_err(|source| Error::Read {
                path: pbxproj_path.clone(),
                source,
            })?;

        let project = XcodeProject::from_document(&text).map_err(|source| Error::Decode {
            path: pbxproj_path.clone(),
            source,
        })?;

        Ok(Self {
            project,
            project_path,
            pbxproj_path,
        })
    }

    /// The decoded project graph.
    pub fn project(&self) -> &XcodeProject {
        &self.project
    }

    /// The decoded project graph, mutably.
    pub fn project_mut(&mut self) -> &mut XcodeProject {
        &mut self.project
    }

    /// Path to the `.xcodeproj` bundle.
    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    /// Path to the `project.pbxproj` document.
    pub fn pbxproj_path(&self) -> &Path {
        &self.pbxproj_path
    }

    /// Write the document back to disk.
    ///
    /// The write is atomic: the encoded document goes to a temporary file
    /// next to the target, which is then renamed over it. An interrupted
    /// save leaves the original document unchanged.
    pub async fn save(&self) -> Result<()> {
        let text = self.project.to_document();
        let temp_path = self.pbxproj_path.with_extension("pbxproj.tmp");

        tokio::fs::write(&temp_path, text.as_bytes())
            .await
            .map_err(|source| Error::Write {
                path: self.pbxproj_path.clone(),
                source,
            })?;
        tokio::fs::rename(&temp_path, &self.pbxproj_path)
            .await
            .map_err(|source| Error::Write {
                path: self.pbxproj_path.clone(),
                source,
            })?;

        Ok(())
    }
}

/// Locate the `.xcodeproj` bundle for the given path.
///
/// A path that is itself a `.xcodeproj` bundle is accepted directly.
/// Otherwise the directory tree below it is searched breadth-first with
/// entries visited in name order, so the nearest (and, per level, first
/// alphabetical) bundle wins deterministically. Hidden directories are
/// skipped.
pub fn find_xcodeproj(path: &Path) -> Result<PathBuf> {
    if path
        .extension()
        .is_some_and(|ext| ext == XCODEPROJ_EXTENSION)
    {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::ProjectNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut queue: VecDeque<PathBuf> = VecDeque::from([path.to_path_buf()]);

    while let Some(dir) = queue.pop_front() {
        let entries = std::fs::read_dir(&dir).map_err(|source| Error::Read {
            path: dir.clone(),
            source,
        })?;

        let mut children: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .collect();
        children.sort();

        for child in children {
            if !child.is_dir() {
                continue;
            }
            if child
                .extension()
                .is_some_and(|ext| ext == XCODEPROJ_EXTENSION)
            {
                return Ok(child);
            }
            let hidden = child
                .file_name()
                .is_some_and(|name| name.to_string_lossy().starts_with('.'));
            if !hidden {
                queue.push_back(child);
            }
        }
    }

    Err(Error::ProjectNotFound {
        path: path.to_path_buf(),
    })
}
