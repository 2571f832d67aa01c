//! Filesystem access for a chronicle library.
//!
//! A library is a directory holding the timeline file and two parallel
//! collections of article documents, addressed by the same relative path:
//!
//! ```text
//! <root>/timeline.md
//! <root>/original/<rel_path>
//! <root>/interpretation/<rel_path>
//! ```
//!
//! This is the only module in the engine that touches the filesystem. An
//! absent article is an ordinary outcome (`Ok(None)`), distinct from a
//! present-but-empty one (`Ok(Some(""))`); an absent timeline is a failure,
//! because nothing works without the catalog.

use relative_path::RelativePath;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Well-known timeline file name under the library root.
pub const TIMELINE_FILE: &str = "timeline.md";
/// Default collection directory for original documents.
pub const DEFAULT_ORIGINALS_DIR: &str = "original";
/// Default collection directory for interpretation documents.
pub const DEFAULT_INTERPRETATIONS_DIR: &str = "interpretation";

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("Timeline not found: {0}")]
    TimelineMissing(PathBuf),
    #[error("Invalid library root: {0}")]
    InvalidRoot(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// On-disk layout of one article library.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    root: PathBuf,
    originals_dir: String,
    interpretations_dir: String,
}

impl ContentLibrary {
    /// Opens a library with the default collection directory names.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, LibraryError> {
        Self::with_collections(root, DEFAULT_ORIGINALS_DIR, DEFAULT_INTERPRETATIONS_DIR)
    }

    /// Opens a library with custom collection directory names.
    pub fn with_collections(
        root: impl Into<PathBuf>,
        originals_dir: impl Into<String>,
        interpretations_dir: impl Into<String>,
    ) -> Result<Self, LibraryError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(LibraryError::InvalidRoot(root.display().to_string()));
        }
        Ok(Self {
            root,
            originals_dir: originals_dir.into(),
            interpretations_dir: interpretations_dir.into(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn timeline_path(&self) -> PathBuf {
        self.root.join(TIMELINE_FILE)
    }

    /// Reads the timeline text. Absence is a failure: without the timeline
    /// there is no catalog and nothing to show.
    pub fn read_timeline(&self) -> Result<String, LibraryError> {
        let path = self.timeline_path();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(LibraryError::TimelineMissing(path))
            }
            Err(e) => Err(LibraryError::Io(e)),
        }
    }

    /// Reads an article's original document, `Ok(None)` when absent.
    pub fn read_original(&self, rel_path: &RelativePath) -> Result<Option<String>, LibraryError> {
        self.read_article(&self.originals_dir, rel_path)
    }

    /// Reads an article's interpretation document, `Ok(None)` when absent.
    pub fn read_interpretation(
        &self,
        rel_path: &RelativePath,
    ) -> Result<Option<String>, LibraryError> {
        self.read_article(&self.interpretations_dir, rel_path)
    }

    fn read_article(
        &self,
        collection: &str,
        rel_path: &RelativePath,
    ) -> Result<Option<String>, LibraryError> {
        let path = rel_path.to_path(self.root.join(collection));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LibraryError::Io(e)),
        }
    }
}
