//! Local copy of the last received payload.
//!
//! One artifact, one path. Each save writes its own uniquely named `.part`
//! sibling, syncs it and renames it over the artifact, so a reader sees either
//! the old content or the new content, never a mix. Concurrent savers are not
//! coordinated; the last rename wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Owner of the single stored artifact at `<dir>/<file_name>`.
#[derive(Debug, Clone)]
pub struct IntegrityStore {
    dir: PathBuf,
    path: PathBuf,
}

impl IntegrityStore {
    /// Open the store, creating `dir` (and parents) if missing.
    pub fn open(dir: &Path, file_name: &str) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self::locate(dir, file_name))
    }

    /// Refer to the store without touching the filesystem. Read-only callers
    /// use this so that looking at the artifact never creates `dir`.
    pub fn locate(dir: &Path, file_name: &str) -> Self {
        IntegrityStore {
            dir: dir.to_path_buf(),
            path: dir.join(file_name),
        }
    }

    /// Replace the artifact's entire content with `content`.
    ///
    /// On failure the artifact keeps its previous content and the temp file
    /// is removed.
    pub fn save(&self, content: &str) -> io::Result<()> {
        let mut tmp = tempfile::Builder::new()
            .prefix(".ckfetch-")
            .suffix(TEMP_SUFFIX)
            .tempfile_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        tracing::debug!(path = %self.path.display(), bytes = content.len(), "artifact saved");
        Ok(())
    }

    /// Current artifact content, or `None` if nothing has been saved yet.
    pub fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
