// Local filesystem adapter - Discovery and output file handling

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::model::SourceClip;
use crate::error::{PrepError, PrepResult};
use crate::utils::path::has_extension;

/// List clips directly inside `dir` whose extension matches one of
/// `extensions` (case-insensitive), sorted by file name.
///
/// Symlinks to regular files count as clips and keep their link path.
/// Dangling links are skipped. A missing directory yields an empty list.
pub fn discover_clips(dir: &Path, extensions: &[String]) -> Vec<SourceClip> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "Raw directory does not exist");
        return Vec::new();
    }

    let mut clips = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
            continue;
        }

        match SourceClip::from_path(entry.path()) {
            Ok(clip) => clips.push(clip),
            Err(e) => warn!(error = %e, "Skipping clip"),
        }
    }

    clips
}

/// Create `dir` and any missing parents
pub fn ensure_dir(dir: &Path) -> PrepResult<()> {
    fs::create_dir_all(dir).map_err(|source| PrepError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Size of a produced file in bytes
pub fn file_size(path: &Path) -> std::io::Result<u64> {
    fs::metadata(path).map(|metadata| metadata.len())
}

/// Replace `path` with `contents` through a sibling temporary file
pub fn write_atomic(path: &Path, contents: &[u8]) -> PrepResult<()> {
    let write_err = |source| PrepError::ManifestWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let temp_path = temp_sibling(path);
    fs::write(&temp_path, contents).map_err(write_err)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(e));
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
