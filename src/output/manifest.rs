//! Asset manifest consumed by the web front end

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::adapters::fs_local;
use crate::adapters::toml_config::PathsConfig;
use crate::domain::model::{ArtifactKind, ProcessingResult};
use crate::error::PrepResult;
use crate::utils::path::join_url;

/// Public URLs of one clip's artifacts; `None` serializes as `null`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub mp4: Option<String>,
    pub webm: Option<String>,
    pub thumbnail: Option<String>,
}

/// URL prefixes for the two output directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlLayout {
    pub processed: String,
    pub thumbnails: String,
}

impl UrlLayout {
    pub fn from_paths(paths: &PathsConfig) -> Self {
        Self {
            processed: paths.processed_url.clone(),
            thumbnails: paths.thumbnails_url.clone(),
        }
    }

    /// Root-relative URL of `kind` for `identifier`
    pub fn url(&self, kind: ArtifactKind, identifier: &str) -> String {
        let prefix = match kind {
            ArtifactKind::Thumbnail => &self.thumbnails,
            _ => &self.processed,
        };
        join_url(prefix, &kind.file_name(identifier))
    }
}

impl Default for UrlLayout {
    fn default() -> Self {
        Self::from_paths(&PathsConfig::default())
    }
}

/// Identifier to artifact URLs, keys in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Build from processing results.
    ///
    /// A clip is listed only if at least one video succeeded. When two clips
    /// share an identifier the later one replaces the earlier entry.
    pub fn build(results: &[ProcessingResult], urls: &UrlLayout) -> Self {
        let mut entries = BTreeMap::new();

        for result in results.iter().filter(|r| r.has_video()) {
            let url_if = |kind: ArtifactKind| {
                result
                    .artifact(kind)
                    .success
                    .then(|| urls.url(kind, &result.identifier))
            };

            let entry = ManifestEntry {
                mp4: url_if(ArtifactKind::PrimaryVideo),
                webm: url_if(ArtifactKind::SecondaryVideo),
                thumbnail: url_if(ArtifactKind::Thumbnail),
            };

            if entries.insert(result.identifier.clone(), entry).is_some() {
                warn!(
                    identifier = %result.identifier,
                    input = %result.input.display(),
                    "Duplicate clip identifier, replacing earlier manifest entry"
                );
            }
        }

        Self { entries }
    }

    pub fn get(&self, identifier: &str) -> Option<&ManifestEntry> {
        self.entries.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Two-space indented JSON
    pub fn to_pretty_json(&self) -> PrepResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Overwrite `path` with this manifest
    pub fn write(&self, path: &Path) -> PrepResult<()> {
        let json = self.to_pretty_json()?;
        fs_local::write_atomic(path, json.as_bytes())?;
        info!(path = %path.display(), entries = self.len(), "Manifest written");
        Ok(())
    }
}
