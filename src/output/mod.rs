//! Console reporting and manifest output

pub mod manifest;
pub mod report;

pub use manifest::{Manifest, ManifestEntry, UrlLayout};
pub use report::{MessageKind, Reporter, Style, StyleTable};
