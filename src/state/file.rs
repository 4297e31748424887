//! MFS entry types.

use serde::Serialize;

use crate::constants;
use crate::core::format::format_size;

/// Kind of an MFS entry as reported by `ipfs files stat`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Regular file.
    File,
    /// Directory; its size is cumulative.
    Directory,
    /// Missing or unrecognized `Type:` line.
    #[default]
    Unknown,
}

impl FileKind {
    /// Maps the daemon's `Type:` value. Anything unrecognized is `Unknown`.
    #[must_use]
    pub fn from_daemon(value: &str) -> Self {
        match value.trim() {
            "file" => Self::File,
            "directory" => Self::Directory,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::File => write!(f, "file"),
            FileKind::Directory => write!(f, "directory"),
            FileKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// One entry at the MFS root, aggregated from `files ls` and `files stat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Name under the MFS root (the pin's label).
    pub name: String,
    /// Content identifier.
    pub cid: String,
    /// Bytes: cumulative for directories, own size otherwise.
    pub size: u64,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: FileKind,
}

impl FileEntry {
    /// Name for display, substituting a placeholder for blank names.
    #[must_use]
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            constants::NO_NAME
        } else {
            trimmed
        }
    }

    /// Size rendered in gigabytes.
    #[must_use]
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}
