//! Request-scoped records built from daemon output.
//!
//! Nothing here outlives a single process.

mod file;
mod peer;

pub use file::{FileEntry, FileKind};
pub use peer::{extract_ip_address, GeoInfo, PeerEntry};
