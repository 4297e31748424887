//! Parser for `ipfs files stat` output.
//!
//! Kubo prints the CID on the first line followed by `Key: value` lines:
//!
//! ```text
//! bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi
//! Size: 2048
//! CumulativeSize: 2106
//! ChildBlocks: 0
//! Type: file
//! ```
//!
//! Parsing is tolerant: missing or malformed fields become `0` or
//! [`FileKind::Unknown`] instead of an error.

use crate::state::FileKind;

/// Fields scraped from one `files stat` call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileStat {
    pub cid: String,
    pub size: u64,
    pub cumulative_size: u64,
    pub kind: FileKind,
}

impl FileStat {
    /// Parses raw stdout of `ipfs files stat`.
    #[must_use]
    pub fn parse(output: &str) -> Self {
        let mut lines = output.trim().lines();
        let cid = lines.next().unwrap_or_default().trim().to_string();

        let mut stat = Self {
            cid,
            ..Self::default()
        };

        for line in lines {
            let line = line.trim();
            if let Some(value) = line.strip_prefix("Size:") {
                stat.size = parse_leading_u64(value);
            } else if let Some(value) = line.strip_prefix("CumulativeSize:") {
                stat.cumulative_size = parse_leading_u64(value);
            } else if let Some(value) = line.strip_prefix("Type:") {
                stat.kind = FileKind::from_daemon(value);
            }
        }

        stat
    }

    /// Size shown to the user: cumulative for directories, own size otherwise.
    #[must_use]
    pub fn effective_size(&self) -> u64 {
        match self.kind {
            FileKind::Directory => self.cumulative_size,
            FileKind::File | FileKind::Unknown => self.size,
        }
    }
}

/// Reads the leading run of digits, ignoring anything after it.
fn parse_leading_u64(value: &str) -> u64 {
    let value = value.trim();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE_STAT: &str =
        "bafkreifile\nSize: 2048\nCumulativeSize: 2106\nChildBlocks: 0\nType: file\n";
    const DIR_STAT: &str =
        "bafybeidir\nSize: 0\nCumulativeSize: 1073741824\nChildBlocks: 3\nType: directory\n";

    #[test]
    fn test_parse_file() {
        let stat = FileStat::parse(FILE_STAT);
        assert_eq!(stat.cid, "bafkreifile");
        assert_eq!(stat.size, 2048);
        assert_eq!(stat.cumulative_size, 2106);
        assert_eq!(stat.kind, FileKind::File);
        assert_eq!(stat.effective_size(), 2048);
    }

    #[test]
    fn test_directory_uses_cumulative_size() {
        let stat = FileStat::parse(DIR_STAT);
        assert_eq!(stat.kind, FileKind::Directory);
        assert_eq!(stat.effective_size(), 1_073_741_824);
    }

    #[test]
    fn test_missing_fields_default() {
        let stat = FileStat::parse("bafyonly\n");
        assert_eq!(stat.cid, "bafyonly");
        assert_eq!(stat.size, 0);
        assert_eq!(stat.kind, FileKind::Unknown);
        assert_eq!(stat.effective_size(), 0);
    }

    #[test]
    fn test_malformed_numbers_are_zero() {
        let stat = FileStat::parse("bafy\nSize: lots\nCumulativeSize: \nType: file");
        assert_eq!(stat.size, 0);
        assert_eq!(stat.cumulative_size, 0);
    }

    #[test]
    fn test_trailing_garbage_after_number() {
        let stat = FileStat::parse("bafy\nSize: 512 bytes\nType: file");
        assert_eq!(stat.size, 512);
    }

    #[test]
    fn test_empty_output() {
        assert_eq!(FileStat::parse(""), FileStat::default());
    }
}
