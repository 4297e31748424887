//! `clipfs pintable`: MFS root entries as a table, optionally interactive.

use std::fmt::Write as _;
use std::io::IsTerminal;

use crate::cli::args::{PinTableArgs, Presentation};
use crate::config::Config;
use crate::constants;
use crate::core::clipboard::copy_to_clipboard;
use crate::core::fanout::ordered_fan_out;
use crate::error::{Error, Result};
use crate::ipfs::{FileStat, Ipfs};
use crate::state::FileEntry;
use crate::ui::picker::{self, Action};
use crate::ui::TextTable;

/// Runs the subcommand.
///
/// # Errors
///
/// Returns an error if the config is invalid, `ipfs files ls` fails, the
/// picker cannot drive the terminal, or an unpin fails.
pub fn run(args: &PinTableArgs) -> Result<()> {
    let config = args.global.load_config()?;
    let ipfs = Ipfs::from_config(&config);

    let names = ipfs.files_ls(constants::MFS_ROOT)?;
    let entries = collect_entries(&names, config.max_concurrency, |name| {
        ipfs.files_stat(name)
    });
    tracing::info!(entries = entries.len(), names = names.len(), "mfs root listed");

    let styled = std::io::stdout().is_terminal();
    match args.presentation() {
        Presentation::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        Presentation::Plain => print!("{}", render_plain(&entries)),
        Presentation::Table => println!("{}", render_table(&entries).styled_header(styled)),
        Presentation::Interactive => {
            println!("{}", render_table(&entries).styled_header(styled));
            if !std::io::stdin().is_terminal() || !styled {
                tracing::warn!("not a terminal, skipping interactive selection");
                return Ok(());
            }
            interact(&ipfs, &config, &entries)?;
        }
    }
    Ok(())
}

/// Stats every name and builds the entries, keeping `names` order.
///
/// A name whose stat fails is logged and left out.
pub fn collect_entries<F>(names: &[String], width: usize, stat: F) -> Vec<FileEntry>
where
    F: Fn(&str) -> Result<FileStat> + Sync,
{
    ordered_fan_out(names, width, |name| match stat(name) {
        Ok(found) => Some(FileEntry {
            name: name.clone(),
            size: found.effective_size(),
            kind: found.kind,
            cid: found.cid,
        }),
        Err(e) => {
            tracing::warn!(file = %name, "error fetching data: {e}");
            None
        }
    })
    .into_iter()
    .flatten()
    .collect()
}

/// `Name | CID | Size | Type` table.
#[must_use]
pub fn render_table(entries: &[FileEntry]) -> TextTable {
    let mut table = TextTable::new(["Name", "CID", "Size", "Type"]);
    for entry in entries {
        table.push_row([
            entry.display_name().to_string(),
            entry.cid.clone(),
            entry.display_size(),
            entry.kind.to_string(),
        ]);
    }
    table
}

/// One line per entry: `<cid>  <size>  <type>  <name>`.
#[must_use]
pub fn render_plain(entries: &[FileEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{}  {}  {}  {}",
            entry.cid,
            entry.display_size(),
            entry.kind,
            entry.display_name()
        );
    }
    out
}

/// The "View details" block.
#[must_use]
pub fn render_details(entry: &FileEntry) -> String {
    format!(
        "\nFile Details:\nName: {}\nCID: {}\nSize: {}\nType: {}",
        entry.name,
        entry.cid,
        entry.display_size(),
        entry.kind
    )
}

fn interact(ipfs: &Ipfs, config: &Config, entries: &[FileEntry]) -> Result<()> {
    let Some((row, action)) = picker::run(entries)? else {
        println!("{}", constants::MSG_EXITING);
        return Ok(());
    };

    let entry = &entries[row];
    println!("\nSelected: {} ({})", entry.name, entry.cid);
    perform(ipfs, config, entry, action)
}

fn perform(ipfs: &Ipfs, config: &Config, entry: &FileEntry, action: Action) -> Result<()> {
    match action {
        Action::ViewDetails => println!("{}", render_details(entry)),
        Action::Unpin => {
            println!("Unpinning {}...", entry.name);
            let output = ipfs.pin_rm(&entry.cid)?;
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Action::CopyCid => match copy_to_clipboard(&entry.cid, config.clipboard_cmd.as_deref()) {
            Ok(()) => println!("{}", constants::MSG_COPIED),
            Err(Error::ClipboardUnavailable) => {
                println!("{} {}", constants::MSG_CLIPBOARD_UNAVAILABLE, entry.cid);
            }
            Err(e) => return Err(e),
        },
        Action::Exit => println!("{}", constants::MSG_EXITING),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FileKind;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_collect_entries_skips_failures_and_keeps_order() {
        let entries = collect_entries(&names(&["docs", "broken", "photo.jpg"]), 2, |name| {
            match name {
                "docs" => Ok(FileStat::parse(
                    "bafydocs\nSize: 0\nCumulativeSize: 4096\nType: directory",
                )),
                "photo.jpg" => Ok(FileStat::parse("bafyphoto\nSize: 2048\nType: file")),
                _ => Err(Error::Url(url::ParseError::EmptyHost)),
            }
        });

        assert_eq!(
            entries,
            vec![
                FileEntry {
                    name: "docs".to_string(),
                    cid: "bafydocs".to_string(),
                    size: 4096,
                    kind: FileKind::Directory,
                },
                FileEntry {
                    name: "photo.jpg".to_string(),
                    cid: "bafyphoto".to_string(),
                    size: 2048,
                    kind: FileKind::File,
                },
            ]
        );
    }

    #[test]
    fn test_render_table_small_file() {
        let entries = vec![FileEntry {
            name: "report.pdf".to_string(),
            cid: "bafyreport".to_string(),
            size: 2048,
            kind: FileKind::File,
        }];
        let rendered = render_table(&entries).render();
        assert!(rendered.contains("│ Name       │ CID        │ Size      │ Type │"));
        assert!(rendered.contains("│ report.pdf │ bafyreport │ 0.0000 GB │ file │"));
    }

    #[test]
    fn test_render_plain() {
        let entries = vec![FileEntry {
            name: String::new(),
            cid: "bafyx".to_string(),
            size: 1024 * 1024 * 1024,
            kind: FileKind::Unknown,
        }];
        assert_eq!(render_plain(&entries), "bafyx  1.0000 GB  unknown  (no name)\n");
    }

    #[test]
    fn test_render_details() {
        let entry = FileEntry {
            name: "docs".to_string(),
            cid: "bafydocs".to_string(),
            size: 0,
            kind: FileKind::Directory,
        };
        assert_eq!(
            render_details(&entry),
            "\nFile Details:\nName: docs\nCID: bafydocs\nSize: 0.0000 GB\nType: directory"
        );
    }
}
