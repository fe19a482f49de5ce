use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collects every file below `root` whose base name is exactly `file_name`.
///
/// The walk is recursive and does not descend into symlinked directories.
/// A symlink that resolves to a regular file counts as a file. Directories
/// sharing the name are not matches. Results come back in walk order, which is
/// filesystem dependent.
///
/// Unreadable entries (and an unreadable or missing `root`) are logged and
/// skipped; they never abort the walk.
pub fn discover(root: impl AsRef<Path>, file_name: &str) -> Vec<PathBuf> {
    let root = root.as_ref();
    log::debug!("Searching {} for {}...", root.display(), file_name);

    let mut matches = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                log::warn!(
                    "Skipping unreadable entry below {}: {}",
                    root.display(),
                    error
                );
                continue;
            }
        };

        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        if entry.file_name() == file_name {
            log::trace!("Found {}", entry.path().display());
            matches.push(entry.into_path());
        }
    }

    log::debug!(
        "Found {} file(s) named {} below {}",
        matches.len(),
        file_name,
        root.display()
    );
    matches
}
