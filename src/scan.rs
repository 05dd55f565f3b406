use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::icon::target_name;

/// Collect every `.icns` file under `dir` (unbounded depth) together with
/// the target name derived by stripping the suffix from its file name.
///
/// Unreadable entries are skipped; a missing directory yields nothing.
/// No ordering is guaranteed across entries.
pub fn icns_files(dir: &Path) -> Vec<(PathBuf, String)> {
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(name) = target_name(entry.path()) {
            found.push((entry.path().to_path_buf(), name.to_string()));
        }
    }

    found
}
