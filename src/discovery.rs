/// SVG asset discovery
///
/// Walks the asset root recursively and collects standalone icon files.
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const LOG_TARGET: &str = "icon_forge::discovery";

/// Find every `.svg` file under `root`, skipping files whose name is listed in
/// `excluded`. Entries are sorted by file name within each directory.
///
/// Unreadable entries (including a missing root) are logged and skipped.
pub fn find_svg_files(root: &Path, excluded: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(target: LOG_TARGET, "Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("svg") {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if excluded.iter().any(|name| name.as_str() == &*file_name) {
            tracing::debug!(target: LOG_TARGET, "Skipping sprite sheet {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files
}
