use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

/// Chart files (`*.txt`) under `root`, recursively, sorted by path.
///
/// Unreadable entries are skipped with a warning; a missing `root` yields
/// an empty list.
pub fn discover<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut charts: Vec<PathBuf> = WalkDir::new(root.as_ref())
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                warn!("skipping level entry: {err}");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt")))
        .collect();
    charts.sort();
    charts
}
