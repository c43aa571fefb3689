use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

/// Depth-first listing of every leaf (non-directory) path under `root`.
///
/// A `root` that is not a directory yields itself; this covers plain files
/// and paths that do not exist, which later stages drop or report. Hidden
/// entries (name starting with `.`) are skipped at every level unless
/// `all_files` is set — the root itself is never filtered.
pub fn collect_files(root: &Path, all_files: bool) -> io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    if root.is_dir() {
        collect_recursive(root, all_files, &mut out)?;
    } else {
        out.push(root.to_path_buf());
    }
    Ok(out)
}

fn collect_recursive(dir: &Path, all_files: bool, out: &mut Vec<PathBuf>) -> io::Result<()> {
    // read_dir order, no sorting; callers must not rely on it
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !all_files && is_hidden(&path) {
            debug!("skipping hidden entry: {}", path.display());
            continue;
        }
        if path.is_dir() {
            collect_recursive(&path, all_files, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
