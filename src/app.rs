use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::cli::Config;
use crate::fs_walk::collect_files;
use crate::output;
use crate::pad::{PadSpec, pad};

pub fn run(cfg: &Config) -> Result<()> {
    let candidates = expand_paths(cfg)?;

    let images: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|p| is_image_file(p, &cfg.extensions))
        .collect();
    output::report_found(images.len());

    let spec = PadSpec::default();
    let mut resized = 0usize;
    for path in &images {
        // decoded image lives only for this iteration
        let img = image::open(path)
            .with_context(|| format!("failed to read image {}", path.display()))?;
        if img.width() == img.height() {
            debug!("already square, leaving untouched: {}", path.display());
            continue;
        }
        pad(&img, &spec)
            .save(path)
            .with_context(|| format!("failed to write image {}", path.display()))?;
        resized += 1;
    }
    output::report_resized(resized);

    Ok(())
}

// Expand the input paths to concrete candidate files. Recursive mode walks
// directory arguments; otherwise they are skipped with a notice, and only
// directly supplied files pass through.
fn expand_paths(cfg: &Config) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for path in &cfg.paths {
        if cfg.recursive {
            let walked = collect_files(path, cfg.all_files)
                .with_context(|| format!("failed to traverse {}", path.display()))?;
            out.extend(walked);
        } else if path.is_dir() {
            output::report_skipped_dir(path);
        } else {
            out.push(path.clone());
        }
    }
    Ok(out)
}

fn is_image_file(path: &Path, extensions: &[String]) -> bool {
    if !path.is_file() {
        return false;
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions.iter().any(|known| known == ext),
        None => false,
    }
}
