use std::path::Path;

// All reporting goes to stderr; stdout carries nothing but help output.

pub fn report_skipped_dir(path: &Path) {
    eprintln!("Skipping directory: {}", path.display());
}

pub fn report_found(count: usize) {
    eprintln!("{count} images found.");
}

pub fn report_resized(count: usize) {
    eprintln!("{count} images resized.");
}
