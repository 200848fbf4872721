//! Output path resolution and PNG writing for finished sketches.

use crate::config::OutputConfig;
use crate::draw::Snapshot;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Resolves where a sketch is written when no explicit path was given.
pub fn default_output_path(config: &OutputConfig) -> PathBuf {
    let filename = generate_filename(&config.filename_template, "png");
    match &config.directory {
        Some(directory) => directory.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Encodes `snapshot` as PNG at `path`, creating parent directories as needed.
pub fn save_png(snapshot: &Snapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            log::info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    snapshot
        .write_png(&mut writer)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    log::info!(
        "Saved {}x{} sketch to {}",
        snapshot.width(),
        snapshot.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{CanvasSurface, WHITE};
    use tempfile::TempDir;

    #[test]
    fn generate_filename_uses_template_and_extension() {
        let name = generate_filename("sketch_fixed", "png");
        assert_eq!(name, "sketch_fixed.png");
    }

    #[test]
    fn default_output_path_honors_directory() {
        let config = OutputConfig {
            filename_template: "out".to_string(),
            directory: Some(PathBuf::from("/tmp/sketches")),
        };
        assert_eq!(
            default_output_path(&config),
            PathBuf::from("/tmp/sketches/out.png")
        );
    }

    #[test]
    fn save_png_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("sketch.png");
        let snapshot = CanvasSurface::new(8, 8, WHITE).unwrap().snapshot();

        save_png(&snapshot, &path).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
