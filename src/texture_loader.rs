use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Collect the image files in a deck directory, sorted by file name.
/// An empty result is fine here; deck assembly decides whether a deck
/// without images is an error.
pub fn scan_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read deck directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());
        if matches!(ext.as_deref(), Some(e) if IMAGE_EXTENSIONS.contains(&e)) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// EXIF orientation tag, 1 when absent or unreadable. Only JPEG carries
/// EXIF reliably; other formats skip the probe.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "jpg" && ext != "jpeg" {
        return 1;
    }
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("could not read EXIF data for {}: {}", path.display(), e);
            1
        }
    }
}

/// Load one image as a texture, with EXIF rotation baked in.
pub fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    let mut image = Image::load_image_from_mem(&format!(".{}", ext), &bytes)
        .map_err(|e| anyhow!("failed to decode image {}: {}", path.display(), e))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flip variants are
    // ignored, matching what cameras actually emit.
    match exif_orientation(path, &bytes) {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!("applied 180 deg rotation to {}", path.display());
        }
        6 => {
            image.rotate_cw();
            debug!("applied 90 deg CW rotation to {}", path.display());
        }
        8 => {
            image.rotate_ccw();
            debug!("applied 90 deg CCW rotation to {}", path.display());
        }
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", path.display(), e))?;
    Ok(texture)
}
