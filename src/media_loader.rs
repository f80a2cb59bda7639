use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::warn;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "mov", "mkv", "webm"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_video_path(path: &Path) -> bool {
    VIDEO_EXTENSIONS.contains(&extension_of(path).as_str())
}

/// Collects every image and video file in `dir`, sorted by file name so the
/// slide order is stable across runs.
pub fn load_sorted_media_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {:?}", dir))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let ext = extension_of(&path);
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) || VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("no image or video files found in directory {:?}", dir);
    }
    Ok(paths)
}

/// Reads the JPEG EXIF orientation tag, defaulting to 1 (no rotation) when
/// the file has no usable EXIF data.
fn exif_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Value::Short(values) = &field.value {
                    if let Some(&value) = values.first() {
                        return value;
                    }
                }
            }
            1
        }
        Err(e) => {
            warn!("could not read EXIF data for {:?}: {}", path, e);
            1
        }
    }
}

/// Loads an image file into a texture, applying the EXIF orientation for
/// JPEGs (orientations 3/6/8; mirrored variants are ignored).
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("failed to read file {:?}", path))?;

    let ext = extension_of(path);
    let orientation = if ext == "jpg" || ext == "jpeg" {
        exif_orientation(path, &bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", ext), &bytes)
        .map_err(|e| anyhow!("failed to decode image {:?}: {}", path, e))?;

    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {:?}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_extension_detection_is_case_insensitive() {
        assert!(is_video_path(Path::new("clip.mp4")));
        assert!(is_video_path(Path::new("CLIP.MOV")));
        assert!(!is_video_path(Path::new("photo.jpg")));
        assert!(!is_video_path(Path::new("noext")));
    }
}
