use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::error::TextureError;
use crate::slide::Slide;

/// EXIF orientation tag of a JPEG, 1 (upright) when absent or unreadable.
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Not fatal, the picture is shown as stored
            debug!(path = %image_path.display(), error = %e, "no EXIF data");
            1
        }
    }
}

fn file_extension(image_path: &Path) -> String {
    image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, TextureError> {
    let file_bytes = fs::read(image_path).map_err(|source| TextureError::Read {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = file_extension(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| TextureError::Decode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are shown unflipped.
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
        .map_err(|e| TextureError::Upload {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Upload every image slide once, keyed by slide index.
///
/// Slides whose picture cannot be loaded are left out; the renderer falls
/// back to their caption.
pub fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    slides: &[Slide],
) -> HashMap<usize, Texture2D> {
    let mut textures = HashMap::new();
    for (index, slide) in slides.iter().enumerate() {
        let Some(path) = slide.image_path() else {
            continue;
        };
        match load_texture_with_exif_rotation(rl, thread, path) {
            Ok(texture) => {
                textures.insert(index, texture);
            }
            Err(e) => warn!(slide = %slide.id, error = %e, "image slide will show its caption only"),
        }
    }
    textures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_exif_bytes_default_to_upright() {
        assert_eq!(exif_orientation(Path::new("x.jpg"), b"definitely not a jpeg"), 1);
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension(Path::new("photos/BIN.JPG")), "jpg");
        assert_eq!(file_extension(Path::new("noext")), "");
    }
}
