use site_cms_multipart::base_name;

use crate::error::{StoreError, StoreResult};

/// Extensions listed by the image store, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "avif"];

/// True when `name` ends in one of [`IMAGE_EXTENSIONS`].
pub fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext))
    })
}

/// Reduce a client-supplied filename to a bare name inside the image directory.
pub fn sanitize_filename(raw: &str) -> StoreResult<&str> {
    base_name(raw).ok_or_else(|| StoreError::InvalidFilename(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_case_insensitive() {
        for name in ["a.png", "b.JPG", "c.jpeg", "d.Gif", "e.webp", "f.svg", "g.AVIF"] {
            assert!(is_image_file(name), "{name} should be listed");
        }
    }

    #[test]
    fn other_files_are_not_images() {
        for name in ["notes.txt", "png", "archive.png.zip", "script.js", ".DS_Store", "photo.jpe"] {
            assert!(!is_image_file(name), "{name} should not be listed");
        }
    }

    #[test]
    fn sanitize_rejects_empty_names() {
        assert_eq!(sanitize_filename("../x/../logo.png").unwrap(), "logo.png");
        assert!(matches!(
            sanitize_filename(".."),
            Err(StoreError::InvalidFilename(_))
        ));
    }
}
