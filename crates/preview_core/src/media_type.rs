//! Media-type checks.
//!
//! The declared media type is trusted as reported by the platform; file
//! contents are never sniffed.

use crate::constants::{FALLBACK_MEDIA_TYPE, IMAGE_MEDIA_PREFIX};

/// Check if a declared media type qualifies for preview.
///
/// The comparison is a literal, case-sensitive prefix match against `image/`,
/// so `"image/png"` qualifies while `"IMAGE/PNG"`, `"image"` and `""` do not.
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with(IMAGE_MEDIA_PREFIX)
}

/// Media type to embed in a data URL for a file that declared `media_type`.
pub fn data_url_media_type(media_type: &str) -> &str {
    if media_type.is_empty() {
        FALLBACK_MEDIA_TYPE
    } else {
        media_type
    }
}
