//! Fixed identifiers shared by the core and the browser bindings.

/// Element id of the preview image in the page markup.
pub const DEFAULT_TARGET_ID: &str = "image-preview";

/// Media-type prefix a selected file must carry to be previewed.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// CSS `display` value that makes the preview visible.
pub const DEFAULT_VISIBLE_DISPLAY: &str = "block";

/// Media type browsers put into a data URL when the file declares none.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";
