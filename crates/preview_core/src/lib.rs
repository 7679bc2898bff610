//! Kennel image preview core.
//!
//! Platform-independent part of the upload preview: checks the selected
//! file's media type, reads it into a data URL and shows it in a preview
//! target. Browser bindings live in the `kennel_preview` crate.

pub mod config;
pub mod constants;
pub mod data_url;
pub mod error;
pub mod file;
pub mod generation;
pub mod handler;
pub mod media_type;
pub mod target;

#[cfg(test)]
mod tests;

pub use config::{CompletionPolicy, LogLevel, PreviewConfig, CONFIG_VERSION};
pub use data_url::DataUrl;
pub use error::{PreviewError, Result};
pub use file::{MemoryFile, ReadFuture, SelectedFile};
pub use generation::{Generation, GenerationCounter};
pub use handler::{PendingPreview, PreviewHandler, PreviewOutcome};
pub use media_type::is_image_media_type;
pub use target::{PreviewState, PreviewTarget, RecordingTarget};
