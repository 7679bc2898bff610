//! Kennel image preview
//!
//! Live preview for image uploads in the kennel forms, compiled to
//! WebAssembly. Picking an image in a file input shows it in the page's
//! `#image-preview` element before the form is submitted.
//!
//! The platform-independent logic lives in `preview_core`; this crate adds
//! the browser bindings and logger setup.

pub mod logging;

pub use logging::init_logging;
pub use preview_core::{
    CompletionPolicy, DataUrl, LogLevel, PreviewConfig, PreviewError, PreviewHandler,
    PreviewOutcome, PreviewTarget, SelectedFile,
};

#[cfg(target_arch = "wasm32")]
mod wasm_file;
#[cfg(target_arch = "wasm32")]
mod wasm_target;

// WASM entry points
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
