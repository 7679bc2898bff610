//! Selected-file abstraction.
//!
//! A selected file is owned by the platform's file-selection control. The
//! handler only borrows it long enough to start one read.

use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};

use crate::data_url::DataUrl;
use crate::error::Result;

/// Future resolving once with the outcome of a data URL read.
pub type ReadFuture = LocalBoxFuture<'static, Result<DataUrl>>;

/// A file chosen by the user.
pub trait SelectedFile {
    /// Declared media type, as reported by the platform (may be empty).
    fn media_type(&self) -> String;

    /// File name, used for logging.
    fn name(&self) -> String;

    /// Start reading the whole content as a data URL.
    ///
    /// The read begins when this is called; the returned future only
    /// delivers its result.
    fn read_as_data_url(&self) -> ReadFuture;
}

/// A file held in memory.
///
/// Reads complete on first poll. Cloning shares the content.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    media_type: String,
    bytes: Rc<[u8]>,
}

impl MemoryFile {
    /// Create a file from raw bytes.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes: Rc::from(bytes),
        }
    }
}

impl SelectedFile for MemoryFile {
    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_as_data_url(&self) -> ReadFuture {
        let url = DataUrl::encode(&self.media_type, &self.bytes);
        Box::pin(future::ready(Ok(url)))
    }
}
