//! Handler scenarios driven on a single-threaded executor.
//!
//! `futures::executor::LocalPool` stands in for the browser event loop:
//! pending previews are spawned onto it and run until stalled, while gated
//! files decide when each read completes.

mod handler_tests;

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::{DataUrl, PreviewError, PreviewOutcome, ReadFuture, Result, SelectedFile};

/// PNG signature followed by the start of an IHDR chunk.
pub(crate) const PNG_BYTES: [u8; 12] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D,
];

/// A file whose read completes only when its [`Gate`] is opened.
pub(crate) struct GatedFile {
    name: String,
    media_type: String,
    receiver: RefCell<Option<oneshot::Receiver<Result<DataUrl>>>>,
}

/// Completion side of a [`GatedFile`].
pub(crate) struct Gate {
    media_type: String,
    sender: oneshot::Sender<Result<DataUrl>>,
}

impl Gate {
    /// Let the read succeed with `bytes`.
    pub(crate) fn complete(self, bytes: &[u8]) {
        let url = DataUrl::encode(&self.media_type, bytes);
        let _ = self.sender.send(Ok(url));
    }

    /// Let the read fail.
    pub(crate) fn fail(self, message: &str) {
        let _ = self
            .sender
            .send(Err(PreviewError::read_failed("gated", message)));
    }
}

pub(crate) fn gated(name: &str, media_type: &str) -> (GatedFile, Gate) {
    let (sender, receiver) = oneshot::channel();
    let file = GatedFile {
        name: name.to_string(),
        media_type: media_type.to_string(),
        receiver: RefCell::new(Some(receiver)),
    };
    let gate = Gate {
        media_type: media_type.to_string(),
        sender,
    };
    (file, gate)
}

impl SelectedFile for GatedFile {
    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn read_as_data_url(&self) -> ReadFuture {
        let name = self.name.clone();
        let receiver = self.receiver.borrow_mut().take();
        Box::pin(async move {
            match receiver {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(PreviewError::read_failed(name, "gate dropped"))),
                None => Err(PreviewError::read_failed(name, "already read")),
            }
        })
    }
}

/// A file whose read always fails.
pub(crate) struct UnreadableFile;

impl SelectedFile for UnreadableFile {
    fn media_type(&self) -> String {
        "image/png".to_string()
    }

    fn name(&self) -> String {
        "locked.png".to_string()
    }

    fn read_as_data_url(&self) -> ReadFuture {
        Box::pin(futures::future::ready(Err(PreviewError::read_failed(
            "locked.png",
            "NotReadableError",
        ))))
    }
}

/// Collects outcomes of spawned previews.
pub(crate) type Outcomes = Rc<RefCell<Vec<PreviewOutcome>>>;

/// A file whose read returns a data URL string as a browser would hand it
/// over, passed through [`DataUrl::parse`] like the wasm reader does.
pub(crate) struct PlatformFile {
    pub(crate) media_type: &'static str,
    pub(crate) result: &'static str,
}

impl SelectedFile for PlatformFile {
    fn media_type(&self) -> String {
        self.media_type.to_string()
    }

    fn name(&self) -> String {
        "upload".to_string()
    }

    fn read_as_data_url(&self) -> ReadFuture {
        Box::pin(futures::future::ready(DataUrl::parse(self.result)))
    }
}
