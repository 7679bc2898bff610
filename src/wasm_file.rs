//! Browser file reading.
//!
//! Wraps `web_sys::File` as a [`SelectedFile`], turning the callback-based
//! `FileReader.readAsDataURL` into a future.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future;
use preview_core::{DataUrl, PreviewError, ReadFuture, Result, SelectedFile};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileReader, HtmlInputElement};

type ReadSender = Rc<RefCell<Option<oneshot::Sender<Result<DataUrl>>>>>;

/// Convert a thrown JavaScript value into an error.
pub(crate) fn js_error(value: &JsValue) -> PreviewError {
    PreviewError::Js(format!("{:?}", value))
}

/// A file from an `<input type="file">` selection.
pub struct BrowserFile {
    file: File,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

/// First selected file of the input that fired `event`, if any.
pub fn first_selected_file(event: &Event) -> Result<Option<BrowserFile>> {
    let input: HtmlInputElement = event
        .target()
        .ok_or_else(|| PreviewError::NotAFileInput("event has no target".to_string()))?
        .dyn_into()
        .map_err(|_| PreviewError::NotAFileInput("event target is not an <input>".to_string()))?;

    Ok(input
        .files()
        .and_then(|files| files.get(0))
        .map(BrowserFile::new))
}

impl SelectedFile for BrowserFile {
    fn media_type(&self) -> String {
        self.file.type_()
    }

    fn name(&self) -> String {
        self.file.name()
    }

    fn read_as_data_url(&self) -> ReadFuture {
        let name = self.file.name();
        match start_read(&self.file) {
            Ok((guard, receiver)) => Box::pin(async move {
                let result = receiver
                    .await
                    .unwrap_or_else(|_| Err(PreviewError::read_failed(&name, "reader dropped")));
                drop(guard);
                result
            }),
            Err(error) => Box::pin(future::ready(Err(error))),
        }
    }
}

/// Keeps the reader callbacks alive while a read is in flight.
///
/// Dropping it detaches the callbacks and aborts an unfinished read, so a
/// dropped future never leaves a dangling closure behind.
struct ReaderGuard {
    reader: FileReader,
    _onload: Closure<dyn FnMut(Event)>,
    _onerror: Closure<dyn FnMut(Event)>,
}

impl Drop for ReaderGuard {
    fn drop(&mut self) {
        self.reader.set_onload(None);
        self.reader.set_onerror(None);
        if self.reader.ready_state() == FileReader::LOADING {
            self.reader.abort();
        }
    }
}

fn send(sender: &ReadSender, result: Result<DataUrl>) {
    if let Some(sender) = sender.borrow_mut().take() {
        // Receiver is gone when the preview future was dropped
        let _ = sender.send(result);
    }
}

fn start_read(file: &File) -> Result<(ReaderGuard, oneshot::Receiver<Result<DataUrl>>)> {
    let reader = FileReader::new().map_err(|e| js_error(&e))?;
    let (sender, receiver) = oneshot::channel();
    let sender: ReadSender = Rc::new(RefCell::new(Some(sender)));

    let onload = {
        let sender = Rc::clone(&sender);
        let reader = reader.clone();
        Closure::wrap(Box::new(move |_event: Event| {
            let result = reader
                .result()
                .map_err(|e| js_error(&e))
                .and_then(|value| {
                    value.as_string().ok_or_else(|| {
                        PreviewError::invalid_data_url("reader result is not a string")
                    })
                })
                .and_then(DataUrl::parse);
            send(&sender, result);
        }) as Box<dyn FnMut(Event)>)
    };

    let onerror = {
        let sender = Rc::clone(&sender);
        let reader = reader.clone();
        let name = file.name();
        Closure::wrap(Box::new(move |_event: Event| {
            let message = reader
                .error()
                .map(|e| format!("{}: {}", e.name(), e.message()))
                .unwrap_or_else(|| "unknown error".to_string());
            send(&sender, Err(PreviewError::read_failed(&name, message)));
        }) as Box<dyn FnMut(Event)>)
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    let guard = ReaderGuard {
        reader,
        _onload: onload,
        _onerror: onerror,
    };
    guard
        .reader
        .read_as_data_url(file)
        .map_err(|e| js_error(&e))?;

    Ok((guard, receiver))
}
