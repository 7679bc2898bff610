//! Preview target abstraction.
//!
//! The target is the display element the handler writes to. It is injected
//! into the handler instead of being looked up globally, so the handler can
//! run without a page.

use std::cell::RefCell;
use std::rc::Rc;

use crate::data_url::DataUrl;

/// A display element showing the previewed image.
///
/// Methods take `&self`: like DOM elements, targets are shared handles with
/// interior mutability, touched only from the UI thread.
pub trait PreviewTarget {
    /// Set the image source attribute.
    fn set_source(&self, url: &DataUrl);

    /// Make the element visible.
    fn show(&self);
}

impl<T: PreviewTarget + ?Sized> PreviewTarget for Rc<T> {
    fn set_source(&self, url: &DataUrl) {
        (**self).set_source(url);
    }

    fn show(&self) {
        (**self).show();
    }
}

/// Snapshot of a [`RecordingTarget`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    /// Current image source, if any was set
    pub source: Option<String>,
    /// Whether the element is visible
    pub visible: bool,
    /// Number of `set_source` calls received
    pub source_writes: usize,
}

/// In-memory target that records what the handler did to it.
///
/// Clones share state, so a clone can be handed to the handler while the
/// original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    state: Rc<RefCell<PreviewState>>,
}

impl RecordingTarget {
    /// Create a hidden target with no source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a target starting from the given state.
    pub fn with_state(state: PreviewState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    /// Copy of the current state.
    pub fn state(&self) -> PreviewState {
        self.state.borrow().clone()
    }

    /// Current image source.
    pub fn source(&self) -> Option<String> {
        self.state.borrow().source.clone()
    }

    /// Whether the element is visible.
    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }
}

impl PreviewTarget for RecordingTarget {
    fn set_source(&self, url: &DataUrl) {
        let mut state = self.state.borrow_mut();
        state.source = Some(url.as_str().to_owned());
        state.source_writes += 1;
    }

    fn show(&self) {
        self.state.borrow_mut().visible = true;
    }
}
