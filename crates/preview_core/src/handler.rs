//! The preview handler.
//!
//! Bound to the change event of a file input. For the first selected file
//! with an `image/` media type it starts a data URL read and, once the read
//! completes, writes the result into the preview target and shows it.
//!
//! The handler never spawns anything itself. [`PreviewHandler::on_change`]
//! hands back a [`PendingPreview`] future, and the caller schedules it on
//! the UI thread's executor (`spawn_local` in the browser). Everything stays
//! on that one thread, so the target is never mutated concurrently.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::future::LocalBoxFuture;

use crate::config::CompletionPolicy;
use crate::data_url::DataUrl;
use crate::error::{PreviewError, Result};
use crate::file::SelectedFile;
use crate::generation::{Generation, GenerationCounter};
use crate::media_type::is_image_media_type;
use crate::target::PreviewTarget;

/// How a preview request ended.
#[derive(Debug)]
pub enum PreviewOutcome {
    /// The data URL was written to the target and the target shown
    Applied {
        /// Request that was applied
        generation: Generation,
    },
    /// The read finished after a newer selection and was discarded
    Superseded {
        /// Request that was discarded
        generation: Generation,
        /// Newest request at the time of completion
        latest: Generation,
    },
    /// The read failed; the target keeps its previous state
    ReadFailed {
        /// Request whose read failed
        generation: Generation,
        /// Error reported by the platform
        error: PreviewError,
    },
}

impl PreviewOutcome {
    /// Request this outcome belongs to.
    pub fn generation(&self) -> Generation {
        match self {
            PreviewOutcome::Applied { generation }
            | PreviewOutcome::Superseded { generation, .. }
            | PreviewOutcome::ReadFailed { generation, .. } => *generation,
        }
    }

    /// Whether the target was updated.
    pub fn is_applied(&self) -> bool {
        matches!(self, PreviewOutcome::Applied { .. })
    }
}

/// A started read whose result has not been applied yet.
///
/// Resolves to the [`PreviewOutcome`] after touching the target (or not).
#[must_use = "the preview is only applied when this future is spawned or awaited"]
pub struct PendingPreview {
    generation: Generation,
    future: LocalBoxFuture<'static, PreviewOutcome>,
}

impl PendingPreview {
    /// Request id of this preview.
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

impl Future for PendingPreview {
    type Output = PreviewOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.as_mut().poll(cx)
    }
}

impl fmt::Debug for PendingPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingPreview")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

struct Shared<T> {
    target: T,
    generations: GenerationCounter,
    policy: CompletionPolicy,
}

impl<T: PreviewTarget> Shared<T> {
    fn complete(
        &self,
        generation: Generation,
        name: &str,
        result: Result<DataUrl>,
    ) -> PreviewOutcome {
        let url = match result {
            Ok(url) => url,
            Err(error) => {
                log::warn!("Preview {} of '{}' not shown: {}", generation, name, error);
                return PreviewOutcome::ReadFailed { generation, error };
            }
        };

        if self.policy == CompletionPolicy::LatestSelection
            && !self.generations.is_current(generation)
        {
            let latest = self.generations.latest().unwrap_or(generation);
            log::warn!(
                "Discarding preview {} of '{}': superseded by {}",
                generation,
                name,
                latest
            );
            return PreviewOutcome::Superseded { generation, latest };
        }

        self.target.set_source(&url);
        self.target.show();
        log::info!(
            "Preview {} shows '{}' ({}, {} base64 chars)",
            generation,
            name,
            url.media_type(),
            url.payload().len()
        );
        PreviewOutcome::Applied { generation }
    }
}

/// Live image preview for a file input.
///
/// Cloning is cheap and clones share the target and generation counter.
pub struct PreviewHandler<T> {
    shared: Rc<Shared<T>>,
}

impl<T> Clone for PreviewHandler<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: PreviewTarget + 'static> PreviewHandler<T> {
    /// Create a handler writing to `target`, discarding stale completions.
    pub fn new(target: T) -> Self {
        Self::with_policy(target, CompletionPolicy::default())
    }

    /// Create a handler with an explicit completion policy.
    pub fn with_policy(target: T, policy: CompletionPolicy) -> Self {
        Self {
            shared: Rc::new(Shared {
                target,
                generations: GenerationCounter::new(),
                policy,
            }),
        }
    }

    /// The injected preview target.
    pub fn target(&self) -> &T {
        &self.shared.target
    }

    /// How completions older than the latest selection are treated.
    pub fn policy(&self) -> CompletionPolicy {
        self.shared.policy
    }

    /// Most recent request, if any file has qualified so far.
    pub fn latest_generation(&self) -> Option<Generation> {
        self.shared.generations.latest()
    }

    /// Handle a change of the file selection.
    ///
    /// Only the first file is considered. Returns `None` without touching
    /// anything when no file is selected or its media type does not start
    /// with `image/`. Otherwise the read is started immediately and the
    /// returned future applies its result.
    pub fn on_change<F, I>(&self, files: I) -> Option<PendingPreview>
    where
        F: SelectedFile,
        I: IntoIterator<Item = F>,
    {
        let Some(file) = files.into_iter().next() else {
            log::debug!("No file selected, preview unchanged");
            return None;
        };

        let media_type = file.media_type();
        let name = file.name();
        if !is_image_media_type(&media_type) {
            log::debug!(
                "Ignoring '{}': media type '{}' is not an image",
                name,
                media_type
            );
            return None;
        }

        let generation = self.shared.generations.issue();
        log::debug!(
            "Reading '{}' ({}) for preview {}",
            name,
            media_type,
            generation
        );
        let read = file.read_as_data_url();
        let shared = Rc::clone(&self.shared);

        Some(PendingPreview {
            generation,
            future: Box::pin(async move {
                let result = read.await;
                shared.complete(generation, &name, result)
            }),
        })
    }
}

impl<T> fmt::Debug for PreviewHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandler")
            .field("policy", &self.shared.policy)
            .field("latest", &self.shared.generations.latest())
            .finish_non_exhaustive()
    }
}
