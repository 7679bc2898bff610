//! Single-request behavior of the preview handler.

use futures::executor::block_on;

use super::{PlatformFile, UnreadableFile, PNG_BYTES};
use crate::{
    CompletionPolicy, DataUrl, MemoryFile, PreviewHandler, PreviewOutcome, PreviewState,
    RecordingTarget,
};

fn handler() -> (PreviewHandler<RecordingTarget>, RecordingTarget) {
    let target = RecordingTarget::new();
    (PreviewHandler::new(target.clone()), target)
}

#[test]
fn test_no_file_selected_is_noop() {
    let (handler, target) = handler();

    assert!(handler.on_change(Vec::<MemoryFile>::new()).is_none());
    assert!(handler.on_change(None::<MemoryFile>).is_none());

    assert_eq!(target.state(), PreviewState::default());
    assert_eq!(handler.latest_generation(), None);
}

#[test]
fn test_non_image_media_types_are_ignored() {
    let previous = PreviewState {
        source: Some("data:image/png;base64,AAAA".to_string()),
        visible: true,
        source_writes: 1,
    };
    let target = RecordingTarget::with_state(previous.clone());
    let handler = PreviewHandler::new(target.clone());

    for media_type in ["text/plain", "", "application/pdf", "IMAGE/PNG", "video/mp4"] {
        let file = MemoryFile::new("notes", media_type, b"not an image".to_vec());
        assert!(
            handler.on_change(Some(file)).is_none(),
            "'{}' should be ignored",
            media_type
        );
    }

    assert_eq!(target.state(), previous);
    assert_eq!(handler.latest_generation(), None);
}

#[test]
fn test_png_is_previewed() {
    let (handler, target) = handler();
    let file = MemoryFile::new("rex.png", "image/png", PNG_BYTES.to_vec());

    let pending = handler.on_change(Some(file)).expect("png qualifies");
    // Nothing changes before the read completes
    assert_eq!(target.state(), PreviewState::default());

    let outcome = block_on(pending);
    assert!(outcome.is_applied());

    let expected = DataUrl::encode("image/png", &PNG_BYTES);
    assert_eq!(target.source().as_deref(), Some(expected.as_str()));
    assert_eq!(
        target.source().as_deref(),
        Some("data:image/png;base64,iVBORw0KGgoAAAAN")
    );
    assert!(target.is_visible());
}

#[test]
fn test_only_first_file_is_considered() {
    let (handler, target) = handler();
    let files = vec![
        MemoryFile::new("first.gif", "image/gif", b"GIF89a".to_vec()),
        MemoryFile::new("second.png", "image/png", PNG_BYTES.to_vec()),
    ];

    block_on(handler.on_change(files).unwrap());
    assert_eq!(
        target.source().as_deref(),
        Some("data:image/gif;base64,R0lGODlh")
    );

    // A non-image first file wins over an image second file
    let files = vec![
        MemoryFile::new("doc.pdf", "application/pdf", Vec::new()),
        MemoryFile::new("second.png", "image/png", PNG_BYTES.to_vec()),
    ];
    assert!(handler.on_change(files).is_none());
}

#[test]
fn test_empty_jpeg_yields_degenerate_data_url() {
    let (handler, target) = handler();
    let file = MemoryFile::new("empty.jpg", "image/jpeg", Vec::new());

    let outcome = block_on(handler.on_change(Some(file)).unwrap());
    assert!(outcome.is_applied());
    assert_eq!(target.source().as_deref(), Some("data:image/jpeg;base64,"));
    assert!(target.is_visible());
}

#[test]
fn test_same_file_twice_is_idempotent() {
    let file = MemoryFile::new("rex.png", "image/png", PNG_BYTES.to_vec());

    let (once, once_target) = handler();
    block_on(once.on_change(Some(file.clone())).unwrap());

    let (twice, twice_target) = handler();
    block_on(twice.on_change(Some(file.clone())).unwrap());
    block_on(twice.on_change(Some(file)).unwrap());

    assert_eq!(twice_target.source(), once_target.source());
    assert_eq!(twice_target.is_visible(), once_target.is_visible());
}

#[test]
fn test_read_failure_leaves_preview_stale() {
    let (handler, target) = handler();

    let first = MemoryFile::new("rex.png", "image/png", PNG_BYTES.to_vec());
    block_on(handler.on_change(Some(first)).unwrap());
    let before = target.state();

    let outcome = block_on(handler.on_change(Some(UnreadableFile)).unwrap());
    match outcome {
        PreviewOutcome::ReadFailed { generation, error } => {
            assert_eq!(generation.get(), 2);
            assert!(error.to_string().contains("NotReadableError"));
        }
        other => panic!("expected read failure, got {:?}", other),
    }
    assert_eq!(target.state(), before);
}

#[test]
fn test_generations_only_issued_for_images() {
    let handler =
        PreviewHandler::with_policy(RecordingTarget::new(), CompletionPolicy::LastCompletion);
    assert_eq!(handler.policy(), CompletionPolicy::LastCompletion);

    let text = MemoryFile::new("a.txt", "text/plain", b"a".to_vec());
    let image = MemoryFile::new("a.png", "image/png", b"a".to_vec());

    assert!(handler.on_change(Some(text)).is_none());
    let pending = handler.on_change(Some(image)).unwrap();
    assert_eq!(pending.generation().get(), 1);
    assert_eq!(handler.latest_generation(), Some(pending.generation()));

    let outcome = block_on(pending);
    assert_eq!(outcome.generation().get(), 1);
    assert!(handler.target().is_visible());
}

#[test]
fn test_platform_results_are_applied_verbatim() {
    let cases = [
        // Chromium returns a bare scheme for zero-length blobs
        ("image/jpeg", "data:"),
        ("image/jpeg", "data:image/jpeg;base64,"),
        ("image/svg+xml", "data:image/svg+xml;charset=utf-8;base64,PHN2Zy8+"),
        ("image/png", "data:image/png;base64,iVBORw0KGgo="),
    ];

    for (media_type, result) in cases {
        let (handler, target) = handler();
        let file = PlatformFile { media_type, result };

        let outcome = block_on(handler.on_change(Some(file)).unwrap());
        assert!(outcome.is_applied(), "{} not applied: {:?}", result, outcome);
        assert_eq!(target.source().as_deref(), Some(result));
        assert!(target.is_visible());
    }
}

#[test]
fn test_non_data_url_platform_result_is_a_read_failure() {
    let (handler, target) = handler();
    let file = PlatformFile {
        media_type: "image/png",
        result: "blob:https://kennel.example/42",
    };

    let outcome = block_on(handler.on_change(Some(file)).unwrap());
    assert!(matches!(outcome, PreviewOutcome::ReadFailed { .. }));
    assert_eq!(target.state(), PreviewState::default());
}
