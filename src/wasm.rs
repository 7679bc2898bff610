//! JavaScript entry points.
//!
//! Two ways to use the preview from a page:
//!
//! ```js
//! // drop-in for an inline `onchange="previewImage(event)"`
//! previewImage(event);
//!
//! // or explicit, with a config
//! const preview = new ImagePreview('{"target_id": "dog-photo"}');
//! preview.attach("id_photo");
//! ```

use std::cell::RefCell;

use preview_core::{LogLevel, PreviewConfig, PreviewError, PreviewHandler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::logging::init_logging;
use crate::wasm_file::{first_selected_file, js_error};
use crate::wasm_target::ElementTarget;

thread_local! {
    /// Handler behind `previewImage`, created on first use with the default config
    static DEFAULT_PREVIEW: RefCell<Option<PreviewHandler<ElementTarget>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging(LogLevel::default());
    log::debug!("kennel_preview loaded");
}

fn to_js(error: PreviewError) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// Start a preview for the input that fired `event` and schedule its completion.
fn dispatch(handler: &PreviewHandler<ElementTarget>, event: &Event) {
    let file = match first_selected_file(event) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("Change event ignored: {}", e);
            return;
        }
    };

    if let Some(pending) = handler.on_change(file) {
        wasm_bindgen_futures::spawn_local(async move {
            pending.await;
        });
    }
}

/// Change handler using the default config (`#image-preview`).
#[wasm_bindgen(js_name = previewImage)]
pub fn preview_image(event: &Event) {
    let handler = DEFAULT_PREVIEW.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            match ElementTarget::from_config(&PreviewConfig::default()) {
                Ok(target) => *slot = Some(PreviewHandler::new(target)),
                Err(e) => log::error!("Image preview unavailable: {}", e),
            }
        }
        slot.clone()
    });

    if let Some(handler) = handler {
        dispatch(&handler, event);
    }
}

/// A change listener registered by [`ImagePreview::attach`].
struct Listener {
    input: HtmlInputElement,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .input
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

/// Image preview bound to one preview element.
#[wasm_bindgen]
pub struct ImagePreview {
    handler: PreviewHandler<ElementTarget>,
    listeners: RefCell<Vec<Listener>>,
}

#[wasm_bindgen]
impl ImagePreview {
    /// Create a preview from an optional JSON config.
    ///
    /// Throws if the config is invalid or the target element does not exist.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ImagePreview, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => PreviewConfig::from_json(json).map_err(to_js)?,
            None => PreviewConfig::default(),
        };
        init_logging(config.log_level);

        let target = ElementTarget::from_config(&config).map_err(to_js)?;
        log::debug!("Image preview bound to #{}", config.target_id);

        Ok(Self {
            handler: PreviewHandler::with_policy(target, config.completion),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Handle a `change` event from a file input.
    #[wasm_bindgen(js_name = handleChange)]
    pub fn handle_change(&self, event: &Event) {
        dispatch(&self.handler, event);
    }

    /// Listen for `change` events on the file input with id `input_id`.
    ///
    /// Listeners are removed when the preview is freed.
    pub fn attach(&self, input_id: &str) -> Result<(), JsValue> {
        let input = find_file_input(input_id).map_err(to_js)?;

        let handler = self.handler.clone();
        let callback = Closure::wrap(Box::new(move |event: Event| {
            dispatch(&handler, &event);
        }) as Box<dyn FnMut(Event)>);

        input
            .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
            .map_err(|e| to_js(js_error(&e)))?;

        self.listeners.borrow_mut().push(Listener { input, callback });
        log::debug!("Listening for file changes on #{}", input_id);
        Ok(())
    }
}

fn find_file_input(input_id: &str) -> preview_core::Result<HtmlInputElement> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| PreviewError::Js("no document available".to_string()))?;
    let input: HtmlInputElement = document
        .get_element_by_id(input_id)
        .ok_or_else(|| PreviewError::element_not_found(input_id))?
        .dyn_into()
        .map_err(|_| PreviewError::NotAFileInput(format!("#{} is not an <input>", input_id)))?;

    if input.type_() != "file" {
        return Err(PreviewError::NotAFileInput(format!(
            "#{} has type '{}'",
            input_id,
            input.type_()
        )));
    }
    Ok(input)
}
