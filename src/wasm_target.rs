//! Preview target backed by a DOM element.

use preview_core::{DataUrl, PreviewConfig, PreviewError, PreviewTarget, Result};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// The page's preview `<img>`, looked up once by id.
pub struct ElementTarget {
    element: Element,
    visible_display: String,
}

impl ElementTarget {
    /// Look up the element named by `config.target_id`.
    pub fn from_config(config: &PreviewConfig) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PreviewError::Js("no document available".to_string()))?;
        let element = document
            .get_element_by_id(&config.target_id)
            .ok_or_else(|| PreviewError::element_not_found(&config.target_id))?;

        Ok(Self {
            element,
            visible_display: config.visible_display.clone(),
        })
    }
}

impl PreviewTarget for ElementTarget {
    fn set_source(&self, url: &DataUrl) {
        if let Err(e) = self.element.set_attribute("src", url.as_str()) {
            log::warn!("Failed to set preview source on #{}: {:?}", self.element.id(), e);
        }
    }

    fn show(&self) {
        let Some(element) = self.element.dyn_ref::<HtmlElement>() else {
            log::warn!("#{} is not an HTML element, cannot show it", self.element.id());
            return;
        };
        if let Err(e) = element.style().set_property("display", &self.visible_display) {
            log::warn!("Failed to show #{}: {:?}", self.element.id(), e);
        }
    }
}
