//! Data URL value type.
//!
//! A data URL embeds a media type and a base64 payload inline, e.g.
//! `data:image/png;base64,iVBORw0KGgo=`. Browsers produce these from
//! `FileReader.readAsDataURL`; native code encodes them from raw bytes.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{PreviewError, Result};
use crate::media_type::data_url_media_type;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A `data:` URL usable as an image source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    url: String,
    /// Byte offset of the `,` separating header and payload, if present
    comma: Option<usize>,
}

impl DataUrl {
    /// Encode `bytes` as a base64 data URL with the given media type.
    ///
    /// An empty media type is written as `application/octet-stream`.
    /// Empty content yields the degenerate `data:<type>;base64,`.
    pub fn encode(media_type: &str, bytes: &[u8]) -> Self {
        let header = format!(
            "{SCHEME}{}{BASE64_MARKER}",
            data_url_media_type(media_type)
        );
        let comma = Some(header.len());
        let url = format!("{header},{}", STANDARD.encode(bytes));
        Self { url, comma }
    }

    /// Accept a string produced by the platform.
    ///
    /// Only the `data:` scheme is required. Browsers return a bare `data:`
    /// for zero-length files, so the header/payload separator is optional.
    pub fn parse(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if !url.starts_with(SCHEME) {
            return Err(PreviewError::invalid_data_url("missing 'data:' scheme"));
        }
        let comma = url.find(',');
        Ok(Self { url, comma })
    }

    /// The full URL string.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Consume into the URL string.
    pub fn into_string(self) -> String {
        self.url
    }

    fn header(&self) -> &str {
        let end = self.comma.unwrap_or(self.url.len());
        &self.url[SCHEME.len()..end]
    }

    /// Media type from the header, without parameters. Empty if none.
    pub fn media_type(&self) -> &str {
        self.header().split(';').next().unwrap_or_default()
    }

    /// Whether the payload is base64 encoded.
    pub fn is_base64(&self) -> bool {
        self.header().ends_with(BASE64_MARKER)
    }

    /// The encoded payload after the comma, empty without one.
    pub fn payload(&self) -> &str {
        match self.comma {
            Some(comma) => &self.url[comma + 1..],
            None => "",
        }
    }

    /// Decode the payload back into bytes.
    ///
    /// Only base64 payloads are supported; percent-encoded ones are rejected.
    #[cfg(test)]
    pub(crate) fn decode(&self) -> Result<Vec<u8>> {
        if !self.is_base64() {
            return Err(PreviewError::invalid_data_url("payload is not base64"));
        }
        STANDARD
            .decode(self.payload())
            .map_err(|e| PreviewError::invalid_data_url(e.to_string()))
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for DataUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
