use base64::engine::general_purpose;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Outcome of one conversion: either a viewable image reference plus its
/// file, or an empty reference with a human-readable message. Never both.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<ImageFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    #[serde(with = "crate::util::serialize::base64")]
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn png(file_name: String, bytes: Vec<u8>) -> ImageFile {
        ImageFile {
            file_name,
            mime_type: mime::IMAGE_PNG.to_string(),
            bytes,
        }
    }

    /// Short-lived viewable reference to the image bytes, for immediate
    /// display without touching storage.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, general_purpose::STANDARD.encode(&self.bytes))
    }
}

impl ConversionResult {
    pub fn ready(file: ImageFile) -> ConversionResult {
        ConversionResult {
            image_url: file.data_url(),
            file: Some(file),
            error: None,
        }
    }

    /// Encoder produced no data: non-fatal, but there is nothing to show.
    pub fn empty(message: &str) -> ConversionResult {
        ConversionResult {
            image_url: String::new(),
            file: None,
            error: Some(message.to_string()),
        }
    }

    pub fn failed(message: String) -> ConversionResult {
        ConversionResult {
            image_url: String::new(),
            file: None,
            error: Some(message),
        }
    }
}
