//! Vision/OCR Layer
//!
//! Sends a pasted image to the remote OCR service and normalizes the answer
//! into a flat list of [`WordRecord`]s in reading order.

pub mod google;
pub mod response;

use image::DynamicImage;
use std::time::Duration;
use thiserror::Error;

use crate::annotate::WordRecord;
use crate::config::Credential;

pub use google::GoogleVisionClient;
pub use response::collect_words;

/// Default base URL of the Cloud Vision REST API
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";

/// Errors raised while talking to the OCR service
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("No API key configured")]
    MissingCredential,
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("Failed to start HTTP runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("OCR service returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("OCR service error {code}: {message}")]
    Service { code: i32, message: String },
    #[error("Unexpected OCR response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Something that can turn an image into recognized words
pub trait OcrClient {
    /// Run document text detection on `image` (single attempt, blocking)
    fn detect_words(
        &self,
        image: &DynamicImage,
        credential: &Credential,
    ) -> Result<Vec<WordRecord>, OcrError>;
}

/// Configuration for the OCR client
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Base URL of the service
    pub endpoint: String,
    /// Upper bound for a single request
    pub timeout: Duration,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
