//! Google Cloud Vision backend
//!
//! Calls the `images:annotate` REST endpoint with full-document text
//! detection. The HTTP client is async; the call is driven to completion on
//! the calling thread with a private tokio runtime.

use base64::{engine::general_purpose, Engine as _};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::time::Instant;
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use super::response::{AnnotateRequestBody, AnnotateResponseBody, ErrorBody};
use super::{collect_words, OcrClient, OcrError, VisionConfig};
use crate::annotate::WordRecord;
use crate::config::Credential;

/// Header carrying the API key, keeps the secret out of request URLs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Cloud Vision REST client
pub struct GoogleVisionClient {
    runtime: Runtime,
    client: reqwest::Client,
    config: VisionConfig,
}

impl GoogleVisionClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, OcrError> {
        Self::with_config(VisionConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: VisionConfig) -> Result<Self, OcrError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(OcrError::Runtime)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            runtime,
            client,
            config,
        })
    }

    fn annotate_url(&self) -> String {
        format!(
            "{}/v1/images:annotate",
            self.config.endpoint.trim_end_matches('/')
        )
    }

    async fn annotate_async(
        &self,
        png: &[u8],
        credential: &Credential,
    ) -> Result<AnnotateResponseBody, OcrError> {
        let body = AnnotateRequestBody::document_text(general_purpose::STANDARD.encode(png));

        let response = self
            .client
            .post(self.annotate_url())
            .header(API_KEY_HEADER, credential.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or_else(|_| text.trim().to_string());
            return Err(OcrError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl OcrClient for GoogleVisionClient {
    fn detect_words(
        &self,
        image: &DynamicImage,
        credential: &Credential,
    ) -> Result<Vec<WordRecord>, OcrError> {
        let start = Instant::now();
        let png = encode_png(image)?;
        debug!(
            "Encoded {}x{} image as {} bytes of PNG",
            image.width(),
            image.height(),
            png.len()
        );

        let body = self
            .runtime
            .block_on(self.annotate_async(&png, credential))?;

        let Some(first) = body.responses.into_iter().next() else {
            warn!("OCR service returned no responses");
            return Ok(vec![]);
        };

        if let Some(error) = first.error {
            return Err(OcrError::Service {
                code: error.code,
                message: error.message,
            });
        }

        let words = first
            .full_text_annotation
            .map(|annotation| collect_words(&annotation))
            .unwrap_or_default();

        info!(
            "OCR complete in {:?}: {} words",
            start.elapsed(),
            words.len()
        );
        Ok(words)
    }
}

/// Encode an image as PNG (lossless)
pub fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, OcrError> {
    let mut bytes = Vec::new();
    let mut cursor = Cursor::new(&mut bytes);

    match image {
        // The PNG encoder has no float formats
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba8(image.to_rgba8()).write_to(&mut cursor, ImageFormat::Png)?
        }
        _ => image.write_to(&mut cursor, ImageFormat::Png)?,
    }

    Ok(bytes)
}
