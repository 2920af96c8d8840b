//! Application Coordinator
//!
//! Runs the paste pipeline: image and credential in, styled spans out.
//! The OCR call is made exactly once per request and its failure is
//! returned to the caller untouched.

use image::DynamicImage;
use tracing::{debug, info};

use crate::annotate::{annotate, render_plain, StyledSpan};
use crate::config::Credential;
use crate::vision::{OcrClient, OcrError};

/// Result of one OCR request
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Styled spans in reading order
    pub spans: Vec<StyledSpan>,
    /// Size of the source image (width, height)
    pub source_size: (u32, u32),
}

impl Transcript {
    /// Plain text of all spans
    pub fn plain_text(&self) -> String {
        render_plain(&self.spans)
    }
}

/// Coordinates the OCR client and the annotation engine
pub struct Transcriber<C: OcrClient> {
    client: C,
}

impl<C: OcrClient> Transcriber<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Recognize the text in `image` and annotate it
    pub fn transcribe(
        &self,
        image: &DynamicImage,
        credential: Option<&Credential>,
    ) -> Result<Transcript, OcrError> {
        let credential = credential.ok_or(OcrError::MissingCredential)?;
        let source_size = (image.width(), image.height());
        debug!("Transcribing {}x{} image", source_size.0, source_size.1);

        let words = self.client.detect_words(image, credential)?;
        let spans = annotate(&words);
        info!("Annotated {} words", spans.len());

        Ok(Transcript { spans, source_size })
    }
}
