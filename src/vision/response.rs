//! Cloud Vision `images:annotate` wire types
//!
//! Only the parts of the document text annotation needed to rebuild words
//! are modelled. Absent collections deserialize as empty.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::annotate::WordRecord;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateRequestBody {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageRequest {
    pub image: ImageContent,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct ImageContent {
    /// Base64-encoded image bytes
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl AnnotateRequestBody {
    /// Full-document text detection for one image
    pub fn document_text(content: String) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: ImageContent { content },
                features: vec![Feature {
                    kind: "DOCUMENT_TEXT_DETECTION",
                }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnnotateResponseBody {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub full_text_annotation: Option<TextAnnotation>,
    #[serde(default)]
    pub error: Option<Status>,
}

/// Error envelope used both per-image and at HTTP level
#[derive(Debug, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// HTTP error body: `{"error": {...}}`
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Status,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextAnnotation {
    #[serde(default)]
    pub pages: Vec<Page>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub words: Vec<Word>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Word {
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    /// proto3 omits zero, so a missing value means 0.0
    #[serde(default)]
    pub confidence: f32,
}

#[derive(Debug, Default, Deserialize)]
pub struct Symbol {
    #[serde(default)]
    pub text: String,
}

/// Flatten pages → blocks → paragraphs → words into word records.
///
/// Order is the service's own traversal order. Words whose symbols join to an
/// empty string are dropped and confidences are clamped into `[0, 1]`.
pub fn collect_words(annotation: &TextAnnotation) -> Vec<WordRecord> {
    let mut words = Vec::new();
    let mut dropped = 0usize;

    let all_words = annotation
        .pages
        .iter()
        .flat_map(|page| &page.blocks)
        .flat_map(|block| &block.paragraphs)
        .flat_map(|paragraph| &paragraph.words);

    for word in all_words {
        let text: String = word.symbols.iter().map(|s| s.text.as_str()).collect();
        if text.is_empty() {
            dropped += 1;
            continue;
        }
        words.push(WordRecord::new(text, clamp_confidence(word.confidence)));
    }

    if dropped > 0 {
        debug!("Dropped {} empty words from OCR response", dropped);
    }

    words
}

fn clamp_confidence(confidence: f32) -> f32 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}
