//! Annotation Engine
//!
//! Turns the word list returned by the OCR adapter into an ordered sequence of
//! styled spans: each word is classified by confidence and given the leading
//! space it needs so that the spans, concatenated, read as running text.

/// Lowest confidence that still counts as [`ConfidenceClass::High`]
pub const HIGH_THRESHOLD: f32 = 0.95;
/// Lowest confidence that still counts as [`ConfidenceClass::Medium`]
pub const MEDIUM_THRESHOLD: f32 = 0.85;

/// A single recognized word in reading order
#[derive(Debug, Clone, PartialEq)]
pub struct WordRecord {
    /// Word text (symbols joined)
    pub text: String,
    /// Recognition confidence (0.0 - 1.0)
    pub confidence: f32,
}

impl WordRecord {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// Confidence tier of a recognized word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceClass {
    High,
    Medium,
    Low,
}

impl ConfidenceClass {
    /// All tiers, highest first
    pub const ALL: [ConfidenceClass; 3] = [
        ConfidenceClass::High,
        ConfidenceClass::Medium,
        ConfidenceClass::Low,
    ];

    /// Short tag name used for styling
    pub fn tag(&self) -> &'static str {
        match self {
            ConfidenceClass::High => "high",
            ConfidenceClass::Medium => "medium",
            ConfidenceClass::Low => "low",
        }
    }

    /// Legend label shown in the confidence key
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceClass::High => "High (≥95%)",
            ConfidenceClass::Medium => "Medium (85-94%)",
            ConfidenceClass::Low => "Low (<85%)",
        }
    }
}

/// A piece of renderable text carrying its confidence tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    /// Word text, optionally prefixed with a single space
    pub rendered_text: String,
    /// Confidence tier of the word
    pub class: ConfidenceClass,
}

/// Classify a confidence value. Thresholds are inclusive lower bounds.
///
/// Anything that is not `>= MEDIUM_THRESHOLD` is Low, which includes
/// negative values and NaN.
pub fn classify(confidence: f32) -> ConfidenceClass {
    if confidence >= HIGH_THRESHOLD {
        ConfidenceClass::High
    } else if confidence >= MEDIUM_THRESHOLD {
        ConfidenceClass::Medium
    } else {
        ConfidenceClass::Low
    }
}

/// True if every character of the text is ASCII punctuation.
///
/// Vacuously true for the empty string, so an empty word never adds a space.
pub fn is_punctuation_only(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_punctuation())
}

/// Convert OCR words into styled spans.
///
/// The first word never gets a leading space; punctuation-only words attach
/// to the previous span; every other word gets exactly one leading space.
pub fn annotate(words: &[WordRecord]) -> Vec<StyledSpan> {
    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let attach = index == 0 || is_punctuation_only(&word.text);
            let rendered_text = if attach {
                word.text.clone()
            } else {
                format!(" {}", word.text)
            };

            StyledSpan {
                rendered_text,
                class: classify(word.confidence),
            }
        })
        .collect()
}

/// Concatenate the rendered text of all spans
pub fn render_plain(spans: &[StyledSpan]) -> String {
    spans.iter().map(|s| s.rendered_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[(&str, f32)]) -> Vec<WordRecord> {
        items
            .iter()
            .map(|(text, conf)| WordRecord::new(*text, *conf))
            .collect()
    }

    #[test]
    fn test_classify_tiers() {
        assert_eq!(classify(1.0), ConfidenceClass::High);
        assert_eq!(classify(0.97), ConfidenceClass::High);
        assert_eq!(classify(0.94), ConfidenceClass::Medium);
        assert_eq!(classify(0.86), ConfidenceClass::Medium);
        assert_eq!(classify(0.84), ConfidenceClass::Low);
        assert_eq!(classify(0.0), ConfidenceClass::Low);
    }

    #[test]
    fn test_classify_boundaries_go_to_higher_tier() {
        assert_eq!(classify(0.95), ConfidenceClass::High);
        assert_eq!(classify(0.85), ConfidenceClass::Medium);
        assert_eq!(classify(f32::from_bits(0.95f32.to_bits() - 1)), ConfidenceClass::Medium);
        assert_eq!(classify(f32::from_bits(0.85f32.to_bits() - 1)), ConfidenceClass::Low);
    }

    #[test]
    fn test_classify_out_of_range() {
        assert_eq!(classify(-0.5), ConfidenceClass::Low);
        assert_eq!(classify(f32::NAN), ConfidenceClass::Low);
        assert_eq!(classify(1.7), ConfidenceClass::High);
    }

    #[test]
    fn test_punctuation_detection() {
        assert!(is_punctuation_only(","));
        assert!(is_punctuation_only("..."));
        assert!(is_punctuation_only("!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~"));
        assert!(is_punctuation_only(""));
        assert!(!is_punctuation_only("a,"));
        assert!(!is_punctuation_only(" "));
        // Non-ASCII punctuation is treated as a word
        assert!(!is_punctuation_only("«"));
        assert!(!is_punctuation_only("…"));
    }

    #[test]
    fn test_annotate_empty() {
        assert!(annotate(&[]).is_empty());
    }

    #[test]
    fn test_annotate_single_word() {
        let spans = annotate(&words(&[("Hello", 0.99)]));
        assert_eq!(
            spans,
            vec![StyledSpan {
                rendered_text: "Hello".to_string(),
                class: ConfidenceClass::High,
            }]
        );
    }

    #[test]
    fn test_annotate_two_words() {
        let spans = annotate(&words(&[("Hello", 0.99), ("world", 0.90)]));
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].rendered_text, "Hello");
        assert_eq!(spans[0].class, ConfidenceClass::High);
        assert_eq!(spans[1].rendered_text, " world");
        assert_eq!(spans[1].class, ConfidenceClass::Medium);
        assert_eq!(render_plain(&spans), "Hello world");
    }

    #[test]
    fn test_annotate_punctuation_attaches() {
        let spans = annotate(&words(&[("Hi", 0.99), (",", 0.80), ("there", 0.60)]));
        let texts: Vec<_> = spans.iter().map(|s| s.rendered_text.as_str()).collect();
        assert_eq!(texts, vec!["Hi", ",", " there"]);
        assert_eq!(spans[1].class, ConfidenceClass::Low);
        assert_eq!(spans[2].class, ConfidenceClass::Low);
        assert_eq!(render_plain(&spans), "Hi, there");
    }

    #[test]
    fn test_annotate_leading_punctuation_has_no_space() {
        let spans = annotate(&words(&[("(", 0.99), ("see", 0.99), (")", 0.99), (".", 0.99)]));
        assert_eq!(render_plain(&spans), "( see).");
    }

    #[test]
    fn test_annotate_first_word_never_spaced() {
        let spans = annotate(&words(&[("\"", 0.99)]));
        assert_eq!(spans[0].rendered_text, "\"");
        let spans = annotate(&words(&[("word", 0.5)]));
        assert_eq!(spans[0].rendered_text, "word");
    }

    #[test]
    fn test_annotate_mixed_token_gets_space() {
        let spans = annotate(&words(&[("Price", 0.99), ("$5", 0.99), ("--", 0.99)]));
        assert_eq!(render_plain(&spans), "Price $5--");
    }

    #[test]
    fn test_annotate_empty_text_adds_no_space() {
        let spans = annotate(&words(&[("a", 0.99), ("", 0.99), ("b", 0.99)]));
        assert_eq!(spans[1].rendered_text, "");
        assert_eq!(spans[1].class, ConfidenceClass::High);
        assert_eq!(render_plain(&spans), "a b");

        let spans = annotate(&words(&[("", 0.3)]));
        assert_eq!(spans[0].rendered_text, "");
        assert_eq!(spans[0].class, ConfidenceClass::Low);
    }

    #[test]
    fn test_annotate_is_pure() {
        let input = words(&[("One", 0.99), ("two", 0.88), ("!", 0.7), ("three", 0.95)]);
        let snapshot = input.clone();
        let first = annotate(&input);
        let second = annotate(&input);
        assert_eq!(first, second);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_render_matches_space_join_for_words_and_punctuation() {
        let input = words(&[
            ("The", 0.99),
            ("quick", 0.91),
            ("fox", 0.42),
            (",", 0.99),
            ("jumps", 0.99),
            ("?!", 0.99),
            ("over", 0.86),
            (".", 0.99),
        ]);

        let mut expected = String::new();
        for (i, w) in input.iter().enumerate() {
            if i > 0 && !w.text.chars().all(|c| c.is_ascii_punctuation()) {
                expected.push(' ');
            }
            expected.push_str(&w.text);
        }

        let rendered = render_plain(&annotate(&input));
        assert_eq!(rendered, expected);
        assert_eq!(rendered, "The quick fox, jumps?! over.");
        assert!(!rendered.starts_with(' '));
        assert!(!rendered.contains("  "));
    }

    #[test]
    fn test_class_tags_and_labels() {
        let tags: Vec<_> = ConfidenceClass::ALL.iter().map(|c| c.tag()).collect();
        assert_eq!(tags, vec!["high", "medium", "low"]);
        assert!(ConfidenceClass::Medium.label().contains("85-94%"));
    }
}
