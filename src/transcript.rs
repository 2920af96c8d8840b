//! Styled transcript buffer
//!
//! Holds the editable text shown to the user together with the confidence
//! tag of every inserted span. Tags are byte ranges into `text` and follow
//! the text through user edits.

use std::ops::Range;

use crate::annotate::{ConfidenceClass, StyledSpan};

/// A confidence tag applied over a byte range of the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRange {
    pub range: Range<usize>,
    pub class: ConfidenceClass,
}

/// Editable text with confidence tags
#[derive(Debug, Clone, Default)]
pub struct TranscriptBuffer {
    text: String,
    tags: Vec<TaggedRange>,
}

impl TranscriptBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[TaggedRange] {
        &self.tags
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.tags.clear();
    }

    /// Append a span and tag exactly the inserted range
    pub fn insert_span(&mut self, span: &StyledSpan) {
        let start = self.text.len();
        self.text.push_str(&span.rendered_text);
        let end = self.text.len();
        if end > start {
            self.tags.push(TaggedRange {
                range: start..end,
                class: span.class,
            });
        }
    }

    /// Replace the whole buffer with a new OCR result
    pub fn load(&mut self, spans: &[StyledSpan]) {
        self.clear();
        for span in spans {
            self.insert_span(span);
        }
    }

    /// Content to put on the clipboard
    pub fn copy_text(&self) -> &str {
        self.text.trim()
    }

    /// Adopt text edited by the user and move tags to match.
    ///
    /// The edit is located as the region between the longest common prefix
    /// and suffix of old and new text. Text outside that region keeps its
    /// tags, removed text loses them, and text inserted strictly inside a
    /// tagged range takes that range's tag.
    pub fn sync_text(&mut self, edited: &str) {
        if edited == self.text {
            return;
        }

        let prefix = common_prefix_len(&self.text, edited);
        let suffix = common_suffix_len(&self.text[prefix..], &edited[prefix..]);
        let old_end = self.text.len() - suffix;
        let new_end = edited.len() - suffix;

        let shift = |pos: usize| pos - old_end + new_end;

        self.tags = self
            .tags
            .drain(..)
            .filter_map(|tag| {
                let Range { start, end } = tag.range;
                let range = if end <= prefix {
                    start..end
                } else if start >= old_end {
                    shift(start)..shift(end)
                } else {
                    let new_start = if start < prefix { start } else { new_end };
                    let new_end_pos = if end > old_end { shift(end) } else { prefix };
                    new_start..new_end_pos
                };
                (range.start < range.end).then_some(TaggedRange {
                    range,
                    class: tag.class,
                })
            })
            .collect();

        self.text.clear();
        self.text.push_str(edited);
    }
}

/// Common prefix length in bytes, on a char boundary of both strings
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}

/// Common suffix length in bytes, on a char boundary of both strings
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(ca, cb)| ca == cb)
        .map(|(c, _)| c.len_utf8())
        .sum()
}

#[cfg(test)]
impl TranscriptBuffer {
    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Tag covering the given byte offset, if any
    fn class_at(&self, offset: usize) -> Option<ConfidenceClass> {
        self.tags
            .iter()
            .find(|t| t.range.contains(&offset))
            .map(|t| t.class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{annotate, WordRecord};

    fn sample_buffer() -> TranscriptBuffer {
        let words = vec![
            WordRecord::new("Hello", 0.99),
            WordRecord::new("big", 0.90),
            WordRecord::new("world", 0.50),
        ];
        let mut buffer = TranscriptBuffer::default();
        buffer.load(&annotate(&words));
        buffer
    }

    fn ranges(buffer: &TranscriptBuffer) -> Vec<(Range<usize>, ConfidenceClass)> {
        buffer
            .tags()
            .iter()
            .map(|t| (t.range.clone(), t.class))
            .collect()
    }

    #[test]
    fn test_load_tags_each_span() {
        let buffer = sample_buffer();
        assert_eq!(buffer.text(), "Hello big world");
        assert_eq!(
            ranges(&buffer),
            vec![
                (0..5, ConfidenceClass::High),
                (5..9, ConfidenceClass::Medium),
                (9..15, ConfidenceClass::Low),
            ]
        );
        assert_eq!(buffer.class_at(6), Some(ConfidenceClass::Medium));
    }

    #[test]
    fn test_load_replaces_previous_content() {
        let mut buffer = sample_buffer();
        buffer.load(&annotate(&[WordRecord::new("Next", 0.97)]));
        assert_eq!(buffer.text(), "Next");
        assert_eq!(ranges(&buffer), vec![(0..4, ConfidenceClass::High)]);
    }

    #[test]
    fn test_empty_span_adds_no_tag() {
        let mut buffer = TranscriptBuffer::default();
        buffer.insert_span(&StyledSpan {
            rendered_text: String::new(),
            class: ConfidenceClass::Low,
        });
        assert!(buffer.is_empty());
        assert!(buffer.tags().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut buffer = sample_buffer();
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.tags().is_empty());
    }

    #[test]
    fn test_sync_unchanged_is_noop() {
        let mut buffer = sample_buffer();
        let before = ranges(&buffer);
        buffer.sync_text("Hello big world");
        assert_eq!(ranges(&buffer), before);
    }

    #[test]
    fn test_sync_insert_before_shifts_tags() {
        let mut buffer = sample_buffer();
        buffer.sync_text(">> Hello big world");
        assert_eq!(buffer.text(), ">> Hello big world");
        assert_eq!(
            ranges(&buffer),
            vec![
                (3..8, ConfidenceClass::High),
                (8..12, ConfidenceClass::Medium),
                (12..18, ConfidenceClass::Low),
            ]
        );
    }

    #[test]
    fn test_sync_insert_inside_word_inherits_tag() {
        let mut buffer = sample_buffer();
        // "world" -> "wo-rld"
        buffer.sync_text("Hello big wo-rld");
        assert_eq!(buffer.class_at(12), Some(ConfidenceClass::Low));
        assert_eq!(ranges(&buffer)[2], (9..16, ConfidenceClass::Low));
    }

    #[test]
    fn test_sync_append_at_end_is_untagged() {
        let mut buffer = sample_buffer();
        buffer.sync_text("Hello big world!");
        assert_eq!(ranges(&buffer)[2], (9..15, ConfidenceClass::Low));
        assert_eq!(buffer.class_at(15), None);
    }

    #[test]
    fn test_sync_delete_word_drops_tag() {
        let mut buffer = sample_buffer();
        // Removes "big " after the first space
        buffer.sync_text("Hello world");
        assert_eq!(
            ranges(&buffer),
            vec![
                (0..5, ConfidenceClass::High),
                (5..6, ConfidenceClass::Medium),
                (6..11, ConfidenceClass::Low),
            ]
        );
    }

    #[test]
    fn test_sync_replace_across_tags() {
        let mut buffer = sample_buffer();
        // Replaces "lo big wo" with "p "
        buffer.sync_text("Help rld");
        assert_eq!(buffer.text(), "Help rld");
        assert_eq!(
            ranges(&buffer),
            vec![(0..3, ConfidenceClass::High), (5..8, ConfidenceClass::Low)]
        );
        assert_eq!(buffer.class_at(3), None);
    }

    #[test]
    fn test_sync_handles_multibyte_text() {
        let mut buffer = TranscriptBuffer::default();
        buffer.load(&annotate(&[
            WordRecord::new("café", 0.99),
            WordRecord::new("über", 0.5),
        ]));
        buffer.sync_text("cafés über");
        assert_eq!(buffer.text(), "cafés über");
        for tag in buffer.tags() {
            assert!(buffer.text().is_char_boundary(tag.range.start));
            assert!(buffer.text().is_char_boundary(tag.range.end));
        }
        assert_eq!(buffer.class_at(buffer.text().len() - 1), Some(ConfidenceClass::Low));
    }

    #[test]
    fn test_sync_clear_all() {
        let mut buffer = sample_buffer();
        buffer.sync_text("");
        assert!(buffer.tags().is_empty());
    }

    #[test]
    fn test_copy_text_is_trimmed() {
        let mut buffer = sample_buffer();
        buffer.sync_text("  Hello big world\n");
        assert_eq!(buffer.copy_text(), "Hello big world");
    }

    #[test]
    fn test_common_prefix_and_suffix() {
        assert_eq!(common_prefix_len("abc", "abd"), 2);
        assert_eq!(common_prefix_len("ab", "abc"), 2);
        assert_eq!(common_prefix_len("é", "è"), 0);
        assert_eq!(common_suffix_len("xyz", "ayz"), 2);
        assert_eq!(common_suffix_len("aé", "bé"), 2);
    }
}
