//! Transcript view - the editable, confidence-coloured text area

use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, TextStyle};

use crate::dashboard::theme::{confidence_color, ThemeColors};
use crate::transcript::{TaggedRange, TranscriptBuffer};

/// Build a layout job colouring each tagged range.
///
/// Tags that no longer fit `text` (stale for the frame in which an edit
/// happens) are skipped and their text drawn in the default colour.
pub fn transcript_layout_job(
    text: &str,
    tags: &[TaggedRange],
    font_id: FontId,
    default_color: Color32,
) -> LayoutJob {
    let mut job = LayoutJob::default();
    let mut cursor = 0;

    let mut sorted: Vec<&TaggedRange> = tags.iter().collect();
    sorted.sort_by_key(|t| t.range.start);

    for tag in sorted {
        let (start, end) = (tag.range.start, tag.range.end);
        let valid = start >= cursor
            && start < end
            && end <= text.len()
            && text.is_char_boundary(start)
            && text.is_char_boundary(end);
        if !valid {
            continue;
        }

        if start > cursor {
            job.append(
                &text[cursor..start],
                0.0,
                TextFormat::simple(font_id.clone(), default_color),
            );
        }
        job.append(
            &text[start..end],
            0.0,
            TextFormat::simple(font_id.clone(), confidence_color(tag.class)),
        );
        cursor = end;
    }

    if cursor < text.len() {
        job.append(
            &text[cursor..],
            0.0,
            TextFormat::simple(font_id, default_color),
        );
    }

    job
}

/// Render the transcript editor.
///
/// `editor` is the text being edited; after an edit it is synced back into
/// `buffer`. Returns whether the editor has keyboard focus.
pub fn render_transcript_view(
    ui: &mut egui::Ui,
    editor: &mut String,
    buffer: &mut TranscriptBuffer,
) -> bool {
    let font_id = TextStyle::Monospace.resolve(ui.style());

    let response = {
        let tags = buffer.tags();
        let mut layouter = |ui: &egui::Ui, text: &str, wrap_width: f32| {
            let mut job =
                transcript_layout_job(text, tags, font_id.clone(), ThemeColors::TEXT_EDITOR);
            job.wrap.max_width = wrap_width;
            ui.fonts(|f| f.layout_job(job))
        };

        egui::ScrollArea::vertical()
            .max_height((ui.available_height() - 48.0).max(120.0))
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(editor)
                        .desired_width(f32::INFINITY)
                        .desired_rows(20)
                        .layouter(&mut layouter),
                )
            })
            .inner
    };

    if response.changed() {
        buffer.sync_text(editor);
    }

    response.has_focus()
}
