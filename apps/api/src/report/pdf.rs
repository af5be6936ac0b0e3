//! PDF rendering of review reports (A4, built-in Helvetica).

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::errors::AppError;
use crate::report::ReportKind;

pub const REPORT_TITLE: &str = "Smart Resume Reviewer";

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const LEFT_MARGIN: Mm = Mm(20.0);
const TOP_MARGIN: Mm = Mm(277.0);
const BOTTOM_MARGIN: Mm = Mm(20.0);
const LINE_HEIGHT: Mm = Mm(6.0);
const BODY_FONT_SIZE: f32 = 11.0;
/// Characters per body line at 11pt Helvetica across a 170mm text column.
const WRAP_CHARS: usize = 95;
const LAYER_NAME: &str = "Layer 1";

/// Renders `body` under the report title, heading and `generated_at` date,
/// wrapping long lines and starting new pages as needed.
pub fn render_pdf(kind: ReportKind, body: &str, generated_at: &str) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);

    let font_bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::Report(format!("font: {e}")))?;
    let font_regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Report(format!("font: {e}")))?;

    let mut current_layer = doc.get_page(page).get_layer(layer);
    let mut current_y = TOP_MARGIN;

    current_layer.use_text(REPORT_TITLE, 16.0, LEFT_MARGIN, current_y, &font_bold);
    current_y -= Mm(8.0);
    current_layer.use_text(kind.heading(), 12.0, LEFT_MARGIN, current_y, &font_regular);
    current_y -= Mm(6.0);
    current_layer.use_text(
        format!("Date: {generated_at}"),
        BODY_FONT_SIZE,
        LEFT_MARGIN,
        current_y,
        &font_regular,
    );
    current_y -= Mm(12.0);

    for line in layout_lines(body, WRAP_CHARS) {
        if current_y < BOTTOM_MARGIN {
            let (next_page, next_layer) = doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, LAYER_NAME);
            current_layer = doc.get_page(next_page).get_layer(next_layer);
            current_y = TOP_MARGIN;
        }
        if !line.is_empty() {
            current_layer.use_text(
                to_latin1(&line),
                BODY_FONT_SIZE,
                LEFT_MARGIN,
                current_y,
                &font_regular,
            );
        }
        current_y -= LINE_HEIGHT;
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Report(format!("save: {e}")))
}

/// Splits `body` into printable lines: source line breaks are kept, blank
/// lines stay blank, long lines are word-wrapped at `max_chars`.
pub fn layout_lines(body: &str, max_chars: usize) -> Vec<String> {
    body.lines()
        .flat_map(|line| {
            if line.trim().is_empty() {
                vec![String::new()]
            } else {
                wrap_text(line, max_chars)
            }
        })
        .collect()
}

/// Wraps text to fit within `max_chars` characters. Words longer than a whole
/// line are split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 && current_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current_line));
            current_len = 0;
        }
        if current_len > 0 {
            current_line.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current_line.extend(word);
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Built-in PDF fonts only cover Latin-1. Typographic punctuation common in
/// LLM output is mapped to ASCII; anything else outside Latin-1 becomes `?`.
fn to_latin1(line: &str) -> String {
    line.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2022}' => '*',
            '\u{2026}' => '.',
            c if (c as u32) <= 0xFF => c,
            _ => '?',
        })
        .collect()
}
