//! Greedy word wrapping with character-level breaking of long words.

use tablegen_types::FontSpec;

use crate::measure::TextMeasurer;

// -------------------------------------------------------------------
// Wrapping
// -------------------------------------------------------------------

/// Wrap `text` so every line fits in `max_width` where possible.
///
/// - Empty text yields a single empty line.
/// - A non-positive `max_width` disables wrapping.
/// - `\n` and `\r` are independent paragraph delimiters, so `\r\n`
///   produces an empty line between the two paragraphs.
/// - A word wider than `max_width` is broken into the widest fitting
///   prefixes; a character that does not fit on its own is still
///   emitted on its own line.
///
/// The result is never empty.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    if max_width <= 0.0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for paragraph in text.split(['\n', '\r']) {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, max_width, font, measurer, &mut lines);
    }
    lines
}

/// Wrap a single paragraph (no line breaks) into `out`.
fn wrap_paragraph(
    paragraph: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
    out: &mut Vec<String>,
) {
    let mut words = paragraph.split(' ').filter(|w| !w.is_empty()).peekable();
    if words.peek().is_none() {
        out.push(String::new());
        return;
    }

    let mut current = String::new();
    for word in words {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measurer.measure_width(&candidate, font) <= max_width {
            current = candidate;
            continue;
        }

        if current.is_empty() {
            current = break_into(word, max_width, font, measurer, out);
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
        }

        // The carried-over word may itself be too wide.
        if current.chars().count() > 1 && measurer.measure_width(&current, font) > max_width {
            current = break_into(&current, max_width, font, measurer, out);
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
}

/// Break `word` into fitting pieces. All but the last piece are pushed
/// to `out`; the last is returned as the new current line.
fn break_into(
    word: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
    out: &mut Vec<String>,
) -> String {
    let mut pieces = break_long_word(word, max_width, font, measurer);
    let last = pieces.pop().unwrap_or_default();
    out.extend(pieces);
    last
}

/// Split a single word into the widest prefixes that fit.
///
/// Concatenating the result reproduces `word` exactly.
pub fn break_long_word(
    word: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in word.chars() {
        current.push(ch);
        if measurer.measure_width(&current, font) <= max_width {
            continue;
        }
        current.pop();
        if current.is_empty() {
            // Even a lone character overflows; emit it anyway.
            pieces.push(ch.to_string());
        } else {
            pieces.push(std::mem::replace(&mut current, ch.to_string()));
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    if pieces.is_empty() {
        pieces.push(word.to_string());
    }
    pieces
}

// -------------------------------------------------------------------
// Measurement
// -------------------------------------------------------------------

/// Height of `text` once wrapped at `max_width`: one line height per
/// wrapped line.
pub fn wrapped_height(
    text: &str,
    max_width: f32,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> f32 {
    let lines = wrap_text(text, max_width, font, measurer);
    measurer.line_height(font) * lines.len() as f32
}

// -------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------
