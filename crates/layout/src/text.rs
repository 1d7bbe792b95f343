//! Text measurement with the metrics of the standard Helvetica faces.
//!
//! Section boxes have fixed sizes, so text is never reflowed into more space:
//! it is ellipsized to its box or wrapped and cut to the lines that fit.

use danfe_types::FontWeight;

pub const ELLIPSIS: &str = "...";

/// Advance widths of ASCII 32..=126 in 1/1000 em, Helvetica.
const REGULAR_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Advance widths of ASCII 32..=126 in 1/1000 em, Helvetica-Bold.
const BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for characters outside printable ASCII (accented capitals
/// are close to it).
const FALLBACK_WIDTH: u16 = 667;

fn char_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &REGULAR_WIDTHS,
        FontWeight::Bold => &BOLD_WIDTHS,
    };
    match u32::from(c) {
        code @ 32..=126 => table[(code - 32) as usize],
        _ if c.is_whitespace() => table[0],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in points at `size`.
pub fn measure(text: &str, size: f32, weight: FontWeight) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, weight))).sum();
    units as f32 * size / 1000.0
}

/// `text` unchanged if it fits in `max_width`, otherwise the longest prefix
/// that fits together with a trailing `...`. Empty when not even the
/// ellipsis fits.
pub fn fit_text(text: &str, max_width: f32, size: f32, weight: FontWeight) -> String {
    if measure(text, size, weight) <= max_width {
        return text.to_string();
    }
    let budget = max_width - measure(ELLIPSIS, size, weight);
    if budget < 0.0 {
        return String::new();
    }
    let mut used = 0.0;
    let mut cut = 0;
    for (idx, c) in text.char_indices() {
        let w = f32::from(char_width(c, weight)) * size / 1000.0;
        if used + w > budget {
            break;
        }
        used += w;
        cut = idx + c.len_utf8();
    }
    format!("{}{ELLIPSIS}", text[..cut].trim_end())
}

/// Greedy word wrap into at most `max_lines` lines.
///
/// Explicit newlines start a new line. Words wider than a line are
/// ellipsized. When the text needs more lines, the last kept line ends with
/// `...`.
pub fn wrap_text(
    text: &str,
    max_width: f32,
    size: f32,
    weight: FontWeight,
    max_lines: usize,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if measure(&candidate, size, weight) <= max_width {
                current = candidate;
                continue;
            }
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = fit_text(word, max_width, size, weight);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let marked = format!("{last}{ELLIPSIS}");
            *last = fit_text(&marked, max_width, size, weight);
            if !last.ends_with(ELLIPSIS) {
                last.push_str(ELLIPSIS);
            }
        }
    }
    lines
}
