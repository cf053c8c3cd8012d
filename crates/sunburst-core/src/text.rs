// File: crates/sunburst-core/src/text.rs
// Summary: Text measurement (heuristic and Skia textlayout) and greedy label word-wrapping.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Ellipsis appended to the last line when a label runs out of lines.
pub const ELLIPSIS: char = '\u{2026}';

/// Measures the advance width of a single line of text.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> f32;
}

/// Width heuristic: a fixed fraction of the font size per character.
/// Deterministic across platforms, which keeps layouts and snapshots stable.
#[derive(Clone, Copy, Debug)]
pub struct ApproxMeasure {
    pub char_width_em: f32,
}

impl Default for ApproxMeasure {
    fn default() -> Self { Self { char_width_em: 0.58 } }
}

impl TextMeasure for ApproxMeasure {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.char_width_em
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw one line horizontally centered on `x`, vertically centered on `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let mut p = self.layout(text, size, color, bold);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (x - w / 2.0, y - h / 2.0));
    }
}

impl TextMeasure for TextShaper {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        let p = self.layout(text, font_size, skia::Color::from_argb(0, 0, 0, 0), false);
        // width of the longest line
        p.longest_line()
    }
}

/// A label broken into display lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WrappedLabel {
    pub lines: Vec<String>,
    /// Lines ran out and the last line carries an ellipsis.
    pub truncated: bool,
    /// The full text is too long for the box; the label should not be drawn.
    pub hidden: bool,
}

/// Greedy word wrap on whitespace.
///
/// A word that would push the current line past `max_width` starts a new line.
/// When that would exceed `max_lines`, the last line gets an ellipsis and the rest is dropped.
/// The label is hidden when the whole text is longer than `max_width * max_lines`.
pub fn wrap_label(
    text: &str,
    max_width: f64,
    max_lines: usize,
    font_size: f32,
    measure: &dyn TextMeasure,
) -> WrappedLabel {
    let max_lines = max_lines.max(1);
    let width = |s: &str| measure.measure(s, font_size) as f64;
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut truncated = false;

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() { word.to_string() } else { format!("{line} {word}") };
        if line.is_empty() || width(&candidate) <= max_width {
            line = candidate;
            continue;
        }
        lines.push(std::mem::take(&mut line));
        if lines.len() >= max_lines {
            if let Some(last) = lines.last_mut() {
                last.push(ELLIPSIS);
            }
            truncated = true;
            break;
        }
        line = word.to_string();
    }
    if !truncated && !line.is_empty() {
        lines.push(line);
    }

    let total: f64 = lines.iter().map(|l| width(l)).sum();
    WrappedLabel { lines, truncated, hidden: total > max_width * max_lines as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every character is 10px wide.
    struct Fixed;
    impl TextMeasure for Fixed {
        fn measure(&self, text: &str, _font_size: f32) -> f32 { text.chars().count() as f32 * 10.0 }
    }

    #[test]
    fn short_name_single_line() {
        let w = wrap_label("Phones", 80.0, 2, 11.0, &Fixed);
        assert_eq!(w.lines, ["Phones"]);
        assert!(!w.truncated && !w.hidden);
    }

    #[test]
    fn wraps_onto_second_line() {
        let w = wrap_label("Home Office", 80.0, 2, 11.0, &Fixed);
        assert_eq!(w.lines, ["Home", "Office"]);
        assert!(!w.hidden);
    }

    #[test]
    fn ellipsis_when_lines_run_out() {
        let w = wrap_label("ab cd ef gh ij", 60.0, 2, 11.0, &Fixed);
        assert_eq!(w.lines, ["ab cd", "ef gh\u{2026}"]);
        assert!(w.truncated);
        assert!(!w.hidden);
    }

    #[test]
    fn overlong_word_is_hidden() {
        let w = wrap_label("Freezers", 60.0, 2, 11.0, &Fixed);
        assert_eq!(w.lines, ["Freezers"]);
        assert!(!w.hidden);
        let w = wrap_label("Refrigerators-and-Freezers", 60.0, 2, 11.0, &Fixed);
        assert!(w.hidden);
    }

    #[test]
    fn empty_text_has_no_lines() {
        let w = wrap_label("   ", 60.0, 2, 11.0, &Fixed);
        assert!(w.lines.is_empty());
    }

    #[test]
    fn approx_measure_scales_with_font() {
        let m = ApproxMeasure::default();
        assert!(m.measure("abcd", 14.0) > m.measure("abcd", 11.0));
    }
}
