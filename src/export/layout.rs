//! Line wrapping and page breaking for the export document.
//!
//! Works in points on a fixed page. Glyph widths are approximated per style,
//! which is close enough for the builtin Helvetica faces.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 0.352_778;

/// Fixed style sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Title,
    Heading,
    Body,
    Meta,
}

impl TextStyle {
    pub fn font_size(self) -> f32 {
        match self {
            TextStyle::Title => 20.0,
            TextStyle::Heading => 14.0,
            TextStyle::Body => 11.0,
            TextStyle::Meta => 9.0,
        }
    }

    /// Average glyph width as a fraction of the font size.
    fn width_factor(self) -> f32 {
        match self {
            TextStyle::Title | TextStyle::Heading => 0.58,
            TextStyle::Body | TextStyle::Meta => 0.52,
        }
    }

    pub fn line_height(self) -> f32 {
        self.font_size() * 1.4
    }

    /// Extra space above a block of this style.
    fn space_before(self) -> f32 {
        match self {
            TextStyle::Title => 0.0,
            TextStyle::Heading => 14.0,
            TextStyle::Body => 4.0,
            TextStyle::Meta => 2.0,
        }
    }
}

/// A styled paragraph of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub style: TextStyle,
    pub text: String,
}

impl Block {
    pub fn new(style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Page size and margins, in points.
#[derive(Debug, Clone, Copy)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// A4 portrait with 20mm margins.
    pub fn a4() -> Self {
        Self {
            width: 210.0 / MM_PER_PT,
            height: 297.0 / MM_PER_PT,
            margin: 20.0 / MM_PER_PT,
        }
    }

    fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    fn top(&self) -> f32 {
        self.height - self.margin
    }

    /// Characters of `style` that fit on one line.
    pub fn chars_per_line(&self, style: TextStyle) -> usize {
        let glyph = style.font_size() * style.width_factor();
        ((self.usable_width() / glyph).floor() as usize).max(1)
    }
}

/// One line placed on a page. `y` is the baseline, measured from the page bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub style: TextStyle,
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Greedy word wrap. Words longer than a line are hard-split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
            if needed > max_chars {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(word.iter());
            current_len += word.len();
        }

        // Blank source lines are kept as paragraph breaks.
        lines.push(current);
    }

    // Drop trailing blank lines.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Lay blocks out into pages of placed lines.
pub fn paginate(blocks: &[Block], geometry: &PageGeometry) -> Vec<Vec<PlacedLine>> {
    let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];
    let mut y = geometry.top();

    for block in blocks {
        let style = block.style;
        if !pages.last().is_some_and(|p| p.is_empty()) {
            y -= style.space_before();
        }

        for line in wrap_text(&block.text, geometry.chars_per_line(style)) {
            if y - style.line_height() < geometry.margin {
                pages.push(Vec::new());
                y = geometry.top();
            }
            y -= style.line_height();

            if line.is_empty() {
                continue;
            }
            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine {
                    style,
                    text: line,
                    x: geometry.margin,
                    y,
                });
            }
        }
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_text("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let lines = wrap_text("ab abcdefghij", 4);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_keeps_paragraph_breaks() {
        let lines = wrap_text("one\n\ntwo\n", 20);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn test_paginate_breaks_pages() {
        let geometry = PageGeometry::a4();
        let body = vec!["line"; 200].join("\n");
        let pages = paginate(&[Block::new(TextStyle::Body, body)], &geometry);

        assert!(pages.len() > 1);
        let total: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(total, 200);
        for page in &pages {
            assert!(page.iter().all(|l| l.y >= geometry.margin && l.y <= geometry.top()));
        }
    }

    #[test]
    fn test_paginate_orders_top_to_bottom() {
        let pages = paginate(
            &[
                Block::new(TextStyle::Title, "Title"),
                Block::new(TextStyle::Body, "body"),
            ],
            &PageGeometry::a4(),
        );
        assert_eq!(pages.len(), 1);
        assert!(pages[0][0].y > pages[0][1].y);
        assert_eq!(pages[0][0].style, TextStyle::Title);
    }
}
