//! Flow layout: blocks of text to positioned lines on A4 pages

/// A4 width in points
pub const PAGE_WIDTH: f32 = 595.0;
/// A4 height in points
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 50.0;
/// Usable line width between the margins
pub const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

const LINE_SPACING: f32 = 1.4;

/// Helvetica advance widths for ASCII 32..=126, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for ASCII 32..=126, in 1/1000 em
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used outside the ASCII tables; no WinAnsi glyph is wider
const FALLBACK_GLYPH_UNITS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

impl FontWeight {
    /// Resource name of the font in the page dictionary
    pub fn resource_name(&self) -> &'static [u8] {
        match self {
            FontWeight::Regular => b"F1",
            FontWeight::Bold => b"F2",
        }
    }

    /// Advance width of one character in 1/1000 em
    pub fn glyph_units(&self, c: char) -> u32 {
        let table = match self {
            FontWeight::Regular => &HELVETICA_WIDTHS,
            FontWeight::Bold => &HELVETICA_BOLD_WIDTHS,
        };
        match c {
            '\t' => u32::from(table[0]),
            ' '..='~' => u32::from(table[c as usize - 32]),
            _ => FALLBACK_GLYPH_UNITS,
        }
    }

    fn text_units(&self, text: &[char]) -> u32 {
        text.iter().map(|&c| self.glyph_units(c)).sum()
    }
}

/// One paragraph of the report with the gap that follows it
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub text: String,
    pub weight: FontWeight,
    pub size: f32,
    pub space_after: f32,
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Bold,
            size: 16.0,
            space_after: 20.0,
        }
    }

    pub fn heading(text: impl Into<String>, space_after: f32) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Bold,
            size: 12.0,
            space_after,
        }
    }

    pub fn body(text: impl Into<String>, space_after: f32) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Regular,
            size: 10.0,
            space_after,
        }
    }
}

/// A line of text at its baseline position
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub weight: FontWeight,
    pub size: f32,
    pub text: String,
}

/// Lay blocks out top to bottom, starting a new page when a line would
/// cross the bottom margin. Always returns at least one page.
pub fn layout_pages(blocks: &[Block]) -> Vec<Vec<PlacedLine>> {
    let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];
    let mut cursor = PAGE_HEIGHT - MARGIN;

    for block in blocks {
        let line_height = block.size * LINE_SPACING;
        let lines = wrap_text(&block.text, block.weight, block.size, TEXT_WIDTH);

        for line in lines {
            if cursor - line_height < MARGIN {
                pages.push(Vec::new());
                cursor = PAGE_HEIGHT - MARGIN;
            }
            cursor -= line_height;
            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine {
                    x: MARGIN,
                    y: cursor,
                    weight: block.weight,
                    size: block.size,
                    text: line,
                });
            }
        }

        cursor -= block.space_after;
    }

    pages
}

/// Rendered width of `text` in points
pub fn text_width(text: &str, weight: FontWeight, size: f32) -> f32 {
    let chars: Vec<char> = text.chars().collect();
    weight.text_units(&chars) as f32 * size / 1000.0
}

/// Greedy word wrap by rendered width. Explicit newlines are kept, and
/// words wider than a line are split.
pub fn wrap_text(text: &str, weight: FontWeight, size: f32, max_width: f32) -> Vec<String> {
    let limit = ((max_width * 1000.0 / size).floor() as u32).max(FALLBACK_GLYPH_UNITS);
    let space = weight.glyph_units(' ');
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        let mut current = String::new();
        let mut current_units = 0;

        for word in raw_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            let mut word_units = weight.text_units(&word);

            while word_units > limit {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_units = 0;
                }
                let rest = word.split_off(fitting_prefix(&word, weight, limit));
                lines.push(word.into_iter().collect());
                word = rest;
                word_units = weight.text_units(&word);
            }

            let needed = if current.is_empty() {
                word_units
            } else {
                current_units + space + word_units
            };
            if needed > limit {
                lines.push(std::mem::take(&mut current));
                current_units = 0;
            }
            if !current.is_empty() {
                current.push(' ');
                current_units += space;
            }
            current.extend(word.iter());
            current_units += word_units;
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Number of leading characters that fit in `limit`, at least one
fn fitting_prefix(word: &[char], weight: FontWeight, limit: u32) -> usize {
    let mut used = 0;
    for (index, &c) in word.iter().enumerate() {
        used += weight.glyph_units(c);
        if used > limit {
            return index.max(1);
        }
    }
    word.len()
}
