//! Row-major glyph buffer the view paints and the renderer diffs.

use crate::digits::zero_padded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors and attributes of one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

/// Light text on black, used for every glyph nothing has painted.
pub const SCREEN: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

impl Default for Style {
    fn default() -> Self {
        SCREEN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph::new(' ', SCREEN);

    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Screen-sized grid of glyphs. Every write is clipped to the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
        };
        fb.reset(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize to `width` x `height` and blank every glyph, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs.resize(width as usize * height as usize, Glyph::BLANK);
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Glyphs of row `y`; empty when `y` is off the grid.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    fn row_mut(&mut self, y: u16) -> &mut [Glyph] {
        if y >= self.height {
            return &mut [];
        }
        let start = y as usize * self.width as usize;
        &mut self.glyphs[start..start + self.width as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y).get(x as usize).copied()
    }

    pub fn glyph(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(slot) = self.row_mut(y).get_mut(x as usize) {
            *slot = Glyph::new(ch, style);
        }
    }

    pub fn text(&mut self, x: u16, y: u16, s: &str, style: Style) {
        let row = self.row_mut(y);
        for (slot, ch) in row.iter_mut().skip(x as usize).zip(s.chars()) {
            *slot = Glyph::new(ch, style);
        }
    }

    /// Write `n` zero-padded to `min_len` digits and return the columns used.
    pub fn number(&mut self, x: u16, y: u16, n: u32, min_len: usize, style: Style) -> u16 {
        let digits = zero_padded(n, min_len);
        self.text(x, y, &digits, style);
        digits.len() as u16
    }

    pub fn rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for row_y in y..y.saturating_add(h) {
            let row = self.row_mut(row_y);
            let start = (x as usize).min(row.len());
            let end = (x as usize + w as usize).min(row.len());
            row[start..end].fill(Glyph::new(ch, style));
        }
    }

    /// Row `y` as plain text with styles dropped.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}
