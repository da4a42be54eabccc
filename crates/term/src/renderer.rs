//! TerminalRenderer: owns the terminal session and puts frames on screen.
//!
//! Each frame is compared row by row with the one already shown. Only runs of
//! changed glyphs are written, and color or attribute sequences are emitted
//! only when they differ from what the terminal currently has set.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{
        DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal is showing; `None` forces a full repaint
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
    /// Key release reporting was negotiated on enter
    enhanced_keys: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
            enhanced_keys: false,
        }
    }

    /// Raw mode, alternate screen, focus events and (where supported) key release events.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.out.clear();
        self.out
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?
            .queue(EnableFocusChange)?;
        if self.enhanced_keys {
            self.out.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.write_out()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        if self.enhanced_keys {
            self.out.queue(PopKeyboardEnhancementFlags)?;
            self.enhanced_keys = false;
        }
        self.out
            .queue(DisableFocusChange)?
            .queue(ResetColor)?
            .queue(SetAttribute(Attribute::Reset))?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.write_out()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next `present`, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `frame` on screen.
    ///
    /// `frame` becomes the shown frame and the caller gets the previous one's
    /// storage back to paint the next frame into.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        let shown = self.shown.take().filter(|s| s.same_size(frame));

        self.out.clear();
        encode_frame(shown.as_ref(), frame, &mut self.out)?;
        self.write_out()?;

        let spare = shown.unwrap_or_else(|| FrameBuffer::new(0, 0));
        self.shown = Some(std::mem::replace(frame, spare));
        Ok(())
    }

    fn write_out(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Commands turning the screen from `shown` into `next`.
///
/// Without a shown frame the screen is cleared and every row is written.
fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    if shown.is_none() {
        out.queue(terminal::Clear(ClearType::All))?;
    }

    for y in 0..next.height() {
        let row = next.row(y);
        match shown {
            None => pen.write_run(out, 0, y, row)?,
            Some(shown) => {
                for (start, end) in changed_runs(shown.row(y), row) {
                    pen.write_run(out, start as u16, y, &row[start..end])?;
                }
            }
        }
    }

    pen.finish(out)
}

/// Half-open column ranges where `new` differs from `old`.
fn changed_runs<'a>(
    old: &'a [Glyph],
    new: &'a [Glyph],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let differs = move |x: usize| old.get(x) != Some(&new[x]);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && !differs(x) {
            x += 1;
        }
        if x == new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && differs(x) {
            x += 1;
        }
        Some((start, x))
    })
}

/// Style the terminal currently has set. `None` fields are unknown.
#[derive(Default)]
struct Pen {
    attrs: Option<(bool, bool)>,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Pen {
    fn write_run(&mut self, out: &mut Vec<u8>, x: u16, y: u16, glyphs: &[Glyph]) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for glyph in glyphs {
            self.set(out, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn set(&mut self, out: &mut Vec<u8>, style: Style) -> Result<()> {
        let attrs = (style.bold, style.dim);
        if self.attrs != Some(attrs) {
            // SGR reset also drops both colors.
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            *self = Self {
                attrs: Some(attrs),
                fg: None,
                bg: None,
            };
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(color(style.fg)))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(color(style.bg)))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    /// Leave the terminal with default colors if anything was styled.
    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.attrs.is_some() {
            out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::SCREEN;

    fn encode(shown: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(shown, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_repaint_writes_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.text(0, 0, "AB", SCREEN);
        fb.text(0, 1, "CD", SCREEN);

        let text = encode(None, &fb);
        for ch in ['A', 'B', 'C', 'D'] {
            assert!(text.contains(ch));
        }
    }

    #[test]
    fn unchanged_frame_encodes_nothing() {
        let fb = FrameBuffer::new(4, 2);
        assert!(encode(Some(&fb.clone()), &fb).is_empty());
    }

    #[test]
    fn style_is_emitted_once_per_change() {
        let red = Style::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0));
        let shown = FrameBuffer::new(6, 1);
        let mut next = shown.clone();
        next.text(0, 0, "xxx", red);
        next.text(3, 0, "yyy", red.bold());

        let text = encode(Some(&shown), &next);
        assert_eq!(text.matches("38;2;255;0;0").count(), 2);
        assert_eq!(text.chars().filter(|&c| c == 'x' || c == 'y').count(), 6);
    }

    #[test]
    fn changed_runs_coalesce_adjacent_glyphs() {
        let old = FrameBuffer::new(7, 1);
        let mut new = old.clone();
        new.text(1, 0, "XXX", SCREEN);
        new.glyph(5, 0, 'Y', SCREEN);

        let runs: Vec<_> = changed_runs(old.row(0), new.row(0)).collect();
        assert_eq!(runs, vec![(1, 4), (5, 6)]);
    }
}
