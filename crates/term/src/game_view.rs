//! GameView: paints a `core::GameSnapshot` into a [`FrameBuffer`].
//!
//! Pure and allocation-free per frame. Field cells are two columns wide so
//! they come out roughly square in common terminal fonts.

use crate::core::{GameSnapshot, PreviewSnapshot};
use crate::fb::{FrameBuffer, Rgb, Style, SCREEN};
use crate::types::{AppMode, MenuItem, TileColor, FIELD_WIDTH, SHAPE_BOX, VIEWABLE_HEIGHT};

/// Minimum digits shown for the score.
pub const SCORE_DIGITS: usize = 3;

const CELL_COLS: u16 = 2;
const TILE: char = '█';
const EMPTY: char = '·';

const BLACK: Rgb = Rgb::new(0, 0, 0);
const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const WELL: Style = Style::new(Rgb::new(80, 80, 90), FIELD_BG);
const EMPTY_CELL: Style = Style::new(Rgb::new(90, 90, 100), FIELD_BG).dim();
const FIELD_BORDER: Style = Style::new(Rgb::new(200, 200, 200), BLACK);
const PREVIEW_BORDER: Style = Style::new(Rgb::new(120, 120, 130), BLACK);
const LABEL: Style = SCREEN.bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), BLACK);
const OVERLAY: Style = Style::new(Rgb::new(255, 255, 255), BLACK).bold();
const MENU_ITEM: Style = Style::new(Rgb::new(160, 160, 170), BLACK);
const MENU_SELECTED: Style = Style::new(BLACK, Rgb::new(240, 220, 80)).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Draws the menu or the game screen, centered in the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy)]
struct Rect {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Rect {
    fn inner(self) -> (u16, u16) {
        (self.x + 1, self.y + 1)
    }
}

/// Where the game screen goes for one viewport.
struct Layout {
    well: Rect,
    /// `None` when the viewport is too narrow for the side panel
    panel_x: Option<u16>,
}

impl Layout {
    fn new(viewport: Viewport) -> Self {
        let w = FIELD_WIDTH as u16 * CELL_COLS + 2;
        let h = VIEWABLE_HEIGHT as u16 + 2;
        let well = Rect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        let panel_x = well.x.saturating_add(w).saturating_add(2);
        let fits = panel_x.saturating_add(preview_box(0, 0).w) <= viewport.width;
        Self {
            well,
            panel_x: fits.then_some(panel_x),
        }
    }
}

fn preview_box(x: u16, y: u16) -> Rect {
    Rect {
        x,
        y,
        w: SHAPE_BOX as u16 * CELL_COLS + 2,
        h: SHAPE_BOX as u16 + 2,
    }
}

impl GameView {
    /// Paint `snap` into `fb`, resizing it to the viewport first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        match snap.mode {
            AppMode::Menu => draw_menu(fb, snap.menu_item, viewport),
            AppMode::Game => draw_game(fb, snap, Layout::new(viewport)),
        }
    }
}

fn draw_menu(fb: &mut FrameBuffer, selected: MenuItem, viewport: Viewport) {
    let top = viewport.height.saturating_sub(2 + MenuItem::ALL.len() as u16) / 2;

    put_centered(fb, viewport.width, top, "TETRO", LABEL);
    for (row, item) in (top + 2..).zip(MenuItem::ALL) {
        let style = if item == selected {
            MENU_SELECTED
        } else {
            MENU_ITEM
        };
        put_centered(fb, viewport.width, row, item.label(), style);
    }
}

fn draw_game(fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
    let well = layout.well;
    let origin = well.inner();
    fb.rect(origin.0, origin.1, well.w - 2, well.h - 2, ' ', WELL);
    draw_border(fb, well, FIELD_BORDER);

    for (y, row) in snap.field.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let (ch, style) = match cell {
                Some(color) => (TILE, tile_style(*color)),
                None => (EMPTY, EMPTY_CELL),
            };
            put_cell(fb, origin, (x as u16, y as u16), ch, style);
        }
    }

    if let Some(active) = &snap.active {
        let style = tile_style(active.color);
        for (x, y) in active.visible_tiles() {
            put_cell(fb, origin, (x as u16, y as u16), TILE, style);
        }
    }

    if let Some(panel_x) = layout.panel_x {
        draw_side_panel(fb, snap, panel_x, well.y);
    }

    if snap.lost {
        let mid = well.y.saturating_add(well.h / 2);
        put_centered_in(fb, well, mid, "GAME OVER");
        put_centered_in(fb, well, mid.saturating_add(2), "PRESS ENTER");
    }
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
    fb.text(x, top, "NEXT", LABEL);
    let preview = preview_box(x, top.saturating_add(1));
    draw_preview(fb, preview, snap.next.as_ref());

    let mut y = preview.y.saturating_add(preview.h).saturating_add(1);
    fb.text(x, y, "SCORE", LABEL);
    fb.number(x, y.saturating_add(1), snap.score, SCORE_DIGITS, VALUE);

    y = y.saturating_add(3);
    fb.text(x, y, "LINES", LABEL);
    fb.number(x, y.saturating_add(1), snap.lines, 0, VALUE);
}

fn draw_preview(fb: &mut FrameBuffer, area: Rect, next: Option<&PreviewSnapshot>) {
    let origin = area.inner();
    fb.rect(origin.0, origin.1, area.w - 2, area.h - 2, ' ', WELL);
    draw_border(fb, area, PREVIEW_BORDER);

    if let Some(next) = next {
        let style = tile_style(next.color);
        for &(dx, dy) in &next.tiles {
            put_cell(fb, origin, (dx as u16, dy as u16), TILE, style);
        }
    }
}

/// One field cell, `cell` counted in cells from the screen position `origin`.
fn put_cell(fb: &mut FrameBuffer, origin: (u16, u16), cell: (u16, u16), ch: char, style: Style) {
    let x = origin.0.saturating_add(cell.0 * CELL_COLS);
    let y = origin.1.saturating_add(cell.1);
    fb.rect(x, y, CELL_COLS, 1, ch, style);
}

/// Display color for a tile.
pub fn tile_rgb(color: TileColor) -> Rgb {
    match color {
        TileColor::Red => Rgb::new(220, 80, 80),
        TileColor::Orange => Rgb::new(255, 165, 0),
        TileColor::Yellow => Rgb::new(240, 220, 80),
        TileColor::Green => Rgb::new(100, 220, 120),
        TileColor::Blue => Rgb::new(80, 120, 220),
        TileColor::Violet => Rgb::new(200, 120, 220),
        TileColor::White => Rgb::new(240, 240, 240),
        TileColor::Black => Rgb::new(10, 10, 10),
    }
}

fn tile_style(color: TileColor) -> Style {
    Style::new(tile_rgb(color), FIELD_BG).bold()
}

fn draw_border(fb: &mut FrameBuffer, r: Rect, style: Style) {
    let right = r.x.saturating_add(r.w - 1);
    let bottom = r.y.saturating_add(r.h - 1);

    fb.rect(r.x + 1, r.y, r.w - 2, 1, '─', style);
    fb.rect(r.x + 1, bottom, r.w - 2, 1, '─', style);
    fb.rect(r.x, r.y + 1, 1, r.h - 2, '│', style);
    fb.rect(right, r.y + 1, 1, r.h - 2, '│', style);

    fb.glyph(r.x, r.y, '┌', style);
    fb.glyph(right, r.y, '┐', style);
    fb.glyph(r.x, bottom, '└', style);
    fb.glyph(right, bottom, '┘', style);
}

fn put_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str, style: Style) {
    let x = width.saturating_sub(text.chars().count() as u16) / 2;
    fb.text(x, y, text, style);
}

fn put_centered_in(fb: &mut FrameBuffer, area: Rect, y: u16, text: &str) {
    let x = area.x + area.w.saturating_sub(text.chars().count() as u16) / 2;
    fb.text(x, y, text, OVERLAY);
}
