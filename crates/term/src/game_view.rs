//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{mask, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const BLOCK: char = '█';

const PLAY_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(64, 64, 64);
const BORDER_FG: Rgb = Rgb::new(128, 128, 128);
const TEXT_FG: Rgb = Rgb::new(255, 255, 255);
const MUTED_FG: Rgb = Rgb::new(128, 128, 128);

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

/// Vertical placement of the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders the board, the falling piece and the side panel.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
    /// Key legend lines, as (keys, description).
    controls: &'static [(&'static str, &'static str)],
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
            controls: &[],
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_controls(mut self, controls: &'static [(&'static str, &'static str)]) -> Self {
        self.controls = controls;
        self
    }

    /// Width and height of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path: callers keep one framebuffer
    /// across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let board = BoardArea {
            x: origin_x + 1,
            y: origin_y + 1,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
        };

        draw_border(
            fb,
            origin_x,
            origin_y,
            frame_w,
            frame_h,
            CellStyle::new(BORDER_FG, PLAY_BG),
        );

        // Locked cells, with a faint dot on empty ones as a grid.
        let grid = CellStyle::new(GRID_FG, PLAY_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => board.fill(fb, x as i8, y as i8, BLOCK, block_style(*kind)),
                    None => board.fill(fb, x as i8, y as i8, '·', grid),
                }
            }
        }

        if let Some(active) = snap.active {
            let style = block_style(active.kind);
            for (x, y) in active.cells() {
                board.fill(fb, x, y, BLOCK, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            draw_game_over(fb, origin_x, origin_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        // Narrow terminals only get the board.
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(TEXT_FG, PLAY_BG).bold();
        let value = CellStyle::new(TEXT_FG, PLAY_BG);
        let muted = CellStyle::new(MUTED_FG, PLAY_BG);

        let mut y = top;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        // Half-size preview: one column per mask cell.
        let preview = block_style(snap.next);
        for (row_i, row) in mask(snap.next, 0).rows().enumerate() {
            for (col_i, filled) in row.iter().enumerate() {
                if *filled {
                    fb.put_char(panel_x + col_i as u16, y + row_i as u16, BLOCK, preview);
                }
            }
        }
        y += 5;

        for (name, number) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        if self.controls.is_empty() {
            return;
        }
        fb.put_str(panel_x, y, "CONTROLS", label);
        y += 1;
        for (keys, action) in self.controls {
            if y >= viewport.height {
                break;
            }
            let end = fb.put_str(panel_x, y, keys, muted);
            fb.put_str(end.saturating_add(1), y, action, muted);
            y += 1;
        }
    }
}

/// Board cells in screen coordinates.
struct BoardArea {
    x: u16,
    y: u16,
    cell_w: u16,
    cell_h: u16,
}

impl BoardArea {
    /// Paint one board cell. Cells outside the 10x20 grid (e.g. above the
    /// top edge) are skipped.
    fn fill(&self, fb: &mut FrameBuffer, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = self.x + x as u16 * self.cell_w;
        let py = self.y + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(kind.color(), PLAY_BG)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = CellStyle::new(TEXT_FG, PLAY_BG).bold();
    let hint = CellStyle::new(TEXT_FG, PLAY_BG);
    let mid_y = y.saturating_add(h / 2);

    for (dy, text, style) in [(0, "GAME OVER", style), (2, "Press R to restart", hint)] {
        let text_w = text.chars().count() as u16;
        let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
        fb.put_str(tx, mid_y + dy, text, style);
    }
}
