//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CardView, ClockReading, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::symbols::{symbol_color, symbol_label};
use crate::types::{FaceState, Outcome};

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

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(80, 80, 140);
const REVEALED_BG: Rgb = Rgb::new(55, 55, 75);

/// A lightweight terminal renderer for the memory board.
pub struct GameView {
    /// Card slot width in terminal columns (label plus gap).
    cell_w: u16,
    /// Card slot height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two label glyphs and one column of spacing.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame size (including border) needed for a `rows x cols` board
    pub fn board_size(&self, rows: u16, cols: u16) -> (u16, u16) {
        (cols * self.cell_w + 3, rows * self.cell_h + 2)
    }

    /// Render the current game into an existing framebuffer.
    ///
    /// `cursor` is the `(row, col)` of the highlighted card, if any.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(u16, u16)>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.board_size(snap.rows(), snap.cols());
        let panel_w = 22;
        let start_x = viewport.width.saturating_sub(frame_w + panel_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.rows() {
            for col in 0..snap.cols() {
                if let Some(card) = snap.card(row, col) {
                    let highlighted = cursor == Some((row, col));
                    self.draw_card(fb, start_x, start_y, row, col, card, highlighted);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        // Overlays.
        let overlay = if snap.paused {
            Some("PAUSED")
        } else {
            outcome_banner(snap.outcome)
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, text);
        }
        if snap.outcome.is_terminal() {
            let hint = "r play again  esc menu  q quit";
            let hint_style = CellStyle::default().dim();
            let y = start_y.saturating_add(frame_h);
            let x = start_x.saturating_add(frame_w.saturating_sub(hint.chars().count() as u16) / 2);
            fb.put_str(x, y, hint, hint_style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        cursor: Option<(u16, u16)>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    #[allow(clippy::too_many_arguments)]
    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        card: CardView,
        highlighted: bool,
    ) {
        let px = start_x + 2 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;

        let (glyphs, mut style) = match (card.face, card.symbol) {
            (FaceState::Revealed, Some(symbol)) => (
                symbol_label(symbol),
                CellStyle::new(symbol_color(symbol), REVEALED_BG).bold(),
            ),
            (FaceState::Matched, Some(symbol)) => (
                symbol_label(symbol),
                CellStyle::new(symbol_color(symbol), BOARD_BG).dim(),
            ),
            _ => (['░', '░'], CellStyle::new(Rgb::new(120, 120, 140), BOARD_BG)),
        };
        if highlighted {
            style.bg = CURSOR_BG;
        }

        for dy in 0..self.cell_h {
            for (dx, &ch) in glyphs.iter().enumerate() {
                fb.put_char(px + dx as u16, py + dy, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}x{}", snap.rows(), snap.cols()), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        let moves = match snap.level.max_moves {
            Some(max) => format!("{}/{}", snap.moves, max),
            None => snap.moves.to_string(),
        };
        fb.put_str(panel_x, y, &moves, value);
        y = y.saturating_add(2);

        let (clock_label, secs) = match snap.clock {
            ClockReading::Remaining(secs) => ("TIME LEFT", secs),
            ClockReading::Elapsed(secs) => ("TIME", secs),
        };
        fb.put_str(panel_x, y, clock_label, label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format_clock(secs), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let pairs = format!("{}/{}", snap.matched_pairs(), snap.level.pair_count());
        fb.put_str(panel_x, y, &pairs, value);
        y = y.saturating_add(2);

        if snap.paused {
            fb.put_str(panel_x, y, "PAUSED", label);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn outcome_banner(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Won => Some("YOU WIN!"),
        Outcome::LostMoves => Some("OUT OF MOVES"),
        Outcome::LostTime => Some("TIME'S UP"),
    }
}

/// `mm:ss`
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
