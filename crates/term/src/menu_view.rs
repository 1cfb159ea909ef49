//! MenuView: the level selection screen.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{format_clock, Viewport};
use crate::types::{LevelConfig, LEVEL_PRESETS};

/// One-line summary of a level, e.g. `2x2 - 4 moves - 00:30`.
pub fn describe_level(level: &LevelConfig) -> String {
    let grid = format!("{}x{}", level.rows, level.cols);
    if !level.has_limits() {
        return format!("{grid} - no limits");
    }
    match (level.max_moves, level.time_limit_secs) {
        (None, None) => grid,
        (Some(moves), None) => format!("{grid} - {moves} moves"),
        (None, Some(secs)) => format!("{grid} - {}", format_clock(secs)),
        (Some(moves), Some(secs)) => format!("{grid} - {moves} moves - {}", format_clock(secs)),
    }
}

#[derive(Debug, Default)]
pub struct MenuView;

impl MenuView {
    /// Render the preset list with `selected` (0-based) highlighted.
    pub fn render_into(&self, selected: usize, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let title = CellStyle::new(Rgb::new(240, 210, 90), Rgb::new(0, 0, 0)).bold();
        let item = CellStyle::default();
        let active = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(80, 80, 140)).bold();
        let hint = CellStyle::default().dim();

        let block_h = LEVEL_PRESETS.len() as u16 + 5;
        let x = viewport.width.saturating_sub(34) / 2;
        let mut y = viewport.height.saturating_sub(block_h) / 2;

        fb.put_str(x, y, "MEMORY", title);
        y = y.saturating_add(2);

        for (i, level) in LEVEL_PRESETS.iter().enumerate() {
            let style = if i == selected { active } else { item };
            let marker = if i == selected { '>' } else { ' ' };
            let line = format!("{} {}  {}", marker, i + 1, describe_level(level));
            fb.put_str(x, y, &line, style);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(2);
        fb.put_str(x, y, "enter play  1-6 pick  q quit", hint);
    }

    pub fn render(&self, selected: usize, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(selected, viewport, &mut fb);
        fb
    }
}
