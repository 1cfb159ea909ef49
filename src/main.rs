//! Terminal memory game runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Logs go to a file so they never land on the screen being drawn.

use std::fs::File;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tui_memory::config::AppConfig;
use tui_memory::core::{DeckGenerator, Session};
use tui_memory::input::{handle_key_event, should_quit, GridCursor, KeyAction};
use tui_memory::term::{FrameBuffer, GameView, MenuView, TerminalRenderer, Viewport, SYMBOL_COUNT};
use tui_memory::types::{GameAction, LevelConfig, LEVEL_PRESETS, TICK_MS};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    info!(?config, "starting tui-memory");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(%err, "runner stopped with error");
    }
    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    if config.log_disabled {
        return Ok(());
    }
    let log_file = File::create(&config.log_path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

enum Screen {
    Menu,
    Playing,
}

struct App {
    session: Session,
    screen: Screen,
    /// Highlighted preset in the menu (0-based).
    selected: usize,
    cursor: GridCursor,
}

impl App {
    fn new(session: Session) -> Self {
        Self {
            session,
            screen: Screen::Menu,
            selected: 0,
            cursor: GridCursor::new(1, 1),
        }
    }

    fn start_level(&mut self, number: u8) {
        let Some(level) = LevelConfig::preset(number as usize) else {
            return;
        };
        match self.session.new_game(level) {
            Ok(_) => {
                self.selected = number as usize - 1;
                self.cursor = GridCursor::new(level.rows, level.cols);
                self.screen = Screen::Playing;
            }
            Err(err) => warn!(%err, level = number, "cannot start level"),
        }
    }

    fn handle_key(&mut self, action: KeyAction) {
        match self.screen {
            Screen::Menu => self.handle_menu_key(action),
            Screen::Playing => self.handle_game_key(action),
        }
    }

    fn handle_menu_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::CursorUp => self.selected = self.selected.saturating_sub(1),
            KeyAction::CursorDown => {
                self.selected = (self.selected + 1).min(LEVEL_PRESETS.len() - 1);
            }
            KeyAction::Flip => self.start_level(self.selected as u8 + 1),
            KeyAction::ChooseLevel(n) => self.start_level(n),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, action: KeyAction) {
        let game_action = match action {
            KeyAction::CursorUp => return self.cursor.move_up(),
            KeyAction::CursorDown => return self.cursor.move_down(),
            KeyAction::CursorLeft => return self.cursor.move_left(),
            KeyAction::CursorRight => return self.cursor.move_right(),
            KeyAction::Flip => GameAction::Flip(self.cursor.index()),
            KeyAction::Pause => GameAction::Pause,
            KeyAction::Restart => GameAction::Restart,
            KeyAction::Back => GameAction::Quit,
            KeyAction::ChooseLevel(_) => return,
        };

        match self.session.apply_action(game_action) {
            Ok(outcome) => debug!(?outcome, "action applied"),
            Err(err) => debug!(%err, action = game_action.as_str(), "action rejected"),
        }
        if !self.session.is_active() {
            self.screen = Screen::Menu;
        }
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.session.tick(elapsed_ms);
        for event in self.session.drain_events() {
            tracing::trace!(?event, "game event");
        }
    }

    fn render(&self, game_view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        match (&self.screen, self.session.snapshot()) {
            (Screen::Playing, Some(snap)) => {
                let cursor = snap
                    .playable()
                    .then(|| (self.cursor.row(), self.cursor.col()));
                game_view.render_into(&snap, cursor, viewport, fb);
            }
            _ => MenuView.render_into(self.selected, viewport, fb),
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let deck = match config.seed {
        Some(seed) => DeckGenerator::new(SYMBOL_COUNT, seed),
        None => DeckGenerator::from_entropy(SYMBOL_COUNT),
    };
    let mut app = App::new(Session::new(deck));
    if let Some(level) = config.start_level {
        app.start_level(level);
    }

    let game_view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render(&game_view, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit requested");
                        app.session.quit();
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.handle_key(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
