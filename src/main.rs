//! Terminal runner (default binary).
//!
//! Renders through the framebuffer pipeline in `blockdrop::term`, reads keys
//! with crossterm and advances gravity with real elapsed time.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use blockdrop::config::{Cli, Config};
use blockdrop::core::{Game, GameSnapshot, RandomPieces};
use blockdrop::input::{handle_key_event, should_quit, CONTROLS};
use blockdrop::logging;
use blockdrop::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init(&config)?;

    let source = match config.seed {
        Some(seed) => RandomPieces::seeded(seed),
        None => RandomPieces::from_entropy(),
    };
    tracing::info!(seed = ?config.seed, tick_ms = config.tick_ms(), "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, Game::new(source), &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, mut game: Game, config: &Config) -> Result<()> {
    let view = GameView::new(config.cell_width, 1).with_controls(&CONTROLS);
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Wait for input until the next frame is due.
        let timeout = config
            .tick
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        tracing::info!(score = game.score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let applied = game.apply_action(action);
                        tracing::trace!(action = action.as_str(), applied, "input");
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= config.tick {
            last_tick = Instant::now();
            game.tick(elapsed.as_millis().min(u128::from(u32::MAX)) as u32);
        }
    }
}
