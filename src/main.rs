//! Terminal runner (default binary).
//!
//! Renders the current snapshot, waits for input until the next frame is
//! due, then advances the game loop with the elapsed wall-clock time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use blockfall::config::Config;
use blockfall::core::{GameLoop, GameSnapshot, SimpleRng};
use blockfall::input::{action_for_event, should_quit, KeyBindings};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(config.log_file.as_deref())?;
    log::info!("seed {} frame {}ms", config.seed, config.frame_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameLoop::new(SimpleRng::new(config.seed));
    let view = GameView::default().with_rotate_key(config.bindings.rotate_key());
    let bindings: KeyBindings = config.bindings;

    let frame = Duration::from_millis(config.frame_ms);
    let epoch = Instant::now();
    let mut next_frame = epoch;

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit at score {}", game.session().score());
                        return Ok(());
                    }
                    if let Some(action) = action_for_event(key, &bindings) {
                        game.handle_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Frame.
        let now = Instant::now();
        if now >= next_frame {
            next_frame = now + frame;
            let now_ms = now.duration_since(epoch).as_millis() as u64;
            if let Some(outcome) = game.frame(now_ms).tick {
                log::trace!("tick {:?}", outcome);
            }
        }
    }
}
