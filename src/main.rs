//! Terminal runner (default binary).
//!
//! Fixed-step loop: events are folded into the input handler until the tick
//! deadline, then the app advances one step and the snapshot is drawn through
//! the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tetro::cli::{parse_args, RunConfig, USAGE};
use tetro::core::{App, GameSnapshot};
use tetro::input::{should_quit, InputHandler};
use tetro::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return Err(e);
        }
    };
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let (score, lines) = result?;
    eprintln!("tetro: final score {} ({} lines)", score, lines);
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<(u32, u32)> {
    let mut app = App::new(config.session_config());
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_ms = config.tick_ms;
    let tick_duration = Duration::from_millis(tick_ms as u64);
    let mut deadline = Instant::now() + tick_duration;

    while !app.exit_requested() {
        // Input until the tick deadline.
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        app.request_exit();
                        break;
                    }
                    input.handle_key_event(key);
                }
                Event::FocusLost => input.focus_lost(),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
        if app.exit_requested() {
            break;
        }

        // Do not try to catch up after a stall (suspend, slow terminal).
        let now = Instant::now();
        deadline = if now > deadline + tick_duration {
            now + tick_duration
        } else {
            deadline + tick_duration
        };

        // Tick.
        input.update(tick_ms);
        app.update(tick_ms, input.state());
        input.end_tick();

        // Render.
        app.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }

    Ok((app.session().score(), app.session().lines()))
}
