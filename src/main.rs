//! Terminal Life runner (default binary).
//!
//! Left click flips a cell, right click highlights it. Keys: space play/pause,
//! `n` single step, `[`/`]` step through history, `+`/`-` speed, `<`/`>`
//! history length, arrows + Enter edit with the keyboard, `q` quits.
//!
//! Environment:
//! - `LIFE_CONFIG`: JSON config file loaded before `LIFE_*` overrides
//! - `LIFE_LOG_PATH`: write logs to this file (the terminal is in raw mode)
//! - `RUST_LOG`: log filter (defaults to `info` when logging to a file)

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_life::app::App;
use tui_life::core::{LifeConfig, SimulationController};
use tui_life::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_life::term::{StatusLine, TerminalSession, TerminalSurface};
use tui_life::types::CellLayout;

/// Upper bound on how long input polling may block.
const FRAME_MS: u64 = 16;

/// Terminal rows reserved for the status line.
const STATUS_ROWS: u16 = 1;

fn main() -> Result<()> {
    init_logging()?;
    let config = load_config()?;

    let mut session = TerminalSession::new();
    session.enter()?;

    let result = run(&mut session, config);

    // Always try to restore terminal state.
    let _ = session.exit();
    result
}

fn init_logging() -> Result<()> {
    let env = env_logger::Env::default();
    match std::env::var("LIFE_LOG_PATH") {
        Ok(path) if !path.trim().is_empty() => {
            let file = File::create(path.trim())
                .with_context(|| format!("cannot open log file {path:?}"))?;
            env_logger::Builder::from_env(env.default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        _ => {
            env_logger::Builder::from_env(env.default_filter_or("off")).init();
        }
    }
    Ok(())
}

fn load_config() -> Result<LifeConfig> {
    let mut config = match std::env::var("LIFE_CONFIG") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read config file {path:?}"))?;
            LifeConfig::from_json_str(&raw).with_context(|| format!("invalid config {path:?}"))?
        }
        Err(_) => LifeConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

/// Surface size in logical cell units: two terminal columns per unit.
fn viewport(width: u16, height: u16) -> (u32, u32) {
    ((width / 2) as u32, height.saturating_sub(STATUS_ROWS) as u32)
}

fn run(session: &mut TerminalSession, config: LifeConfig) -> Result<()> {
    let layout = CellLayout {
        origin_y: STATUS_ROWS,
        ..CellLayout::for_cell_size(config.cell_size)
    };
    let (mut width, height) = session.size();
    let (vw, vh) = viewport(width, height);
    let life = SimulationController::for_viewport(config, vw, vh, TerminalSurface::new(layout));
    info!(
        "starting with {}x{} grid",
        life.grid().rows(),
        life.grid().cols()
    );

    let mut app = App::new(life);
    let cursor = app.cursor();
    app.life_mut().observer_mut().set_cursor(Some(cursor));

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render: cell updates are already queued by the observer callbacks.
        let status = StatusLine::from_controller(app.life());
        app.life_mut().observer_mut().draw_status(&status, width);
        app.life_mut().observer_mut().flush_into(session.out())?;

        // Input with timeout until the next tick (or one frame when stopped).
        let timeout = app
            .life()
            .next_tick_in_ms()
            .map(Duration::from_millis)
            .map_or(frame, |d| d.min(frame));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply(action);
                    }
                }
                Event::Mouse(mouse) => {
                    let layout = *app.life().observer().layout();
                    if let Some(action) = handle_mouse_event(mouse, &layout) {
                        app.apply(action);
                    }
                }
                Event::Resize(w, h) => {
                    width = w;
                    let (vw, vh) = viewport(w, h);
                    app.resize(vw, vh);
                }
                _ => {}
            }
            let cursor = app.cursor();
            app.life_mut().observer_mut().set_cursor(Some(cursor));
        }

        // Tick.
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;
        app.life_mut().advance(elapsed.as_millis() as u64);
    }
}
