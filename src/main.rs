//! Terminal stacking game runner (default binary).
//!
//! Interactive by default: crossterm for input and a framebuffer renderer
//! for output. `--headless` runs the autopilot without a terminal and prints
//! one JSON line per placement plus a final summary.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_stacker::core::{GameConfig, GameSnapshot, GameState, PlaceOutcome};
use tui_stacker::engine::{apply_place, Autopilot, FrameClock};
use tui_stacker::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_stacker::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_stacker::types::GameAction;

/// Redraw interval for static frames (setup / ended).
const IDLE_REDRAW_MS: u64 = 250;

#[derive(Debug, Parser)]
#[command(name = "tui-stacker", version, about = "Stack the sliding blocks as high as you can")]
struct Cli {
    /// Run without a terminal UI, driven by the autopilot; prints JSON lines.
    #[arg(long)]
    headless: bool,

    /// Let the autopilot play the interactive game.
    #[arg(long)]
    autoplay: bool,

    /// Autopilot alignment tolerance in field units (default: half the mover speed).
    #[arg(long)]
    tolerance: Option<f64>,

    /// Tick budget for headless runs.
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u32,

    /// Leave the mouse alone (clicks will not drop blocks).
    #[arg(long)]
    no_mouse: bool,
}

impl Cli {
    fn autopilot(&self, config: &GameConfig) -> Autopilot {
        let pilot = match self.tolerance {
            Some(t) => Autopilot::new(t),
            None => Autopilot::for_speed(config.mover_speed),
        };
        debug!(tolerance = pilot.tolerance(), "autopilot enabled");
        pilot
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.headless)?;

    let config = GameConfig::from_env();
    config.validate().context("invalid game configuration")?;
    info!(?config, headless = cli.headless, "starting");

    if cli.headless {
        return run_headless(config, cli.autopilot(&config), cli.max_ticks);
    }

    let autopilot = cli.autoplay.then(|| cli.autopilot(&config));
    let mut term = TerminalRenderer::new().with_mouse(!cli.no_mouse);
    term.enter()?;

    let result = run(&mut term, config, autopilot);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Install a subscriber.
///
/// The interactive game owns the terminal, so it only logs when
/// `STACKER_LOG_PATH` names a file. Headless runs log to stderr.
fn init_tracing(headless: bool) -> Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tui_stacker=debug,tui_stacker_core=debug,tui_stacker_engine=debug")
        })
    };

    let log_path = std::env::var("STACKER_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    if let Some(path) = log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {path}"))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if headless {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    config: GameConfig,
    autopilot: Option<Autopilot>,
) -> Result<()> {
    let mut game = GameState::try_new(config)?;
    game.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut clock = FrameClock::default();
    let mut throttle = RenderThrottle::new(IDLE_REDRAW_MS);

    let started = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint(), !snap.playable()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        if event::poll(clock.until_next())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dispatch(&mut game, action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(action) = handle_mouse_event(mouse) {
                        dispatch(&mut game, action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                    clock.reset();
                    last_frame = Instant::now();
                }
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        let due = clock.advance(now.duration_since(last_frame));
        last_frame = now;
        for _ in 0..due {
            match autopilot {
                Some(pilot) => {
                    pilot.step(&mut game, clock.step_ms());
                }
                None => {
                    game.tick(clock.step_ms());
                }
            }
        }
    }
}

fn dispatch(game: &mut GameState, action: GameAction) {
    match action {
        GameAction::Place => match apply_place(game) {
            Ok(report) => debug!(?report, "place"),
            Err(err) => debug!(code = err.code(), "place ignored: {}", err.message()),
        },
        other => {
            let changed = game.apply_action(other);
            debug!(action = other.as_str(), changed, "input");
        }
    }
}

fn outcome_label(outcome: &PlaceOutcome) -> &'static str {
    match outcome {
        PlaceOutcome::Ignored => "ignored",
        PlaceOutcome::Stacked { .. } => "stacked",
        PlaceOutcome::Won { .. } => "won",
        PlaceOutcome::Lost { .. } => "lost",
    }
}

fn run_headless(config: GameConfig, pilot: Autopilot, max_ticks: u32) -> Result<()> {
    let mut game = GameState::try_new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Lines are written as placements happen; the first write error stops output.
    let mut write_err: Option<io::Error> = None;
    let ticks = pilot.run(&mut game, max_ticks, |state, outcome| {
        if write_err.is_some() {
            return;
        }
        let trimmed = match outcome {
            PlaceOutcome::Stacked { trimmed, .. } => trimmed,
            _ => 0.0,
        };
        let line = json!({
            "event": "place",
            "outcome": outcome_label(&outcome),
            "tick": state.ticks(),
            "level": state.level(),
            "trimmed": trimmed,
            "top": state.tower().top(),
        });
        if let Err(err) = writeln!(out, "{line}") {
            write_err = Some(err);
        }
    });
    if let Some(err) = write_err {
        return Err(err).context("writing headless output");
    }
    let summary = json!({
        "event": "end",
        "ticks": ticks,
        "state": game.run_state().as_str(),
        "message": game.message(),
        "snapshot": game.snapshot(),
    });
    writeln!(out, "{summary}")?;
    out.flush()?;

    info!(
        ticks,
        level = game.level(),
        state = game.run_state().as_str(),
        "headless run finished"
    );
    Ok(())
}
