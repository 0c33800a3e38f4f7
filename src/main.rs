mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use coin_dash::arena::Board;
use coin_dash::clock::{Clock, SystemClock};
use coin_dash::config::Config;
use coin_dash::entities::Direction;
use coin_dash::session::Session;

use display::{Hud, Layout};

/// Upper bound on one wait, so the screen refreshes even when idle.
const MAX_WAIT: Duration = Duration::from_millis(100);

// ── Input mapping ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Move(Direction),
    Confirm,
    Quit,
}

/// Arrow keys and WASD drive the same four directions.
fn command_for(event: &Event) -> Option<Command> {
    let Event::Key(KeyEvent {
        code,
        kind,
        modifiers,
        ..
    }) = event
    else {
        return None;
    };
    if *kind == KeyEventKind::Release {
        return None;
    }
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Command::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Confirm),
        _ => None,
    }
}

/// Block until a key is pressed.  Returns `true` if it asked to quit.
fn wait_for_key(rx: &mpsc::Receiver<Event>) -> bool {
    // Keys mashed during play must not dismiss the notice instantly
    while rx.try_recv().is_ok() {}

    loop {
        match rx.recv() {
            Ok(event @ Event::Key(KeyEvent {
                kind: KeyEventKind::Press,
                ..
            })) => return command_for(&event) == Some(Command::Quit),
            Ok(_) => {}
            Err(_) => return true,
        }
    }
}

// ── Title screen ──────────────────────────────────────────────────────────────

/// Returns `true` if the player wants to start, `false` to quit.
fn show_title<W: Write>(
    out: &mut W,
    layout: &Layout,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    display::render_title(out, layout)?;
    loop {
        let Ok(event) = rx.recv() else {
            return Ok(false);
        };
        match command_for(&event) {
            Some(Command::Confirm) => return Ok(true),
            Some(Command::Quit) => return Ok(false),
            _ => {}
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs games back to back until the player quits.
///
/// Input is applied the moment it arrives; between inputs the loop sleeps
/// until the session's next pulse is due.  On game over the overlay stays up
/// until a key is pressed, then the session restarts from level 1.
fn game_loop<W: Write>(
    out: &mut W,
    config: &Config,
    layout: &Layout,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<()> {
    let clock = SystemClock::new();
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = Board::new(config.bounds()?);
    let mut session = Session::new(board, rng, config.frame_period()?, clock.now())?;
    let mut hud = Hud::default();
    session.publish(&mut hud);

    loop {
        let wait = session
            .next_deadline()
            .saturating_sub(clock.now())
            .min(MAX_WAIT);
        match rx.recv_timeout(wait) {
            Ok(event) => {
                for event in std::iter::once(event).chain(rx.try_iter()) {
                    match command_for(&event) {
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Move(dir)) => session.handle_input(dir),
                        _ => {}
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }

        let over = session.run_due(clock.now(), &mut hud);
        display::render(out, layout, session.arena(), &hud, over)?;

        if over.is_some() {
            if wait_for_key(rx) {
                return Ok(());
            }
            session.restart(clock.now());
            session.publish(&mut hud);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: Option<&Path>) -> anyhow::Result<()> {
    // The terminal is in raw mode, so logs only ever go to a file
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.log_file.as_deref())?;

    let (cols, rows) = terminal::size()?;
    config.validate(cols, rows)?;
    let (grid_cols, grid_rows) = config.grid_size()?;
    let layout = Layout {
        cell_width: config.cell_width,
        cell_height: config.cell_height,
        cols: grid_cols,
        rows: grid_rows,
    };
    log::info!("starting with {:?}", config);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &config, &layout, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("exiting with error: {:#}", err);
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    config: &Config,
    layout: &Layout,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<()> {
    if show_title(out, layout, rx)? {
        game_loop(out, config, layout, rx)?;
    }
    log::info!("player quit");
    Ok(())
}
