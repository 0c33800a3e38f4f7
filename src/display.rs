//! Rendering layer: all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! arena.  No game logic is performed; this module only translates entity
//! records into terminal commands, scaling arena units down to cells.

use std::io::Write;

use coin_dash::arena::Board;
use coin_dash::entities::{Entity, EntityKind, GameOverCause};
use coin_dash::session::StatusSink;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_TIMER: Color = Color::Yellow;
const C_HUD_TIMER_LOW: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_COIN: Color = Color::Yellow;
const C_ENEMY: Color = Color::Red;
const C_OBSTACLE: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

/// Seconds left at which the timer turns red.
const TIMER_WARNING: u32 = 10;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Maps arena units onto terminal cells.  Row 0 is the HUD, row 1 the top
/// border; the arena interior starts at column 1, row 2.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    pub cell_width: i32,
    pub cell_height: i32,
    /// Interior size in cells.
    pub cols: u16,
    pub rows: u16,
}

impl Layout {
    fn col(&self, x: i32) -> u16 {
        1 + (x / self.cell_width).clamp(0, self.cols as i32 - 1) as u16
    }

    fn row(&self, y: i32) -> u16 {
        2 + (y / self.cell_height).clamp(0, self.rows as i32 - 1) as u16
    }

    fn bottom_border(&self) -> u16 {
        2 + self.rows
    }
}

// ── Status indicators ─────────────────────────────────────────────────────────

/// Last level and countdown values pushed by the session.
#[derive(Debug, Default)]
pub struct Hud {
    pub level: u32,
    pub timer: u32,
}

impl StatusSink for Hud {
    fn show(&mut self, level: u32, timer: u32) {
        self.level = level;
        self.timer = timer;
    }
}

// ── Public entry points ───────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    layout: &Layout,
    board: &Board,
    hud: &Hud,
    game_over: Option<GameOverCause>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, layout, hud)?;
    draw_border(out, layout)?;
    for entity in board.layers() {
        draw_entity(out, layout, entity)?;
    }
    draw_controls_hint(out, layout)?;

    if let Some(cause) = game_over {
        draw_game_over(out, layout, hud, cause)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, layout.bottom_border() + 1))?;
    out.flush()?;
    Ok(())
}

/// Title screen shown before the first game.
pub fn render_title<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    draw_border(out, layout)?;

    let lines: &[(&str, Color)] = &[
        ("$  COIN  DASH  $", Color::Yellow),
        ("", Color::White),
        ("Grab all 4 coins before the clock hits zero.", Color::White),
        ("Touch a red enemy and it's over.", Color::White),
        ("", Color::White),
        ("ENTER / SPACE : Start    Q : Quit", Color::DarkGrey),
    ];
    draw_centered(out, layout, lines)?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, layout: &Layout, hud: &Hud) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {:<3}", hud.level)))?;

    let timer_text = format!("Time: {:>2}", hud.timer);
    let timer_color = if hud.timer <= TIMER_WARNING {
        C_HUD_TIMER_LOW
    } else {
        C_HUD_TIMER
    };
    let tx = (layout.cols + 1).saturating_sub(timer_text.len() as u16);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(timer_color))?;
    out.queue(Print(timer_text))?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let w = layout.cols as usize;
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, layout.bottom_border()))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in 2..layout.bottom_border() {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(layout.cols + 1, row))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_entity<W: Write>(out: &mut W, layout: &Layout, entity: &Entity) -> std::io::Result<()> {
    let (glyph, color) = match entity.kind {
        EntityKind::Obstacle => ("▒", C_OBSTACLE),
        EntityKind::Coin => ("o", C_COIN),
        EntityKind::Enemy => ("█", C_ENEMY),
        EntityKind::Player => ("█", C_PLAYER),
    };
    let r = entity.rect;
    let (c0, c1) = (layout.col(r.x), layout.col(r.right() - 1));
    let (r0, r1) = (layout.row(r.y), layout.row(r.bottom() - 1));

    out.queue(style::SetForegroundColor(color))?;
    let span = glyph.repeat((c1 - c0 + 1) as usize);
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&span))?;
    }
    Ok(())
}

// ── Controls hint (below the arena) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, layout.bottom_border() + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Arrows / WASD : Move   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    layout: &Layout,
    hud: &Hud,
    cause: GameOverCause,
) -> std::io::Result<()> {
    let reason = match cause {
        GameOverCause::CaughtByEnemy => "Caught by an enemy!",
        GameOverCause::TimeUp => "Time's up!",
    };
    let reached = format!("You reached level {}", hud.level);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (reason, Color::Yellow),
        (reached.as_str(), Color::Yellow),
        ("Any key - Play Again  Q - Quit", Color::White),
    ];
    draw_centered(out, layout, lines)
}

fn draw_centered<W: Write>(
    out: &mut W,
    layout: &Layout,
    lines: &[(&str, Color)],
) -> std::io::Result<()> {
    let cx = layout.cols / 2 + 1;
    let start_row = (2 + layout.rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
