//! The game loop: one running game plus the drivers that move it forward.
//!
//! A [`Session`] owns the state, the arena, the RNG and the scheduler.  The
//! host feeds it input and "now"; the session decides which pulses run,
//! keeps the arena in sync and reports game over exactly once.

use std::time::Duration;

use rand::Rng;

use crate::arena::{self, Arena};
use crate::clock::{Pulse, Scheduler};
use crate::compute::{count_down, init_state, move_player, restart, tick};
use crate::entities::{Direction, GameOverCause, GameState};
use crate::error::GameError;

/// Receives the level and countdown values to show.  No logic lives here.
pub trait StatusSink {
    fn show(&mut self, level: u32, timer: u32);
}

pub struct Session<A: Arena, R: Rng> {
    state: GameState,
    arena: A,
    rng: R,
    scheduler: Scheduler,
    shown: Option<(u32, u32)>,
}

impl<A: Arena, R: Rng> Session<A, R> {
    /// Start a game sized to `arena`, with both drivers running from `now`.
    pub fn new(
        mut arena: A,
        mut rng: R,
        frame_period: Duration,
        now: Duration,
    ) -> Result<Self, GameError> {
        let bounds = arena.bounds()?;
        let state = init_state(bounds, &mut rng);
        arena::sync(&mut arena, None, &state);
        Ok(Self {
            state,
            arena,
            rng,
            scheduler: Scheduler::new(frame_period, now),
            shown: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn arena(&self) -> &A {
        &self.arena
    }

    /// When the next pulse is due; hosts sleep until then.
    pub fn next_deadline(&self) -> Duration {
        self.scheduler.next_deadline()
    }

    /// Apply one directional input immediately.  Ignored once the game is over.
    pub fn handle_input(&mut self, dir: Direction) {
        let next = move_player(&self.state, dir);
        self.commit(next);
    }

    /// Run every pulse due by `now`.  Returns the cause the moment the game
    /// ends; pulses still queued behind it are dropped.  Once over, the
    /// session stays idle until [`restart`](Self::restart).
    pub fn run_due(&mut self, now: Duration, sink: &mut impl StatusSink) -> Option<GameOverCause> {
        if !self.state.is_playing() {
            return None;
        }
        for pulse in self.scheduler.poll(now) {
            let next = match pulse {
                Pulse::Frame => tick(&self.state, &mut self.rng),
                Pulse::Second => count_down(&self.state),
            };
            self.commit(next);
            self.publish(sink);
            if let Some(cause) = self.state.game_over() {
                return Some(cause);
            }
        }
        None
    }

    /// Full reset to level 1, with both drivers restarted from `now`.
    pub fn restart(&mut self, now: Duration) {
        let next = restart(&self.state, &mut self.rng);
        self.commit(next);
        self.scheduler.restart(now);
    }

    /// Push level and timer to `sink` if either changed since last time.
    pub fn publish(&mut self, sink: &mut impl StatusSink) {
        let current = (self.state.level, self.state.timer);
        if self.shown != Some(current) {
            log::debug!("level {} with {}s left", current.0, current.1);
            sink.show(current.0, current.1);
            self.shown = Some(current);
        }
    }

    fn commit(&mut self, next: GameState) {
        arena::sync(&mut self.arena, Some(&self.state), &next);
        self.state = next;
    }
}
