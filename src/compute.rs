//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! [`GameState`] (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::entities::{
    Direction, Entity, GameOverCause, GameState, GameStatus, IdSeq, ENEMY_STEP, LEVEL_SECONDS,
    PLAYER_STEP,
};
use crate::geometry::{Bounds, Rect};
use crate::spawn::{spawn_coins, spawn_enemies, spawn_obstacles, spawn_player};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh game at level 1.
pub fn init_state(bounds: Bounds, rng: &mut impl Rng) -> GameState {
    let state = populate(bounds, 1, IdSeq::default(), rng);
    log::info!("new game in a {}x{} arena", bounds.width(), bounds.height());
    state
}

/// Throw the current game away and start again from level 1.
pub fn restart(state: &GameState, rng: &mut impl Rng) -> GameState {
    log::info!("restarting after reaching level {}", state.level);
    // Ids keep counting so an arena never confuses old and new entities.
    populate(state.bounds, 1, state.ids.clone(), rng)
}

/// Spawn every category for `level` with a full clock.
fn populate(bounds: Bounds, level: u32, mut ids: IdSeq, rng: &mut impl Rng) -> GameState {
    let player = spawn_player(bounds, &mut ids);
    let coins = spawn_coins(bounds, &mut ids, rng);
    let enemies = spawn_enemies(bounds, level, &mut ids, rng);
    let obstacles = spawn_obstacles(bounds, level, &mut ids, rng);
    log::debug!(
        "level {}: {} coins, {} enemies, {} obstacles",
        level,
        coins.len(),
        enemies.len(),
        obstacles.len()
    );
    GameState {
        bounds,
        player,
        coins,
        enemies,
        obstacles,
        level,
        timer: LEVEL_SECONDS,
        status: GameStatus::Playing,
        frame: 0,
        ids,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Step the player one move in `dir`, clamped to the arena.  A move that
/// would overlap any obstacle is rejected outright: no sliding.
pub fn move_player(state: &GameState, dir: Direction) -> GameState {
    if !state.is_playing() {
        return state.clone();
    }
    let (dx, dy) = dir.delta();
    let current = state.player.rect;
    let candidate = state.bounds.clamp(
        current.at(current.x + dx * PLAYER_STEP, current.y + dy * PLAYER_STEP),
    );
    if blocked_by_obstacle(state, &candidate) {
        return state.clone();
    }
    GameState {
        player: Entity {
            rect: candidate,
            ..state.player
        },
        ..state.clone()
    }
}

pub fn blocked_by_obstacle(state: &GameState, rect: &Rect) -> bool {
    state.obstacles.iter().any(|o| rect.overlaps(&o.rect))
}

// ── Per-frame tick (nearly pure, RNG is injected) ───────────────────────────

/// Advance the simulation by one fast tick: enemies move, then collisions
/// are resolved.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.is_playing() {
        return state.clone();
    }
    let moved = move_enemies(state, rng);
    let mut next = detect_collisions(&moved, rng);
    next.frame = state.frame + 1;
    next
}

/// Each enemy takes one step in a random cardinal direction, clamped to the
/// arena.  Enemies ignore each other and the obstacles.
pub fn move_enemies(state: &GameState, rng: &mut impl Rng) -> GameState {
    let enemies = state
        .enemies
        .iter()
        .map(|e| {
            let (dx, dy) = Direction::ALL[rng.gen_range(0..Direction::ALL.len())].delta();
            let rect = e.rect.at(e.rect.x + dx * ENEMY_STEP, e.rect.y + dy * ENEMY_STEP);
            Entity {
                rect: state.bounds.clamp(rect),
                ..*e
            }
        })
        .collect();
    GameState {
        enemies,
        ..state.clone()
    }
}

/// Collect touched coins, advance the level if that empties the coin set,
/// then check the player against every enemy.
pub fn detect_collisions(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.is_playing() {
        return state.clone();
    }

    // ── 1. Coin pickups ──────────────────────────────────────────────────────
    let player = state.player.rect;
    let coins: Vec<Entity> = state
        .coins
        .iter()
        .filter(|c| !player.touches(&c.rect))
        .copied()
        .collect();
    let picked = state.coins.len() - coins.len();
    if picked > 0 {
        log::trace!("picked up {} coin(s), {} left", picked, coins.len());
    }

    let state = if picked > 0 && coins.is_empty() {
        advance_level(state, rng)
    } else {
        GameState {
            coins,
            ..state.clone()
        }
    };

    // ── 2. Enemy contact ─────────────────────────────────────────────────────
    let player = state.player.rect;
    if state.enemies.iter().any(|e| player.touches(&e.rect)) {
        return end_game(&state, GameOverCause::CaughtByEnemy);
    }
    state
}

/// Next level: clock back to full, every entity cleared and respawned with
/// the new level's counts.
pub fn advance_level(state: &GameState, rng: &mut impl Rng) -> GameState {
    let level = state.level + 1;
    log::info!("level {} cleared, advancing to {}", state.level, level);
    GameState {
        frame: state.frame,
        ..populate(state.bounds, level, state.ids.clone(), rng)
    }
}

// ── Countdown ────────────────────────────────────────────────────────────────

/// One second off the clock.  Reaching zero ends the game.
pub fn count_down(state: &GameState) -> GameState {
    if !state.is_playing() {
        return state.clone();
    }
    let timer = state.timer.saturating_sub(1);
    let next = GameState {
        timer,
        ..state.clone()
    };
    if timer == 0 {
        return end_game(&next, GameOverCause::TimeUp);
    }
    next
}

fn end_game(state: &GameState, cause: GameOverCause) -> GameState {
    log::info!("game over on level {}: {:?}", state.level, cause);
    GameState {
        status: GameStatus::GameOver(cause),
        ..state.clone()
    }
}
