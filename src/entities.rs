//! All game entity types: plain data records, no logic.
//!
//! Entities carry no rendering handle.  Whatever draws the arena maps these
//! records onto visuals through the [`Arena`](crate::arena::Arena) trait.

use crate::geometry::{Bounds, Rect};

// ── Gameplay constants ───────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 20;
pub const COIN_SIZE: i32 = 10;
pub const ENEMY_SIZE: i32 = 20;
pub const OBSTACLE_MIN_SIZE: i32 = 30;
pub const OBSTACLE_MAX_SIZE: i32 = 60;

pub const COINS_PER_LEVEL: usize = 4;
/// Obstacles per level are `BASE_OBSTACLES + level`, capped here.
pub const MAX_OBSTACLES: usize = 8;
pub const BASE_OBSTACLES: usize = 3;

/// Obstacles keep at least this far (on one axis) from the player spawn.
pub const SPAWN_CLEARANCE: i32 = 60;

pub const PLAYER_STEP: i32 = 20;
pub const ENEMY_STEP: i32 = 6;

/// Seconds on the clock at the start of every level.
pub const LEVEL_SECONDS: u32 = 60;

// ── Entity records ───────────────────────────────────────────────────────────

pub type EntityId = u32;

/// Hands out ids that stay unique for the lifetime of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdSeq(EntityId);

impl IdSeq {
    pub fn fresh(&mut self) -> EntityId {
        self.0 += 1;
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Obstacle,
    Coin,
    Enemy,
    Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub rect: Rect,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, rect: Rect) -> Self {
        Self { id, kind, rect }
    }
}

// ── Input ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector with +y pointing down the screen.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverCause {
    CaughtByEnemy,
    TimeUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(GameOverCause),
}

// ── Master game state ────────────────────────────────────────────────────────

/// Everything in play.  Cloneable so the update functions in
/// [`compute`](crate::compute) can return a new copy without mutating the
/// original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub bounds: Bounds,
    pub player: Entity,
    pub coins: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub obstacles: Vec<Entity>,
    pub level: u32,
    /// Seconds left on the countdown.
    pub timer: u32,
    pub status: GameStatus,
    /// Fast ticks run since the game started.
    pub frame: u64,
    pub ids: IdSeq,
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// The cause, if the game has ended.
    pub fn game_over(&self) -> Option<GameOverCause> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::GameOver(cause) => Some(cause),
        }
    }

    /// Every entity in play, back to front: obstacles, coins, enemies, player.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.obstacles
            .iter()
            .chain(&self.coins)
            .chain(&self.enemies)
            .chain(std::iter::once(&self.player))
    }
}
