//! Entity spawner.
//!
//! Each function creates one category of entity for a level.  Randomness
//! comes only from the injected `rng`, so a seeded RNG reproduces a level
//! exactly.

use rand::Rng;

use crate::entities::{
    Entity, EntityKind, IdSeq, BASE_OBSTACLES, COINS_PER_LEVEL, COIN_SIZE, ENEMY_SIZE,
    MAX_OBSTACLES, OBSTACLE_MAX_SIZE, OBSTACLE_MIN_SIZE, PLAYER_SIZE, SPAWN_CLEARANCE,
};
use crate::geometry::{Bounds, Rect};

/// Placement attempts per obstacle before it is dropped from the level.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

/// Top-left corner of the player at spawn: centred in the arena.
pub fn player_spawn_point(bounds: Bounds) -> (i32, i32) {
    (
        (bounds.width() - PLAYER_SIZE) / 2,
        (bounds.height() - PLAYER_SIZE) / 2,
    )
}

pub fn spawn_player(bounds: Bounds, ids: &mut IdSeq) -> Entity {
    let (x, y) = player_spawn_point(bounds);
    Entity::new(
        ids.fresh(),
        EntityKind::Player,
        Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
    )
}

/// Scatter coins uniformly.  They may land on anything, obstacles included.
pub fn spawn_coins(bounds: Bounds, ids: &mut IdSeq, rng: &mut impl Rng) -> Vec<Entity> {
    (0..COINS_PER_LEVEL)
        .map(|_| {
            let x = rng.gen_range(0..=bounds.max_x(COIN_SIZE));
            let y = rng.gen_range(0..=bounds.max_y(COIN_SIZE));
            Entity::new(
                ids.fresh(),
                EntityKind::Coin,
                Rect::new(x, y, COIN_SIZE, COIN_SIZE),
            )
        })
        .collect()
}

/// Snap a candidate enemy position onto the nearest wall on each axis, so
/// the result is always against a wall and usually in a corner.
pub fn snap_to_walls(bounds: Bounds, x: i32, y: i32) -> (i32, i32) {
    let x = if x < bounds.width() - x {
        0
    } else {
        bounds.max_x(ENEMY_SIZE)
    };
    let y = if y < bounds.height() - y {
        0
    } else {
        bounds.max_y(ENEMY_SIZE)
    };
    (x, y)
}

/// One enemy per level number, each anchored to the walls.
pub fn spawn_enemies(
    bounds: Bounds,
    level: u32,
    ids: &mut IdSeq,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    (0..level)
        .map(|_| {
            let x = rng.gen_range(0..=bounds.max_x(ENEMY_SIZE));
            let y = rng.gen_range(0..=bounds.max_y(ENEMY_SIZE));
            let (x, y) = snap_to_walls(bounds, x, y);
            Entity::new(
                ids.fresh(),
                EntityKind::Enemy,
                Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            )
        })
        .collect()
}

pub fn obstacle_count(level: u32) -> usize {
    (BASE_OBSTACLES + level as usize).min(MAX_OBSTACLES)
}

/// True unless `(x, y)` lies within the clearance box on *both* axes around
/// the player spawn point.
pub fn clear_of_spawn(bounds: Bounds, x: i32, y: i32) -> bool {
    let (px, py) = player_spawn_point(bounds);
    !((x - px).abs() < SPAWN_CLEARANCE && (y - py).abs() < SPAWN_CLEARANCE)
}

/// Randomly sized obstacles kept away from the player spawn.
///
/// Placement is rejection sampling capped at [`MAX_PLACEMENT_ATTEMPTS`].  An
/// obstacle that finds no legal spot, or that is larger than the arena, is
/// skipped, so small arenas get fewer obstacles instead of hanging.
pub fn spawn_obstacles(
    bounds: Bounds,
    level: u32,
    ids: &mut IdSeq,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    let wanted = obstacle_count(level);
    let mut obstacles = Vec::with_capacity(wanted);

    for _ in 0..wanted {
        let w = rng.gen_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE);
        let h = rng.gen_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE);
        match place_obstacle(bounds, w, h, rng) {
            Some((x, y)) => {
                obstacles.push(Entity::new(
                    ids.fresh(),
                    EntityKind::Obstacle,
                    Rect::new(x, y, w, h),
                ));
            }
            None => {
                log::warn!(
                    "no room for a {}x{} obstacle in a {}x{} arena, skipping it",
                    w,
                    h,
                    bounds.width(),
                    bounds.height()
                );
            }
        }
    }

    obstacles
}

fn place_obstacle(bounds: Bounds, w: i32, h: i32, rng: &mut impl Rng) -> Option<(i32, i32)> {
    let (max_x, max_y) = (bounds.max_x(w), bounds.max_y(h));
    if max_x < 0 || max_y < 0 {
        return None;
    }
    (0..MAX_PLACEMENT_ATTEMPTS)
        .map(|_| (rng.gen_range(0..=max_x), rng.gen_range(0..=max_y)))
        .find(|&(x, y)| clear_of_spawn(bounds, x, y))
}
