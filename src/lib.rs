//! Coin Dash: collect every coin in the arena before the clock runs out,
//! without touching a roaming enemy.
//!
//! The library holds all game logic and is free of terminal I/O; the
//! `coin_dash` binary supplies input, rendering and the game-over notice.

pub mod arena;
pub mod clock;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod session;
pub mod spawn;

pub use error::GameError;
