use thiserror::Error;

/// Everything that can go wrong outside of gameplay itself.
///
/// Losing is not an error: enemy contact and timer expiry are
/// [`GameStatus`](crate::entities::GameStatus) values.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("arena {width}x{height} is smaller than the {min}x{min} player")]
    ArenaTooSmall { width: i32, height: i32, min: i32 },

    #[error("cell size must be non-zero, got {width}x{height}")]
    ZeroCellSize { width: i32, height: i32 },

    #[error("frame period must be between 1 and 1000 ms, got {0} ms")]
    FramePeriodOutOfRange(u64),

    #[error("terminal is {cols}x{rows}, the arena needs at least {need_cols}x{need_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        need_cols: u16,
        need_rows: u16,
    },
}
