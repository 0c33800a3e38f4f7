//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::GameError;
use crate::geometry::Bounds;

#[derive(Debug, Clone, Parser)]
#[command(name = "coin_dash")]
#[command(about = "Collect the coins, dodge the enemies, beat the clock")]
pub struct Config {
    /// Arena width in game units
    #[arg(long, default_value_t = 400)]
    pub width: i32,

    /// Arena height in game units
    #[arg(long, default_value_t = 300)]
    pub height: i32,

    /// Game units per terminal column
    #[arg(long, default_value_t = 10)]
    pub cell_width: i32,

    /// Game units per terminal row
    #[arg(long, default_value_t = 20)]
    pub cell_height: i32,

    /// Fast tick period in milliseconds
    #[arg(long, default_value_t = 33)]
    pub frame_ms: u64,

    /// Seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            cell_width: 10,
            cell_height: 20,
            frame_ms: 33,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn bounds(&self) -> Result<Bounds, GameError> {
        Bounds::new(self.width, self.height)
    }

    pub fn frame_period(&self) -> Result<Duration, GameError> {
        if !(1..=1000).contains(&self.frame_ms) {
            return Err(GameError::FramePeriodOutOfRange(self.frame_ms));
        }
        Ok(Duration::from_millis(self.frame_ms))
    }

    /// Terminal columns and rows covered by the arena interior.
    pub fn grid_size(&self) -> Result<(u16, u16), GameError> {
        if self.cell_width <= 0 || self.cell_height <= 0 {
            return Err(GameError::ZeroCellSize {
                width: self.cell_width,
                height: self.cell_height,
            });
        }
        let bounds = self.bounds()?;
        let cols = div_ceil(bounds.width(), self.cell_width);
        let rows = div_ceil(bounds.height(), self.cell_height);
        Ok((
            u16::try_from(cols).unwrap_or(u16::MAX),
            u16::try_from(rows).unwrap_or(u16::MAX),
        ))
    }

    /// Check the whole configuration, including that a `cols` x `rows`
    /// terminal can show the arena plus its border, HUD and hint rows.
    pub fn validate(&self, cols: u16, rows: u16) -> Result<(), GameError> {
        self.frame_period()?;
        let (grid_cols, grid_rows) = self.grid_size()?;
        let need_cols = grid_cols.saturating_add(2);
        let need_rows = grid_rows.saturating_add(4);
        if cols < need_cols || rows < need_rows {
            return Err(GameError::TerminalTooSmall {
                cols,
                rows,
                need_cols,
                need_rows,
            });
        }
        Ok(())
    }
}

/// Both arguments must be positive.
fn div_ceil(a: i32, b: i32) -> i32 {
    (a - 1) / b + 1
}
