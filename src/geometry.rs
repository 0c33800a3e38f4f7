//! Axis-aligned rectangles in integer arena units.

use crate::entities::PLAYER_SIZE;
use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Same size, new top-left corner.
    pub fn at(&self, x: i32, y: i32) -> Self {
        Self { x, y, ..*self }
    }

    /// Closed-interval overlap: rectangles sharing only an edge still touch.
    /// Used for pickups and enemy contact.
    pub fn touches(&self, other: &Rect) -> bool {
        !(self.bottom() < other.y
            || self.y > other.bottom()
            || self.right() < other.x
            || self.x > other.right())
    }

    /// Half-open overlap: shared edges do not count.
    /// Used when testing a player move against obstacles.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || self.x >= other.right()
            || self.bottom() <= other.y
            || self.y >= other.bottom())
    }
}

// ── Arena bounds ─────────────────────────────────────────────────────────────

/// Validated arena size.  Always large enough to hold the player, which is
/// the largest fixed-size entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: i32,
    height: i32,
}

impl Bounds {
    pub fn new(width: i32, height: i32) -> Result<Self, GameError> {
        if width < PLAYER_SIZE || height < PLAYER_SIZE {
            return Err(GameError::ArenaTooSmall {
                width,
                height,
                min: PLAYER_SIZE,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Largest legal `x` for something `w` wide; negative if it cannot fit.
    pub fn max_x(&self, w: i32) -> i32 {
        self.width - w
    }

    pub fn max_y(&self, h: i32) -> i32 {
        self.height - h
    }

    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0 && rect.y >= 0 && rect.right() <= self.width && rect.bottom() <= self.height
    }

    /// Pull `rect` back inside the arena, keeping its size.
    pub fn clamp(&self, rect: Rect) -> Rect {
        rect.at(
            rect.x.clamp(0, self.max_x(rect.w).max(0)),
            rect.y.clamp(0, self.max_y(rect.h).max(0)),
        )
    }
}
