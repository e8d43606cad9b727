// =============================================================================
// NOTE.RS — Lanes, note entities and hit-zone overlap
// =============================================================================

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the two independent note tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Right,
}

/// Axis-aligned rectangle in playfield pixels (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline] pub fn left(&self) -> f32 { self.x }
    #[inline] pub fn right(&self) -> f32 { self.x + self.w }
    #[inline] pub fn top(&self) -> f32 { self.y }
    #[inline] pub fn bottom(&self) -> f32 { self.y + self.h }

    /// Inclusive point test, used for pointer clicks on buttons.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.left() <= px && px <= self.right() && self.top() <= py && py <= self.bottom()
    }

    /// Overlap test between a moving note (`self`) and a hit zone.
    ///
    /// The zone's bottom edge is extended by `tolerance`; the other three
    /// edges are exact. Only the zone's lower bound gets the margin.
    pub fn overlaps_zone(&self, zone: &Rect, tolerance: f32) -> bool {
        self.left() <= zone.right()
            && self.right() >= zone.left()
            && self.top() <= zone.bottom() + tolerance
            && self.bottom() >= zone.top()
    }
}

/// A single scrolling note.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub lane: Lane,
    /// Top-left corner.
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Note {
    pub fn new(lane: Lane, position: Vec2, velocity: Vec2, size: Vec2) -> Self {
        Self { lane, position, velocity, size }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// True once the leading (left) edge has crossed `x = 0`.
    pub fn has_exited(&self) -> bool {
        self.position.x < 0.0
    }
}
