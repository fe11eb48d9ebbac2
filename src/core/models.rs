use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Axis-aligned screen rectangle in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self { top, left, width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Moves the box by `dy` down and `dx` right, keeping its size.
    pub fn translated(&self, dy: f32, dx: f32) -> Self {
        Self { top: self.top + dy, left: self.left + dx, ..*self }
    }

    /// Component-wise interpolation; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &BoundingBox, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            top: mix(self.top, other.top),
            left: mix(self.left, other.left),
            width: mix(self.width, other.width),
            height: mix(self.height, other.height),
        }
    }

    /// Scales the box around its centre.
    pub fn scaled(&self, factor: f32) -> Self {
        let (cx, cy) = self.center();
        let width = self.width * factor;
        let height = self.height * factor;
        Self { top: cy - height * 0.5, left: cx - width * 0.5, width, height }
    }
}

/// The card currently flying towards the bookmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub card_id: CardId,
    pub source: BoundingBox,
    pub dest: BoundingBox,
    /// Board clock time of the activation, in seconds.
    pub started_at: f64,
}

impl FlightState {
    pub fn elapsed(&self, now: f64) -> f64 {
        (now - self.started_at).max(0.0)
    }
}
