use serde::{Deserialize, Serialize};

/// Axis-aligned screen rectangle in integer pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x0: i32,
    pub y0: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x0: i32, y0: i32, width: i32, height: i32) -> Self {
        Self { x0, y0, width, height }
    }

    /// Right edge (exclusive).
    pub fn x1(&self) -> i32 {
        self.x0 + self.width
    }

    /// Bottom edge (exclusive).
    pub fn y1(&self) -> i32 {
        self.y0 + self.height
    }

    /// Returns true if the point lies inside. Left/top edges are inclusive,
    /// right/bottom edges exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1() && y >= self.y0 && y < self.y1()
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.width, self.height)
    }

    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.x0 < other.x1() && other.x0 < self.x1() && self.y0 < other.y1() && other.y0 < self.y1()
    }
}
