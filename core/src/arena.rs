use crate::types::{RingBounds, Vec2};

/// Clamp a position into the ring.
///
/// Y is clamped first; the allowed X range then depends on the clamped Y,
/// shrinking by `y / slope` from both sides so the ring reads as a tilted
/// trapezoid.
pub fn clamp_to_ring(position: Vec2, ring: &RingBounds) -> Vec2 {
    let y = position.y.clamp(ring.min_y, ring.max_y);

    let left = y / ring.slope + ring.min_x;
    let right = -y / ring.slope + ring.max_x;
    let mut x = position.x;
    if x < left {
        x = left;
    } else if x > right {
        x = right;
    }

    Vec2 { x, y }
}

impl RingBounds {
    pub fn clamp(&self, position: Vec2) -> Vec2 {
        clamp_to_ring(position, self)
    }
}
