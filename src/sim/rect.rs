//! Axis-aligned rectangle geometry
//!
//! Every entity in the game is a `Rect`: the player, the enemies, and the
//! blocks. Screen coordinates, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle. `pos` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Overlap test with strict inequalities: rectangles that merely touch
    /// edges do not overlap. An entity resting flush against a wall is not
    /// colliding with it.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }

    /// Copy of this rectangle shifted by `delta`
    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let b = Rect::new(16.0, 16.0, 32.0, 32.0);
        let c = Rect::new(100.0, 100.0, 32.0, 32.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 32.0, 32.0);
        // Flush on the right edge, and flush diagonally at the corner
        let right = Rect::new(32.0, 0.0, 32.0, 32.0);
        let corner = Rect::new(32.0, 32.0, 32.0, 32.0);

        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(10.0, 20.0, 32.0, 32.0);
        let moved = r.translated(Vec2::new(5.0, -3.0));
        assert_eq!(moved.pos, Vec2::new(15.0, 17.0));
        assert_eq!(moved.size, r.size);
    }

    #[test]
    fn test_center() {
        let r = Rect::new(0.0, 0.0, 32.0, 32.0);
        assert_eq!(r.center(), Vec2::new(16.0, 16.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_rect_overlaps_itself(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
        ) {
            let r = Rect::new(x, y, w, h);
            prop_assert!(r.overlaps(&r));
        }

        #[test]
        fn prop_disjoint_on_x_axis_never_overlap(
            y in -500.0f32..500.0,
            w in 1.0f32..100.0, h in 1.0f32..100.0,
            gap in 0.0f32..100.0,
        ) {
            let a = Rect::new(0.0, y, w, h);
            let b = Rect::new(w + gap, y, w, h);
            prop_assert!(!a.overlaps(&b));
        }
    }
}
