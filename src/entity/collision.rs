//! Axis-aligned box overlap between actors and pellets.

use glam::Vec2;

/// Returns `true` if two axis-aligned boxes overlap with positive area.
///
/// Boxes that merely touch along an edge do not overlap.
pub fn boxes_overlap(a_center: Vec2, a_size: Vec2, b_center: Vec2, b_size: Vec2) -> bool {
    let reach = (a_size + b_size) / 2.0;
    let gap = (a_center - b_center).abs();
    gap.x < reach.x && gap.y < reach.y
}

/// Trait for anything that takes part in overlap checks.
pub trait Collidable {
    /// Center of the collision box, in pixels.
    fn center(&self) -> Vec2;

    /// Width and height of the collision box, in pixels.
    fn size(&self) -> Vec2;

    /// Checks if this box overlaps another.
    fn is_colliding_with(&self, other: &dyn Collidable) -> bool {
        boxes_overlap(self.center(), self.size(), other.center(), other.size())
    }
}
