use crate::core::Rect;
use glam::Vec2;

/// Per-actor kinematic state
///
/// The hitbox is the only authority for physics and collision; sprites are
/// anchored to its midbottom by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    /// Collision rectangle
    pub hitbox: Rect,
    /// Velocity in px/tick
    pub velocity: Vec2,
    /// Standing on the floor or a platform
    pub on_ground: bool,
    /// Climbing a ladder this tick
    pub on_ladder: bool,
}

impl KinematicBody {
    /// Create a body at rest with the hitbox's feet at `(center_x, bottom)`
    pub fn at_midbottom(center_x: f32, bottom: f32, width: f32, height: f32) -> Self {
        Self {
            hitbox: Rect::from_midbottom(center_x, bottom, width, height),
            velocity: Vec2::ZERO,
            on_ground: false,
            on_ladder: false,
        }
    }

    /// Neither grounded nor climbing
    pub fn is_airborne(&self) -> bool {
        !self.on_ground && !self.on_ladder
    }

    /// Move the body so its feet sit at `(center_x, bottom)`, keeping size
    pub fn teleport(&mut self, center_x: f32, bottom: f32) {
        self.hitbox.set_center_x(center_x);
        self.hitbox.set_bottom(bottom);
        self.velocity = Vec2::ZERO;
        self.on_ladder = false;
    }
}
