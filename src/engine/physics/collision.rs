// Collision resolution against static level geometry
//
// Horizontal movement is resolved first with a discrete overlap test against
// walls. A wall thinner than one tick of horizontal travel can be tunnelled
// through; platforms use a swept test instead.

use super::body::KinematicBody;
use super::level::LevelGeometry;
use crate::config::PhysicsConfig;
use crate::core::math::approx_equal;

/// Tolerance when checking whether feet still rest on a surface
const SUPPORT_EPSILON: f32 = 0.01;

/// Ladder-related intents for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClimbIntent {
    pub up: bool,
    pub down: bool,
    /// Whether this actor can use ladders at all
    pub allowed: bool,
}

impl ClimbIntent {
    pub fn none() -> Self {
        Self::default()
    }
}

/// What happened during one resolved step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The body came to rest on a surface this tick: a fall ending, or a
    /// climb up stepping onto a walkway. Climbing down to the floor does not count.
    pub landed: bool,
    /// The body was in climb mode this tick
    pub climbing: bool,
    /// A wall stopped horizontal movement
    pub blocked_by_wall: bool,
}

/// Integrate one tick of motion and resolve it against the level
pub fn resolve_step<L: LevelGeometry + ?Sized>(
    body: &mut KinematicBody,
    level: &L,
    physics: &PhysicsConfig,
    climb: ClimbIntent,
) -> StepOutcome {
    let was_on_ground = body.on_ground;

    let blocked_by_wall = resolve_horizontal(body, level);

    let climbing = match ladder_center(body, level, climb) {
        Some(center_x) => {
            body.hitbox.set_center_x(center_x);
            body.velocity.y = if climb.up {
                -physics.climb_speed
            } else if climb.down {
                physics.climb_speed
            } else {
                0.0
            };
            body.on_ground = false;
            true
        }
        None => false,
    };
    if body.on_ladder && !climbing && body.velocity.y < 0.0 {
        // Ran off the top of a ladder: climb speed is not a jump
        body.velocity.y = 0.0;
    }
    body.on_ladder = climbing;

    if !climbing {
        if body.on_ground && !is_supported(body, level) {
            log::trace!("Lost ground support at {:?}", body.hitbox);
            body.on_ground = false;
        }
        if !body.on_ground {
            body.velocity.y += physics.gravity;
        }
    }

    let topped_out = resolve_vertical(body, level, climbing);

    if climbing && body.on_ground {
        // Reached a floor or a walkway: step off the ladder
        body.on_ladder = false;
    }

    StepOutcome {
        landed: (!was_on_ground && body.on_ground && !climbing) || topped_out,
        climbing,
        blocked_by_wall,
    }
}

/// Apply horizontal velocity, clamp to the left boundary, and snap out of walls
fn resolve_horizontal<L: LevelGeometry + ?Sized>(body: &mut KinematicBody, level: &L) -> bool {
    let vx = body.velocity.x;
    body.hitbox.x += vx;

    let left_bound = level.left_bound();
    if body.hitbox.left() < left_bound {
        body.hitbox.set_left(left_bound);
    }

    let mut blocked = false;
    for wall in level.walls() {
        if !body.hitbox.overlaps(wall) {
            continue;
        }
        if vx > 0.0 {
            body.hitbox.set_right(wall.left());
            blocked = true;
        } else if vx < 0.0 {
            body.hitbox.set_left(wall.right());
            blocked = true;
        }
    }
    blocked
}

/// Center x of the ladder this body climbs this tick, if any.
///
/// Climbing needs an overlapping ladder and either a vertical intent or an
/// ongoing climb from the previous tick. Up only starts a climb while some
/// ladder is left above the body's head.
fn ladder_center<L: LevelGeometry + ?Sized>(
    body: &KinematicBody,
    level: &L,
    climb: ClimbIntent,
) -> Option<f32> {
    if !climb.allowed || !(climb.up || climb.down || body.on_ladder) {
        return None;
    }
    let mounting_up = climb.up && !climb.down && !body.on_ladder;
    level
        .ladders()
        .find(|ladder| {
            body.hitbox.overlaps(ladder) && !(mounting_up && ladder.top() >= body.hitbox.top())
        })
        .map(|ladder| ladder.center_x())
}

/// Apply vertical velocity, then clamp to the floor or land on a platform.
///
/// Returns true when a body climbing up stepped onto a platform top.
fn resolve_vertical<L: LevelGeometry + ?Sized>(
    body: &mut KinematicBody,
    level: &L,
    climbing: bool,
) -> bool {
    let previous_bottom = body.hitbox.bottom();
    body.hitbox.y += body.velocity.y;

    let floor_y = level.floor_y();
    if body.hitbox.bottom() >= floor_y {
        body.hitbox.set_bottom(floor_y);
        body.velocity.y = 0.0;
        body.on_ground = true;
        return false;
    }

    if climbing && body.velocity.y < 0.0 {
        let bottom = body.hitbox.bottom();
        let walkway = level.platforms().find(|platform| {
            body.hitbox.h_overlaps(platform)
                && platform.top() < previous_bottom
                && platform.top() >= bottom
        });
        if let Some(platform) = walkway {
            body.hitbox.set_bottom(platform.top());
            body.velocity.y = 0.0;
            body.on_ground = true;
            return true;
        }
        return false;
    }

    // Climbing down passes through platforms; only falling bodies can land
    if climbing || body.velocity.y < 0.0 {
        return false;
    }

    let bottom = body.hitbox.bottom();
    let landing = level.platforms().find(|platform| {
        body.hitbox.h_overlaps(platform) && platform.top() >= previous_bottom && platform.top() < bottom
    });
    if let Some(platform) = landing {
        body.hitbox.set_bottom(platform.top());
        body.velocity.y = 0.0;
        body.on_ground = true;
    }
    false
}

/// Whether the body's feet still rest on the floor or a platform top
fn is_supported<L: LevelGeometry + ?Sized>(body: &KinematicBody, level: &L) -> bool {
    let feet = body.hitbox.bottom();
    if feet >= level.floor_y() - SUPPORT_EPSILON {
        return true;
    }
    level.platforms().any(|platform| {
        body.hitbox.h_overlaps(platform) && approx_equal(platform.top(), feet, SUPPORT_EPSILON)
    })
}
