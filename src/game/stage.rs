// Stage layouts and their starting cast

use crate::core::Rect;
use crate::engine::physics::{Collidable, Level, LevelGeometry};

use super::characters::Archetype;
use super::world::World;

/// Height of the playfield; the floor sits at its bottom edge
pub const SCREEN_HEIGHT: f32 = 240.0;
pub const SCREEN_WIDTH: f32 = 320.0;

const PLATFORM_WIDTH: f32 = 32.0;
const PLATFORM_HEIGHT: f32 = 16.0;
const WALL_WIDTH: f32 = 16.0;
const WALL_HEIGHT: f32 = 48.0;
const LADDER_WIDTH: f32 = 16.0;
/// Ladders poke above the walkway they serve so climbing down can start
/// from on top of it
const LADDER_OVERHANG: f32 = 8.0;

/// Bottom center of each platform in stage one
const STAGE_ONE_PLATFORMS: [(f32, f32); 10] = [
    (60.0, 192.0),
    (120.0, 128.0),
    (160.0, 128.0),
    (360.0, 128.0),
    (440.0, 128.0),
    (540.0, 192.0),
    (720.0, 144.0),
    (800.0, 144.0),
    (1040.0, 120.0),
    (1120.0, 120.0),
];

/// Center x of each wall in stage one, all standing on the floor
const STAGE_ONE_WALLS: [f32; 2] = [600.0, 1080.0];

/// Where the party enters stage one
pub const STAGE_ONE_PLAYER_SPAWN: (f32, f32) = (160.0, SCREEN_HEIGHT);
pub const STAGE_ONE_PARTY: [Archetype; 2] = [Archetype::Oishi, Archetype::Koji];

/// An enemy placed at level start
#[derive(Debug, Clone, PartialEq)]
pub struct EnemySpawn {
    pub archetype: Archetype,
    pub center_x: f32,
    pub bottom: f32,
    pub patrol_left: f32,
    pub patrol_right: f32,
}

impl EnemySpawn {
    fn tengu(center_x: f32, bottom: f32, patrol_left: f32, patrol_right: f32) -> Self {
        Self {
            archetype: Archetype::Tengu,
            center_x,
            bottom,
            patrol_left,
            patrol_right,
        }
    }
}

fn platform_at(center_x: f32, bottom: f32) -> Rect {
    Rect::from_midbottom(center_x, bottom, PLATFORM_WIDTH, PLATFORM_HEIGHT)
}

/// Ladder from the floor up to the top of the walkway centered on `center_x`
fn ladder_to(center_x: f32, walkway_top: f32) -> Rect {
    let top = walkway_top - LADDER_OVERHANG;
    Rect::new(center_x - LADDER_WIDTH / 2.0, top, LADDER_WIDTH, SCREEN_HEIGHT - top)
}

/// Build the geometry of the first stage
pub fn stage_one() -> Level {
    let mut level = Level::new(SCREEN_HEIGHT);

    for (x, bottom) in STAGE_ONE_PLATFORMS {
        level.add(Collidable::platform(platform_at(x, bottom)));
    }
    for x in STAGE_ONE_WALLS {
        level.add(Collidable::wall(Rect::from_midbottom(
            x,
            SCREEN_HEIGHT,
            WALL_WIDTH,
            WALL_HEIGHT,
        )));
    }
    for (x, bottom) in [STAGE_ONE_PLATFORMS[1], STAGE_ONE_PLATFORMS[9]] {
        level.add(Collidable::ladder(ladder_to(x, bottom - PLATFORM_HEIGHT)));
    }

    level
}

/// Enemies guarding the first stage
pub fn stage_one_enemies() -> Vec<EnemySpawn> {
    vec![
        EnemySpawn::tengu(260.0, SCREEN_HEIGHT, 200.0, 300.0),
        // On the walkway at x 344..376
        EnemySpawn::tengu(360.0, 112.0, 344.0, 360.0),
        EnemySpawn::tengu(760.0, SCREEN_HEIGHT, 680.0, 840.0),
    ]
}

/// Place the party and the enemies of stage one into `world`
pub fn populate_stage_one<L: LevelGeometry>(world: &mut World<L>) {
    let (x, bottom) = STAGE_ONE_PLAYER_SPAWN;
    for archetype in STAGE_ONE_PARTY {
        world.spawn_player(archetype, x, bottom);
    }
    for spawn in stage_one_enemies() {
        world.spawn_enemy(&spawn);
    }
    log::info!(
        "Stage one ready: {} collidables, {} enemies",
        world.level().collidables().len(),
        world.enemies().len()
    );
}
