use crate::core::Rect;

/// What kind of obstacle a collidable rectangle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollidableKind {
    /// One-way surface: only blocks from above while falling
    Platform,
    /// Climbable area: suspends gravity while climbing
    Ladder,
    /// Solid vertical obstacle: blocks horizontal movement
    Wall,
}

/// A static obstacle owned by the level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collidable {
    pub rect: Rect,
    pub kind: CollidableKind,
}

impl Collidable {
    pub fn platform(rect: Rect) -> Self {
        Self {
            rect,
            kind: CollidableKind::Platform,
        }
    }

    pub fn ladder(rect: Rect) -> Self {
        Self {
            rect,
            kind: CollidableKind::Ladder,
        }
    }

    pub fn wall(rect: Rect) -> Self {
        Self {
            rect,
            kind: CollidableKind::Wall,
        }
    }
}

/// Source of static level geometry
///
/// Collidables are read-only for the lifetime of the level. Iteration order
/// of `collidables()` is the tie-break order for platform landings.
pub trait LevelGeometry {
    /// All obstacles in the active level segment
    fn collidables(&self) -> &[Collidable];

    /// The y coordinate of the level floor
    fn floor_y(&self) -> f32;

    /// Leftmost x coordinate an actor may occupy
    fn left_bound(&self) -> f32 {
        0.0
    }

    /// Usable obstacles of one kind, in level order. Degenerate rects are skipped.
    fn of_kind(&self, kind: CollidableKind) -> Box<dyn Iterator<Item = &Rect> + '_> {
        Box::new(
            self.collidables()
                .iter()
                .filter(move |c| c.kind == kind && !c.rect.is_degenerate())
                .map(|c| &c.rect),
        )
    }

    fn platforms(&self) -> Box<dyn Iterator<Item = &Rect> + '_> {
        self.of_kind(CollidableKind::Platform)
    }

    fn ladders(&self) -> Box<dyn Iterator<Item = &Rect> + '_> {
        self.of_kind(CollidableKind::Ladder)
    }

    fn walls(&self) -> Box<dyn Iterator<Item = &Rect> + '_> {
        self.of_kind(CollidableKind::Wall)
    }
}

/// In-memory level geometry
#[derive(Debug, Clone)]
pub struct Level {
    collidables: Vec<Collidable>,
    floor_y: f32,
}

impl Level {
    pub fn new(floor_y: f32) -> Self {
        Self {
            collidables: Vec::new(),
            floor_y,
        }
    }

    pub fn with(mut self, collidable: Collidable) -> Self {
        self.collidables.push(collidable);
        self
    }

    pub fn add(&mut self, collidable: Collidable) {
        self.collidables.push(collidable);
    }
}

impl LevelGeometry for Level {
    fn collidables(&self) -> &[Collidable] {
        &self.collidables
    }

    fn floor_y(&self) -> f32 {
        self.floor_y
    }
}
