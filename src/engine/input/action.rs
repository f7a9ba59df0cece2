// Logical intents and their default key bindings

use winit::keyboard::KeyCode;

/// A logical input intent, already remapped from raw keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    // Movement
    Left,
    Right,
    Up,
    Down,
    Jump,

    // Combat
    Attack,
    Kick,

    // Party
    NextActor,
    PrevActor,
}

impl Intent {
    /// Every intent, in a stable order
    pub const ALL: [Intent; 9] = [
        Intent::Left,
        Intent::Right,
        Intent::Up,
        Intent::Down,
        Intent::Jump,
        Intent::Attack,
        Intent::Kick,
        Intent::NextActor,
        Intent::PrevActor,
    ];
}

/// Default keyboard bindings (arrows or WASD, Z/Space to jump)
pub fn default_bindings() -> Vec<(KeyCode, Intent)> {
    vec![
        // Movement
        (KeyCode::ArrowLeft, Intent::Left),
        (KeyCode::KeyA, Intent::Left),
        (KeyCode::ArrowRight, Intent::Right),
        (KeyCode::KeyD, Intent::Right),
        (KeyCode::ArrowUp, Intent::Up),
        (KeyCode::KeyW, Intent::Up),
        (KeyCode::ArrowDown, Intent::Down),
        (KeyCode::KeyS, Intent::Down),
        (KeyCode::KeyZ, Intent::Jump),
        (KeyCode::Space, Intent::Jump),
        // Combat
        (KeyCode::KeyX, Intent::Attack),
        (KeyCode::KeyC, Intent::Kick),
        // Party
        (KeyCode::Tab, Intent::NextActor),
        (KeyCode::KeyQ, Intent::PrevActor),
    ]
}
