// Input handling system
//
// Raw keyboard events are remapped to logical intents and collected into one
// immutable `InputSnapshot` per simulation tick. Actors never read keyboard
// state directly; they only see the snapshot passed to their update.
//
// ## Architecture
//
// - `action`: Intent definitions and default key bindings
// - `config`: Key remapping
// - `snapshot`: Per-tick held/pressed intent sets
// - `manager`: winit event intake producing snapshots
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new(InputConfig::new());
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per fixed tick
// let snapshot = input.next_snapshot();
// if snapshot.just_pressed(Intent::Jump) { /* ... */ }
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

pub use action::Intent;
pub use config::InputConfig;
pub use manager::InputManager;
pub use snapshot::{InputSnapshot, IntentSet};
