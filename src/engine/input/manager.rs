// Input manager - turns winit keyboard events into per-tick snapshots

use std::collections::HashSet;

use super::config::InputConfig;
use super::snapshot::{InputSnapshot, IntentSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Collects keyboard state between ticks
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    /// Physical keys currently down
    down_keys: HashSet<KeyCode>,
    /// Intents currently held down
    held: IntentSet,
    /// Rising edges not yet handed out in a snapshot
    latched: IntentSet,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            down_keys: HashSet::new(),
            held: IntentSet::empty(),
            latched: IntentSet::empty(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                // Key repeats are not new presses
                ElementState::Pressed if !event.repeat => self.press_key(key_code),
                ElementState::Pressed => {}
                ElementState::Released => self.release_key(key_code),
            }
        }
    }

    pub(crate) fn press_key(&mut self, key: KeyCode) {
        self.down_keys.insert(key);
        let Some(intent) = self.config.intent_for(key) else {
            return;
        };
        let flag = IntentSet::from(intent);
        if !self.held.contains(flag) {
            self.latched |= flag;
        }
        self.held |= flag;
    }

    pub(crate) fn release_key(&mut self, key: KeyCode) {
        self.down_keys.remove(&key);
        let Some(intent) = self.config.intent_for(key) else {
            return;
        };
        let still_down = self
            .config
            .keys_for(intent)
            .iter()
            .any(|k| self.down_keys.contains(k));
        if !still_down {
            self.held.remove(IntentSet::from(intent));
        }
    }

    /// Produce the snapshot for the next tick and clear latched presses
    pub fn next_snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            held: self.held,
            pressed: self.latched,
        };
        self.latched = IntentSet::empty();
        snapshot
    }

    /// Drop all held and latched intents (e.g. on focus loss)
    pub fn reset(&mut self) {
        self.down_keys.clear();
        self.held = IntentSet::empty();
        self.latched = IntentSet::empty();
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::Intent;

    #[test]
    fn test_press_shows_in_next_snapshot_once() {
        let mut manager = InputManager::new(InputConfig::new());
        manager.press_key(KeyCode::KeyX);

        let first = manager.next_snapshot();
        assert!(first.just_pressed(Intent::Attack));
        assert!(first.is_held(Intent::Attack));

        let second = manager.next_snapshot();
        assert!(!second.just_pressed(Intent::Attack));
        assert!(second.is_held(Intent::Attack));
    }

    #[test]
    fn test_tap_between_ticks_is_not_lost() {
        let mut manager = InputManager::new(InputConfig::new());
        manager.press_key(KeyCode::Space);
        manager.release_key(KeyCode::Space);

        let snapshot = manager.next_snapshot();
        assert!(snapshot.just_pressed(Intent::Jump));
        assert!(!snapshot.is_held(Intent::Jump));
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let mut manager = InputManager::new(InputConfig::new());
        manager.press_key(KeyCode::F7);
        assert_eq!(manager.next_snapshot(), InputSnapshot::idle());
    }

    #[test]
    fn test_second_key_for_held_intent_is_not_a_new_press() {
        let mut manager = InputManager::new(InputConfig::new());
        manager.press_key(KeyCode::ArrowLeft);
        manager.next_snapshot();
        manager.press_key(KeyCode::KeyA);

        let snapshot = manager.next_snapshot();
        assert!(snapshot.is_held(Intent::Left));
        assert!(!snapshot.just_pressed(Intent::Left));
    }

    #[test]
    fn test_intent_held_until_last_bound_key_released() {
        let mut manager = InputManager::new(InputConfig::new());
        manager.press_key(KeyCode::ArrowLeft);
        manager.press_key(KeyCode::KeyA);
        manager.release_key(KeyCode::KeyA);
        assert!(manager.next_snapshot().is_held(Intent::Left));

        manager.release_key(KeyCode::ArrowLeft);
        assert!(!manager.next_snapshot().is_held(Intent::Left));
    }

    #[test]
    fn test_remapped_key() {
        let mut manager = InputManager::new(InputConfig::empty());
        manager.config_mut().bind(KeyCode::KeyJ, Intent::Kick);
        manager.press_key(KeyCode::KeyJ);
        assert!(manager.next_snapshot().just_pressed(Intent::Kick));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut manager = InputManager::new(InputConfig::new());
        manager.press_key(KeyCode::ArrowRight);
        manager.reset();
        assert_eq!(manager.next_snapshot(), InputSnapshot::idle());
    }
}
