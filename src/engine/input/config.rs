// Key remapping

use super::action::{default_bindings, Intent};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical keys to intents. A key drives at most one intent;
/// an intent may be driven by several keys.
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Intent>,
    intent_to_keys: HashMap<Intent, Vec<KeyCode>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
            intent_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration with the default bindings
    pub fn new() -> Self {
        Self::from_bindings(default_bindings())
    }

    pub fn from_bindings(bindings: Vec<(KeyCode, Intent)>) -> Self {
        let mut config = Self::empty();
        for (key, intent) in bindings {
            config.bind(key, intent);
        }
        config
    }

    /// Bind a key to an intent, replacing whatever it was bound to
    pub fn bind(&mut self, key: KeyCode, intent: Intent) {
        self.unbind_key(key);
        self.bindings.insert(key, intent);
        self.intent_to_keys.entry(intent).or_default().push(key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(intent) = self.bindings.remove(&key) {
            if let Some(keys) = self.intent_to_keys.get_mut(&intent) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.intent_to_keys.remove(&intent);
                }
            }
        }
    }

    pub fn unbind_intent(&mut self, intent: Intent) {
        if let Some(keys) = self.intent_to_keys.remove(&intent) {
            for key in keys {
                self.bindings.remove(&key);
            }
        }
    }

    /// Intent bound to a key. Unmapped keys yield `None` and are ignored upstream.
    pub fn intent_for(&self, key: KeyCode) -> Option<Intent> {
        self.bindings.get(&key).copied()
    }

    pub fn keys_for(&self, intent: Intent) -> &[KeyCode] {
        self.intent_to_keys
            .get(&intent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_bound(&self, intent: Intent) -> bool {
        self.intent_to_keys.contains_key(&intent)
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::new();
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new()
    }
}
