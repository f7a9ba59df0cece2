// Game configuration, loadable from TOML
//
// Every section uses `#[serde(default)]` so a config file only needs the
// values it wants to override.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "RONIN_CONFIG";

/// Config file read when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/ronin.toml";

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Kinematic tuning, in pixels and ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration applied every airborne tick
    pub gravity: f32,
    /// Horizontal walking speed
    pub walk_speed: f32,
    /// Vertical velocity applied on jump (negative = up)
    pub jump_speed: f32,
    /// Vertical speed while climbing a ladder
    pub climb_speed: f32,
    /// Ticks the landing pose is held after touching down
    pub landing_ticks: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.35,
            walk_speed: 2.5,
            jump_speed: -6.5,
            climb_speed: 1.5,
            landing_ticks: 6,
        }
    }
}

/// Melee combat tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Ticks of damage immunity after taking a hit
    pub damage_invincibility_ticks: u32,
    /// Horizontal speed applied away from the attacker
    pub knockback_speed: f32,
    /// Leading ticks of the invincibility window during which movement input is ignored
    pub hurt_stun_ticks: u32,
    /// Width of the attack hitbox
    pub attack_reach: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            damage_invincibility_ticks: 60,
            knockback_speed: 2.0,
            hurt_stun_ticks: 12,
            attack_reach: 16.0,
        }
    }
}

/// Enemy behaviour tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Horizontal distance between centers under which an enemy attacks
    pub aggro_range_x: f32,
    /// Default patrol speed
    pub patrol_speed: f32,
    /// Ticks after an attack ends before the next one may start
    pub attack_cooldown_ticks: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            aggro_range_x: 40.0,
            patrol_speed: 1.0,
            attack_cooldown_ticks: 40,
        }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub timing: TimingConfig,
    pub physics: PhysicsConfig,
    pub combat: CombatConfig,
    pub enemy: EnemyConfig,
}

/// Fixed-timestep settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub tick_rate_hz: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { tick_rate_hz: 60 }
    }
}

impl GameConfig {
    /// Parse a config from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Load the config named by `RONIN_CONFIG`, falling back to defaults.
    /// A missing file is not worth a warning; a broken one is.
    pub fn load_or_default() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.tick_rate_hz == 0 {
            return Err(ConfigError::Invalid("tick_rate_hz must be positive".into()));
        }
        if !(self.physics.gravity >= 0.0) {
            return Err(ConfigError::Invalid("gravity must be non-negative".into()));
        }
        if self.combat.damage_invincibility_ticks == 0 {
            return Err(ConfigError::Invalid(
                "damage_invincibility_ticks must be positive".into(),
            ));
        }
        if !(self.combat.attack_reach > 0.0) {
            return Err(ConfigError::Invalid("attack_reach must be positive".into()));
        }
        Ok(())
    }
}
