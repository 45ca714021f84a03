use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::error::ConfigError;

pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, -9.81);
pub const DEFAULT_ITERATIONS: u32 = 1;
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// Bounded undo/redo history settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryConfig {
    /// Maximum snapshots kept on the undo side
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: DEFAULT_HISTORY_CAPACITY }
    }
}

/// World parameters. Every field is optional in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorldConfig {
    pub gravity: Vec2,
    /// Sub-steps per `step` call
    pub iterations: u32,
    /// `None` disables undo/redo
    pub history: Option<HistoryConfig>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            iterations: DEFAULT_ITERATIONS,
            history: None,
        }
    }
}

impl WorldConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_gravity(mut self, x: f32, y: f32) -> Self {
        self.gravity = Vec2::new(x, y);
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_history(mut self, capacity: usize) -> Self {
        self.history = Some(HistoryConfig { capacity });
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity {
                x: self.gravity.x,
                y: self.gravity.y,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if let Some(history) = self.history {
            if history.capacity == 0 {
                return Err(ConfigError::ZeroHistoryCapacity);
            }
        }
        Ok(())
    }
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}
