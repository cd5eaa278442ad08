use std::fmt;
use std::time::Duration;

use gridpath_core::{Bounds, State};

/// Settings for a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub start: State,
    pub goal: State,
    /// Chance, in percent, that a cell other than start or goal is blocked.
    pub obstacle_percent: u32,
    /// Upper bound (exclusive) of the random weights drawn for weighted
    /// algorithms. Weights start at [`Grid::FREE`](gridpath_core::Grid::FREE).
    pub max_weight: f64,
    /// Pause between animation frames.
    pub step_delay: Duration,
    /// Fixed RNG seed; `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            start: State::new(0, 0),
            goal: State::new(14, 14),
            obstacle_percent: 20,
            max_weight: 8.0,
            step_delay: Duration::from_millis(300),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Check that the settings describe a usable world.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyWorld {
                width: self.width,
                height: self.height,
            });
        }
        let bounds = Bounds::sized(self.width, self.height);
        for s in [self.start, self.goal] {
            if !bounds.contains(s) {
                return Err(ConfigError::OutOfBounds(s));
            }
        }
        if self.obstacle_percent > 100 {
            return Err(ConfigError::ObstaclePercent(self.obstacle_percent));
        }
        if self.max_weight.is_nan() || self.max_weight < 1.0 {
            return Err(ConfigError::MaxWeight(self.max_weight));
        }
        Ok(())
    }
}

/// Errors reported by [`SimConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Width or height is not positive.
    EmptyWorld { width: i32, height: i32 },
    /// Start or goal lies outside the world.
    OutOfBounds(State),
    /// Obstacle percentage above 100.
    ObstaclePercent(u32),
    /// Maximum weight below 1 (or NaN).
    MaxWeight(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWorld { width, height } => {
                write!(f, "world size {width}x{height} has no cells")
            }
            Self::OutOfBounds(s) => write!(f, "endpoint {s} is outside the world"),
            Self::ObstaclePercent(p) => write!(f, "obstacle percentage {p} exceeds 100"),
            Self::MaxWeight(w) => write!(f, "maximum weight {w} is below 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(SimConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_settings() {
        let base = SimConfig::default();

        let cfg = SimConfig {
            width: 0,
            ..base.clone()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyWorld { .. })));

        let cfg = SimConfig {
            goal: State::new(15, 3),
            ..base.clone()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::OutOfBounds(State::new(15, 3))));

        let cfg = SimConfig {
            obstacle_percent: 101,
            ..base.clone()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ObstaclePercent(101)));

        let cfg = SimConfig {
            max_weight: f64::NAN,
            ..base
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::MaxWeight(_))));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ConfigError::OutOfBounds(State::new(-1, 2)).to_string(),
            "endpoint (-1, 2) is outside the world"
        );
    }
}
