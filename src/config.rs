use log::warn;
use thiserror::Error;

use crate::grid::CELL_SIZE;

/// Startup settings. Fixed for the lifetime of the window.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub window_width: f32,
    pub window_height: f32,
    /// Side length of a tower in cells. Towers are always square.
    pub tower_size: u32,
    pub frame_rate: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tower size must be a positive number of cells")]
    ZeroTowerSize,
    #[error("frame rate must be positive")]
    ZeroFrameRate,
    #[error("window dimensions must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 720.0,
            tower_size: 3,
            frame_rate: 30,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.tower_size == 0 {
            return Err(ConfigError::ZeroTowerSize);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        let (width, height) = (self.window_width, self.window_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidWindowSize { width, height });
        }
        if width % CELL_SIZE != 0.0 || height % CELL_SIZE != 0.0 {
            warn!("Window size {}x{} is not a multiple of the {} px cell size; edge cells will be clipped",
                  width, height, CELL_SIZE);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(Config::default()));
    }

    #[test]
    fn rejects_zero_tower_size() {
        let config = Config { tower_size: 0, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTowerSize));
    }

    #[test]
    fn rejects_zero_frame_rate() {
        let config = Config { frame_rate: 0, ..Config::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameRate));
    }

    #[test]
    fn rejects_degenerate_windows() {
        for &(width, height) in &[(0.0, 720.0), (1280.0, -20.0), (f32::INFINITY, 720.0)] {
            let config = Config { window_width: width, window_height: height, ..Config::default() };
            assert_eq!(config.validate(), Err(ConfigError::InvalidWindowSize { width, height }));
        }
    }

    #[test]
    fn accepts_windows_off_the_cell_grid() {
        let config = Config { window_width: 1000.0, window_height: 615.0, ..Config::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn errors_describe_the_problem() {
        let err = ConfigError::InvalidWindowSize { width: 0.0, height: 720.0 };
        assert_eq!(err.to_string(), "window dimensions must be positive, got 0x720");
    }
}
