//! Desktop configuration
//!
//! YAML on disk, every field optional:
//!
//! ```yaml
//! control_center:
//!   brightness: 70
//!   volume: 50
//!   wifi: true
//!   bluetooth: true
//!   focus: false
//! open_calculator: false
//! ```

use crate::error::{DeskError, DeskResult};
use crate::shell::SLIDER_MAX;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Starting values for the control center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlCenterSettings {
    /// Screen brightness slider, `0..=100`
    pub brightness: u8,
    /// Volume slider, `0..=100`
    pub volume: u8,
    /// Wi-Fi toggle
    pub wifi: bool,
    /// Bluetooth toggle
    pub bluetooth: bool,
    /// Focus mode toggle
    pub focus: bool,
}

impl Default for ControlCenterSettings {
    fn default() -> Self {
        Self {
            brightness: 70,
            volume: 50,
            wifi: true,
            bluetooth: true,
            focus: false,
        }
    }
}

/// Desktop configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Control center starting values
    pub control_center: ControlCenterSettings,
    /// Open the calculator overlay at start
    pub open_calculator: bool,
}

impl DesktopConfig {
    /// Parses a YAML document
    pub fn from_yaml_str(yaml: &str) -> DeskResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| DeskError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and parses a YAML file
    pub fn load(path: impl AsRef<Path>) -> DeskResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::info!(path = %path.display(), "loaded desktop config");
        Ok(config)
    }

    /// Serialises to YAML
    pub fn to_yaml(&self) -> DeskResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| DeskError::config(e.to_string()))
    }

    /// Rejects slider values above the slider range
    pub fn validate(&self) -> DeskResult<()> {
        let cc = &self.control_center;
        for (name, value) in [("brightness", cc.brightness), ("volume", cc.volume)] {
            if value > SLIDER_MAX {
                return Err(DeskError::config(format!(
                    "control_center.{name} must be at most {SLIDER_MAX}, got {value}"
                )));
            }
        }
        Ok(())
    }
}
