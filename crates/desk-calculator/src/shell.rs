//! Desktop panel state
//!
//! Each panel owns its own flags. The desktop only routes open/close
//! signals and keyboard input; panels never talk to each other.

use crate::config::{ControlCenterSettings, DesktopConfig};
use crate::error::DeskError;
use crate::overlay::{CalculatorOverlay, KeyOutcome};
use std::fmt;
use std::str::FromStr;

/// Upper bound of the control center sliders
pub const SLIDER_MAX: u8 = 100;

/// Panels the desktop can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Sliders and toggles, opened from the status bar
    ControlCenter,
    /// Calculator overlay
    Calculator,
    /// File browser overlay
    Finder,
}

impl Panel {
    /// All panels
    pub const ALL: [Self; 3] = [Self::ControlCenter, Self::Calculator, Self::Finder];

    /// Name used on the command line and in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ControlCenter => "control-center",
            Self::Calculator => "calculator",
            Self::Finder => "finder",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Panel {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| DeskError::UnknownName {
                kind: "panel",
                name: s.to_string(),
            })
    }
}

/// On/off switches in the control center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Wi-Fi
    Wifi,
    /// Bluetooth
    Bluetooth,
    /// Focus mode
    Focus,
}

impl Toggle {
    /// All toggles
    pub const ALL: [Self; 3] = [Self::Wifi, Self::Bluetooth, Self::Focus];

    /// Name used on the command line and in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Bluetooth => "bluetooth",
            Self::Focus => "focus",
        }
    }
}

impl FromStr for Toggle {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| DeskError::UnknownName {
                kind: "toggle",
                name: s.to_string(),
            })
    }
}

/// Control center: two sliders and three toggles
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlCenter {
    settings: ControlCenterSettings,
}

impl ControlCenter {
    /// Creates a control center with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a control center from configured values
    #[must_use]
    pub fn with_settings(settings: ControlCenterSettings) -> Self {
        Self { settings }
    }

    /// Current values
    #[must_use]
    pub fn settings(&self) -> &ControlCenterSettings {
        &self.settings
    }

    /// Brightness, `0..=100`
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.settings.brightness
    }

    /// Volume, `0..=100`
    #[must_use]
    pub fn volume(&self) -> u8 {
        self.settings.volume
    }

    /// Moves the brightness slider; out-of-range input is clamped
    pub fn set_brightness(&mut self, value: i64) {
        self.settings.brightness = clamp_slider("brightness", value);
    }

    /// Moves the volume slider; out-of-range input is clamped
    pub fn set_volume(&mut self, value: i64) {
        self.settings.volume = clamp_slider("volume", value);
    }

    /// Whether a toggle is on
    #[must_use]
    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Wifi => self.settings.wifi,
            Toggle::Bluetooth => self.settings.bluetooth,
            Toggle::Focus => self.settings.focus,
        }
    }

    /// Flips a toggle and returns its new value
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let slot = match toggle {
            Toggle::Wifi => &mut self.settings.wifi,
            Toggle::Bluetooth => &mut self.settings.bluetooth,
            Toggle::Focus => &mut self.settings.focus,
        };
        *slot = !*slot;
        tracing::debug!(toggle = toggle.name(), enabled = *slot, "control center toggle");
        *slot
    }
}

fn clamp_slider(name: &str, value: i64) -> u8 {
    let clamped = value.clamp(0, i64::from(SLIDER_MAX));
    if clamped != value {
        tracing::warn!(slider = name, value, clamped, "slider value out of range");
    }
    clamped as u8
}

/// How the finder lists a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Icon grid
    #[default]
    Grid,
    /// One row per item
    List,
}

impl ViewMode {
    /// Name used on the command line and in logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Location the finder shows when first opened
pub const FINDER_HOME: &str = "k-luin";

/// Finder state; survives the overlay closing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finder {
    view_mode: ViewMode,
    current_path: String,
}

impl Default for Finder {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            current_path: FINDER_HOME.to_string(),
        }
    }
}

impl Finder {
    /// Creates a finder at the home location in grid view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current view mode
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switches the view mode
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Location being shown
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Shows another location; blank paths are ignored
    pub fn navigate(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        tracing::debug!(path, "finder navigate");
        path.clone_into(&mut self.current_path);
    }
}

/// The desktop: panel open/close flags plus the panels themselves
#[derive(Debug, Clone, Default)]
pub struct Desktop {
    control_center: ControlCenter,
    control_center_open: bool,
    calculator: CalculatorOverlay,
    finder: Finder,
    finder_open: bool,
}

impl Desktop {
    /// Creates a desktop with default panel values, everything closed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a desktop from configuration
    #[must_use]
    pub fn from_config(config: &DesktopConfig) -> Self {
        let mut desktop = Self {
            control_center: ControlCenter::with_settings(config.control_center.clone()),
            ..Self::default()
        };
        if config.open_calculator {
            desktop.open(Panel::Calculator);
        }
        desktop
    }

    /// Whether a panel is showing
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::ControlCenter => self.control_center_open,
            Panel::Calculator => self.calculator.is_open(),
            Panel::Finder => self.finder_open,
        }
    }

    /// Opens a panel
    pub fn open(&mut self, panel: Panel) {
        match panel {
            Panel::ControlCenter => self.control_center_open = true,
            Panel::Calculator => self.calculator.open(),
            Panel::Finder => self.finder_open = true,
        }
        tracing::debug!(%panel, "panel opened");
    }

    /// Closes a panel
    pub fn close(&mut self, panel: Panel) {
        match panel {
            Panel::ControlCenter => self.control_center_open = false,
            Panel::Calculator => self.calculator.close(),
            Panel::Finder => self.finder_open = false,
        }
        tracing::debug!(%panel, "panel closed");
    }

    /// Opens a closed panel or closes an open one; returns the new state
    pub fn toggle(&mut self, panel: Panel) -> bool {
        if self.is_open(panel) {
            self.close(panel);
            false
        } else {
            self.open(panel);
            true
        }
    }

    /// Routes a keyboard key
    ///
    /// `Escape` closes the calculator and finder overlays. The control
    /// center ignores it. Other keys go to the calculator when it is open.
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if key == "Escape" {
            let any_open = self.calculator.is_open() || self.finder_open;
            self.close(Panel::Calculator);
            self.close(Panel::Finder);
            return if any_open {
                KeyOutcome::Closed
            } else {
                KeyOutcome::Ignored
            };
        }
        self.calculator.handle_key(key)
    }

    /// The control center
    #[must_use]
    pub fn control_center(&self) -> &ControlCenter {
        &self.control_center
    }

    /// The control center, mutably
    pub fn control_center_mut(&mut self) -> &mut ControlCenter {
        &mut self.control_center
    }

    /// The calculator overlay
    #[must_use]
    pub fn calculator(&self) -> &CalculatorOverlay {
        &self.calculator
    }

    /// The calculator overlay, mutably
    pub fn calculator_mut(&mut self) -> &mut CalculatorOverlay {
        &mut self.calculator
    }

    /// The finder
    #[must_use]
    pub fn finder(&self) -> &Finder {
        &self.finder
    }

    /// The finder, mutably
    pub fn finder_mut(&mut self) -> &mut Finder {
        &mut self.finder
    }
}
