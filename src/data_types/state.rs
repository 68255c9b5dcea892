use super::axis::Axis;
use eyre::{ensure, Result, WrapErr};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Where pinch zoom is anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomPivot {
    /// Midpoint of the visible range (button zoom always uses this).
    #[default]
    RangeCenter,
    /// Midpoint between the two fingers, projected into the plot area.
    PinchCenter,
}

/// Open interval of accepted pinch ratios; anything outside is treated as noise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinchBand {
    pub lower: f64,
    pub upper: f64,
}

impl Default for PinchBand {
    fn default() -> Self {
        Self {
            lower: 0.909,
            upper: 1.1,
        }
    }
}

impl PinchBand {
    pub fn accepts(&self, ratio: f64) -> bool {
        ratio > self.lower && ratio < self.upper && ratio != 1.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlingConfig {
    pub enabled: bool,
    /// Minimum horizontal release velocity, in screen units per second.
    pub min_velocity: f32,
    /// Minimum horizontal distance between the down and up samples.
    pub min_distance: f32,
    /// How far ahead the release velocity is projected to find the target.
    pub horizon_ms: u64,
    /// Length of the decelerating animation.
    pub duration_ms: u64,
    /// Delay between animation frames requested from the surface.
    pub frame_interval_ms: u64,
    /// Window of recent samples used to estimate the release velocity.
    pub velocity_window_ms: u64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_velocity: 50.0,
            min_distance: 100.0,
            horizon_ms: 1000,
            duration_ms: 1000,
            frame_interval_ms: 16,
            velocity_window_ms: 100,
        }
    }
}

/// Interaction flags and tuning read by the touch handler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    pub pan_enabled: bool,
    /// Axis-exclusive panning: the first move decides X or Y for the gesture.
    pub pan_strict: bool,
    pub pan_x_enabled: bool,
    pub pan_y_enabled: bool,
    pub zoom_enabled: bool,
    /// Axis-exclusive pinch zoom.
    pub zoom_strict: bool,
    pub zoom_x_enabled: bool,
    pub zoom_y_enabled: bool,
    pub zoom_buttons_visible: bool,
    /// Keeps the button zoom tools alive for programmatic zoom without buttons.
    pub external_zoom_enabled: bool,
    /// When set, unrecognized events fall through to the host's click handling.
    pub click_enabled: bool,
    /// Rate used by the zoom in/out buttons.
    pub zoom_rate: f64,
    pub pinch_band: PinchBand,
    pub zoom_pivot: ZoomPivot,
    pub fling: FlingConfig,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pan_enabled: true,
            pan_strict: false,
            pan_x_enabled: true,
            pan_y_enabled: true,
            zoom_enabled: true,
            zoom_strict: false,
            zoom_x_enabled: true,
            zoom_y_enabled: true,
            zoom_buttons_visible: false,
            external_zoom_enabled: false,
            click_enabled: false,
            zoom_rate: 1.5,
            pinch_band: PinchBand::default(),
            zoom_pivot: ZoomPivot::default(),
            fling: FlingConfig::default(),
        }
    }
}

impl InteractionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse interaction config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.zoom_rate.is_finite() && self.zoom_rate > 0.0,
            "zoom_rate must be a positive number, got {}",
            self.zoom_rate
        );
        let band = self.pinch_band;
        ensure!(
            band.lower.is_finite() && band.upper.is_finite() && band.lower > 0.0,
            "pinch_band bounds must be positive numbers"
        );
        ensure!(
            band.lower < 1.0 && band.upper > 1.0,
            "pinch_band ({}, {}) must surround 1.0",
            band.lower,
            band.upper
        );
        let fling = &self.fling;
        ensure!(
            fling.min_velocity.is_finite() && fling.min_velocity >= 0.0,
            "fling.min_velocity must be non-negative"
        );
        ensure!(
            fling.min_distance.is_finite() && fling.min_distance >= 0.0,
            "fling.min_distance must be non-negative"
        );
        ensure!(fling.duration_ms > 0, "fling.duration_ms must be greater than zero");
        ensure!(
            fling.velocity_window_ms > 0,
            "fling.velocity_window_ms must be greater than zero"
        );
        Ok(())
    }

    /// Whether the button zoom tools (in/out/reset) are available.
    pub fn button_zoom_available(&self) -> bool {
        (self.zoom_enabled && self.zoom_buttons_visible) || self.external_zoom_enabled
    }
}

/// Axis a strict gesture has committed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLock {
    #[default]
    None,
    X,
    Y,
}

impl AxisLock {
    pub fn axis(self) -> Option<Axis> {
        match self {
            Self::None => None,
            Self::X => Some(Axis::X),
            Self::Y => Some(Axis::Y),
        }
    }
}

impl From<Axis> for AxisLock {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Tracking,
    Flinging,
}

/// Last known position of a pointer.
///
/// `Invalid` marks a baseline that must be re-established before any delta is
/// produced, which is different from a pointer genuinely resting at (0, 0).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TrackedPoint {
    #[default]
    Invalid,
    At(Vec2),
}

impl TrackedPoint {
    pub fn point(self) -> Option<Vec2> {
        match self {
            Self::Invalid => None,
            Self::At(p) => Some(p),
        }
    }
}

/// Per-interaction record owned by the gesture classifier.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub previous_primary: TrackedPoint,
    /// Present only while two pointers are down and a pinch baseline exists.
    pub previous_secondary: Option<Vec2>,
    pub pan_lock: AxisLock,
    pub zoom_lock: AxisLock,
    pub phase: Phase,
}
