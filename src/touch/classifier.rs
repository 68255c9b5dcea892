use super::axis_lock::{AxisLockArbiter, AxisRatios};
use crate::data_types::{
    AxisLock, GestureState, InteractionConfig, PinchBand, Phase, TouchAction, TouchEvent,
    TrackedPoint,
};
use crate::geometry::Rect;
use crate::tools::ZoomAxes;
use glam::Vec2;
use tracing::{debug, trace};

/// The zoom button hit, chosen by horizontal thirds of the button strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomButton {
    In,
    Out,
    Reset,
}

impl ZoomButton {
    /// Left third zooms in, middle third zooms out, right third resets.
    /// A tap exactly on a boundary belongs to the button on its right.
    pub fn at(region: Rect, x: f32) -> Self {
        let third = region.width() / 3.0;
        if x < region.left() + third {
            Self::In
        } else if x < region.left() + third * 2.0 {
            Self::Out
        } else {
            Self::Reset
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClassifiedAction {
    /// Drag the content so the data under `origin` moves by `delta`.
    Pan { origin: Vec2, delta: Vec2 },
    /// Pinch step: `rate` is the accepted distance ratio, `focus` the finger midpoint.
    Zoom {
        rate: f64,
        axes: ZoomAxes,
        focus: Vec2,
    },
    ButtonZoom(ZoomButton),
}

impl ClassifiedAction {
    pub fn pan_delta(&self) -> Option<Vec2> {
        match self {
            Self::Pan { delta, .. } => Some(*delta),
            _ => None,
        }
    }
}

/// Flags the classifier reads on every event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    pub pan_enabled: bool,
    pub pan_strict: bool,
    pub zoom_enabled: bool,
    pub zoom_strict: bool,
    pub pinch_band: PinchBand,
}

impl From<&InteractionConfig> for ClassifierConfig {
    fn from(config: &InteractionConfig) -> Self {
        Self {
            pan_enabled: config.pan_enabled,
            pan_strict: config.pan_strict,
            zoom_enabled: config.zoom_enabled,
            zoom_strict: config.zoom_strict,
            pinch_band: config.pinch_band,
        }
    }
}

/// Turns raw touch events into pan, pinch and zoom-button actions.
///
/// The classifier itself is stateless; everything that spans events lives in
/// the [`GestureState`] the caller passes in.
#[derive(Clone, Copy, Debug)]
pub struct GestureClassifier {
    config: ClassifierConfig,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies one event. `zoom_buttons` is the current hit region of the
    /// zoom button strip, if one is shown.
    pub fn process(
        &self,
        state: &mut GestureState,
        event: &TouchEvent,
        zoom_buttons: Option<Rect>,
    ) -> Option<ClassifiedAction> {
        match event.action {
            TouchAction::Down => self.on_down(state, event, zoom_buttons),
            TouchAction::Move => self.on_move(state, event),
            TouchAction::PointerDown => {
                // A new finger may take over index 0; resume from the next Move.
                state.previous_primary = TrackedPoint::Invalid;
                state.previous_secondary = None;
                None
            }
            TouchAction::Up | TouchAction::PointerUp | TouchAction::Cancel => {
                Self::release(state);
                None
            }
        }
    }

    fn on_down(
        &self,
        state: &mut GestureState,
        event: &TouchEvent,
        zoom_buttons: Option<Rect>,
    ) -> Option<ClassifiedAction> {
        let point = event.primary()?;
        *state = GestureState {
            previous_primary: TrackedPoint::At(point),
            phase: Phase::Tracking,
            ..GestureState::default()
        };

        if !self.config.zoom_enabled {
            return None;
        }
        let region = zoom_buttons.filter(|r| r.contains(point))?;
        let button = ZoomButton::at(region, point.x);
        debug!(?button, x = point.x, "zoom button tapped");
        Some(ClassifiedAction::ButtonZoom(button))
    }

    fn on_move(&self, state: &mut GestureState, event: &TouchEvent) -> Option<ClassifiedAction> {
        let new = event.primary()?;
        let second = event.secondary();

        let TrackedPoint::At(old) = state.previous_primary else {
            trace!("move without a baseline, recording it");
            state.previous_primary = TrackedPoint::At(new);
            state.previous_secondary = second;
            state.phase = Phase::Tracking;
            return None;
        };

        let action = match second {
            Some(new2) if self.config.zoom_enabled => {
                let baseline = state.previous_secondary;
                let action = baseline.and_then(|old2| self.pinch(state, old, old2, new, new2));
                state.previous_secondary = Some(new2);
                action
            }
            _ => {
                state.previous_secondary = None;
                if self.config.pan_enabled {
                    let delta = AxisLockArbiter::resolve_pan(
                        &mut state.pan_lock,
                        self.config.pan_strict,
                        new - old,
                    );
                    (delta != Vec2::ZERO).then_some(ClassifiedAction::Pan { origin: old, delta })
                } else {
                    None
                }
            }
        };

        state.previous_primary = TrackedPoint::At(new);
        action
    }

    fn pinch(
        &self,
        state: &mut GestureState,
        old: Vec2,
        old2: Vec2,
        new: Vec2,
        new2: Vec2,
    ) -> Option<ClassifiedAction> {
        let ratios = AxisRatios::between((old - old2).abs(), (new - new2).abs());
        let Some((rate, axes)) =
            AxisLockArbiter::resolve_zoom(&mut state.zoom_lock, self.config.zoom_strict, ratios)
        else {
            trace!("pinch without a usable distance");
            return None;
        };

        if !self.config.pinch_band.accepts(rate) {
            debug!(rate, "pinch ratio discarded");
            return None;
        }
        Some(ClassifiedAction::Zoom {
            rate,
            axes,
            focus: (new + new2) / 2.0,
        })
    }

    fn release(state: &mut GestureState) {
        *state = GestureState {
            previous_primary: TrackedPoint::Invalid,
            previous_secondary: None,
            pan_lock: AxisLock::None,
            zoom_lock: AxisLock::None,
            phase: Phase::Idle,
        };
    }
}
