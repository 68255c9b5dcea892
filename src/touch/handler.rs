use super::classifier::{ClassifiedAction, GestureClassifier, ZoomButton};
use super::fling::{FlingAnimator, FlingDetector};
use crate::data_types::{
    GestureState, InteractionConfig, Phase, SharedViewport, TouchAction, TouchEvent, ZoomPivot,
};
use crate::surface::ViewSurface;
use crate::tools::{FitZoom, Pan, PanListener, Zoom, ZoomAxes, ZoomListener};
use glam::{DVec2, Vec2};
use std::sync::Arc;
use tracing::debug;

/// Entry point for a chart view's touch input.
///
/// Owns the gesture state and the tools that mutate the viewport; the host
/// forwards every touch event to [`TouchHandler::handle_touch`] and calls
/// [`TouchHandler::on_frame`] whenever a frame it was asked to schedule comes due.
pub struct TouchHandler<S: ViewSurface> {
    surface: S,
    config: InteractionConfig,
    classifier: GestureClassifier,
    state: GestureState,
    pan: Option<Pan>,
    pinch_zoom: Option<Zoom>,
    zoom_in: Option<Zoom>,
    zoom_out: Option<Zoom>,
    fit_zoom: Option<FitZoom>,
    fling_detector: FlingDetector,
    fling: FlingAnimator,
}

impl<S: ViewSurface> TouchHandler<S> {
    pub fn new(viewport: SharedViewport, config: InteractionConfig, surface: S) -> Self {
        let pan = config.pan_enabled.then(|| {
            Pan::new(viewport.clone()).with_axes(config.pan_x_enabled, config.pan_y_enabled)
        });
        let pinch_zoom = config.zoom_enabled.then(|| {
            Zoom::new(viewport.clone(), true, 1.0)
                .with_axes(config.zoom_x_enabled, config.zoom_y_enabled)
        });
        let buttons = config.button_zoom_available();
        let zoom_in = buttons.then(|| {
            Zoom::new(viewport.clone(), true, config.zoom_rate)
                .with_axes(config.zoom_x_enabled, config.zoom_y_enabled)
        });
        let zoom_out = buttons.then(|| {
            Zoom::new(viewport.clone(), false, config.zoom_rate)
                .with_axes(config.zoom_x_enabled, config.zoom_y_enabled)
        });
        let fit_zoom = buttons.then(|| FitZoom::new(viewport.clone()));

        Self {
            surface,
            classifier: GestureClassifier::new((&config).into()),
            fling_detector: FlingDetector::new(config.fling.clone()),
            config,
            state: GestureState::default(),
            pan,
            pinch_zoom,
            zoom_in,
            zoom_out,
            fit_zoom,
            fling: FlingAnimator::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn gesture_state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.is_running()
    }

    /// Consumes one touch event. Returns whether it was handled; unhandled
    /// events should fall through to the host's default behaviour (clicks).
    ///
    /// With pan and zoom both disabled the handler is disengaged and always
    /// returns `false`, whatever `click_enabled` says.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        if !self.config.pan_enabled && !self.config.zoom_enabled {
            return false;
        }

        if event.action == TouchAction::Down && self.fling.cancel() {
            self.state.phase = Phase::Idle;
        }

        let fling = self.fling_detector.observe(event);
        let had_baseline = self.state.previous_primary.point().is_some();
        let zoom_buttons = self
            .zoom_in
            .is_some()
            .then(|| self.surface.zoom_button_region())
            .flatten();
        let action = self.classifier.process(&mut self.state, event, zoom_buttons);

        if let Some(fling) = fling {
            if self.pan.is_some() {
                self.fling.start(&fling, &self.config.fling, event.timestamp_ms);
                self.state.phase = Phase::Flinging;
                self.surface.schedule_frame(self.config.fling.frame_interval_ms);
                return true;
            }
        }

        match action {
            Some(ClassifiedAction::Pan { origin, delta }) => {
                if let Some(pan) = &self.pan {
                    pan.apply(origin, origin + delta, self.surface.plot_bounds());
                }
                self.surface.repaint();
                true
            }
            Some(ClassifiedAction::Zoom { rate, axes, focus }) => {
                self.apply_pinch(rate, axes, focus);
                self.surface.repaint();
                true
            }
            Some(ClassifiedAction::ButtonZoom(button)) => {
                match button {
                    ZoomButton::In => self.zoom_in(),
                    ZoomButton::Out => self.zoom_out(),
                    ZoomButton::Reset => self.zoom_reset(),
                }
                true
            }
            None if event.action == TouchAction::Move && had_baseline => {
                self.surface.repaint();
                true
            }
            None => !self.config.click_enabled,
        }
    }

    fn apply_pinch(&mut self, rate: f64, axes: ZoomAxes, focus: Vec2) {
        let pivot = match self.config.zoom_pivot {
            ZoomPivot::RangeCenter => DVec2::splat(0.5),
            ZoomPivot::PinchCenter => {
                let frac = self.surface.plot_bounds().fraction_of(focus);
                // Screen Y grows downwards, data Y upwards.
                DVec2::new(frac.x as f64, 1.0 - frac.y as f64)
            }
        };
        if let Some(zoom) = self.pinch_zoom.as_mut() {
            zoom.set_zoom_rate(rate);
            zoom.apply_at(axes, pivot);
        }
    }

    /// Advances a running fling. Returns whether another frame was scheduled.
    pub fn on_frame(&mut self, now_ms: u64) -> bool {
        let Some(step) = self.fling.advance(now_ms) else {
            return false;
        };
        if let Some(pan) = &self.pan {
            pan.apply(step.from, step.to, self.surface.plot_bounds());
        }
        self.surface.repaint();
        if step.finished {
            if self.state.phase == Phase::Flinging {
                self.state.phase = Phase::Idle;
            }
            return false;
        }
        self.surface.schedule_frame(self.config.fling.frame_interval_ms);
        true
    }

    pub fn set_zoom_rate(&mut self, rate: f64) {
        if let (Some(zoom_in), Some(zoom_out)) = (self.zoom_in.as_mut(), self.zoom_out.as_mut()) {
            zoom_in.set_zoom_rate(rate);
            zoom_out.set_zoom_rate(rate);
        }
    }

    pub fn zoom_in(&mut self) {
        if let Some(zoom) = &self.zoom_in {
            debug!(rate = zoom.rate(), "button zoom in");
            zoom.apply();
            self.surface.repaint();
        }
    }

    pub fn zoom_out(&mut self) {
        if let Some(zoom) = &self.zoom_out {
            debug!(rate = zoom.rate(), "button zoom out");
            zoom.apply();
            self.surface.repaint();
        }
    }

    /// Fits the chart back to its initial ranges and tells zoom listeners.
    pub fn zoom_reset(&mut self) {
        if let Some(fit) = &self.fit_zoom {
            fit.apply();
            if let Some(zoom) = &self.zoom_in {
                zoom.notify_zoom_reset();
            }
            self.surface.repaint();
        }
    }

    /// Registers a zoom listener on the button tools, the pinch tool, or both.
    pub fn add_zoom_listener(
        &self,
        listener: Arc<dyn ZoomListener>,
        on_buttons: bool,
        on_pinch: bool,
    ) {
        if on_buttons {
            if let (Some(zoom_in), Some(zoom_out)) = (&self.zoom_in, &self.zoom_out) {
                zoom_in.add_zoom_listener(listener.clone());
                zoom_out.add_zoom_listener(listener.clone());
            }
        }
        if on_pinch {
            if let Some(pinch) = &self.pinch_zoom {
                pinch.add_zoom_listener(listener);
            }
        }
    }

    /// Removes one registration of `listener` from every zoom tool.
    pub fn remove_zoom_listener(&self, listener: &Arc<dyn ZoomListener>) {
        for zoom in [&self.zoom_in, &self.zoom_out, &self.pinch_zoom]
            .into_iter()
            .flatten()
        {
            zoom.remove_zoom_listener(listener);
        }
    }

    pub fn add_pan_listener(&self, listener: Arc<dyn PanListener>) {
        if let Some(pan) = &self.pan {
            pan.add_pan_listener(listener);
        }
    }

    pub fn remove_pan_listener(&self, listener: &Arc<dyn PanListener>) {
        if let Some(pan) = &self.pan {
            pan.remove_pan_listener(listener);
        }
    }
}
