use crate::data_types::{SharedViewport, VisibleRange};
use crate::listeners::ListenerSet;
use crate::view_controller::ViewController;
use glam::DVec2;
use std::sync::Arc;
use tracing::{debug, trace};

/// Which axes a zoom step affects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomAxes {
    pub x: bool,
    pub y: bool,
}

impl ZoomAxes {
    pub const BOTH: Self = Self { x: true, y: true };

    pub fn new(x: bool, y: bool) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoomEvent {
    pub zoom_in: bool,
    pub rate: f64,
    pub before: Vec<VisibleRange>,
    pub after: Vec<VisibleRange>,
}

pub trait ZoomListener: Send + Sync {
    fn zoom_applied(&self, event: &ZoomEvent);

    /// Called after the view was fitted back to its initial ranges.
    fn zoom_reset(&self) {}
}

/// Scales the viewport span around a pivot.
///
/// A zoom-in tool divides the span by `rate`, a zoom-out tool multiplies it,
/// so a rate above 1 always makes the tool do what its direction says.
pub struct Zoom {
    viewport: SharedViewport,
    zoom_in: bool,
    rate: f64,
    listeners: ListenerSet<dyn ZoomListener>,
    pub x_enabled: bool,
    pub y_enabled: bool,
}

impl Zoom {
    pub fn new(viewport: SharedViewport, zoom_in: bool, rate: f64) -> Self {
        Self {
            viewport,
            zoom_in,
            rate,
            listeners: ListenerSet::new(),
            x_enabled: true,
            y_enabled: true,
        }
    }

    pub fn with_axes(mut self, x_enabled: bool, y_enabled: bool) -> Self {
        self.x_enabled = x_enabled;
        self.y_enabled = y_enabled;
        self
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_zoom_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    /// Zooms both axes around the middle of the visible range.
    pub fn apply(&self) -> bool {
        self.apply_at(ZoomAxes::BOTH, DVec2::splat(0.5))
    }

    /// Zooms the selected axes around `pivot_pct`, the pivot expressed as a
    /// fraction of each axis' visible range (0 = min, 1 = max).
    pub fn apply_at(&self, axes: ZoomAxes, pivot_pct: DVec2) -> bool {
        let zoom_x = axes.x && self.x_enabled;
        let zoom_y = axes.y && self.y_enabled;
        if !zoom_x && !zoom_y {
            trace!("zoom skipped: no enabled axis");
            return false;
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            debug!(rate = self.rate, "zoom skipped: invalid rate");
            return false;
        }

        let factor = ViewController::span_factor(self.zoom_in, self.rate);
        let event = {
            let mut vp = self.viewport.write();
            let before = vp.visible_ranges();
            if zoom_x {
                ViewController::zoom_axis_at(&mut vp.x, pivot_pct.x, factor);
            }
            if zoom_y {
                for y in vp.y_axes.iter_mut() {
                    ViewController::zoom_axis_at(y, pivot_pct.y, factor);
                }
            }
            ZoomEvent {
                zoom_in: self.zoom_in,
                rate: self.rate,
                before,
                after: vp.visible_ranges(),
            }
        };

        trace!(rate = self.rate, zoom_in = self.zoom_in, zoom_x, zoom_y, "zoom applied");
        self.listeners.for_each(|l| l.zoom_applied(&event));
        true
    }

    pub fn notify_zoom_reset(&self) {
        self.listeners.for_each(|l| l.zoom_reset());
    }

    pub fn add_zoom_listener(&self, listener: Arc<dyn ZoomListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_zoom_listener(&self, listener: &Arc<dyn ZoomListener>) -> bool {
        self.listeners.remove(listener)
    }
}
