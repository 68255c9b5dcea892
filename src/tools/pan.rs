use crate::data_types::{SharedViewport, VisibleRange};
use crate::geometry::Rect;
use crate::listeners::ListenerSet;
use crate::transform::PlotTransform;
use crate::view_controller::ViewController;
use glam::Vec2;
use std::sync::Arc;
use tracing::trace;

/// Visible ranges around one pan step, one entry per Y axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PanEvent {
    pub before: Vec<VisibleRange>,
    pub after: Vec<VisibleRange>,
}

pub trait PanListener: Send + Sync {
    fn pan_applied(&self, event: &PanEvent);
}

/// Translates the viewport by a screen-space drag.
pub struct Pan {
    viewport: SharedViewport,
    listeners: ListenerSet<dyn PanListener>,
    pub x_enabled: bool,
    pub y_enabled: bool,
}

impl Pan {
    pub fn new(viewport: SharedViewport) -> Self {
        Self {
            viewport,
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

    /// Moves the data under `from` to `to`, using `bounds` as the plot area.
    ///
    /// The shared X axis is moved once; every Y axis is converted with its own
    /// scale. Returns false when nothing could be applied.
    pub fn apply(&self, from: Vec2, to: Vec2, bounds: Rect) -> bool {
        if bounds.is_empty() {
            trace!("pan skipped: empty plot bounds");
            return false;
        }

        let event = {
            let mut vp = self.viewport.write();
            let before = vp.visible_ranges();

            if self.x_enabled {
                let reference = vp.y_axes.first().cloned().unwrap_or_default();
                let transform = PlotTransform::for_axes(&vp.x, &reference, bounds);
                ViewController::pan_axis(&mut vp.x, &transform.x_scale, from.x, to.x);
            }
            if self.y_enabled {
                let x = vp.x.clone();
                for y in vp.y_axes.iter_mut() {
                    let transform = PlotTransform::for_axes(&x, y, bounds);
                    ViewController::pan_axis(y, &transform.y_scale, from.y, to.y);
                }
            }

            PanEvent {
                before,
                after: vp.visible_ranges(),
            }
        };

        trace!(dx = to.x - from.x, dy = to.y - from.y, "pan applied");
        self.listeners.for_each(|l| l.pan_applied(&event));
        true
    }

    pub fn add_pan_listener(&self, listener: Arc<dyn PanListener>) {
        self.listeners.add(listener);
    }

    pub fn remove_pan_listener(&self, listener: &Arc<dyn PanListener>) -> bool {
        self.listeners.remove(listener)
    }
}
