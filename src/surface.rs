//! The host view the touch handler draws into and schedules work on.

use crate::geometry::Rect;
use glam::Vec2;
use std::sync::atomic::{AtomicBool, Ordering};

/// Capabilities the touch handler needs from the host view.
///
/// Everything runs on the host's UI thread. `repaint` and `schedule_frame`
/// post work to that thread's queue instead of running it inline.
pub trait ViewSurface {
    /// Plot area used for screen <-> data conversion.
    fn plot_bounds(&self) -> Rect;

    /// Current hit region of the zoom button strip, if it is shown.
    fn zoom_button_region(&self) -> Option<Rect>;

    /// Requests a redraw. Repeated requests before the next frame may coalesce.
    fn repaint(&self);

    /// Requests a redraw after `delay_ms`. Gesture handling never calls this;
    /// it is the hook for host-driven draw animations.
    fn repaint_delayed(&self, delay_ms: u64);

    /// Asks the host to call [`crate::TouchHandler::on_frame`] after `delay_ms`.
    fn schedule_frame(&self, delay_ms: u64);
}

/// Smallest edge of one zoom button.
pub const ZOOM_BUTTON_MIN_SIZE: f32 = 50.0;

/// Layout of the three-button zoom strip in the bottom-right corner of `view`.
///
/// Each button is `max(min_size, min(width, height) / 7)` wide; the strip is
/// three buttons wide and 0.775 buttons tall.
pub fn zoom_button_region(view: Rect, min_size: f32) -> Rect {
    let size = min_size.max(view.width().min(view.height()) / 7.0);
    Rect::from_ltrb(
        view.right() - size * 3.0,
        view.bottom() - size * 0.775,
        view.right(),
        view.bottom(),
    )
}

/// Positions of the in/out/reset icons inside the strip laid out by
/// [`zoom_button_region`], for hosts that draw them.
pub fn zoom_button_icon_origins(view: Rect, min_size: f32) -> [Vec2; 3] {
    let size = min_size.max(view.width().min(view.height()) / 7.0);
    let y = view.bottom() - size * 0.625;
    [
        Vec2::new(view.right() - size * 2.75, y),
        Vec2::new(view.right() - size * 1.75, y),
        Vec2::new(view.right() - size * 0.75, y),
    ]
}

/// Coalesces repaint requests between two frames.
///
/// Hosts can back [`ViewSurface::repaint`] with this: only the first request
/// after a frame needs to post an invalidation.
#[derive(Debug, Default)]
pub struct PendingRepaint {
    pending: AtomicBool,
}

impl PendingRepaint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a repaint as needed. Returns true when none was pending yet.
    pub fn request(&self) -> bool {
        !self.pending.swap(true, Ordering::AcqRel)
    }

    /// Consumes the pending request at frame time.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
