#![allow(dead_code)]

use chart_touch::data_types::{AxisRange, ChartViewport, InteractionConfig, SharedViewport};
use chart_touch::tools::{PanEvent, PanListener, ZoomEvent, ZoomListener};
use chart_touch::{Rect, TouchHandler, ViewSurface};
use parking_lot::Mutex;
use std::cell::{Cell, RefCell};

/// Surface double recording every request the handler makes.
pub struct RecordingSurface {
    pub bounds: Rect,
    pub zoom_buttons: Option<Rect>,
    pub repaints: Cell<usize>,
    pub delayed_repaints: RefCell<Vec<u64>>,
    pub frames: RefCell<Vec<u64>>,
}

impl RecordingSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            zoom_buttons: None,
            repaints: Cell::new(0),
            delayed_repaints: RefCell::new(Vec::new()),
            frames: RefCell::new(Vec::new()),
        }
    }

    pub fn with_zoom_buttons(mut self, region: Rect) -> Self {
        self.zoom_buttons = Some(region);
        self
    }
}

impl ViewSurface for RecordingSurface {
    fn plot_bounds(&self) -> Rect {
        self.bounds
    }

    fn zoom_button_region(&self) -> Option<Rect> {
        self.zoom_buttons
    }

    fn repaint(&self) {
        self.repaints.set(self.repaints.get() + 1);
    }

    fn repaint_delayed(&self, delay_ms: u64) {
        self.delayed_repaints.borrow_mut().push(delay_ms);
    }

    fn schedule_frame(&self, delay_ms: u64) {
        self.frames.borrow_mut().push(delay_ms);
    }
}

#[derive(Default)]
pub struct RecordingPanListener {
    pub events: Mutex<Vec<PanEvent>>,
}

impl PanListener for RecordingPanListener {
    fn pan_applied(&self, event: &PanEvent) {
        self.events.lock().push(event.clone());
    }
}

#[derive(Default)]
pub struct RecordingZoomListener {
    pub events: Mutex<Vec<ZoomEvent>>,
    pub resets: Mutex<usize>,
}

impl ZoomListener for RecordingZoomListener {
    fn zoom_applied(&self, event: &ZoomEvent) {
        self.events.lock().push(event.clone());
    }

    fn zoom_reset(&self) {
        *self.resets.lock() += 1;
    }
}

/// 100 x 100 screen units showing data [0, 100] on both axes.
pub fn square_bounds() -> Rect {
    Rect::from_ltrb(0.0, 0.0, 100.0, 100.0)
}

pub fn square_viewport() -> SharedViewport {
    ChartViewport::new(AxisRange::new(0.0, 100.0), AxisRange::new(0.0, 100.0)).shared()
}

pub fn handler(config: InteractionConfig) -> (TouchHandler<RecordingSurface>, SharedViewport) {
    let viewport = square_viewport();
    let handler = TouchHandler::new(
        viewport.clone(),
        config,
        RecordingSurface::new(square_bounds()),
    );
    (handler, viewport)
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
