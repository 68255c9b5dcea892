use super::axis::{AxisId, AxisRange, VisibleRange};
use parking_lot::RwLock;
use std::sync::Arc;

/// Viewport handle shared between the tools of one chart.
pub type SharedViewport = Arc<RwLock<ChartViewport>>;

/// Visible ranges of a chart: one shared X axis and one or more Y axes.
///
/// The ranges the viewport was built with are kept so a fit zoom can restore them.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartViewport {
    pub x: AxisRange,
    pub y_axes: Vec<AxisRange>,
    initial_x: AxisRange,
    initial_y_axes: Vec<AxisRange>,
}

impl ChartViewport {
    pub fn new(x: AxisRange, y: AxisRange) -> Self {
        Self::with_y_axes(x, vec![y])
    }

    pub fn with_y_axes(x: AxisRange, y_axes: Vec<AxisRange>) -> Self {
        Self {
            initial_x: x.clone(),
            initial_y_axes: y_axes.clone(),
            x,
            y_axes,
        }
    }

    pub fn shared(self) -> SharedViewport {
        Arc::new(RwLock::new(self))
    }

    pub fn y_axis(&self, id: AxisId) -> Option<&AxisRange> {
        self.y_axes.get(id.0)
    }

    /// Visible range of the X axis paired with the given Y axis.
    pub fn visible_range(&self, id: AxisId) -> Option<VisibleRange> {
        self.y_axis(id).map(|y| VisibleRange::from_axes(&self.x, y))
    }

    /// Visible ranges for every Y axis, in axis order.
    pub fn visible_ranges(&self) -> Vec<VisibleRange> {
        self.y_axes
            .iter()
            .map(|y| VisibleRange::from_axes(&self.x, y))
            .collect()
    }

    /// Restores the ranges the viewport was created with.
    pub fn reset(&mut self) {
        self.x = self.initial_x.clone();
        self.y_axes = self.initial_y_axes.clone();
    }
}
