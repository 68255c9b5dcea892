//! Transform helper for coordinate projection

use crate::data_types::AxisRange;
use crate::geometry::Rect;
use crate::scales::ChartScale;
use glam::{DVec2, Vec2};

#[derive(Clone, Copy, Debug)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: Rect,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: Rect) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    /// Projection of an (X, Y) axis pair into `bounds`, Y growing upwards.
    pub fn for_axes(x: &AxisRange, y: &AxisRange, bounds: Rect) -> Self {
        Self::new(
            ChartScale::new_linear((x.min, x.max), (bounds.left(), bounds.right())),
            ChartScale::new_linear((y.min, y.max), (bounds.bottom(), bounds.top())),
            bounds,
        )
    }

    pub fn data_to_screen(&self, point: DVec2) -> Vec2 {
        Vec2::new(self.x_scale.map(point.x), self.y_scale.map(point.y))
    }

    pub fn screen_to_data(&self, point: Vec2) -> DVec2 {
        DVec2::new(self.x_scale.invert(point.x), self.y_scale.invert(point.y))
    }
}
