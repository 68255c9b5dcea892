use serde::{Deserialize, Serialize};

/// Identifies one of the chart's Y axes (scales). The X axis is shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct AxisId(pub usize);

/// Which screen axis a gesture or lock refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// State for a single axis (X or Y).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    /// Pan limits: the visible range never extends past these once clamped.
    pub min_limit: Option<f64>,
    pub max_limit: Option<f64>,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Default::default()
        }
    }

    pub fn with_limits(mut self, min_limit: f64, max_limit: f64) -> Self {
        self.min_limit = Some(min_limit);
        self.max_limit = Some(max_limit);
        self
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Pure zoom without constraints to preserve the pivot point.
    pub fn zoom_at(&mut self, pivot_data: f64, pivot_pct: f64, factor: f64) {
        let new_span = self.span() * factor;
        self.min = pivot_data - new_span * pivot_pct;
        self.max = self.min + new_span;
    }

    pub fn pan(&mut self, delta_data: f64) {
        self.min += delta_data;
        self.max += delta_data;
    }

    /// Applies limits while preserving the span whenever it fits.
    pub fn clamp(&mut self) {
        let (Some(min_l), Some(max_l)) = (self.min_limit, self.max_limit) else {
            if let Some(l) = self.min_limit {
                if self.min < l {
                    let s = self.span();
                    self.min = l;
                    self.max = l + s;
                }
            }
            if let Some(l) = self.max_limit {
                if self.max > l {
                    let s = self.span();
                    self.max = l;
                    self.min = l - s;
                }
            }
            return;
        };

        let limit_span = max_l - min_l;
        let current_span = self.span();

        if current_span <= limit_span {
            if self.min < min_l {
                self.min = min_l;
                self.max = min_l + current_span;
            } else if self.max > max_l {
                self.max = max_l;
                self.min = max_l - current_span;
            }
        } else {
            // Wider than the limits: show exactly the limits.
            self.min = min_l;
            self.max = max_l;
        }
    }
}

/// Snapshot of the visible data range for one (X, Y) axis pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl VisibleRange {
    pub fn from_axes(x: &AxisRange, y: &AxisRange) -> Self {
        Self {
            x_min: x.min,
            x_max: x.max,
            y_min: y.min,
            y_max: y.max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}
