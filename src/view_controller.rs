use crate::data_types::AxisRange;
use crate::scales::ChartScale;

/// ViewController holds the per-axis math behind pan and zoom, independently
/// of event handling and listener dispatch to facilitate testing.
pub struct ViewController;

impl ViewController {
    const MIN_SPAN: f64 = 1e-9;

    /// Pans an axis so the data under `from_px` ends up under `to_px`.
    ///
    /// Dragging towards larger screen coordinates pulls the chart along: on a
    /// left-to-right X scale the range moves left, on a bottom-to-top Y scale it
    /// moves up.
    pub fn pan_axis(range: &mut AxisRange, scale: &ChartScale, from_px: f32, to_px: f32) {
        let delta_data = scale.invert(from_px) - scale.invert(to_px);
        if !delta_data.is_finite() || delta_data == 0.0 {
            return;
        }
        range.pan(delta_data);
        range.clamp();
    }

    /// Zooms on an axis at a specific pivot point (expressed as a percentage of the domain).
    pub fn zoom_axis_at(range: &mut AxisRange, pivot_pct: f64, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let span = range.span();
        let mut new_factor = factor;
        if span.abs() < Self::MIN_SPAN {
            return;
        }
        if span * factor < Self::MIN_SPAN {
            new_factor = Self::MIN_SPAN / span;
        }

        let pivot_data = range.min + span * pivot_pct;
        range.zoom_at(pivot_data, pivot_pct, new_factor);
        range.clamp();
    }

    /// Span multiplier for a zoom tool: zooming in divides the span by the rate,
    /// zooming out multiplies it.
    pub fn span_factor(zoom_in: bool, rate: f64) -> f64 {
        if zoom_in {
            1.0 / rate
        } else {
            rate
        }
    }
}
