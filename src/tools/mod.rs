//! Transform appliers: the only code paths that mutate a chart's visible ranges.

pub mod fit_zoom;
pub mod pan;
pub mod zoom;

pub use fit_zoom::FitZoom;
pub use pan::{Pan, PanEvent, PanListener};
pub use zoom::{Zoom, ZoomAxes, ZoomEvent, ZoomListener};
