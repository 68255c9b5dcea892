//! chart_touch: touch gesture interpretation for chart viewports

pub mod data_types;
pub mod geometry;
pub mod listeners;
pub mod scales;
pub mod surface;
pub mod tools;
pub mod touch;
pub mod transform;
pub mod view_controller;

pub use data_types::{AxisRange, ChartViewport, InteractionConfig, TouchEvent, VisibleRange};
pub use geometry::Rect;
pub use surface::ViewSurface;
pub use tools::{PanListener, ZoomListener};
pub use touch::{ClassifiedAction, GestureClassifier, TouchHandler};
