use crate::data_types::SharedViewport;
use tracing::debug;

/// Fits the viewport back to the ranges it was created with.
pub struct FitZoom {
    viewport: SharedViewport,
}

impl FitZoom {
    pub fn new(viewport: SharedViewport) -> Self {
        Self { viewport }
    }

    pub fn apply(&self) {
        self.viewport.write().reset();
        debug!("viewport fitted to initial ranges");
    }
}
