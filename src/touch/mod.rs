pub mod axis_lock;
pub mod classifier;
pub mod fling;
pub mod handler;

pub use axis_lock::{AxisLockArbiter, AxisRatios};
pub use classifier::{ClassifiedAction, ClassifierConfig, GestureClassifier, ZoomButton};
pub use fling::{
    FlingAnimator, FlingDetector, FlingStart, FlingState, FlingStep,
    VelocityTracker,
};
pub use handler::TouchHandler;
