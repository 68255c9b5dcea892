pub mod axis;
pub mod event;
pub mod state;
pub mod viewport;

pub use axis::*;
pub use event::*;
pub use state::*;
pub use viewport::*;
