pub mod celebration;
pub mod drag;
pub mod viewport;

pub use celebration::{Celebration, CelebrationAction};
pub use drag::{Drag, drag_cursor};
pub use viewport::{ViewState, Viewport};
