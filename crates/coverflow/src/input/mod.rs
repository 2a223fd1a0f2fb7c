pub mod gesture;
pub mod queue;

pub use gesture::{DragTracker, GestureNormalizer, Navigation};
pub use queue::{DragSource, InputEvent, InputQueue, Key};
