pub mod buffer;
pub mod pose;

pub use buffer::{LayoutBuffer, PoseInstance};
pub use pose::{layout, layout_with, CardPose, LayoutParams};
