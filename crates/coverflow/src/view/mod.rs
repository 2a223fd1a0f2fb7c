pub mod placeholder;
pub mod sink;
pub mod sync;

pub use placeholder::{placeholder_data_url, placeholder_svg};
pub use sink::ViewSink;
pub use sync::ViewSynchronizer;
