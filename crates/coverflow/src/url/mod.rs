pub mod codec;
pub mod sync;

pub use codec::FragmentCodec;
pub use sync::UrlSync;
