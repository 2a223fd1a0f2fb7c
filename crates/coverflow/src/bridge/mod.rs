pub mod protocol;

pub use protocol::{Snapshot, SnapshotHeader};
