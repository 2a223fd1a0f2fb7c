/// Flat snapshot layout for hosts that read carousel state directly.
/// Must stay in sync with the host-side reader.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Poses: card_count × 8 floats]
/// ```

use crate::layout::PoseInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_GENERATION: usize = 1;
pub const HEADER_CARD_COUNT: usize = 2;
pub const HEADER_CURRENT_INDEX: usize = 3;
pub const HEADER_PREV_ENABLED: usize = 4;
pub const HEADER_NEXT_ENABLED: usize = 5;
pub const HEADER_DETAIL_PENDING: usize = 6;
pub const HEADER_DRAGGING: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per pose (wire format, fixed).
pub const POSE_FLOATS: usize = PoseInstance::FLOATS;

/// Header values for one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapshotHeader {
    pub generation: u64,
    pub current_index: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub detail_pending: bool,
    pub dragging: bool,
}

/// Reusable snapshot buffer.
#[derive(Debug, Default)]
pub struct Snapshot {
    data: Vec<f32>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite the buffer from `header` and `poses`.
    pub fn write(&mut self, header: &SnapshotHeader, poses: &[PoseInstance]) {
        self.data.clear();
        self.data.resize(HEADER_FLOATS, 0.0);
        self.data[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        self.data[HEADER_GENERATION] = header.generation as f32;
        self.data[HEADER_CARD_COUNT] = poses.len() as f32;
        self.data[HEADER_CURRENT_INDEX] = header.current_index as f32;
        self.data[HEADER_PREV_ENABLED] = flag(header.prev_enabled);
        self.data[HEADER_NEXT_ENABLED] = flag(header.next_enabled);
        self.data[HEADER_DETAIL_PENDING] = flag(header.detail_pending);
        self.data[HEADER_DRAGGING] = flag(header.dragging);
        self.data.extend_from_slice(bytemuck::cast_slice(poses));
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ptr()
    }

    /// Length in floats.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutBuffer, LayoutParams};

    #[test]
    fn snapshot_layout() {
        let mut layout = LayoutBuffer::new();
        layout.relayout(1, 3, &LayoutParams::default());

        let mut snap = Snapshot::new();
        let header = SnapshotHeader {
            generation: 4,
            current_index: 1,
            prev_enabled: true,
            next_enabled: true,
            ..Default::default()
        };
        snap.write(&header, layout.instances());

        let data = snap.as_slice();
        assert_eq!(data.len(), HEADER_FLOATS + 3 * POSE_FLOATS);
        assert_eq!(data[HEADER_PROTOCOL_VERSION], PROTOCOL_VERSION);
        assert_eq!(data[HEADER_CARD_COUNT], 3.0);
        assert_eq!(data[HEADER_CURRENT_INDEX], 1.0);
        assert_eq!(data[HEADER_DRAGGING], 0.0);

        // Second pose is the active card: x = 0, z = 100
        let active = HEADER_FLOATS + POSE_FLOATS;
        assert_eq!(data[active], 0.0);
        assert_eq!(data[active + 1], 100.0);
        assert_eq!(data[active + 7], 1.0);
    }

    #[test]
    fn rewrite_replaces_previous_contents() {
        let mut snap = Snapshot::new();
        snap.write(&SnapshotHeader::default(), &[PoseInstance::default(); 4]);
        snap.write(&SnapshotHeader::default(), &[]);
        assert_eq!(snap.len(), HEADER_FLOATS);
    }
}
