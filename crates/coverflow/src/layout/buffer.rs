use bytemuck::{Pod, Zeroable};

use super::pose::{layout_with, CardPose, LayoutParams};

/// Flat per-card pose for hosts that read the pose buffer directly.
/// Must match the host protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PoseInstance {
    /// Horizontal displacement in px.
    pub x: f32,
    /// Depth in px.
    pub z: f32,
    /// Rotation about Y in degrees.
    pub rotate_y: f32,
    pub opacity: f32,
    /// Stacking tier (`total - |offset|`).
    pub z_index: f32,
    /// Tie-broken stacking order.
    pub stacking: f32,
    /// Signed offset from the active card.
    pub offset: f32,
    /// 1.0 for the active card, 0.0 otherwise.
    pub active: f32,
}

impl PoseInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

impl From<&CardPose> for PoseInstance {
    fn from(pose: &CardPose) -> Self {
        Self {
            x: pose.translation.x,
            z: pose.translation.z,
            rotate_y: pose.rotate_y_deg,
            opacity: pose.opacity,
            z_index: pose.z_index as f32,
            stacking: pose.stacking() as f32,
            offset: pose.offset as f32,
            active: if pose.is_active() { 1.0 } else { 0.0 },
        }
    }
}

/// Poses for every card in deck order, rebuilt in full on each relayout.
/// Index `i` always describes card `i`.
#[derive(Debug, Default)]
pub struct LayoutBuffer {
    poses: Vec<CardPose>,
    instances: Vec<PoseInstance>,
}

impl LayoutBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every pose around `current`.
    pub fn relayout(&mut self, current: usize, total: usize, params: &LayoutParams) {
        self.poses.clear();
        self.instances.clear();
        for index in 0..total {
            let offset = index as i64 - current as i64;
            let pose = layout_with(offset, total, params);
            self.instances.push(PoseInstance::from(&pose));
            self.poses.push(pose);
        }
    }

    pub fn poses(&self) -> &[CardPose] {
        &self.poses
    }

    pub fn get(&self, index: usize) -> Option<&CardPose> {
        self.poses.get(index)
    }

    pub fn instances(&self) -> &[PoseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pose_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<PoseInstance>(), PoseInstance::STRIDE_BYTES);
    }

    #[test]
    fn relayout_covers_every_card_in_order() {
        let mut buf = LayoutBuffer::new();
        buf.relayout(2, 5, &LayoutParams::default());
        assert_eq!(buf.len(), 5);
        let offsets: Vec<i64> = buf.poses().iter().map(|p| p.offset).collect();
        assert_eq!(offsets, vec![-2, -1, 0, 1, 2]);
        assert_eq!(buf.instances()[2].active, 1.0);
        assert_eq!(buf.instances()[0].x, -470.0);
    }

    #[test]
    fn relayout_is_idempotent() {
        let mut buf = LayoutBuffer::new();
        buf.relayout(1, 4, &LayoutParams::default());
        let first = buf.poses().to_vec();
        buf.relayout(1, 4, &LayoutParams::default());
        assert_eq!(buf.poses(), first.as_slice());
    }

    #[test]
    fn empty_deck_has_no_poses() {
        let mut buf = LayoutBuffer::new();
        buf.relayout(0, 0, &LayoutParams::default());
        assert!(buf.is_empty());
        assert!(buf.instances().is_empty());
    }
}
