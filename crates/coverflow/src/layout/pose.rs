// layout/pose.rs
//
// Coverflow geometry: a pure function from a card's signed offset to its pose.
// No dependencies on the deck or the DOM.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Constants of the coverflow fan. Defaults are the canonical layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Depth of the active card (toward the viewer).
    pub center_depth: f32,
    /// Horizontal distance of the first neighbor from center.
    pub base_offset: f32,
    /// Stride between the first and second neighbors.
    pub base_spacing: f32,
    /// How much the stride grows per step away from center.
    pub spacing_growth: f32,
    /// Depth of the first neighbor.
    pub depth_base: f32,
    /// Additional recession per step away from center.
    pub depth_step: f32,
    /// Rotation magnitude of every non-center card, in degrees.
    pub fan_angle_deg: f32,
    /// Opacity lost per step away from center.
    pub opacity_falloff: f32,
    /// Cards further than this many steps are fully transparent.
    pub visible_radius: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            center_depth: 100.0,
            base_offset: 250.0,
            base_spacing: 180.0,
            spacing_growth: 40.0,
            depth_base: -180.0,
            depth_step: 90.0,
            fan_angle_deg: 70.0,
            opacity_falloff: 0.3,
            visible_radius: 4,
        }
    }
}

/// Computed pose for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPose {
    /// `x` is horizontal displacement, `z` is depth; `y` is always 0.
    pub translation: Vec3,
    /// Rotation about the vertical axis, in degrees.
    pub rotate_y_deg: f32,
    pub opacity: f32,
    /// Stacking tier: `total - |offset|`. Mirror pairs share a tier.
    pub z_index: i32,
    /// Signed distance from the active card.
    pub offset: i64,
}

impl CardPose {
    pub fn is_active(&self) -> bool {
        self.offset == 0
    }

    /// Tie-broken stacking order. Within a tier the right-hand card wins.
    pub fn stacking(&self) -> i32 {
        self.z_index * 2 + i32::from(self.offset > 0)
    }

    /// CSS transform string for a `transform-style: preserve-3d` track.
    pub fn css_transform(&self) -> String {
        format!(
            "translateX({}px) translateZ({}px) rotateY({}deg)",
            self.translation.x, self.translation.z, self.rotate_y_deg
        )
    }
}

/// Pose of a card at `offset` from center in a deck of `total`, using the
/// canonical constants.
pub fn layout(offset: i64, total: usize) -> CardPose {
    layout_with(offset, total, &LayoutParams::default())
}

/// Pose of a card at `offset` from center in a deck of `total`.
pub fn layout_with(offset: i64, total: usize, params: &LayoutParams) -> CardPose {
    let steps = offset.unsigned_abs();
    let z_index = (total as i64 - steps as i64) as i32;

    if offset == 0 {
        return CardPose {
            translation: Vec3::new(0.0, 0.0, params.center_depth),
            rotate_y_deg: 0.0,
            opacity: 1.0,
            z_index,
            offset,
        };
    }

    let a = steps as f32;
    let dir = offset.signum() as f32;

    // Stride grows with distance, so the fan accelerates outward
    let spacing = params.base_spacing + (a - 1.0) * params.spacing_growth;
    let x = dir * (params.base_offset + (a - 1.0) * spacing);
    let z = params.depth_base - (a - 1.0) * params.depth_step;

    let opacity = if steps > u64::from(params.visible_radius) {
        0.0
    } else {
        (1.0 - a * params.opacity_falloff).max(0.0)
    };

    CardPose {
        translation: Vec3::new(x, 0.0, z),
        rotate_y_deg: dir * -params.fan_angle_deg,
        opacity,
        z_index,
        offset,
    }
}
