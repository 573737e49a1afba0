//! Derived per-card values: the 3D transform record and the depth tier.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A CSS-transform-compatible tuple for a single card, plus its opacity.
///
/// Purely a function of `(index, total, scroll_offset, mode)`; recomputed
/// every frame and never mutated in place. The `y` field mirrors the raw
/// vertical layout position before any renderer-side adjustment, matching
/// what consumers applying CSS custom properties expect.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub translate_z: f32,
    /// Rotation around the vertical axis, normalized to `[0, 360)` degrees.
    pub rotate_y: f32,
    /// Raw vertical layout position.
    pub y: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

impl CardTransform {
    /// The do-nothing transform: card at origin, fully opaque.
    pub const IDENTITY: CardTransform = CardTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        translate_z: 0.0,
        rotate_y: 0.0,
        y: 0.0,
        opacity: 1.0,
    };

    /// True when every component is a finite number. The placement
    /// calculator guarantees this for all inputs; the check exists for
    /// assertions at the rendering boundary.
    pub fn is_finite(&self) -> bool {
        self.translate_x.is_finite()
            && self.translate_y.is_finite()
            && self.translate_z.is_finite()
            && self.rotate_y.is_finite()
            && self.y.is_finite()
            && self.opacity.is_finite()
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Visual depth bucket used to pick a blur/opacity CSS preset.
///
/// Derived from the continuous depth scalar in `[0, 1]` where 0 means the
/// card directly faces the viewer and 1 means directly opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DepthTier {
    Near,
    Mid,
    Far,
}

impl DepthTier {
    /// Tier thresholds: 30°/180° for near, 90°/180° for mid.
    pub const NEAR_MAX: f32 = 1.0 / 6.0;
    pub const MID_MAX: f32 = 0.5;

    /// Bucket a depth scalar. Values outside `[0, 1]` are clamped by the
    /// comparison itself; non-finite depth lands in `Far`.
    pub fn from_depth(depth: f32) -> Self {
        if depth <= Self::NEAR_MAX {
            DepthTier::Near
        } else if depth <= Self::MID_MAX {
            DepthTier::Mid
        } else {
            DepthTier::Far
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_tier_buckets() {
        assert_eq!(DepthTier::from_depth(0.1), DepthTier::Near);
        assert_eq!(DepthTier::from_depth(0.4), DepthTier::Mid);
        assert_eq!(DepthTier::from_depth(0.9), DepthTier::Far);
    }

    #[test]
    fn depth_tier_boundaries_on_both_sides() {
        // Near/Mid boundary at 1/6 (inclusive on the near side)
        assert_eq!(DepthTier::from_depth(1.0 / 6.0), DepthTier::Near);
        assert_eq!(
            DepthTier::from_depth(1.0 / 6.0 + 1e-4),
            DepthTier::Mid
        );
        // Mid/Far boundary at 1/2 (inclusive on the mid side)
        assert_eq!(DepthTier::from_depth(0.5), DepthTier::Mid);
        assert_eq!(DepthTier::from_depth(0.5 + 1e-4), DepthTier::Far);
    }

    #[test]
    fn identity_transform_is_finite() {
        assert!(CardTransform::IDENTITY.is_finite());
        let broken = CardTransform {
            rotate_y: f32::NAN,
            ..CardTransform::IDENTITY
        };
        assert!(!broken.is_finite());
    }
}
