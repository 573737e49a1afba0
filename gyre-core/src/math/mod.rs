//! Angle and depth math.
//!
//! Pure functions, no side effects, no panics. Every entry point coerces
//! non-finite input to zero before arithmetic, so the whole module is a
//! total function over the reals — a dropped frame of wrong-but-finite
//! math beats a NaN reaching the render tree.

use gyre_model::DepthTier;

/// Coerce NaN and ±infinity to 0 so downstream arithmetic stays finite.
#[inline]
pub fn safe_f32(x: f32) -> f32 {
    if x.is_finite() { x } else { 0.0 }
}

/// Canonical signed representative of an angle in degrees.
///
/// The result lies in `(-180, 180]` for every finite input; non-finite
/// input maps to 0.
#[inline]
pub fn normalize_signed_deg(angle: f32) -> f32 {
    let wrapped = safe_f32(angle).rem_euclid(360.0);
    if wrapped > 180.0 { wrapped - 360.0 } else { wrapped }
}

/// Normalized facing depth of a card.
///
/// 0 when the card directly faces the viewer, 1 when directly opposite,
/// scaling linearly with angular distance in between. `scene_yaw` is
/// added to the card angle before normalization so the whole scene can
/// be re-aimed without touching per-card math.
#[inline]
pub fn depth(theta_deg: f32, scene_yaw_deg: f32) -> f32 {
    let eff =
        normalize_signed_deg(safe_f32(theta_deg) + safe_f32(scene_yaw_deg));
    (eff.abs() / 180.0).clamp(0.0, 1.0)
}

/// Depth bucketed into the three visual tiers.
#[inline]
pub fn tier(theta_deg: f32, scene_yaw_deg: f32) -> DepthTier {
    DepthTier::from_depth(depth(theta_deg, scene_yaw_deg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_lands_in_half_open_range() {
        for theta in [
            -7200.5_f32, -540.0, -180.0, -179.9, 0.0, 179.9, 180.0,
            180.1, 360.0, 719.0, 123456.78,
        ] {
            let n = normalize_signed_deg(theta);
            assert!(
                n > -180.0 && n <= 180.0,
                "normalize({theta}) = {n} out of range"
            );
        }
    }

    #[test]
    fn normalization_is_360_periodic() {
        for theta in [-123.4_f32, 0.0, 45.0, 179.0, 200.0] {
            let base = normalize_signed_deg(theta);
            for k in [-3_i32, -1, 1, 2, 5] {
                let shifted =
                    normalize_signed_deg(theta + 360.0 * k as f32);
                assert!(
                    (base - shifted).abs() < 1e-3,
                    "theta={theta} k={k}: {base} vs {shifted}"
                );
            }
        }
    }

    #[test]
    fn normalization_half_turn_is_positive() {
        assert_eq!(normalize_signed_deg(180.0), 180.0);
        assert_eq!(normalize_signed_deg(-180.0), 180.0);
        assert_eq!(normalize_signed_deg(540.0), 180.0);
    }

    #[test]
    fn non_finite_input_maps_to_zero() {
        assert_eq!(normalize_signed_deg(f32::NAN), 0.0);
        assert_eq!(normalize_signed_deg(f32::INFINITY), 0.0);
        assert_eq!(normalize_signed_deg(f32::NEG_INFINITY), 0.0);
        assert_eq!(depth(f32::NAN, f32::INFINITY), 0.0);
    }

    #[test]
    fn depth_anchor_values() {
        assert_eq!(depth(0.0, 0.0), 0.0);
        assert_eq!(depth(180.0, 0.0), 1.0);
        assert_eq!(depth(90.0, 0.0), 0.5);
        // Yaw shifts the effective angle
        assert_eq!(depth(90.0, 90.0), 1.0);
        assert_eq!(depth(90.0, -90.0), 0.0);
    }

    #[test]
    fn depth_stays_in_unit_interval_for_arbitrary_input() {
        use rand::Rng;
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let theta = rng.random_range(-1.0e6_f32..1.0e6);
            let yaw = rng.random_range(-1.0e6_f32..1.0e6);
            let d = depth(theta, yaw);
            assert!((0.0..=1.0).contains(&d), "depth({theta}, {yaw}) = {d}");
        }
    }

    #[test]
    fn tier_uses_depth_buckets() {
        use gyre_model::DepthTier;
        assert_eq!(tier(0.0, 0.0), DepthTier::Near);
        assert_eq!(tier(29.9, 0.0), DepthTier::Near);
        assert_eq!(tier(31.0, 0.0), DepthTier::Mid);
        assert_eq!(tier(90.0, 0.0), DepthTier::Mid);
        assert_eq!(tier(91.0, 0.0), DepthTier::Far);
        assert_eq!(tier(180.0, 0.0), DepthTier::Far);
    }
}
