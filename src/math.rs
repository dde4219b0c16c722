//! Angle and vector helpers shared by the physics and presentation code.

use bevy::math::Vec2;
use std::f32::consts::{PI, TAU};

use crate::constants::DISTANCE_EPSILON;

/// Wrap an angle into `(-π, π]`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Step `current` toward `target` by fraction `t` of the shortest signed difference.
///
/// Alternative easing; the orientation tick uses [`lerp_angle_safe`].
pub fn lerp_angle(current: f32, target: f32, t: f32) -> f32 {
    current + normalize_angle(target - current) * t
}

/// Like [`lerp_angle`] but eased: the fraction is `1 - e^(-10t)`.
///
/// Alternative easing; the orientation tick uses [`lerp_angle_safe`].
pub fn slerp_angle(current: f32, target: f32, t: f32) -> f32 {
    current + normalize_angle(target - current) * (1.0 - (-t * 10.0).exp())
}

/// Interpolate on the unit circle instead of on the raw angle.
///
/// Sine and cosine are blended linearly and the angle is recovered with
/// `atan2`, so a target across the ±π seam is approached through the seam.
/// The result is always in `(-π, π]`.
pub fn lerp_angle_safe(current: f32, target: f32, t: f32) -> f32 {
    let (sin_c, cos_c) = current.sin_cos();
    let (sin_t, cos_t) = target.sin_cos();
    let sin_i = sin_c + (sin_t - sin_c) * t;
    let cos_i = cos_c + (cos_t - cos_c) * t;
    sin_i.atan2(cos_i)
}

/// Heading of a vector, `atan2(y, x)`.
#[inline]
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Unit vector of `v`, or `None` when its length is below [`DISTANCE_EPSILON`].
#[inline]
pub fn try_unit(v: Vec2) -> Option<Vec2> {
    let len = v.length();
    (len > DISTANCE_EPSILON).then(|| v / len)
}

/// Point on a circle of `radius` around `center` at `angle`.
#[inline]
pub fn on_circle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::from_angle(angle) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_wraps_into_half_open_range() {
        // 3π lands on the seam; either side of it is acceptable within rounding.
        assert_relative_eq!(normalize_angle(3.0 * PI).abs(), PI, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle(-PI), PI, epsilon = 1e-5);
        assert_relative_eq!(normalize_angle(0.5), 0.5, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(-TAU - 0.5), -0.5, epsilon = 1e-5);
    }

    #[test]
    fn lerp_angle_takes_short_way_round() {
        // 3.0 → -3.0 is 0.28 rad through the seam, not 6 rad through zero.
        let next = lerp_angle(3.0, -3.0, 0.5);
        assert!(next > 3.0, "expected to move past 3.0 toward π, got {next}");
    }

    #[test]
    fn slerp_angle_converges_with_large_t() {
        let next = slerp_angle(0.0, 1.0, 5.0);
        assert_relative_eq!(next, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn safe_lerp_crosses_seam_not_zero() {
        let mut angle = 3.0_f32;
        for _ in 0..200 {
            let next = lerp_angle_safe(angle, -3.0, 0.08);
            // Never swing through the zero side of the circle.
            assert!(next.abs() > 2.9, "path went through zero: {next}");
            angle = next;
        }
        assert_relative_eq!(angle, -3.0, epsilon = 1e-3);
    }

    #[test]
    fn safe_lerp_full_weight_hits_target() {
        assert_relative_eq!(lerp_angle_safe(0.3, 1.2, 1.0), 1.2, epsilon = 1e-5);
        assert_relative_eq!(lerp_angle_safe(0.3, 1.2, 0.0), 0.3, epsilon = 1e-5);
    }

    #[test]
    fn try_unit_rejects_zero() {
        assert!(try_unit(Vec2::ZERO).is_none());
        let u = try_unit(Vec2::new(3.0, 4.0)).unwrap();
        assert_relative_eq!(u.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn on_circle_lies_on_radius() {
        let p = on_circle(Vec2::new(10.0, -5.0), 7.0, 1.3);
        assert_relative_eq!((p - Vec2::new(10.0, -5.0)).length(), 7.0, epsilon = 1e-4);
    }
}
