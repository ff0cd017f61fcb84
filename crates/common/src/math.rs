//! Horizontal-plane helpers and range mapping.

use glam::Vec3;

/// Projection of vectors onto the horizontal (XZ) plane.
pub trait HorizontalExt {
    /// Copy with the vertical component zeroed.
    fn xz(self) -> Self;

    /// Horizontal part, normalized. Zero when the vector is vertical.
    fn xz_normalized(self) -> Self;
}

impl HorizontalExt for Vec3 {
    #[inline]
    fn xz(self) -> Self {
        Vec3::new(self.x, 0.0, self.z)
    }

    #[inline]
    fn xz_normalized(self) -> Self {
        self.xz().normalize_or_zero()
    }
}

/// Linearly map `value` from `[in_a, in_b]` onto `[out_a, out_b]`, clamping
/// to the output range. The input range may be descending, which inverts the
/// mapping.
pub fn map_clamped(value: f32, in_a: f32, in_b: f32, out_a: f32, out_b: f32) -> f32 {
    let span = in_b - in_a;
    if span.abs() <= f32::EPSILON {
        return out_a;
    }
    let t = ((value - in_a) / span).clamp(0.0, 1.0);
    out_a + (out_b - out_a) * t
}

/// Step `current` toward `target` by at most `max_delta`.
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + delta / distance * max_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xz_drops_vertical() {
        assert_eq!(Vec3::new(1.0, 5.0, -2.0).xz(), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(Vec3::Y.xz_normalized(), Vec3::ZERO);
        let n = Vec3::new(3.0, 7.0, 4.0).xz_normalized();
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn map_clamped_forward_range() {
        assert_eq!(map_clamped(3.0, 0.0, 6.0, 0.0, 1.0), 0.5);
        assert_eq!(map_clamped(12.0, 0.0, 6.0, 0.0, 1.0), 1.0);
        assert_eq!(map_clamped(-1.0, 0.0, 6.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn map_clamped_inverted_range_boosts_low_values() {
        // threshold 4 -> 0 maps to 0 -> 8
        assert_eq!(map_clamped(0.0, 4.0, 0.0, 0.0, 8.0), 8.0);
        assert_eq!(map_clamped(2.0, 4.0, 0.0, 0.0, 8.0), 4.0);
        assert_eq!(map_clamped(4.0, 4.0, 0.0, 0.0, 8.0), 0.0);
        assert_eq!(map_clamped(9.0, 4.0, 0.0, 0.0, 8.0), 0.0);
    }

    #[test]
    fn move_towards_caps_step() {
        let v = move_towards(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 2.0);
        assert_eq!(v, Vec3::new(2.0, 0.0, 0.0));
        let v = move_towards(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 2.0);
        assert_eq!(v, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn map_clamped_degenerate_range() {
        assert_eq!(map_clamped(1.0, 2.0, 2.0, 5.0, 9.0), 5.0);
    }
}
