//! 2D joint-angle geometry.

use crate::types::Landmark;

/// Interior angle in degrees at `vertex`, formed by the rays toward `a` and `c`.
///
/// Returns a value in [0, 180]. A missing landmark yields 0.0 — "angle
/// unknown" rather than an error; rule thresholds treat 0 as a very small
/// angle and simply fail to match.
pub fn joint_angle(a: Option<&Landmark>, vertex: Option<&Landmark>, c: Option<&Landmark>) -> f64 {
    let (Some(a), Some(b), Some(c)) = (a, vertex, c) else {
        return 0.0;
    };

    let to_a = a.to_point2() - b.to_point2();
    let to_c = c.to_point2() - b.to_point2();

    let radians = to_c.y.atan2(to_c.x) - to_a.y.atan2(to_a.x);
    let degrees = radians.to_degrees().abs();

    if degrees > 180.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_line() {
        let a = Landmark::new(0.0, 0.5);
        let b = Landmark::new(0.5, 0.5);
        let c = Landmark::new(1.0, 0.5);
        let angle = joint_angle(Some(&a), Some(&b), Some(&c));
        assert!((angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_right_angle() {
        let a = Landmark::new(0.5, 0.0);
        let b = Landmark::new(0.5, 0.5);
        let c = Landmark::new(1.0, 0.5);
        let angle = joint_angle(Some(&a), Some(&b), Some(&c));
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_reflex_angle_reflected() {
        // Rays 350 degrees apart measure as the 10-degree interior angle
        let b = Landmark::new(0.5, 0.5);
        let up = (175.0f64).to_radians();
        let down = (-175.0f64).to_radians();
        let a = Landmark::new(0.5 + up.cos(), 0.5 + up.sin());
        let c = Landmark::new(0.5 + down.cos(), 0.5 + down.sin());
        let angle = joint_angle(Some(&a), Some(&b), Some(&c));
        assert!((angle - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_landmark_is_zero() {
        let p = Landmark::new(0.5, 0.5);
        assert_eq!(joint_angle(None, Some(&p), Some(&p)), 0.0);
        assert_eq!(joint_angle(Some(&p), None, Some(&p)), 0.0);
        assert_eq!(joint_angle(Some(&p), Some(&p), None), 0.0);
    }

    #[test]
    fn test_range_invariant() {
        let points = [
            Landmark::new(0.1, 0.9),
            Landmark::new(0.9, 0.1),
            Landmark::new(0.3, 0.3),
            Landmark::new(0.7, 0.2),
            Landmark::new(0.5, 0.8),
        ];
        for a in &points {
            for b in &points {
                for c in &points {
                    let angle = joint_angle(Some(a), Some(b), Some(c));
                    assert!((0.0..=180.0).contains(&angle), "angle {angle} out of range");
                }
            }
        }
    }
}
