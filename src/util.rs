//! Angle conversion helpers.

use std::f64::consts::PI;

/// Converts an angle in radians to degrees.
pub fn radians_to_degrees(angle: f64) -> f64 {
    (angle * 180.0) / PI
}

/// Converts an angle in degrees to radians.
pub fn degrees_to_radians(angle: f64) -> f64 {
    (angle / 180.0) * PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_common_angles() {
        assert!((degrees_to_radians(180.0) - PI).abs() < f64::EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < f64::EPSILON);
        assert!((radians_to_degrees(PI) - 180.0).abs() < 1e-12);
        assert_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn conversions_invert_each_other() {
        for angle in [-720.0, -45.0, 12.5, 359.0] {
            assert!((radians_to_degrees(degrees_to_radians(angle)) - angle).abs() < 1e-9);
        }
    }
}
