//! Three-dimensional point type.
//!
//! RESQML serializes points as `Coordinate1`, `Coordinate2` and `Coordinate3`
//! inside a `Point3d` element (lower-case `d` on the wire).

use std::ops::{Add, Mul, Sub};

/// A point (or offset vector) in a 3D coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3d {
    /// First coordinate (typically X / easting).
    pub x: f64,
    /// Second coordinate (typically Y / northing).
    pub y: f64,
    /// Third coordinate (depth, elevation or time).
    pub z: f64,
}

impl Point3d {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the same point with a replaced third coordinate.
    #[must_use]
    pub const fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    /// Returns the coordinates as an array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns true if any coordinate is NaN (the RESQML null point).
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl From<[f64; 3]> for Point3d {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Point3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Point3d {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point3d::new(1.0, 2.0, 3.0);
        let b = Point3d::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Point3d::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Point3d::new(0.5, 1.5, 2.5));
        assert_eq!(b * 4.0, Point3d::new(2.0, 2.0, 2.0));
        assert_eq!(a.with_z(9.0).to_array(), [1.0, 2.0, 9.0]);
    }

    #[test]
    fn test_nan_point() {
        assert!(Point3d::new(f64::NAN, 0.0, 0.0).is_nan());
        assert!(!Point3d::ZERO.is_nan());
        assert_eq!(Point3d::from([1.0, 1.0, 1.0]), Point3d::new(1.0, 1.0, 1.0));
    }
}
