use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// Point or offset in the y-up engine frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector for a clockwise-from-north angle in radians.
    #[must_use]
    pub fn from_north_angle(angle: f64) -> Self {
        Self::new(angle.sin(), angle.cos())
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub const fn extend(self, z: f64) -> Vector3 {
        Vector3::new(self.x, self.y, z)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Vertex handed to render sinks. `z` is carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn truncate(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<Vector2> for Vector3 {
    fn from(value: Vector2) -> Self {
        value.extend(0.0)
    }
}

/// Pixel size of the chart container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    #[must_use]
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }
}

impl Default for ContainerSize {
    fn default() -> Self {
        Self::new(580.0, 300.0)
    }
}

/// Plot area of a cartesian chart in container pixels.
///
/// `tickness` is the axis line thickness; bars start past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub tickness: f64,
}

impl CoordinateRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            tickness: 0.0,
        }
    }

    #[must_use]
    pub const fn with_tickness(mut self, tickness: f64) -> Self {
        self.tickness = tickness;
        self
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.x, self.y, self.width, self.height, self.tickness]
            .iter()
            .all(|value| value.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

impl Default for CoordinateRect {
    fn default() -> Self {
        Self::new(50.0, 30.0, 500.0, 240.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContainerSize, Vector2};

    #[test]
    fn north_angle_zero_points_up() {
        let v = Vector2::from_north_angle(0.0);
        assert!(v.x.abs() <= 1e-12);
        assert!((v.y - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn container_rejects_negative_or_nan_sides() {
        assert!(ContainerSize::new(0.0, 0.0).is_valid());
        assert!(!ContainerSize::new(-1.0, 10.0).is_valid());
        assert!(!ContainerSize::new(f64::NAN, 10.0).is_valid());
    }
}
