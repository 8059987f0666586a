use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Lengths below this are treated as zero when normalizing or measuring angles.
pub const EPSILON: f32 = 1e-6;

/// A simple 2D vector struct.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2.
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    /// Creates a zero vector.
    pub fn zero() -> Self {
        Vec2 { x: 0.0, y: 0.0 }
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// True when the vector is too short to carry a direction.
    pub fn is_near_zero(&self) -> bool {
        self.length_squared() <= EPSILON * EPSILON
    }

    /// Returns a normalized version of the vector (unit vector).
    /// Returns a zero vector if the original vector's length is zero.
    pub fn normalize_or_zero(&self) -> Self {
        if self.is_near_zero() {
            return Vec2::zero();
        }
        let inv_len = 1.0 / self.length();
        Vec2 { x: self.x * inv_len, y: self.y * inv_len }
    }

    /// Rescales the vector to `max_length` if it is longer than that.
    /// Direction is preserved; shorter (and zero) vectors come back untouched.
    pub fn clamp_length(&self, max_length: f32) -> Self {
        let len = self.length();
        if len > max_length && len > 0.0 {
            self.scale(max_length / len)
        } else {
            *self
        }
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn distance_squared(&self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Vec2) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn scale(&self, scalar: f32) -> Self {
        Vec2 { x: self.x * scalar, y: self.y * scalar }
    }

    /// Unsigned angle to `other` in `[0, PI]`, or `None` if either vector is zero.
    pub fn angle_between(&self, other: Vec2) -> Option<f32> {
        if self.is_near_zero() || other.is_near_zero() {
            return None;
        }
        let cos = self.dot(other) / (self.length() * other.length());
        Some(clamp(cos, -1.0, 1.0).acos())
    }

    /// Rotates the vector by `angle_rad`. With y pointing down this turns clockwise.
    pub fn rotate(&self, angle_rad: f32) -> Self {
        let (sin, cos) = angle_rad.sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self { x: self.x + other.x, y: self.y + other.y }
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self { x: self.x * scalar, y: self.y * scalar }
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, scalar: f32) -> Self {
        Self { x: self.x / scalar, y: self.y / scalar }
    }
}

/// Screen-space heading of a direction vector: 0 points up (-y), clockwise positive.
pub fn heading_of(v: Vec2) -> f32 {
    v.x.atan2(-v.y)
}

/// Clamps a value between a minimum and maximum.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(Vec2::zero().distance(v), 5.0);
    }

    #[test]
    fn test_normalize_or_zero_handles_zero() {
        assert_eq!(Vec2::zero().normalize_or_zero(), Vec2::zero());
        let n = Vec2::new(0.0, -2.0).normalize_or_zero();
        assert_eq!(n, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_clamp_length_preserves_direction() {
        let v = Vec2::new(6.0, 8.0).clamp_length(5.0);
        assert!((v.length() - 5.0).abs() < 1e-5);
        assert!((v.x - 3.0).abs() < 1e-5 && (v.y - 4.0).abs() < 1e-5);

        let short = Vec2::new(1.0, 1.0);
        assert_eq!(short.clamp_length(5.0), short);
        assert_eq!(Vec2::zero().clamp_length(0.0), Vec2::zero());
    }

    #[test]
    fn test_angle_between() {
        let up = Vec2::new(0.0, -1.0);
        let right = Vec2::new(1.0, 0.0);
        let angle = up.angle_between(right).unwrap();
        assert!((angle - FRAC_PI_2).abs() < 1e-5);

        let back = up.angle_between(Vec2::new(0.0, 3.0)).unwrap();
        assert!((back - PI).abs() < 1e-5);

        assert!(up.angle_between(Vec2::zero()).is_none());
    }

    #[test]
    fn test_heading_convention() {
        assert_eq!(heading_of(Vec2::new(0.0, -1.0)), 0.0);
        assert!((heading_of(Vec2::new(1.0, 0.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((heading_of(Vec2::new(-1.0, 0.0)) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_matches_heading() {
        let forward = Vec2::new(0.0, -1.0);
        let turned = forward.rotate(FRAC_PI_2);
        assert!((turned.x - 1.0).abs() < 1e-6);
        assert!(turned.y.abs() < 1e-6);
    }
}
