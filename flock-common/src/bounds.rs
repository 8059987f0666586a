use crate::vecmath::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle defining the toroidal world.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        WorldBounds { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Half-open containment test: `min <= p < max` on both axes.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Applies a single wrap per axis. A point that is more than one world
    /// width out of range stays out of range after this call.
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(p.x, self.min.x, self.max.x),
            wrap_axis(p.y, self.min.y, self.max.y),
        )
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        WorldBounds::new(Vec2::new(-50.0, -50.0), Vec2::new(50.0, 50.0))
    }
}

#[inline]
fn wrap_axis(value: f32, min: f32, max: f32) -> f32 {
    if value >= max {
        value - (max - min)
    } else if value < min {
        value + (max - min)
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_at_exact_max_lands_on_min() {
        let bounds = WorldBounds::default();
        let wrapped = bounds.wrap(Vec2::new(50.0, 0.0));
        assert_eq!(wrapped, Vec2::new(-50.0, 0.0));
        assert!(bounds.contains(wrapped));
    }

    #[test]
    fn test_wrap_below_min_adds_width() {
        let bounds = WorldBounds::default();
        let wrapped = bounds.wrap(Vec2::new(10.0, -51.0));
        assert_eq!(wrapped, Vec2::new(10.0, 49.0));
    }

    #[test]
    fn test_wrap_is_single_step_not_modulo() {
        let bounds = WorldBounds::default();
        let wrapped = bounds.wrap(Vec2::new(260.0, 0.0));
        assert_eq!(wrapped.x, 160.0);
        assert!(!bounds.contains(wrapped));
    }

    #[test]
    fn test_inside_points_untouched() {
        let bounds = WorldBounds::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0));
        let p = Vec2::new(3.5, 19.5);
        assert_eq!(bounds.wrap(p), p);
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 20.0);
    }
}
