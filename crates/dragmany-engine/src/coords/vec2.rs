use std::ops::{Add, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Splats one value into both components.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Snaps to the integer pixel containing this point.
    ///
    /// Uses `floor` so that negative coordinates (pointer left of / above the
    /// window) land on the correct pixel rather than rounding toward zero.
    #[inline]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_pixel_floors_fractions() {
        assert_eq!(Vec2::new(10.9, 3.2).to_pixel(), (10, 3));
    }

    #[test]
    fn to_pixel_floors_negative_toward_minus_infinity() {
        assert_eq!(Vec2::new(-0.5, -10.1).to_pixel(), (-1, -11));
    }

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::splat(0.5);
        assert_eq!(a + b, Vec2::new(1.5, 2.5));
        assert_eq!(a - b, Vec2::new(0.5, 1.5));
    }
}
