use serde::{Deserialize, Serialize};

/// A position on the board in millimetres, relative to the coil center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` along the direction `theta` (radians, counter-clockwise from +x).
    #[must_use]
    pub fn from_polar(radius: f64, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self::new(radius * c, radius * s)
    }

    /// Distance from the origin.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Polar angle in radians, in `(-pi, pi]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[must_use]
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    #[must_use]
    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        Point2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Mirror across the x axis.
    #[must_use]
    pub fn mirror_x(&self) -> Point2D {
        Point2D::new(self.x, -self.y)
    }

    /// Move this point `distance` towards the origin, stopping at the origin.
    #[must_use]
    pub fn towards_origin(&self, distance: f64) -> Point2D {
        let r = self.radius();
        if r <= distance || r == 0.0 {
            return Point2D::default();
        }
        let scale = (r - distance) / r;
        Point2D::new(self.x * scale, self.y * scale)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn from_polar_quarter_turn() {
        let p = Point2D::from_polar(3.0, FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.radius(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn mirror_keeps_radius() {
        let p = Point2D::new(1.5, -4.0);
        let m = p.mirror_x();
        assert_eq!(m, Point2D::new(1.5, 4.0));
        assert_abs_diff_eq!(p.radius(), m.radius(), epsilon = 1e-12);
    }

    #[test]
    fn towards_origin_shortens_radius() {
        let p = Point2D::new(3.0, 4.0);
        let q = p.towards_origin(1.0);
        assert_abs_diff_eq!(q.radius(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.angle(), p.angle(), epsilon = 1e-12);
    }

    #[test]
    fn towards_origin_clamps_at_center() {
        let p = Point2D::new(0.3, 0.4);
        assert_eq!(p.towards_origin(2.0), Point2D::default());
    }
}
