use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A vector in 2D space, with [`f64`] components.
///
/// # Examples
/// ```
/// # use workbench::vector::Vector2D;
/// let a = Vector2D::new(1.0, 2.0);
/// let b = Vector2D::new(3.0, 4.0);
/// assert_eq!(a + b, Vector2D::new(4.0, 6.0));
/// assert_eq!(a.dot(b), 11.0);
/// assert_eq!(b.magnitude(), 5.0);
/// assert_eq!(b.to_string(), "(3.00, 4.00)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    pub const fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub const fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub const fn scale(self, scalar: f64) -> Vector2D {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }

    pub const fn dot(self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the Euclidean length of the vector.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns a unit vector in the same direction. The zero vector has no direction, so it is
    /// returned unchanged.
    pub fn normalize(self) -> Vector2D {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vector2D::ZERO;
        }
        self.scale(1.0 / magnitude)
    }

    pub fn distance(self, other: Vector2D) -> f64 {
        self.sub(other).magnitude()
    }

    /// Rotates the vector counter-clockwise by `angle` radians.
    ///
    /// # Examples
    /// ```
    /// # use std::f64::consts::PI;
    /// # use workbench::vector::Vector2D;
    /// let rotated = Vector2D::new(1.0, 0.0).rotate(PI / 2.0);
    /// assert!(rotated.x.abs() < 1e-9);
    /// assert!((rotated.y - 1.0).abs() < 1e-9);
    /// ```
    pub fn rotate(self, angle: f64) -> Vector2D {
        let (sin, cos) = angle.sin_cos();
        Vector2D::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Returns the vector rotated a quarter turn counter-clockwise.
    pub const fn perpendicular(self) -> Vector2D {
        Vector2D::new(-self.y, self.x)
    }

    /// Returns the unsigned angle between two vectors in radians, or 0 if either of them is the
    /// zero vector.
    pub fn angle(self, other: Vector2D) -> f64 {
        let magnitudes = self.magnitude() * other.magnitude();
        if magnitudes == 0.0 {
            return 0.0;
        }
        // Rounding can push the cosine just outside of [-1, 1].
        (self.dot(other) / magnitudes).clamp(-1.0, 1.0).acos()
    }

    /// Returns the projection of this vector onto the direction of `other`. Projecting onto the
    /// zero vector gives the zero vector.
    ///
    /// # Examples
    /// ```
    /// # use workbench::vector::Vector2D;
    /// let v = Vector2D::new(3.0, 4.0);
    /// assert_eq!(v.project(Vector2D::new(2.0, 0.0)), Vector2D::new(3.0, 0.0));
    /// ```
    pub fn project(self, other: Vector2D) -> Vector2D {
        let direction = other.normalize();
        direction.scale(self.dot(direction))
    }

    pub const fn add_in_place(&mut self, other: Vector2D) -> &mut Vector2D {
        *self = Vector2D::add(*self, other);
        self
    }

    pub const fn sub_in_place(&mut self, other: Vector2D) -> &mut Vector2D {
        *self = Vector2D::sub(*self, other);
        self
    }

    pub const fn scale_in_place(&mut self, scalar: f64) -> &mut Vector2D {
        *self = self.scale(scalar);
        self
    }

    /// Normalizes the vector in place, leaving the zero vector untouched.
    ///
    /// # Examples
    /// ```
    /// # use workbench::vector::Vector2D;
    /// let mut v = Vector2D::new(0.0, 2.0);
    /// v.normalize_in_place().scale_in_place(3.0);
    /// assert_eq!(v, Vector2D::new(0.0, 3.0));
    /// ```
    pub fn normalize_in_place(&mut self) -> &mut Vector2D {
        *self = self.normalize();
        self
    }

    pub fn rotate_in_place(&mut self, angle: f64) -> &mut Vector2D {
        *self = self.rotate(angle);
        self
    }
}

impl Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, other: Vector2D) -> Vector2D {
        Vector2D::add(self, other)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, other: Vector2D) -> Vector2D {
        Vector2D::sub(self, other)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, scalar: f64) -> Vector2D {
        self.scale(scalar)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Vector2D) {
        self.add_in_place(other);
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Vector2D) {
        self.sub_in_place(other);
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, scalar: f64) {
        self.scale_in_place(scalar);
    }
}
