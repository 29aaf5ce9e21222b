use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector (or point) in image coordinates
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec2(f64, f64);

impl Vec2 {
    /// Zero vector
    #[inline]
    pub const fn zero() -> Self {
        Self(0., 0.)
    }

    /// Same value in both components
    #[inline(always)]
    pub const fn dup(v: f64) -> Self {
        Self(v, v)
    }

    /// Create vector from values
    #[inline]
    pub const fn of(x: f64, y: f64) -> Self {
        Self(x, y)
    }

    /// X component
    #[inline(always)]
    pub const fn x(&self) -> f64 {
        self.0
    }

    /// Y component
    #[inline(always)]
    pub const fn y(&self) -> f64 {
        self.1
    }

    /// Vector magnitude
    #[inline]
    pub fn mag(&self) -> f64 {
        f64::hypot(self.x(), self.y())
    }

    /// Squared magnitude
    #[inline]
    pub fn mag_sq(&self) -> f64 {
        self.0 * self.0 + self.1 * self.1
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        f64::atan2(self.y(), self.x())
    }

    /// Vector dot product
    #[inline]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.0 * other.0 + self.1 * other.1
    }

    /// Z component of the 3D cross product
    #[inline]
    pub fn cross(&self, other: Vec2) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    /// `(y, -x)`
    #[inline]
    pub const fn rev_negx(self) -> Self {
        Self(self.1, -self.0)
    }

    /// This vector, normalized
    pub fn norm(&self) -> Vec2 {
        let mag = self.mag();
        *self / mag
    }

    pub fn distance_to(&self, other: Vec2) -> f64 {
        (*self - other).mag()
    }

    pub const fn as_array(&self) -> [f64; 2] {
        [self.0, self.1]
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self(value[0], value[1])
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Self::Output {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign for Vec2 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Vec2) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl SubAssign for Vec2 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs, self.1 * rhs)
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.0 *= rhs;
        self.1 *= rhs;
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs, self.1 / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Self(-self.0, -self.1)
    }
}
