use std::ops::{Index, IndexMut, Mul};

use super::Vec2;

/// 3x3 matrix, row-major
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat33(pub [f64; 9]);

impl Mat33 {
    /// Create matrix with all zeroes
    pub const fn zeroes() -> Self {
        Self([0.; 9])
    }

    /// Create from array
    pub const fn of(v: [f64; 9]) -> Self {
        Self(v)
    }

    /// Create an identity matrix
    pub const fn identity() -> Self {
        Self([
            1., 0., 0.,
            0., 1., 0.,
            0., 0., 1.,
        ])
    }

    /// Rotation by `theta` about the Z axis
    pub fn rotation_z(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        Self([
            c, -s, 0.,
            s,  c, 0.,
            0., 0., 1.,
        ])
    }

    pub const fn data(&self) -> &[f64; 9] {
        &self.0
    }

    /// Determinant
    pub fn det(&self) -> f64 {
        let m = &self.0;
        m[0] * (m[4] * m[8] - m[5] * m[7])
            - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Transpose
    pub const fn transposed(&self) -> Self {
        Self([
            self.0[0], self.0[3], self.0[6],
            self.0[1], self.0[4], self.0[7],
            self.0[2], self.0[5], self.0[8],
        ])
    }

    /// Inverse, or `None` if the matrix is singular
    pub fn inv(&self) -> Option<Self> {
        let det = self.det();
        if det == 0. || !det.is_finite() {
            return None;
        }
        let m = &self.0;
        let inv_det = det.recip();
        Some(Self([
            (m[4] * m[8] - m[5] * m[7]) * inv_det,
            (m[2] * m[7] - m[1] * m[8]) * inv_det,
            (m[1] * m[5] - m[2] * m[4]) * inv_det,
            (m[5] * m[6] - m[3] * m[8]) * inv_det,
            (m[0] * m[8] - m[2] * m[6]) * inv_det,
            (m[2] * m[3] - m[0] * m[5]) * inv_det,
            (m[3] * m[7] - m[4] * m[6]) * inv_det,
            (m[1] * m[6] - m[0] * m[7]) * inv_det,
            (m[0] * m[4] - m[1] * m[3]) * inv_det,
        ]))
    }

    /// Matrix multipliation
    pub fn matmul(&self, rhs: &Mat33) -> Self {
        let mut out = [0.; 9];
        for r in 0..3 {
            for c in 0..3 {
                out[r * 3 + c] = self.0[r * 3] * rhs.0[c]
                    + self.0[r * 3 + 1] * rhs.0[3 + c]
                    + self.0[r * 3 + 2] * rhs.0[6 + c];
            }
        }
        Self(out)
    }

    /// Scale every element
    pub fn scale(&self, v: f64) -> Self {
        Self(self.0.map(|e| e * v))
    }

    /// Apply as a homography to `(x, y, 1)`, dividing out the projective term
    #[inline]
    pub fn project(&self, x: f64, y: f64) -> Vec2 {
        let m = &self.0;
        let xx = m[0] * x + m[1] * y + m[2];
        let yy = m[3] * x + m[4] * y + m[5];
        let zz = m[6] * x + m[7] * y + m[8];
        Vec2::of(xx / zz, yy / zz)
    }

    /// Multiply a column vector
    pub fn mul_vec(&self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.0;
        [
            m[0] * v[0] + m[1] * v[1] + m[2] * v[2],
            m[3] * v[0] + m[4] * v[1] + m[5] * v[2],
            m[6] * v[0] + m[7] * v[1] + m[8] * v[2],
        ]
    }
}

impl Index<(usize, usize)> for Mat33 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < 3 && col < 3);
        &self.0[row * 3 + col]
    }
}

impl IndexMut<(usize, usize)> for Mat33 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < 3 && col < 3);
        &mut self.0[row * 3 + col]
    }
}

impl Mul for &Mat33 {
    type Output = Mat33;

    fn mul(self, rhs: &Mat33) -> Self::Output {
        self.matmul(rhs)
    }
}

impl From<Mat33> for nalgebra::Matrix3<f64> {
    fn from(value: Mat33) -> Self {
        nalgebra::Matrix3::from_row_slice(&value.0)
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::Mat33;

    #[test]
    fn inverse_roundtrip() {
        let m = Mat33::of([
            2., 1., 0.,
            0., 3., 1.,
            1., 0., 4.,
        ]);
        let inv = m.inv().unwrap();
        let id = m.matmul(&inv);
        for (a, b) in id.0.iter().zip(Mat33::identity().0.iter()) {
            assert_approx_eq!(f64, *a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Mat33::of([
            1., 2., 3.,
            2., 4., 6.,
            0., 1., 1.,
        ]);
        assert!(m.inv().is_none());
    }

    #[test]
    fn project_translation() {
        let h = Mat33::of([
            1., 0., 5.,
            0., 1., -2.,
            0., 0., 1.,
        ]);
        let p = h.project(1., 1.);
        assert_approx_eq!(f64, p.x(), 6.);
        assert_approx_eq!(f64, p.y(), -1.);
    }
}
