//! Small fixed-size solvers shared by the decoder

/// Cholesky factor `L` (row-major lower triangle) of a symmetric positive-definite 3x3 matrix
#[inline]
fn mat33_chol(a: &[[f64; 3]; 3]) -> [f64; 9] {
    let l0 = a[0][0].sqrt();
    let l3 = a[0][1] / l0;
    let l6 = a[0][2] / l0;
    let l4 = f64::sqrt(a[1][1] - l3 * l3);
    let l7 = (a[1][2] - l3 * l6) / l4;
    let l8 = f64::sqrt(a[2][2] - l6 * l6 - l7 * l7);

    [
        l0, 0., 0.,
        l3, l4, 0.,
        l6, l7, l8,
    ]
}

/// Inverse of a lower-triangular 3x3 matrix
#[inline]
fn mat33_lower_tri_inv(l: &[f64; 9]) -> [f64; 9] {
    let r0 = l[0].recip();
    let r3 = -l[3] * r0 / l[4];
    let r4 = l[4].recip();
    let r6 = (-l[6] * r0 - l[7] * r3) / l[8];
    let r7 = -l[7] * r4 / l[8];
    let r8 = l[8].recip();

    [
        r0, 0., 0.,
        r3, r4, 0.,
        r6, r7, r8,
    ]
}

/// Solve `A x = b` for symmetric positive-definite `A`.
///
/// Ill-conditioned systems produce non-finite output rather than an error;
/// callers that care must check the result.
pub(crate) fn mat33_sym_solve(a: &[[f64; 3]; 3], b: &[f64; 3]) -> [f64; 3] {
    let l = mat33_chol(a);
    let m = mat33_lower_tri_inv(&l);

    let t0 = m[0] * b[0];
    let t1 = m[3] * b[0] + m[4] * b[1];
    let t2 = m[6] * b[0] + m[7] * b[1] + m[8] * b[2];

    [
        m[0] * t0 + m[3] * t1 + m[6] * t2,
        m[4] * t1 + m[7] * t2,
        m[8] * t2,
    ]
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::mat33_sym_solve;

    #[test]
    fn solves_spd_system() {
        let a = [
            [4., 1., 2.],
            [1., 3., 0.],
            [2., 0., 5.],
        ];
        let x = [1., -2., 0.5];
        let b = [
            a[0][0] * x[0] + a[0][1] * x[1] + a[0][2] * x[2],
            a[1][0] * x[0] + a[1][1] * x[1] + a[1][2] * x[2],
            a[2][0] * x[0] + a[2][1] * x[1] + a[2][2] * x[2],
        ];
        let res = mat33_sym_solve(&a, &b);
        for i in 0..3 {
            assert_approx_eq!(f64, res[i], x[i], epsilon = 1e-10);
        }
    }
}
