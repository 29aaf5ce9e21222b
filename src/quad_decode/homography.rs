use crate::util::math::{Mat33, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum HomographySolveError {
    /// The correspondences are (nearly) degenerate
    SingularMatrix,
    /// The solved homography can't be inverted
    InverseH,
}

/// Tag-space corners matched (in order) with a quad's image corners
const TAG_CORNERS: [[f64; 2]; 4] = [
    [-1., -1.],
    [ 1., -1.],
    [ 1.,  1.],
    [-1.,  1.],
];

/// Solve `y = Hx` exactly for four correspondences `[x0, x1, y0, y1]`
/// by Gaussian elimination with partial pivoting.
fn homography_compute2(c: &[[f64; 4]; 4]) -> Result<Mat33, HomographySolveError> {
    let mut a = [[0f64; 9]; 8];
    for (i, c) in c.iter().enumerate() {
        a[2 * i] = [c[0], c[1], 1., 0., 0., 0., -c[0] * c[2], -c[1] * c[2], c[2]];
        a[2 * i + 1] = [0., 0., 0., c[0], c[1], 1., -c[0] * c[3], -c[1] * c[3], c[3]];
    }

    const EPSILON: f64 = 1e-10;

    // Eliminate.
    for col in 0..8 {
        // Find best row to swap with.
        let mut max_val = 0.;
        let mut max_val_idx = col;
        for (row, r) in a.iter().enumerate().skip(col) {
            let val = r[col].abs();
            if val > max_val {
                max_val = val;
                max_val_idx = row;
            }
        }

        if max_val < EPSILON {
            return Err(HomographySolveError::SingularMatrix);
        }

        a.swap(col, max_val_idx);

        for i in (col + 1)..8 {
            let f = a[i][col] / a[col][col];
            a[i][col] = 0.;
            for j in (col + 1)..9 {
                a[i][j] -= f * a[col][j];
            }
        }
    }

    // Back solve.
    for col in (0..8).rev() {
        let mut sum = 0.;
        for i in (col + 1)..8 {
            sum += a[col][i] * a[i][8];
        }
        a[col][8] = (a[col][8] - sum) / a[col][col];
    }

    Ok(Mat33::of([
        a[0][8], a[1][8], a[2][8],
        a[3][8], a[4][8], a[5][8],
        a[6][8], a[7][8], 1.,
    ]))
}

/// Homography taking tag coordinates (`[-1, 1]²`, corner `i` of
/// `(-1,-1), (1,-1), (1,1), (-1,1)`) to the quad's image corners.
///
/// The image side is normalized (centroid at the origin, mean distance √2)
/// before solving, then the normalization is undone.
pub(crate) fn quad_homography(corners: &[Vec2; 4]) -> Result<Mat33, HomographySolveError> {
    let centroid = (corners[0] + corners[1] + corners[2] + corners[3]) / 4.;
    let mean_dist = corners.iter()
        .map(|p| p.distance_to(centroid))
        .sum::<f64>() / 4.;
    if !(mean_dist > 1e-9) || !mean_dist.is_finite() {
        return Err(HomographySolveError::SingularMatrix);
    }
    let scale = std::f64::consts::SQRT_2 / mean_dist;

    let mut corr = [[0f64; 4]; 4];
    for (dst, (tag, img)) in corr.iter_mut().zip(TAG_CORNERS.iter().zip(corners.iter())) {
        let n = (*img - centroid) * scale;
        *dst = [tag[0], tag[1], n.x(), n.y()];
    }

    let h_norm = homography_compute2(&corr)?;

    // undo the normalization: H = T^-1 * H_norm
    let t_inv = Mat33::of([
        1. / scale, 0., centroid.x(),
        0., 1. / scale, centroid.y(),
        0., 0., 1.,
    ]);
    let h = t_inv.matmul(&h_norm);

    if h.det().abs() < 1e-12 {
        return Err(HomographySolveError::InverseH);
    }
    Ok(h)
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::util::math::Vec2;

    use super::{quad_homography, HomographySolveError, TAG_CORNERS};

    #[test]
    fn maps_tag_corners() {
        let corners = [
            Vec2::of(100.3, 200.1),
            Vec2::of(180.7, 190.4),
            Vec2::of(190.2, 280.9),
            Vec2::of(95.5, 270.2),
        ];
        let h = quad_homography(&corners).unwrap();
        for (tag, img) in TAG_CORNERS.iter().zip(corners.iter()) {
            let p = h.project(tag[0], tag[1]);
            assert_approx_eq!(f64, p.x(), img.x(), epsilon = 1e-8);
            assert_approx_eq!(f64, p.y(), img.y(), epsilon = 1e-8);
        }
        // centre of an axis-aligned square maps to its centre
        let square = [Vec2::of(0., 0.), Vec2::of(10., 0.), Vec2::of(10., 10.), Vec2::of(0., 10.)];
        let h = quad_homography(&square).unwrap();
        let c = h.project(0., 0.);
        assert_approx_eq!(f64, c.x(), 5., epsilon = 1e-9);
        assert_approx_eq!(f64, c.y(), 5., epsilon = 1e-9);
    }

    #[test]
    fn large_coordinates() {
        let off = 1e5;
        let corners = [
            Vec2::of(off, off),
            Vec2::of(off + 40., off + 2.),
            Vec2::of(off + 38., off + 41.),
            Vec2::of(off - 1., off + 39.),
        ];
        let h = quad_homography(&corners).unwrap();
        let p = h.project(1., 1.);
        assert_approx_eq!(f64, p.x(), off + 38., epsilon = 1e-6);
        assert_approx_eq!(f64, p.y(), off + 41., epsilon = 1e-6);
    }

    #[test]
    fn degenerate_quad() {
        let p = Vec2::of(3., 4.);
        assert!(quad_homography(&[p; 4]).is_err());
        // three colinear corners
        let corners = [Vec2::of(0., 0.), Vec2::of(1., 0.), Vec2::of(2., 0.), Vec2::of(3., 0.)];
        assert_eq!(quad_homography(&corners).unwrap_err(), HomographySolveError::SingularMatrix);
    }
}
