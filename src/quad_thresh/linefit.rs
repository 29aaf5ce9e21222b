use std::cmp::Ordering;

use crate::util::image::ImageRefY8;

/// A boundary point between a black and a white pixel
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub(crate) struct Pt {
    /// Monotone stand-in for the angle around the cluster centre
    pub slope: f32,
    // Note: these represent 2*actual value.
    pub x: u32,
    pub y: u32,
    pub gx: i16,
    pub gy: i16,
}

impl Pt {
    pub(crate) fn compare_angle(&self, rhs: &Pt) -> Ordering {
        f32::total_cmp(&self.slope, &rhs.slope)
    }

    /// Pixel-centre coordinates used for fitting.
    ///
    /// Undoes the fixed-point doubling and moves to pixel centres.
    #[inline]
    pub(crate) fn fit_coords(&self) -> (f64, f64) {
        (self.x as f64 * 0.5 + 0.5, self.y as f64 * 0.5 + 0.5)
    }
}

#[inline]
pub(super) fn ptsort(pts: &mut [Pt]) {
    pts.sort_unstable_by(Pt::compare_angle);
}

/// Cumulative weighted moments of the points `[0, j]`
#[derive(Default, Debug, Clone, Copy)]
pub(super) struct LineFitPoint {
    pub(super) mx: f64,
    pub(super) my: f64,
    pub(super) mxx: f64,
    pub(super) myy: f64,
    pub(super) mxy: f64,
    /// Total weight
    pub(super) w: f64,
}

impl LineFitPoint {
    fn sub(&self, rhs: &Self) -> Self {
        Self {
            mx: self.mx - rhs.mx,
            my: self.my - rhs.my,
            mxx: self.mxx - rhs.mxx,
            myy: self.myy - rhs.myy,
            mxy: self.mxy - rhs.mxy,
            w: self.w - rhs.w,
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        Self {
            mx: self.mx + rhs.mx,
            my: self.my + rhs.my,
            mxx: self.mxx + rhs.mxx,
            myy: self.myy + rhs.myy,
            mxy: self.mxy + rhs.mxy,
            w: self.w + rhs.w,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(super) struct LineFitData {
    /// `[Ex, Ey, nx, ny]`: a point on the line and its unit normal
    pub(crate) lineparm: [f64; 4],
    /// sum of squared errors
    pub(crate) err: f64,
    /// mean squared error
    pub(crate) mse: f64,
}

impl LineFitData {
    /// Perpendicular distance from `(x, y)` to the line
    #[inline]
    pub(super) fn distance(&self, x: f64, y: f64) -> f64 {
        let [ex, ey, nx, ny] = self.lineparm;
        ((x - ex) * nx + (y - ey) * ny).abs()
    }

    /// Absolute cosine of the angle between two lines
    #[inline]
    pub(super) fn abs_cos(&self, other: &LineFitData) -> f64 {
        (self.lineparm[2] * other.lineparm[2] + self.lineparm[3] * other.lineparm[3]).abs()
    }
}

/// Compute statistics that allow line fit queries to be
/// efficiently computed for any contiguous range of indices.
///
/// Each point is weighted by the local image gradient magnitude (plus one).
pub(super) fn compute_lfps(cluster: &[Pt], im: &ImageRefY8) -> Vec<LineFitPoint> {
    let mut lfps = Vec::with_capacity(cluster.len());
    let mut acc = LineFitPoint::default();

    for p in cluster {
        let (x, y) = p.fit_coords();
        let ix = x as usize;
        let iy = y as usize;

        let mut weight = 1.;
        if ix > 0 && ix + 1 < im.width() && iy > 0 && iy + 1 < im.height() {
            let grad_x = im[(ix + 1, iy)] as f64 - im[(ix - 1, iy)] as f64;
            let grad_y = im[(ix, iy + 1)] as f64 - im[(ix, iy - 1)] as f64;

            // XXX Tunable. How to shape the gradient magnitude?
            weight = (grad_x * grad_x + grad_y * grad_y).sqrt() + 1.;
        }

        acc = acc.add(&LineFitPoint {
            mx: weight * x,
            my: weight * y,
            mxx: weight * x * x,
            myy: weight * y * y,
            mxy: weight * x * y,
            w: weight,
        });
        lfps.push(acc);
    }
    lfps
}

/// Moments and point count of `[i0, i1]` (inclusive), wrapping if `i1 < i0`
fn get_point(lfps: &[LineFitPoint], i0: usize, i1: usize) -> (LineFitPoint, usize) {
    debug_assert!(i0 < lfps.len(), "i0 out of bounds");
    debug_assert!(i1 < lfps.len(), "i1 out of bounds");

    if i0 <= i1 {
        let n = i1 - i0 + 1;
        let pt = if i0 > 0 {
            lfps[i1].sub(&lfps[i0 - 1])
        } else {
            lfps[i1]
        };
        (pt, n)
    } else {
        // i0 > i1, e.g. [15, 2]. Wrap around.
        let last = lfps[lfps.len() - 1];
        let pt = last.sub(&lfps[i0 - 1]).add(&lfps[i1]);
        let n = lfps.len() - i0 + i1 + 1;
        (pt, n)
    }
}

/// lfps contains *cumulative* moments for N points, with
/// index j reflecting points [0,j] (inclusive).
///
/// fit a line to the points [i0, i1] (inclusive). i0, i1 are both [0,
/// sz) if i1 < i0, we treat this as a wrap around.
pub(super) fn fit_line(lfps: &[LineFitPoint], i0: usize, i1: usize) -> LineFitData {
    let (pt, n) = get_point(lfps, i0, i1);

    let w = pt.w;
    let ex = pt.mx / w;
    let ey = pt.my / w;
    let cxx = pt.mxx / w - ex * ex;
    let cxy = pt.mxy / w - ex * ey;
    let cyy = pt.myy / w - ey * ey;

    // pose it as an eigenvalue problem.
    let disc = ((cxx - cyy) * (cxx - cyy) + 4. * cxy * cxy).sqrt();
    let eig_small = (0.5 * (cxx + cyy - disc)).max(0.);
    let eig = 0.5 * (cxx + cyy + disc);

    // (C - eig*I) has rank one; either row is normal to the principal direction
    let nx1 = cxx - eig;
    let ny1 = cxy;
    let m1 = nx1 * nx1 + ny1 * ny1;
    let nx2 = cxy;
    let ny2 = cyy - eig;
    let m2 = nx2 * nx2 + ny2 * ny2;

    let (nx, ny, m) = if m1 > m2 {
        (nx1, ny1, m1)
    } else {
        (nx2, ny2, m2)
    };

    let lineparm = if m > 0. {
        let length = m.sqrt();
        [ex, ey, nx / length, ny / length]
    } else {
        // isotropic (or a single point): any normal will do
        [ex, ey, 1., 0.]
    };

    // sum of squared errors =
    //
    // SUM_i ((p_x - ux)*nx + (p_y - uy)*ny)^2
    //  nx*nx*N*Cxx + 2nx*ny*N*Cxy + ny*ny*N*Cyy
    let err = n as f64 * eig_small;
    let mse = eig_small;

    LineFitData { lineparm, err, mse }
}
