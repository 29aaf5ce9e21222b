use arrayvec::ArrayVec;

use crate::util::{image::ImageRefY8, math::Vec2};

use super::Quad;

/// Offsets `-range, -range + step, ..., <= range`
fn sample_offsets(range: f64, step: f64) -> impl Iterator<Item = f64> {
    let n = (2. * range / step).floor() as usize;
    (0..=n).map(move |i| -range + i as f64 * step)
}

/// Pixel at `p` (truncated), if it's in the image
#[inline]
fn pixel_at(im: &ImageRefY8, p: Vec2) -> Option<i32> {
    if p.x() < 0. || p.y() < 0. {
        return None;
    }
    im.get(p.x() as usize, p.y() as usize).map(i32::from)
}

/// A line through `E` with unit normal `n`
#[derive(Clone, Copy, Debug)]
struct EdgeLine {
    e: Vec2,
    n: Vec2,
}

impl Quad {
    /// Fit a new line to edge `a -> b` through the strongest gradients
    /// found along its normal.
    fn refit_edge(&self, im: &ImageRefY8, a: usize, b: usize, range: f64) -> Option<EdgeLine> {
        let pa = self.corners[a];
        let pb = self.corners[b];

        // compute the normal to the current line estimate
        let d = pb - pa;
        let mag = d.mag();
        if !(mag > 0.) {
            return None;
        }
        let mut pn = d.rev_negx() / mag;

        if self.reversed_border {
            pn = -pn;
        }

        // we will now fit a NEW line by sampling points near
        // our original line that have large gradients. On really big tags,
        // we're willing to sample more to get an even better estimate.
        let nsamples = i32::max(16, mag as i32 / 8);

        // stats for fitting a line...
        let mut m = Vec2::zero();
        let mut mxx = 0.;
        let mut mxy = 0.;
        let mut myy = 0.;
        let mut count = 0.;

        for s in 0..nsamples {
            // compute a point along the line... Note, we're avoiding
            // sampling *right* at the corners, since those points are
            // the least reliable.
            let alpha = (1.0 + s as f64) / (nsamples as f64 + 1.);
            let p0 = pa * alpha + pb * (1. - alpha);

            // search along the normal to this line, looking at the
            // gradients along the way. We're looking for a strong
            // response.
            let mut mn = 0.;
            let mut mcount = 0.;

            for n in sample_offsets(range, 0.25) {
                // Because of the guaranteed winding order of the
                // points in the quad, we will start inside the white
                // portion of the quad and work our way outward.
                let grange = 1.;
                let Some(g1) = pixel_at(im, p0 + pn * (n + grange)) else { continue };
                let Some(g2) = pixel_at(im, p0 + pn * (n - grange)) else { continue };

                // reject points whose gradient is "backwards". They can only hurt us.
                if g1 < g2 {
                    continue;
                }

                let weight = ((g2 - g1) * (g2 - g1)) as f64;

                // compute weighted average of the gradient at this point.
                mn += weight * n;
                mcount += weight;
            }

            // what was the average point along the line?
            if mcount == 0. {
                continue;
            }

            let n0 = mn / mcount;

            // where is the point along the line?
            let best = p0 + pn * n0;

            // update our line fit statistics
            m += best;
            mxx += best.x() * best.x();
            mxy += best.x() * best.y();
            myy += best.y() * best.y();
            count += 1.;
        }

        if count < 2. {
            return None;
        }

        // fit a line
        let e = m / count;
        let cxx = (mxx / count) - e.x() * e.x();
        let cxy = (mxy / count) - e.x() * e.y();
        let cyy = (myy / count) - e.y() * e.y();

        let normal_theta = 0.5 * f64::atan2(-2. * cxy, cyy - cxx);
        let (s, c) = normal_theta.sin_cos();
        Some(EdgeLine { e, n: Vec2::of(c, s) })
    }

    /// Move the corners onto the strongest nearby edges in `im`.
    ///
    /// `range` bounds how far (in pixels) each edge may move. Corners whose
    /// adjacent edges can't be refit (or are near-parallel) keep their
    /// current position.
    pub(crate) fn refine_edges(&mut self, im: &ImageRefY8, range: f64) {
        let mut lines = ArrayVec::<Option<EdgeLine>, 4>::new();
        for edge in 0..4 {
            lines.push(self.refit_edge(im, edge, (edge + 1) % 4, range));
        }

        // now refit the corners of the quad
        for i in 0..4 {
            // solve for the intersection of lines (i) and (i+1)&3.
            let (Some(line_a), Some(line_b)) = (lines[i], lines[(i + 1) % 4]) else {
                continue;
            };

            let a00 = line_a.n.y();
            let a10 = -line_a.n.x();
            let a01 = -line_b.n.y();
            let a11 = line_b.n.x();

            let b = line_b.e - line_a.e;

            let det = a00 * a11 - a10 * a01;

            // this is a bad sign. We'll just keep the corner we had.
            if det.abs() <= 1e-3 {
                log::trace!("refine_edges: near-parallel edges at corner {}", (i + 1) % 4);
                continue;
            }

            // inverse.
            let w0 = Vec2::of(a11, -a01) / det;
            let l0 = w0.dot(b);

            // compute intersection
            self.corners[(i + 1) % 4] = line_a.e + Vec2::of(a00, a10) * l0;
        }
    }
}
