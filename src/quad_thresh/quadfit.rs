use arrayvec::ArrayVec;

use crate::{quad_decode::Quad, util::{image::ImageRefY8, math::Vec2}};

use super::{linefit::{compute_lfps, fit_line, ptsort, LineFitData, LineFitPoint, Pt}, AprilTagQuadThreshParams};

/// Fewest boundary points a quad can be fit to
const MIN_CLUSTER_POINTS: usize = 24;

/// Fewest points on each side of a corner while refining it
const MIN_SIDE_POINTS: usize = 2;

/// Per-call constraints derived from the detector's families and settings
#[derive(Clone, Copy, Debug)]
pub(crate) struct QuadFitLimits {
    /// Smallest tag edge, in pixels of the image being fit
    pub min_tag_width: f64,
    /// Largest tag edge, in pixels of the image being fit
    pub max_tag_width: Option<f64>,
    /// Accept quads with a dark interior
    pub normal_border: bool,
    /// Accept quads with a light interior
    pub reversed_border: bool,
}

/// A run of points `[start, end]` (inclusive, wrapping if `end < start`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Segment {
    start: usize,
    end: usize,
}

impl Segment {
    fn len(&self, n: usize) -> usize {
        (self.end + n - self.start) % n + 1
    }
}

/// Sort points so they wrap around the center of the cluster, and work out
/// which side of the boundary is dark.
///
/// Returns `true` if the interior is light (reversed border).
fn sort_by_angle(cluster: &mut [Pt]) -> bool {
    // compute a bounding box so that we can order the points
    // according to their angle WRT the center.
    let mut xmin = u32::MAX;
    let mut xmax = u32::MIN;
    let mut ymin = u32::MAX;
    let mut ymax = u32::MIN;
    for p in cluster.iter() {
        xmin = xmin.min(p.x);
        xmax = xmax.max(p.x);
        ymin = ymin.min(p.y);
        ymax = ymax.max(p.y);
    }

    // add some noise to (cx,cy) so that pixels get a more diverse set
    // of theta estimates. This will help us remove more points.
    let cx = (xmin as f32 + xmax as f32) * 0.5 + 0.05118;
    let cy = (ymin as f32 + ymax as f32) * 0.5 - 0.028581;

    const Q: f32 = (2 << 15) as f32;
    let quadrants: [[f32; 2]; 2] = [
        [-1. * Q, 0.],
        [ 2. * Q, Q],
    ];

    let mut dot = 0f32;
    for p in cluster.iter_mut() {
        let mut dx = p.x as f32 - cx;
        let mut dy = p.y as f32 - cy;

        dot += dx * p.gx as f32 + dy * p.gy as f32;

        let quadrant = quadrants[(dy > 0.) as usize][(dx > 0.) as usize];
        if dy < 0. {
            dy = -dy;
            dx = -dx;
        }
        if dx < 0. {
            let tmp = dx;
            dx = dy;
            dy = -tmp;
        }

        p.slope = quadrant + dy / dx;
    }

    ptsort(cluster);

    // gradients point towards white, so a dark interior gives a positive dot
    dot < 0.
}

/// Split the ordered boundary into maximal straight runs.
///
/// A run keeps growing while the next point is within `max_line_error` of
/// the line fit to the run so far.
fn greedy_segments(cluster: &[Pt], lfps: &[LineFitPoint], max_line_error: f64) -> Vec<Segment> {
    let n = cluster.len();
    let mut segments = Vec::new();

    let mut start = 0;
    while start < n {
        let mut end = (start + 1).min(n - 1);
        while end + 1 < n {
            let line = fit_line(lfps, start, end);
            let (x, y) = cluster[end + 1].fit_coords();
            if line.distance(x, y) > max_line_error {
                break;
            }
            end += 1;
        }
        segments.push(Segment { start, end });
        start = end + 1;
    }
    segments
}

/// Score for merging segment `i` with its successor, if they're colinear
/// enough and fit well together
fn merge_score(segments: &[Segment], lfps: &[LineFitPoint], i: usize, qtp: &AprilTagQuadThreshParams) -> Option<f64> {
    let a = segments[i];
    let b = segments[(i + 1) % segments.len()];

    let line_a = fit_line(lfps, a.start, a.end);
    let line_b = fit_line(lfps, b.start, b.end);
    let cos = line_a.abs_cos(&line_b);
    if cos < qtp.cos_critical_rad as f64 {
        return None;
    }

    let joint = fit_line(lfps, a.start, b.end);
    if joint.mse > qtp.max_line_fit_mse as f64 {
        return None;
    }
    Some(cos)
}

/// Repeatedly merge the most colinear neighbouring pair of segments.
fn merge_segments(mut segments: Vec<Segment>, lfps: &[LineFitPoint], qtp: &AprilTagQuadThreshParams) -> Vec<Segment> {
    let mut scores = (0..segments.len())
        .map(|i| merge_score(&segments, lfps, i, qtp))
        .collect::<Vec<_>>();

    // fewer than four is already a failure
    while segments.len() >= 4 {
        let best = scores.iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|s| (i, s)))
            .max_by(|(_, a), (_, b)| a.total_cmp(b));

        let Some((i, _)) = best else { break };

        let k = segments.len();
        let j = (i + 1) % k;
        segments[i].end = segments[j].end;
        segments.remove(j);
        scores.remove(j);

        // only the neighbours of the merged segment changed
        let k = segments.len();
        let i = if j < i { i - 1 } else { i };
        let prev = (i + k - 1) % k;
        scores[prev] = merge_score(&segments, lfps, prev, qtp);
        scores[i] = merge_score(&segments, lfps, i, qtp);
    }
    segments
}

/// Move each corner index to where the two adjacent lines fit best
fn refine_corners(lfps: &[LineFitPoint], indices: &mut [usize; 4]) -> Option<()> {
    let n = lfps.len();
    for i in 0..4 {
        let prev = indices[(i + 3) % 4];
        let next = indices[(i + 1) % 4];
        let span = (next + n - prev) % n;
        if span < 2 * MIN_SIDE_POINTS {
            return None;
        }

        let mut best = (f64::INFINITY, indices[i]);
        for t in MIN_SIDE_POINTS..=(span - MIN_SIDE_POINTS) {
            let c = (prev + t) % n;
            let err = fit_line(lfps, prev, c).err + fit_line(lfps, c, next).err;
            if err < best.0 {
                best = (err, c);
            }
        }
        indices[i] = best.1;
    }
    Some(())
}

/// Solve for the intersection of lines `a` and `b`.
///
/// p0 + lambda0*u0 = p1 + lambda1*u1, where u0 and u1 are the line
/// directions. lineparm[2..4] is the NORMAL, so the directions are the
/// normals rotated by 90 degrees.
fn intersect(a: &LineFitData, b: &LineFitData) -> Option<Vec2> {
    let a00 = a.lineparm[3];
    let a01 = -b.lineparm[3];
    let a10 = -a.lineparm[2];
    let a11 = b.lineparm[2];
    let b0 = -a.lineparm[0] + b.lineparm[0];
    let b1 = -a.lineparm[1] + b.lineparm[1];

    let det = a00 * a11 - a10 * a01;
    if det.abs() < 0.001 {
        return None;
    }

    let w00 = a11 / det;
    let w01 = -a01 / det;
    let l0 = w00 * b0 + w01 * b1;

    Some(Vec2::of(
        a.lineparm[0] + l0 * a00,
        a.lineparm[1] + l0 * a10,
    ))
}

/// Area of a quad (as two triangles)
fn quad_area(corners: &[Vec2; 4]) -> f64 {
    let tri = |a: Vec2, b: Vec2, c: Vec2| ((b - a).cross(c - a) / 2.).abs();
    tri(corners[0], corners[1], corners[2]) + tri(corners[2], corners[3], corners[0])
}

/// Fit a quad to one cluster of boundary points, or reject it.
///
/// Rejection is silent: the vast majority of clusters are not tags.
pub(crate) fn fit_quad(qtp: &AprilTagQuadThreshParams, limits: &QuadFitLimits, im: &ImageRefY8, cluster: &mut Vec<Pt>) -> Option<Quad> {
    if cluster.len() < MIN_CLUSTER_POINTS {
        return None;
    }

    /////////////////////////////////////////////////////////////
    // Step 1. Sort points so they wrap around the center of the
    // quad. We will constrain our quad fit to simply partition this
    // ordered set into 4 groups.
    let reversed_border = sort_by_angle(cluster);

    // Ensure that the black border is inside the white border.
    if reversed_border && !limits.reversed_border {
        return None;
    }
    if !reversed_border && !limits.normal_border {
        return None;
    }

    // remove duplicate points. (A byproduct of our segmentation system.)
    cluster.dedup_by(|a, b| a.x == b.x && a.y == b.y);

    let n = cluster.len();
    if n < MIN_CLUSTER_POINTS {
        return None;
    }

    /////////////////////////////////////////////////////////////
    // Step 2. Precompute statistics that allow line fit queries to be
    // efficiently computed for any contiguous range of indices.
    let lfps = compute_lfps(cluster, im);

    /////////////////////////////////////////////////////////////
    // Step 3. Break the boundary into straight runs, drop the short
    // ones, and merge the colinear ones.
    let segments = greedy_segments(cluster, &lfps, qtp.max_line_error as f64);

    let min_len = std::cmp::max(4, n / 24);
    let segments = segments.into_iter()
        .filter(|seg| seg.len(n) >= min_len)
        .collect::<Vec<_>>();
    if segments.len() < 4 {
        log::trace!("cluster of {n} points: only {} segments", segments.len());
        return None;
    }

    let segments = merge_segments(segments, &lfps, qtp);
    if segments.len() != 4 {
        log::trace!("cluster of {n} points: {} segments after merging", segments.len());
        return None;
    }

    // corner i joins lines i-1 and i
    let mut indices = [segments[0].start, segments[1].start, segments[2].start, segments[3].start];
    refine_corners(&lfps, &mut indices)?;

    /////////////////////////////////////////////////////////////
    // Step 4. Fit the final lines, and intersect them.
    let mut lines = ArrayVec::<LineFitData, 4>::new();
    for i in 0..4 {
        let line = fit_line(&lfps, indices[i], indices[(i + 1) % 4]);
        if line.mse > qtp.max_line_fit_mse as f64 {
            log::trace!("line {i} mse {:.3} too large", line.mse);
            return None;
        }
        lines.push(line);
    }

    let mut corners = [Vec2::zero(); 4];
    for i in 0..4 {
        corners[i] = intersect(&lines[i], &lines[(i + 1) % 4])?;
    }

    // reject quads that are too small (or too big)
    let area = quad_area(&corners);
    if area < 0.95 * limits.min_tag_width * limits.min_tag_width {
        log::trace!("quad area {area:.1} too small");
        return None;
    }
    if let Some(max_width) = limits.max_tag_width {
        let longest = (0..4)
            .map(|i| corners[i].distance_to(corners[(i + 1) % 4]))
            .fold(0., f64::max);
        if longest > max_width {
            return None;
        }
    }

    // reject quads with sharp or reflex corners
    let cos_critical = qtp.cos_critical_rad as f64;
    for i in 0..4 {
        let d1 = corners[(i + 1) % 4] - corners[i];
        let d2 = corners[(i + 2) % 4] - corners[(i + 1) % 4];
        let cos_dtheta = d1.dot(d2) / (d1.mag() * d2.mag());

        if !(cos_dtheta.abs() <= cos_critical) || d1.cross(d2) < 0. {
            return None;
        }
    }

    match Quad::new(corners, reversed_border) {
        Ok(quad) => Some(quad),
        Err(e) => {
            log::trace!("quad homography failed: {e:?}");
            None
        }
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use crate::{
        quad_thresh::{grad_cluster::gradient_clusters, unionfind::connected_components, AprilTagQuadThreshParams, Connectivity},
        util::{image::ImageY8, math::Vec2},
    };

    use super::{fit_quad, quad_area, QuadFitLimits, Segment};

    fn limits() -> QuadFitLimits {
        QuadFitLimits {
            min_tag_width: 3.,
            max_tag_width: None,
            normal_border: true,
            reversed_border: false,
        }
    }

    /// Dark square with corners at (10, 10) and (40, 40) (pixel edges)
    fn square_image() -> ImageY8 {
        ImageY8::from_fn(50, 50, |x, y| {
            if (10..40).contains(&x) && (10..40).contains(&y) { 20 } else { 230 }
        })
    }

    fn clusters(im: &ImageY8) -> Vec<Vec<crate::quad_thresh::linefit::Pt>> {
        let mut uf = connected_components(im, Connectivity::Eight);
        gradient_clusters(im, &mut uf, Connectivity::Eight)
    }

    #[test]
    fn segment_length_wraps() {
        assert_eq!(Segment { start: 2, end: 5 }.len(10), 4);
        assert_eq!(Segment { start: 8, end: 1 }.len(10), 4);
    }

    #[test]
    fn area_of_square() {
        let sq = [Vec2::of(0., 0.), Vec2::of(4., 0.), Vec2::of(4., 4.), Vec2::of(0., 4.)];
        assert_approx_eq!(f64, quad_area(&sq), 16.);
    }

    #[test]
    fn fits_axis_aligned_square() {
        let im = square_image();
        let mut clusters = clusters(&im);
        assert_eq!(clusters.len(), 1);

        let qtp = AprilTagQuadThreshParams::default();
        let quad = fit_quad(&qtp, &limits(), &im.as_view(), &mut clusters[0]).expect("quad");
        assert!(!quad.reversed_border);

        // every true corner is matched by a fitted corner within half a pixel
        let expected = [Vec2::of(10., 10.), Vec2::of(40., 10.), Vec2::of(40., 40.), Vec2::of(10., 40.)];
        for e in expected {
            let best = quad.corners.iter()
                .map(|c| c.distance_to(e))
                .fold(f64::INFINITY, f64::min);
            assert!(best < 0.5, "no corner near {e:?}: {:?}", quad.corners);
        }
    }

    #[test]
    fn polarity_filter() {
        let im = square_image();
        let mut clusters = clusters(&im);
        let qtp = AprilTagQuadThreshParams::default();
        let only_reversed = QuadFitLimits {
            normal_border: false,
            reversed_border: true,
            ..limits()
        };
        assert!(fit_quad(&qtp, &only_reversed, &im.as_view(), &mut clusters[0]).is_none());
    }

    #[test]
    fn rejects_small_and_round() {
        let qtp = AprilTagQuadThreshParams::default();

        let im = square_image();
        let mut c = clusters(&im);
        let too_big = QuadFitLimits { min_tag_width: 40., ..limits() };
        assert!(fit_quad(&qtp, &too_big, &im.as_view(), &mut c[0]).is_none());

        let disc = ImageY8::from_fn(60, 60, |x, y| {
            let dx = x as f64 - 30.;
            let dy = y as f64 - 30.;
            if dx * dx + dy * dy < 400. { 20 } else { 230 }
        });
        for mut cluster in clusters(&disc) {
            assert!(fit_quad(&qtp, &limits(), &disc.as_view(), &mut cluster).is_none());
        }
    }
}
