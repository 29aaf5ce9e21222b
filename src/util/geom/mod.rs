//! Small polygon predicates used when reconciling detections

use super::math::Vec2;

/// Orientation of `c` relative to the directed line `a -> b`
#[inline]
fn orient(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b - a).cross(c - a)
}

/// Do the closed segments `p0-p1` and `q0-q1` touch?
pub(crate) fn segments_intersect(p0: Vec2, p1: Vec2, q0: Vec2, q1: Vec2) -> bool {
    let d1 = orient(q0, q1, p0);
    let d2 = orient(q0, q1, p1);
    let d3 = orient(p0, p1, q0);
    let d4 = orient(p0, p1, q1);

    if ((d1 > 0. && d2 < 0.) || (d1 < 0. && d2 > 0.)) && ((d3 > 0. && d4 < 0.) || (d3 < 0. && d4 > 0.)) {
        return true;
    }

    // colinear cases
    fn on_segment(a: Vec2, b: Vec2, p: Vec2) -> bool {
        p.x() >= a.x().min(b.x()) && p.x() <= a.x().max(b.x())
            && p.y() >= a.y().min(b.y()) && p.y() <= a.y().max(b.y())
    }
    (d1 == 0. && on_segment(q0, q1, p0))
        || (d2 == 0. && on_segment(q0, q1, p1))
        || (d3 == 0. && on_segment(p0, p1, q0))
        || (d4 == 0. && on_segment(p0, p1, q1))
}

/// Is `q` inside the polygon (either winding)?
pub(crate) fn contains_point(poly: &[Vec2], q: Vec2) -> bool {
    // even-odd ray cast towards +x
    let mut inside = false;
    let n = poly.len();
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        if (a.y() > q.y()) != (b.y() > q.y()) {
            let x = a.x() + (q.y() - a.y()) * (b.x() - a.x()) / (b.y() - a.y());
            if q.x() < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Centroid of the first three vertices, which lies inside any convex polygon
fn interior_point(poly: &[Vec2]) -> Vec2 {
    (poly[0] + poly[1] + poly[2]) / 3.
}

/// Do two polygons share any area (or touch)?
pub(crate) fn polygons_overlap(a: &[Vec2], b: &[Vec2]) -> bool {
    // do any of the edges collide?
    for ia in 0..a.len() {
        let (pa0, pa1) = (a[ia], a[(ia + 1) % a.len()]);
        for ib in 0..b.len() {
            let (pb0, pb1) = (b[ib], b[(ib + 1) % b.len()]);
            if segments_intersect(pa0, pa1, pb0, pb1) {
                return true;
            }
        }
    }

    // if none of the edges cross, then one polygon is either fully
    // contained in the other or they're disjoint.
    contains_point(a, interior_point(b)) || contains_point(b, interior_point(a))
}

#[cfg(test)]
mod test {
    use crate::util::math::Vec2;

    use super::{contains_point, polygons_overlap, segments_intersect};

    fn square(x: f64, y: f64, s: f64) -> [Vec2; 4] {
        [Vec2::of(x, y), Vec2::of(x + s, y), Vec2::of(x + s, y + s), Vec2::of(x, y + s)]
    }

    #[test]
    fn segment_crossing() {
        let o = Vec2::zero();
        assert!(segments_intersect(o, Vec2::of(2., 2.), Vec2::of(0., 2.), Vec2::of(2., 0.)));
        assert!(!segments_intersect(o, Vec2::of(1., 0.), Vec2::of(0., 1.), Vec2::of(1., 1.)));
        // touching at an endpoint
        assert!(segments_intersect(o, Vec2::of(1., 0.), Vec2::of(1., 0.), Vec2::of(1., 5.)));
    }

    #[test]
    fn point_in_square() {
        let sq = square(0., 0., 4.);
        assert!(contains_point(&sq, Vec2::of(1., 3.)));
        assert!(!contains_point(&sq, Vec2::of(5., 3.)));
        let mut rev = sq;
        rev.reverse();
        assert!(contains_point(&rev, Vec2::of(1., 3.)));
    }

    #[test]
    fn overlap_cases() {
        let a = square(0., 0., 10.);
        // crossing edges
        assert!(polygons_overlap(&a, &square(5., 5., 10.)));
        // containment both ways
        assert!(polygons_overlap(&a, &square(2., 2., 3.)));
        assert!(polygons_overlap(&square(2., 2., 3.), &a));
        // disjoint
        assert!(!polygons_overlap(&a, &square(20., 0., 5.)));
    }
}
