use hashbrown::{hash_map::Entry, HashMap};

use crate::util::image::ImageY8;

use super::{linefit::Pt, unionfind::{UnionFind2D, UnionFindId}, Connectivity};

/// Components smaller than this never contribute boundary points
const MIN_COMPONENT_SIZE: u32 = 25;

/// Boundary points between one black and one white component
pub(crate) type Cluster = Vec<Pt>;

/// Key for the boundary between components `a` and `b` (order-independent)
#[inline]
fn cluster_id(a: UnionFindId, b: UnionFindId) -> u64 {
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    ((hi as u64) << 32) | lo as u64
}

/// Whenever we find two adjacent pixels such that one is white and the
/// other black, we add the point half-way between them to a cluster
/// associated with the unique ids of the white and black regions.
///
/// We additionally compute the gradient direction (i.e., which
/// direction was the white pixel?) Note: if (v1-v0) == 255, then
/// (dx,dy) points towards the white pixel. if (v1-v0) == -255, then
/// (dx,dy) points towards the black pixel. p.gx and p.gy will thus
/// be -255, 0, or 255.
///
/// Clusters are returned in the order they were first seen (raster order),
/// which keeps later stages deterministic.
pub(crate) fn gradient_clusters(threshim: &ImageY8, uf: &mut UnionFind2D, connectivity: Connectivity) -> Vec<Cluster> {
    let w = threshim.width();
    let h = threshim.height();
    if w < 3 || h < 3 {
        return Vec::new();
    }

    let mut index: HashMap<u64, usize> = HashMap::new();
    let mut clusters: Vec<Cluster> = Vec::new();

    // NB: offsets must be [-1, 1] or we'll overflow .gx, .gy
    let offsets: &[(isize, isize)] = match connectivity {
        Connectivity::Four => &[(1, 0), (0, 1)],
        Connectivity::Eight => &[(1, 0), (0, 1), (-1, 1), (1, 1)],
    };

    for y in 1..(h - 1) {
        let row = threshim.row(y);
        for x in 1..(w - 1) {
            let v0 = row[x];
            if v0 == 127 {
                continue;
            }

            let (rep0, size0) = uf.get_set_by_id((y * w + x) as UnionFindId);
            if size0 < MIN_COMPONENT_SIZE {
                continue;
            }

            for &(dx, dy) in offsets {
                let x1 = (x as isize + dx) as usize;
                let y1 = (y as isize + dy) as usize;
                let v1 = threshim[(x1, y1)];

                if v0 as u16 + v1 as u16 != 255 {
                    continue;
                }

                let (rep1, size1) = uf.get_set_by_id((y1 * w + x1) as UnionFindId);
                if size1 < MIN_COMPONENT_SIZE {
                    continue;
                }

                let idx = match index.entry(cluster_id(rep0, rep1)) {
                    Entry::Occupied(e) => *e.get(),
                    Entry::Vacant(e) => {
                        clusters.push(Vec::new());
                        *e.insert(clusters.len() - 1)
                    }
                };

                let dv = v1 as i16 - v0 as i16;
                clusters[idx].push(Pt {
                    slope: 0.,
                    x: (2 * x as isize + dx) as u32,
                    y: (2 * y as isize + dy) as u32,
                    gx: dx as i16 * dv,
                    gy: dy as i16 * dv,
                });
            }
        }
    }

    clusters
}

#[cfg(test)]
mod test {
    use crate::{quad_thresh::{unionfind::connected_components, Connectivity}, util::image::ImageY8};

    use super::gradient_clusters;

    /// Black square on white, no 127 pixels
    fn square_image() -> ImageY8 {
        ImageY8::from_fn(20, 20, |x, y| {
            if (6..14).contains(&x) && (6..14).contains(&y) { 0 } else { 255 }
        })
    }

    #[test]
    fn one_cluster_around_square() {
        let im = square_image();
        let mut uf = connected_components(&im, Connectivity::Eight);
        let clusters = gradient_clusters(&im, &mut uf, Connectivity::Eight);
        assert_eq!(clusters.len(), 1);

        let cluster = &clusters[0];
        // every point sits between pixels on the square's boundary
        for p in cluster {
            let fx = p.x as f64 / 2.;
            let fy = p.y as f64 / 2.;
            assert!((5.0..=14.0).contains(&fx) && (5.0..=14.0).contains(&fy), "{p:?}");
            // gradient points from black to white, away from the centre
            let dot = (fx - 9.5) * p.gx as f64 + (fy - 9.5) * p.gy as f64;
            assert!(dot > 0., "{p:?}");
        }
    }

    #[test]
    fn four_connectivity_has_fewer_points() {
        let im = square_image();
        let mut uf = connected_components(&im, Connectivity::Four);
        let four = gradient_clusters(&im, &mut uf, Connectivity::Four);
        let mut uf = connected_components(&im, Connectivity::Eight);
        let eight = gradient_clusters(&im, &mut uf, Connectivity::Eight);
        assert_eq!(four.len(), 1);
        // 8 px per side, two offsets each
        assert_eq!(four[0].len(), 32);
        assert!(eight[0].len() > four[0].len());
    }

    #[test]
    fn coordinates_past_u16_range() {
        // doubled x runs past 65535 here
        let im = ImageY8::from_fn(34_000, 20, |x, y| {
            if (33_006..33_014).contains(&x) && (6..14).contains(&y) { 0 } else { 255 }
        });
        let mut uf = connected_components(&im, Connectivity::Eight);
        let clusters = gradient_clusters(&im, &mut uf, Connectivity::Eight);
        assert_eq!(clusters.len(), 1);
        for p in &clusters[0] {
            let fx = p.x as f64 / 2.;
            assert!((33_005.0..=33_014.0).contains(&fx), "{p:?}");
        }
    }

    #[test]
    fn small_components_are_ignored() {
        // 4x4 black blob is below the component floor
        let im = ImageY8::from_fn(20, 20, |x, y| {
            if (8..12).contains(&x) && (8..12).contains(&y) { 0 } else { 255 }
        });
        let mut uf = connected_components(&im, Connectivity::Eight);
        assert!(gradient_clusters(&im, &mut uf, Connectivity::Eight).is_empty());
    }
}
