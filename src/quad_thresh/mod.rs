mod grad_cluster;
pub(crate) mod linefit;
mod quadfit;
mod threshold;
pub(crate) mod unionfind;

use std::f64::consts as f64c;

use crate::{detector::DetectionTrace, util::{image::ImageRefY8, TimeProfile}};

pub(crate) use grad_cluster::Cluster;
pub(crate) use quadfit::{fit_quad, QuadFitLimits};

use self::{grad_cluster::gradient_clusters, unionfind::connected_components};

/// Which neighbours count as adjacent when segmenting the thresholded image
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Left/right/up/down only
    Four,
    /// Also diagonals (white pixels only)
    #[default]
    Eight,
}

/// Tunables for thresholding, segmentation and quad fitting
#[derive(Clone, Debug, PartialEq)]
pub struct AprilTagQuadThreshParams {
    /// Reject quads containing too few pixels
    pub min_cluster_pixels: u32,

    /// Reject quads where pairs of edges have angles that are close to
    /// straight or close to 180 degrees. Zero means that no quads are
    /// rejected. (Cosine of the angle).
    pub cos_critical_rad: f32,

    /// When fitting lines to the contours, what is the maximum mean
    /// squared error allowed?
    /// This is useful in rejecting contours that are far from being
    /// quad shaped; rejecting these quads "early" saves expensive
    /// decoding processing.
    pub max_line_fit_mse: f32,

    /// Largest distance (in pixels of the decimated image) a boundary
    /// point may lie from the segment it extends
    pub max_line_error: f32,

    /// When we build our model of black & white pixels, we add an
    /// extra check that the white model must be (overall) brighter
    /// than the black model.
    /// How much brighter? (in pixel values, [0,255]).
    pub min_white_black_diff: u8,

    /// Should the thresholded image be deglitched?
    /// Only useful for very noisy images
    pub deglitch: bool,

    /// Pixel adjacency used by segmentation
    pub connectivity: Connectivity,

    /// Smallest tag edge (in input pixels) worth fitting.
    ///
    /// Zero derives a bound from the registered families.
    pub min_tag_width: u32,

    /// Largest tag edge (in input pixels) worth fitting
    pub max_tag_width: Option<u32>,
}

impl Default for AprilTagQuadThreshParams {
    fn default() -> Self {
        Self {
            min_cluster_pixels: 5,
            cos_critical_rad: (10. * f64c::PI / 180.).cos() as f32,
            max_line_fit_mse: 10.,
            max_line_error: 1.5,
            min_white_black_diff: 5,
            deglitch: false,
            connectivity: Connectivity::Eight,
            min_tag_width: 0,
            max_tag_width: None,
        }
    }
}

/// Threshold, segment, and collect the boundary clusters that could be quads.
///
/// Clusters are returned in raster order of their first boundary point.
pub(crate) fn quad_clusters(qtp: &AprilTagQuadThreshParams, tp: &mut TimeProfile, im: &ImageRefY8, trace: Option<&dyn DetectionTrace>) -> Vec<Cluster> {
    ////////////////////////////////////////////////////////
    // step 1. threshold the image, creating the edge image.
    let w = im.width();
    let h = im.height();

    let threshim = threshold::threshold(qtp, tp, im);

    if let Some(trace) = trace {
        trace.on_threshold(&threshim);
    }

    ////////////////////////////////////////////////////////
    // step 2. find connected components.
    let mut uf = connected_components(&threshim, qtp.connectivity);
    tp.stamp("unionfind");

    let clusters = gradient_clusters(&threshim, &mut uf, qtp.connectivity);
    drop(uf);
    drop(threshim);

    // a cluster should contain only boundary points around the
    // tag. it cannot be bigger than the whole screen. (Reject
    // large connected blobs that will be prohibitively slow to
    // fit quads to.) A typical point along an edge is added three
    // times (because it has 3 neighbors). The maximum perimeter
    // is 2w+2h.
    let max_points = 3 * (2 * w + 2 * h);
    let total = clusters.len();
    let clusters = clusters.into_iter()
        .filter(|cluster| cluster.len() >= qtp.min_cluster_pixels as usize && cluster.len() <= max_points)
        .collect::<Vec<_>>();

    log::debug!("{} of {total} gradient clusters kept", clusters.len());
    tp.stamp("make clusters");

    if let Some(trace) = trace {
        let sizes = clusters.iter().map(|c| c.len()).collect::<Vec<_>>();
        trace.on_clusters(&sizes);
    }

    clusters
}

#[cfg(test)]
mod test {
    use crate::util::{image::ImageY8, TimeProfile};

    use super::{quad_clusters, AprilTagQuadThreshParams, Connectivity};

    #[test]
    fn default_params() {
        let qtp = AprilTagQuadThreshParams::default();
        assert_eq!(qtp.connectivity, Connectivity::Eight);
        assert!((qtp.cos_critical_rad - 0.9848).abs() < 1e-3);
        assert_eq!(qtp.max_tag_width, None);
    }

    #[test]
    fn clusters_of_two_squares() {
        let im = ImageY8::from_fn(80, 40, |x, y| {
            let in_a = (8..28).contains(&x) && (10..30).contains(&y);
            let in_b = (48..68).contains(&x) && (10..30).contains(&y);
            if in_a || in_b { 30 } else { 220 }
        });
        let mut tp = TimeProfile::default();
        let clusters = quad_clusters(&AprilTagQuadThreshParams::default(), &mut tp, &im.as_view(), None);
        assert_eq!(clusters.len(), 2);
        // raster order: left square first
        assert!(clusters[0].iter().all(|p| p.x < 2 * 40));
        assert!(clusters[1].iter().all(|p| p.x > 2 * 40));

        let stages = tp.stages().map(|(name, _)| name.to_owned()).collect::<Vec<_>>();
        assert_eq!(stages, ["threshold", "unionfind", "make clusters"]);
    }

    #[test]
    fn blank_image_has_no_clusters() {
        let im = ImageY8::from_fn(64, 64, |_, _| 128);
        let mut tp = TimeProfile::default();
        assert!(quad_clusters(&AprilTagQuadThreshParams::default(), &mut tp, &im.as_view(), None).is_empty());
    }
}
