use crate::{quad_decode::Quad, util::image::{ImageRefY8, ImageY8}, AprilTagDetection};

/// Observer for the intermediate products of a detection call.
///
/// Every method has an empty default, so implementors only pick the stages
/// they care about. Hooks run on the calling thread, between stages.
pub trait DetectionTrace: Send + Sync {
	/// Image after decimation and blur/sharpen
	fn on_preprocess(&self, _image: &ImageRefY8) {}
	/// Binarized image (0 = dark, 255 = light, 127 = low contrast)
	fn on_threshold(&self, _image: &ImageY8) {}
	/// Number of boundary points in each kept cluster
	fn on_clusters(&self, _cluster_sizes: &[usize]) {}
	/// Quads fitted to the clusters, in full-resolution coordinates
	fn on_quads(&self, _quads: &[Quad]) {}
	/// Final (reconciled) detections
	fn on_detections(&self, _detections: &[AprilTagDetection]) {}
}
