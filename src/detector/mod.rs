mod builder;
pub(crate) mod config;
mod error;
mod trace;

pub use builder::DetectorBuilder;
pub use config::DetectorConfig;
pub use error::{DetectError, DetectorBuildError, ImageDimensionError};
pub use trace::DetectionTrace;

use std::{ops::Deref, sync::Arc};

use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};

use crate::{
	detection::{reconcile_detections, sort_detections},
	quad_decode::{Quad, QuadDecodeInfo},
	quad_thresh::{fit_quad, quad_clusters, Cluster, QuadFitLimits},
	quickdecode::QuickDecode,
	util::{image::{ImageBuffer, ImageRefY8, ImageY8}, TimeProfile},
	Detections,
};

use self::config::QuadDecimateMode;

/// Smallest tag edge (in pixels of the segmented image) we'll ever try to fit
const MIN_FIT_WIDTH: f64 = 3.;

pub struct AprilTagDetector {
	pub params: DetectorConfig,

	///////////////////////////////////////////////////////////////
	// Internal variables below

	// A tag family can be shared between multiple detectors.
	pub(crate) tag_families: Vec<Arc<QuickDecode>>,

	// Used to manage multi-threading. `None` when single-threaded.
	wp: Option<ThreadPool>,
	// Fixed-point kernel for `quad_sigma`, if it's big enough to matter
	blur_kernel: Option<Vec<u8>>,
	pub(crate) trace: Option<Arc<dyn DetectionTrace>>,
}

impl AprilTagDetector {
	/// Create a new builder
	pub fn builder() -> DetectorBuilder {
		DetectorBuilder::default()
	}

	pub(crate) fn new(params: DetectorConfig, tag_families: Vec<Arc<QuickDecode>>, trace: Option<Arc<dyn DetectionTrace>>) -> Result<AprilTagDetector, DetectorBuildError> {
		params.validate()?;

		let blur_kernel = params.quad_sigma_kernel()?;

		let wp = if params.single_thread() {
			None
		} else {
			let pool = ThreadPoolBuilder::new()
				.num_threads(params.nthreads().get())
				.thread_name(|i| format!("apriltag-{i}"))
				.build()?;
			Some(pool)
		};

		Ok(Self {
			params,
			tag_families,
			wp,
			blur_kernel,
			trace,
		})
	}

	/// Families this detector decodes
	pub fn families(&self) -> impl Iterator<Item = &Arc<crate::AprilTagFamily>> + '_ {
		self.tag_families.iter().map(|qd| &qd.family)
	}

	/// Width limits and border polarities for quad fitting, in the
	/// coordinates of the (possibly decimated) segmentation image
	fn quad_fit_limits(&self) -> QuadFitLimits {
		let decimate = self.params.decimate_factor();
		let qtp = &self.params.qtp;

		let mut normal_border = false;
		let mut reversed_border = false;
		let mut family_min_width = u32::MAX;
		for qd in self.tag_families.iter() {
			family_min_width = family_min_width.min(qd.family.width_at_border);
			if qd.family.reversed_border {
				reversed_border = true;
			} else {
				normal_border = true;
			}
		}

		let min_tag_width = if qtp.min_tag_width > 0 {
			qtp.min_tag_width as f64
		} else {
			family_min_width as f64
		};

		QuadFitLimits {
			min_tag_width: f64::max(min_tag_width / decimate, MIN_FIT_WIDTH),
			max_tag_width: qtp.max_tag_width.map(|w| w as f64 / decimate),
			normal_border,
			reversed_border,
		}
	}

	/// Decimate and blur/sharpen, as configured.
	///
	/// Returns `Ok(None)` if no preprocessing was needed.
	fn preprocess(&self, tp: &mut TimeProfile, im_orig: &ImageRefY8) -> Result<Option<ImageY8>, ImageDimensionError> {
		let mut quad_im = match self.params.quad_decimate_mode() {
			None => None,
			Some(QuadDecimateMode::ThreeHalves) => {
				let quad_im = im_orig.decimate_three_halves()?;
				tp.stamp("decimate");
				Some(quad_im)
			},
			Some(QuadDecimateMode::Scaled(factor)) => {
				let quad_im = im_orig.decimate(factor.get() as f32)?;
				tp.stamp("decimate");
				Some(quad_im)
			},
		};

		if let Some(kernel) = &self.blur_kernel {
			let mut img = quad_im.take().unwrap_or_else(|| im_orig.to_owned_image());
			if self.params.quad_sigma > 0. {
				self.convolve(&mut img, kernel);
			} else {
				// SHARPEN the image by subtracting the low frequency components.
				let orig = img.clone();
				self.convolve(&mut img, kernel);
				for (y, orow) in orig.rows() {
					for (dst, vorig) in img.row_mut(y).iter_mut().zip(orow) {
						let v = 2 * (*vorig as i16) - (*dst as i16);
						*dst = v.clamp(0, 255) as u8;
					}
				}
			}
			quad_im = Some(img);
			tp.stamp("blur/sharp");
		}

		Ok(quad_im)
	}

	fn convolve(&self, img: &mut ImageY8, kernel: &[u8]) {
		match &self.wp {
			Some(wp) => img.convolve2d_parallel(wp, kernel),
			None => img.convolve2d_mut(kernel),
		}
	}

	/// Fit quads to every cluster, in cluster order, mapped back to
	/// full-resolution coordinates
	fn fit_quads(&self, quad_im: &ImageRefY8, clusters: Vec<Cluster>) -> Vec<Quad> {
		let limits = self.quad_fit_limits();
		let qtp = &self.params.qtp;
		let decimate_mode = self.params.quad_decimate_mode();

		let fit = |mut cluster: Cluster| -> Option<Quad> {
			let quad = fit_quad(qtp, &limits, quad_im, &mut cluster)?;
			match decimate_mode {
				None => Some(quad),
				Some(mode) => match quad.rescale(mode) {
					Ok(quad) => Some(quad),
					Err(e) => {
						log::trace!("dropping quad after rescale: {e:?}");
						None
					}
				},
			}
		};

		match &self.wp {
			Some(wp) => {
				let chunk = clusters.len().div_ceil(wp.current_num_threads()).max(1);
				wp.install(|| {
					clusters.into_par_iter()
						.with_min_len(chunk)
						.filter_map(&fit)
						.collect()
				})
			},
			None => clusters.into_iter().filter_map(&fit).collect(),
		}
	}

	fn decode_quads(&self, im_orig: &ImageRefY8, quads: Vec<Quad>) -> Vec<crate::AprilTagDetection> {
		let refine_range = if self.params.refine_edges {
			Some(self.params.decimate_factor().max(1.) + 1.)
		} else {
			None
		};
		let info = QuadDecodeInfo {
			families: &self.tag_families,
			im: im_orig,
			refine_range,
			decode_sharpening: self.params.decode_sharpening,
		};

		match &self.wp {
			Some(wp) => {
				let chunk = quads.len().div_ceil(wp.current_num_threads()).max(1);
				wp.install(|| {
					quads.into_par_iter()
						.with_min_len(chunk)
						.flat_map_iter(|quad| quad.decode_task(&info))
						.collect()
				})
			},
			None => quads.into_iter()
				.flat_map(|quad| quad.decode_task(&info))
				.collect(),
		}
	}

	/// Detect AprilTags in an image
	pub fn detect<C: Deref<Target = [u8]>>(&self, im: &ImageBuffer<C>) -> Result<Detections, DetectError> {
		Ok(self.detect_inner(&im.as_view()))
	}

	/// Detect AprilTags in a borrowed 8-bit grayscale buffer
	///
	/// Fails if `buf` can't hold `height` rows of `stride` bytes, or if
	/// `stride < width`.
	pub fn detect_raw(&self, buf: &[u8], width: usize, height: usize, stride: usize) -> Result<Detections, DetectError> {
		let im = ImageRefY8::new(buf, width, height, stride)
			.map_err(DetectError::BadSourceImageDimensions)?;
		Ok(self.detect_inner(&im))
	}

	/// Detect AprilTags
	///
	/// ## Steps:
	/// ### 1. Decimate
	/// Downsample image, as per `quad_decimate`
	///
	/// ### 2. Blur / Sharpen
	/// Blur or sharpen image, as per `quad_sigma`
	///
	/// ### 3. Segment
	/// Threshold, find connected components, and cluster boundary points
	///
	/// ### 4. Fit quads
	///
	/// ### 5. Decode
	/// Refine edges and sample bits on the full-resolution image
	///
	/// ### 6. Reconcile
	/// Drop overlapping duplicates (and sort, if requested)
	fn detect_inner(&self, im_orig: &ImageRefY8) -> Detections {
		if self.tag_families.is_empty() {
			log::warn!("AprilTag: No tag families enabled.");
			return Detections::default();
		}
		if im_orig.dimensions().is_empty() {
			return Detections::default();
		}

		// Statistics relating to last processed frame
		let mut tp = TimeProfile::default();
		tp.stamp("init");

		let trace = self.trace.as_deref();

		///////////////////////////////////////////////////////////
		// Step 1. Detect quads according to requested image decimation
		// and blurring parameters.
		let quad_im = match self.preprocess(&mut tp, im_orig) {
			Ok(quad_im) => quad_im,
			Err(e) => {
				log::debug!("image too small to preprocess: {e}");
				return Detections { tp, ..Default::default() };
			}
		};
		let quad_view = match &quad_im {
			Some(im) => im.as_view(),
			None => im_orig.clone(),
		};
		if let Some(trace) = trace {
			trace.on_preprocess(&quad_view);
		}

		let clusters = quad_clusters(&self.params.qtp, &mut tp, &quad_view, trace);

		let quads = self.fit_quads(&quad_view, clusters);
		drop(quad_im);
		tp.stamp("fit quads");

		log::debug!("Found {} quads", quads.len());
		if let Some(trace) = trace {
			trace.on_quads(&quads);
		}
		let nquads = quads.len().try_into().unwrap_or(u32::MAX);

		////////////////////////////////////////////////////////////////
		// Step 2. Decode tags from each quad.
		let detections = self.decode_quads(im_orig, quads);
		tp.stamp("decode+refinement");

		let mut detections = reconcile_detections(detections);
		tp.stamp("reconcile");

		if self.params.deterministic_order {
			sort_detections(&mut detections);
		}

		if let Some(trace) = trace {
			trace.on_detections(&detections);
		}

		if self.params.debug {
			log::debug!("{} detections from {nquads} quads\n{tp}", detections.len());
		}

		Detections {
			tp,
			nquads,
			detections,
		}
	}
}

#[cfg(test)]
mod test {
	use std::sync::{Arc, Mutex};

	use crate::{
		families::AprilTagFamily,
		quad_decode::Quad,
		util::image::{ImageRefY8, ImageY8},
		AprilTagDetection, DetectError, DetectionTrace, DetectorBuildError, DetectorBuilder, DetectorConfig,
	};

	fn render(family: &AprilTagFamily, id: usize, scale: usize, off: usize, size: usize) -> ImageY8 {
		let tag = family.to_image(id).unwrap();
		ImageY8::from_fn(size, size, |x, y| {
			if x < off || y < off {
				return 255;
			}
			let (tx, ty) = ((x - off) / scale, (y - off) / scale);
			tag.get(tx, ty).unwrap_or(255)
		})
	}

	fn detector(config: DetectorConfig) -> crate::AprilTagDetector {
		DetectorBuilder::new(config)
			.with_family(AprilTagFamily::for_name("tag16h5").unwrap(), 1)
			.unwrap()
			.build()
			.unwrap()
	}

	#[test]
	fn detects_rendered_tag() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let im = render(&family, 3, 8, 20, 104);
		let dets = detector(DetectorConfig::default()).detect(&im).unwrap();
		assert_eq!(dets.detections.len(), 1);
		let det = &dets.detections[0];
		assert_eq!(det.id, 3);
		assert_eq!(det.hamming, 0);
		assert!((det.center.x() - 52.).abs() < 1., "{:?}", det.center);
		assert!((det.center.y() - 52.).abs() < 1., "{:?}", det.center);
		assert!(dets.nquads >= 1);
	}

	#[test]
	fn no_families_no_detections() {
		let detector = DetectorBuilder::default().build().unwrap();
		let im = ImageY8::zeroed(64, 64);
		let dets = detector.detect(&im).unwrap();
		assert!(dets.detections.is_empty());
		assert_eq!(dets.nquads, 0);
	}

	#[test]
	fn zero_threads_is_rejected() {
		let res = DetectorBuilder::new(DetectorConfig { nthreads: 0, ..Default::default() }).build();
		assert!(matches!(res, Err(DetectorBuildError::InvalidConfig(_))));
	}

	#[test]
	fn raw_buffer_too_small() {
		let detector = detector(DetectorConfig::default());
		let buf = [0u8; 10];
		let res = detector.detect_raw(&buf, 4, 4, 4);
		assert!(matches!(res, Err(DetectError::BadSourceImageDimensions(_))));
	}

	#[test]
	fn tiny_decimated_image_is_empty() {
		let detector = detector(DetectorConfig { quad_decimate: 4., ..Default::default() });
		let im = ImageY8::zeroed(8, 8);
		let dets = detector.detect(&im).unwrap();
		assert!(dets.detections.is_empty());
	}

	#[test]
	fn raw_matches_buffer() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let im = render(&family, 7, 6, 10, 70);
		let detector = detector(DetectorConfig::default());
		let a = detector.detect(&im).unwrap();
		let b = detector.detect_raw(im.data(), im.width(), im.height(), im.stride()).unwrap();
		assert_eq!(a.detections.len(), b.detections.len());
		for (a, b) in a.detections.iter().zip(b.detections.iter()) {
			assert_eq!(a.id, b.id);
			assert_eq!(a.corners, b.corners);
		}
	}

	#[derive(Default)]
	struct Recorder {
		stages: Mutex<Vec<&'static str>>,
	}

	impl DetectionTrace for Recorder {
		fn on_preprocess(&self, _image: &ImageRefY8) {
			self.stages.lock().unwrap().push("preprocess");
		}
		fn on_threshold(&self, _image: &ImageY8) {
			self.stages.lock().unwrap().push("threshold");
		}
		fn on_clusters(&self, _cluster_sizes: &[usize]) {
			self.stages.lock().unwrap().push("clusters");
		}
		fn on_quads(&self, _quads: &[Quad]) {
			self.stages.lock().unwrap().push("quads");
		}
		fn on_detections(&self, _detections: &[AprilTagDetection]) {
			self.stages.lock().unwrap().push("detections");
		}
	}

	#[test]
	fn trace_sees_every_stage() {
		let recorder = Arc::new(Recorder::default());
		let detector = DetectorBuilder::default()
			.with_family(AprilTagFamily::for_name("tag16h5").unwrap(), 0)
			.unwrap()
			.with_trace(recorder.clone())
			.build()
			.unwrap();
		let im = ImageY8::from_fn(40, 40, |x, _| (x * 6) as u8);
		detector.detect(&im).unwrap();
		let stages = recorder.stages.lock().unwrap().clone();
		assert_eq!(stages, ["preprocess", "threshold", "clusters", "quads", "detections"]);
	}
}
