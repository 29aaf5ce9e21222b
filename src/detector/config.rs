use std::num::{NonZeroU32, NonZeroUsize};

use crate::{util::image::gaussian_kernel, AprilTagQuadThreshParams};

use super::DetectorBuildError;

/// Configuration for [AprilTagDetector](super::AprilTagDetector)
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
	/// How many threads should be used? Must be at least one; one is
	/// single-threaded.
	pub nthreads: usize,

	/// Detection of quads can be done on a lower-resolution image,
	/// improving speed at a cost of pose accuracy and a slight
	/// decrease in detection rate. Decoding the binary payload is
	/// still done at full resolution.
	///
	/// `1.5` uses a dedicated 3/2 filter; other values above one are
	/// rounded to an integer step.
	pub quad_decimate: f32,

	/// What Gaussian blur should be applied to the segmented image
	/// (used for quad detection?)  Parameter is the standard deviation
	/// in pixels.  Very noisy images benefit from non-zero values
	/// (e.g. 0.8). Negative values sharpen instead.
	pub quad_sigma: f32,

	/// When true, the edges of the each quad are adjusted to "snap
	/// to" strong gradients nearby. This is useful when decimation is
	/// employed, as it can increase the quality of the initial quad
	/// estimate substantially. Generally recommended to be on.
	///
	/// Very computationally inexpensive.
	pub refine_edges: bool,

	/// How much sharpening should be done to decoded images? This
	/// can help decode small tags but may or may not help in odd
	/// lighting conditions or low light conditions.
	///
	/// The default value is 0.25.
	pub decode_sharpening: f64,

	/// Log per-stage timing for every call
	pub debug: bool,

	/// Thresholding and quad fitting parameters
	pub qtp: AprilTagQuadThreshParams,

	/// Sort detections by id (then best margin first)
	pub deterministic_order: bool,
}

impl Default for DetectorConfig {
	fn default() -> Self {
		Self {
			nthreads: 1,
			quad_decimate: 1.0,
			quad_sigma: 0.0,
			refine_edges: true,
			decode_sharpening: 0.25,
			debug: false,
			qtp: AprilTagQuadThreshParams::default(),
			deterministic_order: true,
		}
	}
}

/// Quad decimate algorithm to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuadDecimateMode {
	/// Special case for 3/2 scaling
	ThreeHalves,
	/// Integer scaling (at least two)
	Scaled(NonZeroU32),
}

impl DetectorConfig {
	/// Get algorithm to use for quad decimation
	pub(crate) fn quad_decimate_mode(&self) -> Option<QuadDecimateMode> {
		if self.quad_decimate == 1.5 {
			return Some(QuadDecimateMode::ThreeHalves);
		}
		let factor = self.quad_decimate.round();
		if factor >= 2. {
			NonZeroU32::new(factor as u32).map(QuadDecimateMode::Scaled)
		} else {
			None
		}
	}

	/// Effective decimation factor
	pub(crate) fn decimate_factor(&self) -> f64 {
		match self.quad_decimate_mode() {
			None => 1.,
			Some(QuadDecimateMode::ThreeHalves) => 1.5,
			Some(QuadDecimateMode::Scaled(f)) => f.get() as f64,
		}
	}

	/// Kernel size for `quad_sigma`, if a blur/sharpen pass is needed.
	///
	/// The kernel goes out 2 std devs:
	///
	/// | max sigma | ksz |
	/// |-----------|-----|
	/// | 0.499     | 1 (disabled) |
	/// | 0.999     | 3 |
	/// | 1.499     | 5 |
	/// | 1.999     | 7 |
	pub(crate) fn quad_sigma_kernel_size(&self) -> Option<usize> {
		if self.quad_sigma == 0. {
			return None;
		}
		let ksz = (4. * self.quad_sigma.abs()) as usize;
		let ksz = ksz | 1;
		if ksz > 1 {
			Some(ksz)
		} else {
			None
		}
	}

	/// Fixed-point blur kernel for `quad_sigma`
	pub(crate) fn quad_sigma_kernel(&self) -> Result<Option<Vec<u8>>, DetectorBuildError> {
		let Some(ksz) = self.quad_sigma_kernel_size() else { return Ok(None) };
		gaussian_kernel(self.quad_sigma.abs() as f64, ksz)
			.map(Some)
			.map_err(|e| DetectorBuildError::InvalidConfig(format!("quad_sigma {}: {e}", self.quad_sigma)))
	}

	/// Should the algorithm be run on a single thread?
	pub(crate) fn single_thread(&self) -> bool {
		self.nthreads().get() == 1
	}

	/// Number of worker threads. [validate](Self::validate) rejects zero.
	pub fn nthreads(&self) -> NonZeroUsize {
		NonZeroUsize::new(self.nthreads).unwrap_or(NonZeroUsize::MIN)
	}

	/// Check for values the detector can't work with
	pub(crate) fn validate(&self) -> Result<(), DetectorBuildError> {
		let invalid = |msg: String| Err(DetectorBuildError::InvalidConfig(msg));
		if self.nthreads == 0 {
			return invalid("nthreads must be at least 1".into());
		}
		if !self.quad_decimate.is_finite() || self.quad_decimate < 0. {
			return invalid(format!("quad_decimate must be finite and non-negative (actual: {})", self.quad_decimate));
		}
		if !self.quad_sigma.is_finite() {
			return invalid(format!("quad_sigma must be finite (actual: {})", self.quad_sigma));
		}
		if !self.decode_sharpening.is_finite() {
			return invalid(format!("decode_sharpening must be finite (actual: {})", self.decode_sharpening));
		}
		let qtp = &self.qtp;
		if !qtp.max_line_fit_mse.is_finite() || !qtp.max_line_error.is_finite() || !qtp.cos_critical_rad.is_finite() {
			return invalid("quad fit parameters must be finite".into());
		}
		if let Some(max) = qtp.max_tag_width {
			if max < qtp.min_tag_width {
				return invalid(format!("max_tag_width {max} is smaller than min_tag_width {}", qtp.min_tag_width));
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use std::num::NonZeroU32;

	use crate::DetectorBuildError;

	use super::{DetectorConfig, QuadDecimateMode};

	#[test]
	fn decimate_modes() {
		let mut config = DetectorConfig::default();
		assert_eq!(config.quad_decimate_mode(), None);
		config.quad_decimate = 1.5;
		assert_eq!(config.quad_decimate_mode(), Some(QuadDecimateMode::ThreeHalves));
		config.quad_decimate = 2.2;
		assert_eq!(config.quad_decimate_mode(), Some(QuadDecimateMode::Scaled(NonZeroU32::new(2).unwrap())));
		assert_eq!(config.decimate_factor(), 2.);
		config.quad_decimate = 1.2;
		assert_eq!(config.quad_decimate_mode(), None);
	}

	#[test]
	fn sigma_kernel_sizes() {
		let mut config = DetectorConfig::default();
		assert_eq!(config.quad_sigma_kernel_size(), None);
		config.quad_sigma = 0.4;
		assert_eq!(config.quad_sigma_kernel_size(), None);
		config.quad_sigma = 0.8;
		assert_eq!(config.quad_sigma_kernel_size(), Some(3));
		config.quad_sigma = -1.6;
		assert_eq!(config.quad_sigma_kernel_size(), Some(7));
		assert_eq!(config.quad_sigma_kernel().unwrap().unwrap().len(), 7);
	}

	#[test]
	fn rejects_bad_values() {
		let config = DetectorConfig { quad_decimate: f32::NAN, ..Default::default() };
		assert!(matches!(config.validate(), Err(DetectorBuildError::InvalidConfig(_))));
		let mut config = DetectorConfig::default();
		config.qtp.min_tag_width = 10;
		config.qtp.max_tag_width = Some(5);
		assert!(config.validate().is_err());
		assert!(DetectorConfig::default().validate().is_ok());
	}

	#[test]
	fn thread_count() {
		let config = DetectorConfig { nthreads: 0, ..Default::default() };
		assert!(matches!(config.validate(), Err(DetectorBuildError::InvalidConfig(_))));
		assert!(DetectorConfig::default().single_thread());
		let config = DetectorConfig { nthreads: 4, ..Default::default() };
		assert!(config.validate().is_ok());
		assert!(!config.single_thread());
	}
}
