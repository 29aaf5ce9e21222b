use std::{ops::Deref, sync::Arc};

use crate::{quickdecode::QuickDecode, AddFamilyError, AprilTagFamily};

use super::{AprilTagDetector, DetectionTrace, DetectorBuildError, DetectorConfig};

#[derive(Clone, Default)]
pub struct DetectorBuilder {
	/// Configuration parameters
	pub config: DetectorConfig,
	pub(crate) tag_families: Vec<Arc<QuickDecode>>,
	trace: Option<Arc<dyn DetectionTrace>>,
}

impl From<AprilTagDetector> for DetectorBuilder {
	fn from(value: AprilTagDetector) -> Self {
		Self {
			config: value.params,
			tag_families: value.tag_families,
			trace: value.trace,
		}
	}
}

impl DetectorBuilder {
	pub fn new(config: DetectorConfig) -> Self {
		Self {
			config,
			tag_families: Vec::new(),
			trace: None,
		}
	}

	/// Add a family to the apriltag detector, correcting up to `bits_corrected` bit errors.
	pub fn add_family_bits(&mut self, family: Arc<AprilTagFamily>, bits_corrected: usize) -> Result<(), AddFamilyError> {
		let qd = QuickDecode::new(family, bits_corrected)?;
		self.tag_families.push(Arc::new(qd));
		Ok(())
	}

	/// Add the family to this builder (reduce copying)
	pub fn with_family(mut self, fam: Arc<AprilTagFamily>, bits_corrected: usize) -> Result<Self, AddFamilyError> {
		self.add_family_bits(fam, bits_corrected)?;
		Ok(self)
	}

	/// Families currently registered
	pub fn families(&self) -> impl Iterator<Item = &Arc<AprilTagFamily>> + '_ {
		self.tag_families.iter().map(|qd| &qd.family)
	}

	/// Clear AprilTag families to detect
	pub fn clear_families(&mut self) {
		self.tag_families.clear();
	}

	pub fn remove_family(&mut self, fam: &AprilTagFamily) {
		if let Some(idx) = self.tag_families.iter().position(|qd| qd.family.deref().eq(fam)) {
			self.tag_families.remove(idx);
		}
	}

	/// Observe intermediate stages of every detection
	pub fn set_trace(&mut self, trace: Option<Arc<dyn DetectionTrace>>) {
		self.trace = trace;
	}

	pub fn with_trace(mut self, trace: Arc<dyn DetectionTrace>) -> Self {
		self.set_trace(Some(trace));
		self
	}

	/// Build a detector with these options
	pub fn build(self) -> Result<AprilTagDetector, DetectorBuildError> {
		AprilTagDetector::new(self.config, self.tag_families, self.trace)
	}
}

#[cfg(test)]
mod test {
	use crate::{AprilTagFamily, DetectorBuilder, DetectorConfig, DetectorBuildError};

	#[test]
	fn add_and_remove_families() {
		let tag16h5 = AprilTagFamily::for_name("tag16h5").unwrap();
		let mut builder = DetectorBuilder::default()
			.with_family(tag16h5.clone(), 1)
			.unwrap();
		assert_eq!(builder.families().count(), 1);
		builder.remove_family(&tag16h5);
		assert_eq!(builder.families().count(), 0);
	}

	#[test]
	fn too_many_corrected_bits() {
		let tag16h5 = AprilTagFamily::for_name("tag16h5").unwrap();
		assert!(DetectorBuilder::default().with_family(tag16h5, 4).is_err());
	}

	#[test]
	fn roundtrip_through_detector() {
		let tag16h5 = AprilTagFamily::for_name("tag16h5").unwrap();
		let detector = DetectorBuilder::new(DetectorConfig { quad_sigma: 0.8, ..Default::default() })
			.with_family(tag16h5, 0)
			.unwrap()
			.build()
			.unwrap();
		let builder = DetectorBuilder::from(detector);
		assert_eq!(builder.config.quad_sigma, 0.8);
		assert_eq!(builder.families().count(), 1);
	}

	#[test]
	fn invalid_config_fails_build() {
		let builder = DetectorBuilder::new(DetectorConfig { quad_sigma: f32::INFINITY, ..Default::default() });
		assert!(matches!(builder.build(), Err(DetectorBuildError::InvalidConfig(_))));
	}
}
