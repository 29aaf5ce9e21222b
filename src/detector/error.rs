use rayon::ThreadPoolBuildError;
use thiserror::Error;

/// An image buffer did not satisfy its width/height/stride contract
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ImageDimensionError {
	#[error("Width too small (actual: {actual}, minimum: {minimum})")]
	WidthTooSmall {
		actual: usize,
		minimum: usize,
	},
	#[error("Height too small (actual: {actual}, minimum: {minimum})")]
	HeightTooSmall {
		actual: usize,
		minimum: usize,
	},
	#[error("Stride smaller than width (stride: {stride}, width: {width})")]
	StrideTooSmall {
		stride: usize,
		width: usize,
	},
	#[error("Buffer too small (actual: {actual}, minimum: {minimum})")]
	BufferTooSmall {
		actual: usize,
		minimum: usize,
	},
}

/// Error generated when [detecting AprilTags](crate::AprilTagDetector::detect)
#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum DetectError {
	#[error("Input image was the wrong size")]
	BadSourceImageDimensions(#[source] ImageDimensionError),
}

/// Error generated when attempting to [build](crate::DetectorBuilder::build) an [AprilTagDetector](crate::AprilTagDetector)
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DetectorBuildError {
	#[error("There was an error when creating the thread pool")]
	Threadpool(#[from] ThreadPoolBuildError),
	#[error("Invalid detector configuration: {0}")]
	InvalidConfig(String),
}

impl PartialEq for DetectorBuildError {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			// ThreadPoolBuildError is not comparable
			(Self::Threadpool(_), Self::Threadpool(_)) => false,
			(Self::InvalidConfig(l), Self::InvalidConfig(r)) => l == r,
			_ => false,
		}
	}
}
