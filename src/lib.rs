//! Detection of AprilTag-style visual fiducials in grayscale images.
//!
//! ```no_run
//! use apriltag_detector::{AprilTagDetector, AprilTagFamily, util::ImageY8};
//!
//! let family = AprilTagFamily::for_name("tag16h5").unwrap();
//! let detector = AprilTagDetector::builder()
//!     .with_family(family, 1)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let image = ImageY8::zeroed(640, 480);
//! for det in detector.detect(&image).unwrap().detections {
//!     println!("{} {:?}", det.id, det.center);
//! }
//! ```

pub mod families;
mod detector;
pub mod util;
mod quickdecode;
pub(crate) mod quad_thresh;
pub(crate) mod quad_decode;
mod pose;
mod detection;
mod apriltag_math;

pub use quickdecode::AddFamilyError;
pub use families::AprilTagFamily;
pub use detector::{AprilTagDetector, DetectorBuilder, DetectorBuildError, DetectError, DetectorConfig, DetectionTrace, ImageDimensionError};
pub use detection::{AprilTagDetection, Detections, compare_corners, format_detection};
pub use quad_thresh::{AprilTagQuadThreshParams, Connectivity};
pub use quad_decode::Quad;
pub use util::{TimeProfile, TimeProfileStatistics};

pub use pose::{
    estimate_tag_pose,
    estimate_tag_pose_solve_square,
    estimate_pose_for_tag_homography,
    estimate_tag_pose_orthogonal_iteration,
    AprilTagDetectionInfo,
    AprilTagPose,
    PoseWithError,
    OrthogonalIterationResult
};
