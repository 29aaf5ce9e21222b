use std::{cmp::Ordering, fmt::Write, sync::Arc};

use crate::{families::AprilTagFamily, util::{geom::polygons_overlap, math::{Mat33, Vec2}, TimeProfile}};

/// Represents the detection of a tag.
#[derive(Debug, Clone)]
pub struct AprilTagDetection {
	/// The detected tag's family
	pub family: Arc<AprilTagFamily>,

	/// The decoded ID of the tag
	pub id: usize,

	/// How many error bits were corrected?
	///
	/// Note: accepting large numbers of corrected errors leads to greatly
	/// increased false positive rates.
	pub hamming: u16,

	/// A measure of the quality of the binary decoding process: the
	/// average difference between the intensity of a data bit versus
	/// the decision threshold. Higher numbers roughly indicate better
	/// decodes. This is a reasonable measure of detection accuracy
	/// only for very small tags-- not effective for larger tags (where
	/// we could have sampled anywhere within a bit cell and still
	/// gotten a good detection).
	pub decision_margin: f32,

	/// The 3x3 homography matrix describing the projection from an
	/// "ideal" tag (with corners at (-1,1), (1,1), (1,-1), and (-1,
	/// -1)) to pixels in the image.
	pub homography: Mat33,

	/// The center of the detection in image pixel coordinates.
	pub center: Vec2,

	/// The corners of the tag in image pixel coordinates. These always
	/// wrap counter-clock wise around the tag.
	pub corners: [Vec2; 4],
}

impl AprilTagDetection {
	fn is_same_tag(&self, other: &AprilTagDetection) -> bool {
		self.id == other.id && Arc::ptr_eq(&self.family, &other.family)
	}

	/// Group detections of the same tag together
	fn cmp_tag(&self, other: &AprilTagDetection) -> Ordering {
		self.family.name.cmp(&other.family.name)
			.then_with(|| Arc::as_ptr(&self.family).cmp(&Arc::as_ptr(&other.family)))
			.then(self.id.cmp(&other.id))
	}

	/// Which of two overlapping detections of the same tag to keep
	/// (`Less` prefers `self`)
	fn cmp_best(&self, other: &AprilTagDetection) -> Ordering {
		// want small hamming
		Ord::cmp(&self.hamming, &other.hamming)
			// want bigger margins
			.then_with(|| f32::total_cmp(&self.decision_margin, &other.decision_margin).reverse())
			// if we STILL don't prefer one detection over the other, then pick
			// any deterministic criterion.
			.then_with(|| compare_corners(self, other))
	}
}

/// Result of running the detector on one image
#[derive(Default, Debug)]
pub struct Detections {
	pub detections: Vec<AprilTagDetection>,
	/// Number of quads that were decoded
	pub nquads: u32,
	/// Stage timing for this call
	pub tp: TimeProfile,
}

/// Order detections by their corners, lexicographically
pub fn compare_corners(a: &AprilTagDetection, b: &AprilTagDetection) -> Ordering {
	a.corners.iter()
		.zip(b.corners.iter())
		.map(|(pa, pb)| pa.x().total_cmp(&pb.x()).then(pa.y().total_cmp(&pb.y())))
		.find(|c| c.is_ne())
		.unwrap_or(Ordering::Equal)
}

/// One line of the regression fixture format:
/// `index, id, (x0 y0), (x1 y1), (x2 y2), (x3 y3)`
pub fn format_detection(index: usize, det: &AprilTagDetection) -> String {
	let mut res = format!("{index}, {}", det.id);
	for p in det.corners.iter() {
		// writing to a String can't fail
		let _ = write!(res, ", ({:.4} {:.4})", p.x(), p.y());
	}
	res
}

/// Reconcile detections--- don't report the same tag more
/// than once. (Allow non-overlapping duplicate detections.)
pub(crate) fn reconcile_detections(mut detections: Vec<AprilTagDetection>) -> Vec<AprilTagDetection> {
	// Sort detections by tag, such that the same tags are adjacent
	detections.sort_by(AprilTagDetection::cmp_tag);

	let mut keep = vec![true; detections.len()];
	for i0 in 0..detections.len() {
		if !keep[i0] {
			continue;
		}
		for i1 in (i0 + 1)..detections.len() {
			let (det0, det1) = (&detections[i0], &detections[i1]);
			if !det0.is_same_tag(det1) {
				// sorted by tag, so nothing later matches either
				break;
			}
			if !keep[i1] {
				continue;
			}

			if polygons_overlap(&det0.corners, &det1.corners) {
				// the tags overlap. Delete one, keep the other.
				if det0.cmp_best(det1).is_le() {
					keep[i1] = false;
				} else {
					keep[i0] = false;
					break;
				}
			}
		}
	}

	let dropped = keep.iter().filter(|k| !**k).count();
	if dropped > 0 {
		log::debug!("dropped {dropped} overlapping detections");
	}

	let mut keep = keep.into_iter();
	detections.retain(|_| keep.next().unwrap_or(false));
	detections
}

/// Final ordering: by id, then best margin first
pub(crate) fn sort_detections(detections: &mut [AprilTagDetection]) {
	detections.sort_by(|a, b| {
		a.id.cmp(&b.id)
			.then_with(|| b.decision_margin.total_cmp(&a.decision_margin))
			.then_with(|| a.family.name.cmp(&b.family.name))
			.then_with(|| compare_corners(a, b))
	});
}

#[cfg(test)]
mod test {
	use std::sync::Arc;

	use crate::{families::AprilTagFamily, util::math::{Mat33, Vec2}};

	use super::{compare_corners, format_detection, reconcile_detections, sort_detections, AprilTagDetection};

	fn det(family: &Arc<AprilTagFamily>, id: usize, hamming: u16, margin: f32, x: f64) -> AprilTagDetection {
		AprilTagDetection {
			family: family.clone(),
			id,
			hamming,
			decision_margin: margin,
			homography: Mat33::identity(),
			center: Vec2::of(x + 5., 5.),
			corners: [Vec2::of(x, 10.), Vec2::of(x + 10., 10.), Vec2::of(x + 10., 0.), Vec2::of(x, 0.)],
		}
	}

	#[test]
	fn format_matches_fixture() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let mut d = det(&family, 7, 0, 50., 1.23456);
		d.corners[3] = Vec2::of(-0.5, 2.);
		assert_eq!(
			format_detection(2, &d),
			"2, 7, (1.2346 10.0000), (11.2346 10.0000), (11.2346 0.0000), (-0.5000 2.0000)"
		);
	}

	#[test]
	fn corner_order() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let a = det(&family, 0, 0, 1., 0.);
		let b = det(&family, 0, 0, 1., 3.);
		assert!(compare_corners(&a, &b).is_lt());
		assert!(compare_corners(&b, &a).is_gt());
		assert!(compare_corners(&a, &a).is_eq());
	}

	#[test]
	fn overlapping_duplicates() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let other = AprilTagFamily::for_name("tag25h9").unwrap();
		let dets = vec![
			det(&family, 3, 1, 90., 0.),
			// overlaps the first; lower hamming wins despite the margin
			det(&family, 3, 0, 20., 2.),
			// same id, far away: a second physical tag
			det(&family, 3, 2, 10., 100.),
			// overlapping, but a different id
			det(&family, 4, 0, 30., 1.),
			// overlapping, same id, different family
			det(&other, 3, 0, 30., 1.),
		];
		let res = reconcile_detections(dets);
		assert_eq!(res.len(), 4);
		let id3 = res.iter()
			.filter(|d| d.id == 3 && Arc::ptr_eq(&d.family, &family))
			.collect::<Vec<_>>();
		assert_eq!(id3.len(), 2);
		assert!(id3.iter().any(|d| d.hamming == 0 && d.corners[0].x() == 2.));
		assert!(id3.iter().any(|d| d.corners[0].x() == 100.));
	}

	#[test]
	fn equal_hamming_prefers_margin() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let res = reconcile_detections(vec![det(&family, 1, 0, 10., 0.), det(&family, 1, 0, 40., 1.)]);
		assert_eq!(res.len(), 1);
		assert_eq!(res[0].decision_margin, 40.);
	}

	#[test]
	fn sorted_by_id_then_margin() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let mut dets = vec![
			det(&family, 5, 0, 10., 0.),
			det(&family, 2, 0, 10., 50.),
			det(&family, 5, 0, 60., 100.),
		];
		sort_detections(&mut dets);
		let keys = dets.iter().map(|d| (d.id, d.decision_margin)).collect::<Vec<_>>();
		assert_eq!(keys, [(2, 10.), (5, 60.), (5, 10.)]);
	}
}
