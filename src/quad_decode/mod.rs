mod edges;
mod greymodel;
mod homography;
mod sharpening;

use std::sync::Arc;

use crate::{
	detection::AprilTagDetection,
	detector::config::QuadDecimateMode,
	families::AprilTagFamily,
	quickdecode::{QuickDecode, QuickDecodeResult},
	util::{image::ImageRefY8, math::{Mat33, Vec2}},
};

use greymodel::{Graymodel, SolvedGraymodel};
use sharpening::BitGrid;

pub(crate) use homography::HomographySolveError;

/// A candidate quadrilateral, possibly containing a tag
#[derive(Clone, Debug)]
pub struct Quad {
	/// Corners in image coordinates, wrapping around the quad
	pub corners: [Vec2; 4],
	/// Is the inside of the quad lighter than the outside?
	pub reversed_border: bool,
	/// Tag coordinates ([-1,1] at the black corners) to pixels
	h: Mat33,
}

/// Bilinearly interpolate the pixel value at `p` (pixel centers at `+0.5`)
fn value_for_pixel(im: &ImageRefY8, p: Vec2) -> Option<f64> {
	let x1 = f64::floor(p.x() - 0.5);
	let y1 = f64::floor(p.y() - 0.5);
	if x1 < 0. || y1 < 0. {
		return None;
	}
	let x2 = f64::ceil(p.x() - 0.5) as usize;
	let y2 = f64::ceil(p.y() - 0.5) as usize;
	if x2 >= im.width() || y2 >= im.height() {
		return None;
	}
	let x = p.x() - 0.5 - x1;
	let y = p.y() - 0.5 - y1;
	let x1 = x1 as usize;
	let y1 = y1 as usize;

	let v = 0.
		+ im[(x1, y1)] as f64 * (1. - x) * (1. - y)
		+ im[(x2, y1)] as f64 *       x  * (1. - y)
		+ im[(x1, y2)] as f64 * (1. - x) *       y
		+ im[(x2, y2)] as f64 *       x  *       y;

	Some(v)
}

/// Per-call decoding inputs shared by every quad
pub(crate) struct QuadDecodeInfo<'a, 'b> {
	/// Tag families to look for
	pub(crate) families: &'a [Arc<QuickDecode>],
	/// Full-resolution source image
	pub(crate) im: &'a ImageRefY8<'b>,
	/// Search distance for edge refinement, or `None` to skip it
	pub(crate) refine_range: Option<f64>,
	/// Laplacian weight applied to the sampled bit grid
	pub(crate) decode_sharpening: f64,
}

impl Quad {
	/// Create a quad, solving for its homography
	pub(crate) fn new(corners: [Vec2; 4], reversed_border: bool) -> Result<Self, HomographySolveError> {
		let h = homography::quad_homography(&corners)?;
		Ok(Self { corners, reversed_border, h })
	}

	/// Homography from tag coordinates (`[-1, 1]²`) to image pixels
	pub fn homography(&self) -> &Mat33 {
		&self.h
	}

	fn update_homography(&mut self) -> Result<(), HomographySolveError> {
		self.h = homography::quad_homography(&self.corners)?;
		Ok(())
	}

	/// Map corners found on an image decimated by `quad_decimate` back onto
	/// the full-resolution image.
	pub(crate) fn rescale(mut self, mode: QuadDecimateMode) -> Result<Self, HomographySolveError> {
		for p in self.corners.iter_mut() {
			*p = match mode {
				QuadDecimateMode::ThreeHalves => *p * 1.5,
				QuadDecimateMode::Scaled(f) => (*p - Vec2::dup(0.5)) * (f.get() as f64) + Vec2::dup(0.5),
			};
		}
		self.update_homography()?;
		Ok(self)
	}

	/// Sample the image at tag coordinates `(x, y)`, truncating to a pixel
	fn sample_nearest(&self, im: &ImageRefY8, x: f64, y: f64) -> Option<u8> {
		let p = self.h.project(x, y);
		// don't round
		if !(p.x() >= 0. && p.y() >= 0.) {
			return None;
		}
		im.get(p.x() as usize, p.y() as usize)
	}

	/// We will compute a threshold by sampling known white/black cells around this tag.
	/// This sampling is achieved by considering a set of samples along lines.
	///
	/// coordinates are given in bit coordinates. ([0, fam.d]).
	fn sample_threshold(&self, family: &AprilTagFamily, im: &ImageRefY8) -> (SolvedGraymodel, SolvedGraymodel) {
		struct Pattern {
			initial: Vec2,
			delta: Vec2,
			is_white: bool,
		}

		let wab = family.width_at_border as f64;
		let down = Vec2::of(0., 1.);
		let across = Vec2::of(1., 0.);
		// XXX double-counts the corners.
		let patterns = [
			// left white column
			Pattern { initial: Vec2::of(-0.5, 0.5), delta: down, is_white: true },
			// left black column
			Pattern { initial: Vec2::of(0.5, 0.5), delta: down, is_white: false },
			// right white column
			Pattern { initial: Vec2::of(wab + 0.5, 0.5), delta: down, is_white: true },
			// right black column
			Pattern { initial: Vec2::of(wab - 0.5, 0.5), delta: down, is_white: false },
			// top white row
			Pattern { initial: Vec2::of(0.5, -0.5), delta: across, is_white: true },
			// top black row
			Pattern { initial: Vec2::of(0.5, 0.5), delta: across, is_white: false },
			// bottom white row
			Pattern { initial: Vec2::of(0.5, wab + 0.5), delta: across, is_white: true },
			// bottom black row
			Pattern { initial: Vec2::of(0.5, wab - 0.5), delta: across, is_white: false },
		];

		let mut whitemodel = Graymodel::new();
		let mut blackmodel = Graymodel::new();

		for pattern in patterns.iter() {
			let model = if pattern.is_white { &mut whitemodel } else { &mut blackmodel };
			for i in 0..family.width_at_border {
				let tag01 = (pattern.initial + pattern.delta * (i as f64)) / wab;
				let tag = (tag01 - Vec2::dup(0.5)) * 2.;

				if let Some(v) = self.sample_nearest(im, tag.x(), tag.y()) {
					model.add(tag.x(), tag.y(), v as f64);
				}
			}
		}

		(whitemodel.solve(), blackmodel.solve())
	}

	/// Sample every data bit, returning the codeword (most significant bit
	/// first) and the decision margin.
	///
	/// The margin is the average distance of the bits from the decision
	/// threshold, scored separately for white and black bits; the smaller of
	/// the two is returned, penalizing thresholds that sit too close to an
	/// extreme.
	fn sample_bits(&self, family: &AprilTagFamily, decode_sharpening: f64, im: &ImageRefY8, whitemodel: &SolvedGraymodel, blackmodel: &SolvedGraymodel) -> (u64, f32) {
		let min_coord = family.min_coord();
		let wab = family.width_at_border as f64;
		let cell = |bx: i32, by: i32| ((bx - min_coord) as usize, (by - min_coord) as usize);

		let mut values = BitGrid::new(family.total_width as usize);

		for &(bitx, bity) in family.bits.iter() {
			let tag01 = Vec2::of(bitx as f64 + 0.5, bity as f64 + 0.5) / wab;

			// scale to [-1, 1]
			let tag = (tag01 - Vec2::dup(0.5)) * 2.;
			let p = self.h.project(tag.x(), tag.y());
			let Some(v) = value_for_pixel(im, p) else { continue };

			let thresh = (blackmodel.interpolate(tag.x(), tag.y()) + whitemodel.interpolate(tag.x(), tag.y())) / 2.0;
			let (cx, cy) = cell(bitx, bity);
			values.set(cx, cy, v - thresh);
		}

		values.sharpen(decode_sharpening);

		let mut black_score = 0f32;
		let mut white_score = 0f32;
		let mut black_score_count = 1usize;
		let mut white_score_count = 1usize;

		let mut rcode = 0u64;
		for &(bitx, bity) in family.bits.iter() {
			rcode <<= 1;
			let (cx, cy) = cell(bitx, bity);
			let v = values.get(cx, cy);

			if v > 0. {
				white_score += v as f32;
				white_score_count += 1;
				rcode |= 1;
			} else {
				black_score -= v as f32;
				black_score_count += 1;
			}
		}

		let score = f32::min(white_score / (white_score_count as f32), black_score / (black_score_count as f32));

		(rcode, score)
	}

	/// Decode this quad as a member of `qd`'s family.
	///
	/// Returns the decision margin and the matched code, or `None` if the
	/// border is the wrong polarity or the code isn't in the table.
	pub(crate) fn decode(&self, qd: &QuickDecode, decode_sharpening: f64, im: &ImageRefY8) -> Option<(f32, QuickDecodeResult)> {
		let family = &qd.family;
		let (whitemodel, blackmodel) = self.sample_threshold(family, im);

		// the white model must be brighter than the black one at the center
		// (darker, for reversed borders)
		let contrast = whitemodel.interpolate(0., 0.) - blackmodel.interpolate(0., 0.);
		if !contrast.is_finite() || (contrast < 0.) != family.reversed_border {
			log::trace!("border polarity mismatch for {}", family.name);
			return None;
		}

		let (rcode, score) = self.sample_bits(family, decode_sharpening, im, &whitemodel, &blackmodel);

		let entry = qd.decode_codeword(rcode)?;
		Some((score, entry))
	}

	/// Build the detection record for a decoded quad
	fn to_detection(&self, qd: &QuickDecode, decision_margin: f32, entry: QuickDecodeResult) -> AprilTagDetection {
		// Fix the rotation of our homography to properly orient the tag
		let h = self.h.matmul(&Mat33::rotation_z(entry.rotation.theta()));

		let center = h.project(0., 0.);

		// adjust the points in det->p so that they correspond to
		// counter-clockwise around the quad, starting at -1,-1.
		let mut corners = [Vec2::zero(); 4];
		for (i, corner) in corners.iter_mut().enumerate() {
			let tcx = if i == 1 || i == 2 { 1. } else { -1. };
			let tcy = if i < 2 { 1. } else { -1. };
			*corner = h.project(tcx, tcy);
		}

		AprilTagDetection {
			family: qd.family.clone(),
			id: entry.id.into(),
			hamming: entry.hamming.into(),
			decision_margin,
			homography: h,
			center,
			corners,
		}
	}

	/// Refine (optionally) and decode against every family with a matching
	/// border polarity
	pub(crate) fn decode_task(mut self, info: &QuadDecodeInfo) -> Vec<AprilTagDetection> {
		// refine edges is not dependent upon the tag family, thus
		// apply this optimization BEFORE the other work.
		if let Some(range) = info.refine_range {
			self.refine_edges(info.im, range);

			// make sure the homographies are computed...
			if let Err(e) = self.update_homography() {
				log::trace!("homography failed after refinement: {e:?}");
				return Vec::new();
			}
		}

		info.families
			.iter()
			.filter(|qd| qd.family.reversed_border == self.reversed_border)
			.filter_map(|qd| {
				let (decision_margin, entry) = self.decode(qd, info.decode_sharpening, info.im)?;
				if decision_margin < 0. {
					return None;
				}
				Some(self.to_detection(qd, decision_margin, entry))
			})
			.collect()
	}
}

#[cfg(test)]
mod test {
	use std::{num::NonZeroU32, sync::Arc};

	use float_cmp::assert_approx_eq;

	use crate::{
		detector::config::QuadDecimateMode,
		families::AprilTagFamily,
		quickdecode::QuickDecode,
		util::{image::ImageY8, math::Vec2},
	};

	use super::{value_for_pixel, Quad, QuadDecodeInfo};

	/// tag16h5 code `id` drawn with `scale` pixels per cell at `(off, off)`
	fn render(family: &AprilTagFamily, id: usize, scale: usize, off: usize, size: usize) -> ImageY8 {
		let tag = family.to_image(id).unwrap();
		ImageY8::from_fn(size, size, |x, y| {
			if x < off || y < off {
				return 255;
			}
			let (cx, cy) = ((x - off) / scale, (y - off) / scale);
			tag.get(cx, cy).unwrap_or(255)
		})
	}

	/// The black-border corners of the rendered tag, TL/TR/BR/BL
	fn border_quad(scale: usize, off: usize) -> Quad {
		let lo = (off + scale) as f64;
		let hi = (off + 7 * scale) as f64;
		Quad::new([Vec2::of(lo, lo), Vec2::of(hi, lo), Vec2::of(hi, hi), Vec2::of(lo, hi)], false).unwrap()
	}

	#[test]
	fn bilinear_sampling() {
		let im = ImageY8::from_fn(4, 4, |x, _| (x * 10) as u8);
		let im = im.as_view();
		// pixel centres are at +0.5
		assert_approx_eq!(f64, value_for_pixel(&im, Vec2::of(1.5, 1.5)).unwrap(), 10.);
		assert_approx_eq!(f64, value_for_pixel(&im, Vec2::of(2.0, 2.5)).unwrap(), 15.);
		assert!(value_for_pixel(&im, Vec2::of(0.2, 1.)).is_none());
		assert!(value_for_pixel(&im, Vec2::of(3.7, 1.)).is_none());
	}

	#[test]
	fn rescale_corners() {
		let quad = Quad::new([Vec2::of(10., 10.), Vec2::of(20., 10.), Vec2::of(20., 20.), Vec2::of(10., 20.)], false).unwrap();
		let q2 = quad.clone().rescale(QuadDecimateMode::Scaled(NonZeroU32::new(2).unwrap())).unwrap();
		assert_approx_eq!(f64, q2.corners[0].x(), 19.5);
		assert_approx_eq!(f64, q2.corners[2].y(), 39.5);
		let q15 = quad.rescale(QuadDecimateMode::ThreeHalves).unwrap();
		assert_approx_eq!(f64, q15.corners[1].x(), 30.);
	}

	#[test]
	fn decodes_rendered_tag() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let qd = QuickDecode::new(family.clone(), 1).unwrap();
		let im = render(&family, 7, 6, 10, 70);
		let quad = border_quad(6, 10);

		let (margin, entry) = quad.decode(&qd, 0.25, &im.as_view()).unwrap();
		assert_eq!(entry.id, 7);
		assert_eq!(entry.hamming, 0);
		assert!(margin > 50., "margin {margin}");
	}

	#[test]
	fn detection_corners_follow_rotation() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let qd = QuickDecode::new(family.clone(), 0).unwrap();
		let im = render(&family, 3, 6, 10, 70);

		// start the quad at a different corner: the decoded homography
		// must still put detection corner 0 at the bottom left
		let q = border_quad(6, 10);
		let rotated = Quad::new([q.corners[1], q.corners[2], q.corners[3], q.corners[0]], false).unwrap();

		let families = [Arc::new(qd)];
		let view = im.as_view();
		let info = QuadDecodeInfo {
			families: &families,
			im: &view,
			refine_range: None,
			decode_sharpening: 0.25,
		};
		for quad in [q, rotated] {
			let dets = quad.decode_task(&info);
			assert_eq!(dets.len(), 1);
			let det = &dets[0];
			assert_eq!(det.id, 3);
			let expected = [(16., 52.), (52., 52.), (52., 16.), (16., 16.)];
			for (c, (x, y)) in det.corners.iter().zip(expected) {
				assert_approx_eq!(f64, c.x(), x, epsilon = 1e-6);
				assert_approx_eq!(f64, c.y(), y, epsilon = 1e-6);
			}
			assert_approx_eq!(f64, det.center.x(), 34., epsilon = 1e-6);
		}
	}

	#[test]
	fn blank_quad_is_rejected() {
		let family = AprilTagFamily::for_name("tag16h5").unwrap();
		let qd = QuickDecode::new(family, 1).unwrap();
		let im = ImageY8::from_fn(70, 70, |_, _| 128);
		assert!(border_quad(6, 10).decode(&qd, 0.25, &im.as_view()).is_none());
	}
}
