//! Tag pose estimation
//!
//! Poses are expressed in the tag frame: `x` to the right, `y` down, and `z`
//! into the tag, with the origin at the tag center. Corner `i` of a
//! detection is the object point `p[i]` below.
#![allow(non_snake_case)]
mod homography;
mod poly;
mod solve_square;

pub use solve_square::estimate_tag_pose_solve_square;

use nalgebra::{Matrix3, Vector3};

use crate::AprilTagDetection;

use self::{homography::homography_to_pose, poly::Poly};

/// Detection, plus what we need to know about the camera and tag
#[derive(Clone, Copy, Debug)]
pub struct AprilTagDetectionInfo<'a> {
	pub detection: &'a AprilTagDetection,
	/// Side length of the tag's black border, in meters
	pub tagsize: f64,
	/// Focal length, in pixels
	pub fx: f64,
	pub fy: f64,
	/// Principal point, in pixels
	pub cx: f64,
	pub cy: f64,
}

/// Rigid transform from the tag frame to the camera frame
#[derive(Clone, Debug, PartialEq)]
pub struct AprilTagPose {
	pub R: Matrix3<f64>,
	pub t: Vector3<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PoseWithError {
	pub pose: AprilTagPose,
	pub error: f64,
}

pub struct OrthogonalIterationResult {
	/// Best pose solution
	pub solution1: PoseWithError,
	/// Second-best pose solution
	pub solution2: Option<PoseWithError>,
}

/// Calculate projection operator from image points.
fn calculate_F(v: &Vector3<f64>) -> Matrix3<f64> {
	(v * v.transpose()) / v.dot(v)
}

/// Tag corners in the tag frame
fn object_points(tagsize: f64) -> [Vector3<f64>; 4] {
	let scale = tagsize / 2.;
	[
		Vector3::new(-scale,  scale, 0.),
		Vector3::new( scale,  scale, 0.),
		Vector3::new( scale, -scale, 0.),
		Vector3::new(-scale, -scale, 0.),
	]
}

/// Corners as rays on the normalized image plane
fn image_points(info: &AprilTagDetectionInfo) -> [Vector3<f64>; 4] {
	info.detection.corners
		.map(|c| Vector3::new((c.x() - info.cx) / info.fx, (c.y() - info.cy) / info.fy, 1.))
}

/// Implementation of Orthogonal Iteration from Lu, 2000.
///
/// `R` should hold an initial guess. Returns the object-space error after
/// iterating.
fn orthogonal_iteration(v: &[Vector3<f64>; 4], p: &[Vector3<f64>; 4], t: &mut Vector3<f64>, R: &mut Matrix3<f64>, n_steps: usize) -> f64 {
	let n_points = v.len() as f64;
	let I3 = Matrix3::<f64>::identity();

	let p_mean = p.iter().sum::<Vector3<f64>>() / n_points;
	let p_res = p.map(|p_i| p_i - p_mean);

	// Compute M1_inv.
	let F = v.map(|v_i| calculate_F(&v_i));
	let avg_F = F.iter().sum::<Matrix3<f64>>() / n_points;
	let Some(M1_inv) = (I3 - avg_F).try_inverse() else {
		log::debug!("orthogonal iteration: degenerate image points");
		return f64::INFINITY;
	};

	let mut prev_error = f64::INFINITY;
	// Iterate.
	for _ in 0..n_steps {
		// Calculate translation.
		let M2 = F.iter().zip(p.iter())
			.map(|(F_j, p_j)| (F_j - I3) * *R * p_j)
			.sum::<Vector3<f64>>() / n_points;
		*t = M1_inv * M2;

		// Calculate rotation.
		let q = F.iter().zip(p.iter())
			.map(|(F_j, p_j)| F_j * (*R * p_j + *t))
			.collect::<Vec<_>>();
		let q_mean = q.iter().sum::<Vector3<f64>>() / n_points;

		let M3 = q.iter().zip(p_res.iter())
			.map(|(q_j, p_res_j)| (q_j - q_mean) * p_res_j.transpose())
			.sum::<Matrix3<f64>>();

		// M3 is rank 2 for a planar tag, so U·Vᵀ may be a reflection.
		// Singular values are sorted, so flip the axis of the smallest one.
		let svd = M3.svd(true, true);
		if let (Some(u), Some(v_t)) = (svd.u, svd.v_t) {
			let rot = u * v_t;
			*R = if rot.determinant() < 0. {
				u * Matrix3::from_diagonal(&Vector3::new(1., 1., -1.)) * v_t
			} else {
				rot
			};
		}

		prev_error = F.iter().zip(p.iter())
			.map(|(F_j, p_j)| ((I3 - F_j) * (*R * p_j + *t)).norm_squared())
			.sum();
	}

	prev_error
}

fn rot_z(c: f64, s: f64) -> Matrix3<f64> {
	Matrix3::new(
		c, -s, 0.,
		s,  c, 0.,
		0., 0., 1.,
	)
}

/// Given a local minima of the pose error tries to find the other minima.
fn fix_pose_ambiguities(v: &[Vector3<f64>; 4], p: &[Vector3<f64>; 4], t: &Vector3<f64>, R: &Matrix3<f64>) -> Option<Matrix3<f64>> {
	let I3 = Matrix3::<f64>::identity();
	let n_points = v.len() as f64;

	// 1. Find R_t
	let R_t = {
		let R_t_3 = t.normalize();

		let e_x = Vector3::x();
		let R_t_1 = (e_x - R_t_3 * e_x.dot(&R_t_3)).normalize();

		let R_t_2 = R_t_3.cross(&R_t_1);

		Matrix3::from_rows(&[R_t_1.transpose(), R_t_2.transpose(), R_t_3.transpose()])
	};

	// 2. Find R_z
	let R_1_prime = R_t * R;
	let R_z = {
		let mut r31 = R_1_prime[(2, 0)];
		let mut r32 = R_1_prime[(2, 1)];
		let mut hypotenuse = f64::hypot(r31, r32);
		if hypotenuse < 1e-100 {
			r31 = 1.;
			r32 = 0.;
			hypotenuse = 1.;
		}
		rot_z(r31 / hypotenuse, r32 / hypotenuse)
	};

	// 3. Calculate parameters of Eos
	let R_trans = R_1_prime * R_z;
	let R_gamma = {
		let sin_gamma = -R_trans[(0, 1)];
		let cos_gamma = R_trans[(1, 1)];
		rot_z(cos_gamma, sin_gamma)
	};
	let t_initial = {
		let sin_beta = -R_trans[(2, 0)];
		let cos_beta = R_trans[(2, 2)];
		f64::atan2(sin_beta, cos_beta)
	};

	let M1 = Matrix3::new(
		0., 0., 2.,
		0., 0., 0.,
		-2., 0., 0.,
	);
	let M2 = Matrix3::new(
		-1., 0., 0.,
		0., 1., 0.,
		0., 0., -1.,
	);

	let p_trans = p.map(|p_i| R_z.transpose() * p_i);
	let F_trans = v.map(|v_i| calculate_F(&(R_t * v_i)));
	let avg_F_trans = F_trans.iter().sum::<Matrix3<f64>>() / n_points;
	let G = (I3 - avg_F_trans).try_inverse()? / n_points;

	let R_gamma_M1 = R_gamma * M1;
	let R_gamma_M2 = R_gamma * M2;

	let mut b0 = Vector3::zeros();
	let mut b1 = Vector3::zeros();
	let mut b2 = Vector3::zeros();
	for (F_i, p_i) in F_trans.iter().zip(p_trans.iter()) {
		let F_I = F_i - I3;
		b0 += F_I * R_gamma * p_i;
		b1 += F_I * R_gamma_M1 * p_i;
		b2 += F_I * R_gamma_M2 * p_i;
	}
	let b0_ = G * b0;
	let b1_ = G * b1;
	let b2_ = G * b2;

	let mut a0 = 0.;
	let mut a1 = 0.;
	let mut a2 = 0.;
	let mut a3 = 0.;
	let mut a4 = 0.;
	for (F_i, p_i) in F_trans.iter().zip(p_trans.iter()) {
		let tmp0 = I3 - F_i;
		let c0 = tmp0 * (R_gamma * p_i + b0_);
		let c1 = tmp0 * (R_gamma_M1 * p_i + b1_);
		let c2 = tmp0 * (R_gamma_M2 * p_i + b2_);

		a0 += c0.dot(&c0);
		a1 += 2. * c0.dot(&c1);
		a2 += c1.dot(&c1) + 2. * c0.dot(&c2);
		a3 += 2. * c1.dot(&c2);
		a4 += c2.dot(&c2);
	}

	// 4. Solve for minima of Eos.
	let poly = Poly::new(&[
		a1,
		2.*a2 - 4.*a0,
		3.*a3 - 3.*a1,
		4.*a4 - 2.*a2,
		-a3,
	]);

	let minima = poly.solve_approx()
		.into_iter()
		.filter(|&t1| {
			let t2 = t1*t1;
			let t3 = t1*t2;
			let t4 = t1*t3;
			let t5 = t1*t4;
			// Check extrema is a minima.
			a2 - 2.*a0 + (3.*a3 - 6.*a1)*t1 + (6.*a4 - 8.*a2 + 10.*a0)*t2 + (-8.*a3 + 6.*a1)*t3 + (-6.*a4 + 3.*a2)*t4 + a3*t5 >= 0.
		})
		// We only care about finding a second local minima which is
		// qualitatively different than the first.
		.filter(|&t1| (2. * f64::atan(t1) - t_initial).abs() > 0.1)
		.collect::<Vec<_>>();

	// 5. Get poses for minima.
	match minima.as_slice() {
		[] => None,
		[t] => {
			let R_beta = (I3 + M1 * *t + M2 * (t * t)) / (1. + t * t);
			Some(R_t.transpose() * R_gamma * R_beta * R_z.transpose())
		},
		_ => {
			// This can happen if our prior pose estimate was not very good.
			log::debug!("pose ambiguity: more than one new minima found");
			None
		},
	}
}

/// Estimate pose of the tag using the homography method.
pub fn estimate_pose_for_tag_homography(info: &AprilTagDetectionInfo) -> AprilTagPose {
	let scale = info.tagsize / 2.;

	let (R, t) = homography_to_pose(&info.detection.homography, -info.fx, info.fy, info.cx, info.cy);

	// the homography is solved with the camera looking down -z; flip to +z
	let fix = Matrix3::from_diagonal(&Vector3::new(1., -1., -1.));

	AprilTagPose {
		R: fix * R,
		t: fix * (t * scale),
	}
}

/// Estimate tag pose using orthogonal iteration.
///
/// `solution2` is the other local minimum of the object-space error, if
/// there is one.
pub fn estimate_tag_pose_orthogonal_iteration(info: &AprilTagDetectionInfo, n_iters: usize) -> OrthogonalIterationResult {
	let p = object_points(info.tagsize);
	let v = image_points(info);

	let AprilTagPose { mut R, mut t } = estimate_pose_for_tag_homography(info);
	let err1 = orthogonal_iteration(&v, &p, &mut t, &mut R, n_iters);

	let solution2 = fix_pose_ambiguities(&v, &p, &t, &R)
		.map(|mut R2| {
			let mut t2 = Vector3::zeros();
			let err2 = orthogonal_iteration(&v, &p, &mut t2, &mut R2, n_iters);
			PoseWithError {
				pose: AprilTagPose { R: R2, t: t2 },
				error: err2,
			}
		});

	OrthogonalIterationResult {
		solution1: PoseWithError {
			pose: AprilTagPose { R, t },
			error: err1,
		},
		solution2,
	}
}

/// Estimate tag pose.
///
/// Picks the better of the two orthogonal-iteration minima.
pub fn estimate_tag_pose(info: &AprilTagDetectionInfo) -> PoseWithError {
	let OrthogonalIterationResult {
		solution1,
		solution2
	} = estimate_tag_pose_orthogonal_iteration(info, 50);

	match solution2 {
		Some(solution2) if solution2.error < solution1.error => solution2,
		_ => solution1,
	}
}

#[cfg(test)]
mod test {
	use float_cmp::assert_approx_eq;
	use nalgebra::{Matrix3, Vector3};

	use crate::{families::AprilTagFamily, util::math::{Mat33, Vec2}, AprilTagDetection};

	use super::{
		estimate_pose_for_tag_homography, estimate_tag_pose, estimate_tag_pose_solve_square, object_points,
		AprilTagDetectionInfo,
	};

	const F: f64 = 500.;
	const CX: f64 = 320.;
	const CY: f64 = 240.;

	/// Detection of a tag with pose `(R, t)`, seen by an ideal camera
	fn project(R: &Matrix3<f64>, t: &Vector3<f64>, tagsize: f64) -> AprilTagDetection {
		let corners = object_points(tagsize).map(|p| {
			let c = R * p + t;
			Vec2::of(F * c.x / c.z + CX, F * c.y / c.z + CY)
		});
		// homography from tag coordinates, through the camera
		let s = tagsize / 2.;
		let k = Matrix3::new(F, 0., CX, 0., F, CY, 0., 0., 1.);
		let m = Matrix3::from_columns(&[R.column(0) * s, R.column(1) * s, *t]);
		let h = k * m;
		let h = Mat33::of([
			h[(0, 0)], h[(0, 1)], h[(0, 2)],
			h[(1, 0)], h[(1, 1)], h[(1, 2)],
			h[(2, 0)], h[(2, 1)], h[(2, 2)],
		]);
		AprilTagDetection {
			family: AprilTagFamily::for_name("tag16h5").unwrap(),
			id: 0,
			hamming: 0,
			decision_margin: 100.,
			homography: h,
			center: h.project(0., 0.),
			corners,
		}
	}

	fn info(det: &AprilTagDetection, tagsize: f64) -> AprilTagDetectionInfo {
		AprilTagDetectionInfo { detection: det, tagsize, fx: F, fy: F, cx: CX, cy: CY }
	}

	fn assert_orthonormal(r: &Matrix3<f64>) {
		let rrt = r * r.transpose();
		for i in 0..3 {
			for j in 0..3 {
				let expected = if i == j { 1. } else { 0. };
				assert_approx_eq!(f64, rrt[(i, j)], expected, epsilon = 1e-6);
			}
		}
		assert_approx_eq!(f64, r.determinant(), 1., epsilon = 1e-6);
	}

	#[test]
	fn homography_pose_fronto_parallel() {
		let det = project(&Matrix3::identity(), &Vector3::new(0., 0., 2.), 0.2);
		let pose = estimate_pose_for_tag_homography(&info(&det, 0.2));
		assert_approx_eq!(f64, pose.t.z, 2., epsilon = 1e-6);
		assert_approx_eq!(f64, pose.R[(0, 0)], 1., epsilon = 1e-6);
		assert_approx_eq!(f64, pose.R[(1, 1)], 1., epsilon = 1e-6);
	}

	#[test]
	fn orthogonal_iteration_recovers_tilt() {
		let r = nalgebra::Rotation3::from_axis_angle(&Vector3::x_axis(), 0.3).into_inner();
		let t = Vector3::new(0.1, -0.05, 1.5);
		let det = project(&r, &t, 0.16);
		let pose = estimate_tag_pose(&info(&det, 0.16));
		assert_orthonormal(&pose.pose.R);
		assert!((pose.pose.t - t).norm() < 1e-3, "{:?}", pose.pose.t);
		assert!(pose.error < 1e-6);
	}

	#[test]
	fn tilted_poses_are_proper_rotations() {
		let poses = [
			((0.3, -0.4, 0.2), Vector3::new(0., 0., 0.45)),
			((-0.5, 0.25, 1.1), Vector3::new(0.03, -0.02, 0.6)),
			((0.6, 0.5, -2.4), Vector3::new(-0.05, 0.04, 0.8)),
			((0.1, -0.7, 0.4), Vector3::new(0.02, 0.01, 0.5)),
		];
		for ((roll, pitch, yaw), t) in poses {
			let r = nalgebra::Rotation3::from_euler_angles(roll, pitch, yaw).into_inner();
			let det = project(&r, &t, 0.1);
			let pose = estimate_tag_pose(&info(&det, 0.1));
			assert_orthonormal(&pose.pose.R);
			assert!((pose.pose.R - r).abs().max() < 1e-3, "{roll} {pitch} {yaw}: {}", pose.pose.R);
			assert!((pose.pose.t - t).norm() < 1e-3, "{:?}", pose.pose.t);
		}
	}

	#[test]
	fn solve_square_fronto_parallel() {
		let det = project(&Matrix3::identity(), &Vector3::new(0.05, 0.02, 1.), 0.1);
		let pose = estimate_tag_pose_solve_square(&info(&det, 0.1));
		assert!(pose.error < 1e-12);
		assert_orthonormal(&pose.pose.R);
		assert_approx_eq!(f64, pose.pose.t.z, 1., epsilon = 1e-3);
		assert_approx_eq!(f64, pose.pose.t.x, 0.05, epsilon = 1e-3);
		assert_approx_eq!(f64, pose.pose.R[(2, 2)], 1., epsilon = 1e-6);
	}
}
