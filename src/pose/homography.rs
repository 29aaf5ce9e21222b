use nalgebra::{Matrix3, Vector3};

use crate::util::math::Mat33;

/// assuming that the projection matrix is:
/// [ fx 0  cx 0 ]
/// [  0 fy cy 0 ]
/// [  0  0  1 0 ]
///
/// And that the homography is equal to the projection matrix times the
/// model matrix, recover the model matrix (returned as rotation and
/// translation). Note that the third column of the model matrix is
/// missing in the expression below, reflecting the fact that the
/// homography assumes all points are at z=0 (i.e., planar) and that the
/// element of z is thus omitted.  (3x1 instead of 4x1).
///
/// [ fx 0  cx 0 ] [ R00  R01  TX ]    [ H00 H01 H02 ]
/// [  0 fy cy 0 ] [ R10  R11  TY ] =  [ H10 H11 H12 ]
/// [  0  0  1 0 ] [ R20  R21  TZ ] =  [ H20 H21 H22 ]
///                [  0    0    1 ]
///
/// fx*R00 + cx*R20 = H00   (note, H only known up to scale; some additional adjustments required; see code.)
/// fx*R01 + cx*R21 = H01
/// fx*TX  + cx*TZ  = H02
/// fy*R10 + cy*R20 = H10
/// fy*R11 + cy*R21 = H11
/// fy*TY  + cy*TZ  = H12
/// R20 = H20
/// R21 = H21
/// TZ  = H22
pub(super) fn homography_to_pose(H: &Mat33, fx: f64, fy: f64, cx: f64, cy: f64) -> (Matrix3<f64>, Vector3<f64>) {
	// Note that every variable that we compute is proportional to the scale factor of H.
	let R20 = H[(2, 0)];
	let R21 = H[(2, 1)];
	let TZ  = H[(2, 2)];
	let R00 = (H[(0, 0)] - cx*R20) / fx;
	let R01 = (H[(0, 1)] - cx*R21) / fx;
	let TX  = (H[(0, 2)] - cx*TZ)  / fx;
	let R10 = (H[(1, 0)] - cy*R20) / fy;
	let R11 = (H[(1, 1)] - cy*R21) / fy;
	let TY  = (H[(1, 2)] - cy*TZ)  / fy;

	let col0 = Vector3::new(R00, R10, R20);
	let col1 = Vector3::new(R01, R11, R21);

	// compute the scale by requiring that the rotation columns are unit length
	// (Use geometric average of the two length vectors we have)
	let s = f64::sqrt(col0.norm() * col1.norm()).recip();
	// get sign of S by requiring the tag to be in front the camera;
	// we assume camera looks in the -Z direction.
	let s = if TZ > 0. { -s } else { s };

	let col0 = col0 * s;
	let col1 = col1 * s;
	let t = Vector3::new(TX, TY, TZ) * s;

	// now recover [R02 R12 R22] by noting that it is the cross product of the other two columns.
	let col2 = col0.cross(&col1);
	let R = Matrix3::from_columns(&[col0, col1, col2]);

	// Polar decomposition makes the rotation matrix "proper", but
	// probably increases the reprojection error.
	let svd = R.svd(true, true);
	let R = match (svd.u, svd.v_t) {
		(Some(u), Some(v_t)) => u * v_t,
		_ => R,
	};

	(R, t)
}
