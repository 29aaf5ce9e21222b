//! Direct pose solve from the four corners of a square.
//!
//! With `(x, y, z)` the center of the tag and `(a, b, c)`, `(p, q, r)` the
//! vectors from the center to the middle of two adjacent sides:
//!
//! ```text
//!             abc
//!     tag: ---------
//!          |   |   |       abc -> tag +Y
//!          |   ----|pqr    pqr -> tag -X
//!          |  xyz  |       Z points inside
//!          ---------
//! ```
//!
//! the projections of the corners give six linear equations, leaving
//! `x, y, a, b, p, q` as linear functions of `c, r, z`. The remaining two
//! constraints (`abc ⟂ pqr`, `|abc| = |pqr|`) are quadratic.
use nalgebra::{Matrix3, Vector3};

use super::{AprilTagDetectionInfo, AprilTagPose, PoseWithError};

/// Residual below which both constraints count as solved
const THRESHOLD: f64 = 1e-10;
/// Iteration cap for the direct (Newton) phase
const MAX_DIRECT_ITERS: usize = 1000;
/// Iteration cap (total) once we fall back to minimizing the squared residual
const MAX_TOTAL_ITERS: usize = 2000;

/// `a x² + b y² + c x y + d x + e y + f`
#[derive(Clone, Copy, Debug)]
struct Quadratic {
	a: f64,
	b: f64,
	c: f64,
	d: f64,
	e: f64,
	f: f64,
}

impl Quadratic {
	fn eval(&self, x: f64, y: f64) -> f64 {
		self.a*x*x + self.b*y*y + self.c*x*y + self.d*x + self.e*y + self.f
	}

	fn grad(&self, x: f64, y: f64) -> (f64, f64) {
		(
			2.*self.a*x + self.c*y + self.d,
			2.*self.b*y + self.c*x + self.e,
		)
	}

	/// Newton step towards the zero of this quadratic, along its gradient
	fn step(&self, x: f64, y: f64) -> (f64, f64) {
		let (fx, fy) = self.grad(x, y);
		let l = f64::hypot(fx, fy).recip();
		let (dx, dy) = (fx * l, fy * l);
		let df = fx * dx + fy * dy;
		let rate = -self.eval(x, y) / df;
		(rate * dx, rate * dy)
	}
}

/// Find `(x, y)` with `q1(x, y) = q2(x, y) = 0`, starting from `(x0, y0)`.
///
/// Returns the point and the squared residual `q1² + q2²`.
fn solve_double_quadratic(q1: &Quadratic, q2: &Quadratic, x0: f64, y0: f64) -> (f64, f64, f64) {
	let solved = |f1: f64, f2: f64| f1.abs() <= THRESHOLD && f2.abs() <= THRESHOLD;

	let mut x = x0;
	let mut y = y0;
	let mut last = (x, y);
	let mut f1 = q1.eval(x, y);
	let mut f2 = q2.eval(x, y);
	let mut count = 0;

	while !solved(f1, f2) {
		let (sx1, sy1) = q1.step(x, y);
		let (sx2, sy2) = q2.step(x, y);
		let step = (sx1 + sx2, sy1 + sy2);

		if (x + step.0, y + step.1) == last {
			break;
		}
		last = (x, y);
		x += step.0;
		y += step.1;
		f1 = q1.eval(x, y);
		f2 = q2.eval(x, y);

		count += 1;
		if count > MAX_DIRECT_ITERS {
			break;
		}
	}

	if solved(f1, f2) {
		return (x, y, f1*f1 + f2*f2);
	}

	// (x, y) is oscillating; descend on F = F1² + F2² instead
	log::trace!("solve_square: falling back to least squares after {count} iterations");
	let threshold = THRESHOLD * THRESHOLD;
	let mut f = f1*f1 + f2*f2;
	while f > threshold {
		let (f1x, f1y) = q1.grad(x, y);
		let (f2x, f2y) = q2.grad(x, y);
		let fx = 2.*f1*f1x + 2.*f2*f2x;
		let fy = 2.*f1*f1y + 2.*f2*f2y;

		let l = f64::hypot(fx, fy).recip();
		let (dx, dy) = (fx * l, fy * l);
		let df = fx * dx + fy * dy;
		let rate = -f / df;
		x += rate * dx;
		y += rate * dy;

		f1 = q1.eval(x, y);
		f2 = q2.eval(x, y);
		f = f1*f1 + f2*f2;

		count += 1;
		if count > MAX_TOTAL_ITERS {
			break;
		}
	}

	(x, y, f)
}

/// Linear coefficients of a variable in terms of `(c, r, z)`
#[derive(Clone, Copy, Debug)]
struct Linear {
	c: f64,
	r: f64,
	z: f64,
}

impl Linear {
	fn eval(&self, c: f64, r: f64, z: f64) -> f64 {
		self.c * c + self.r * r + self.z * z
	}

	/// Quadratic form of `self * other` (before eliminating `z`)
	fn product(&self, other: &Linear) -> Quadratic {
		Quadratic {
			a: self.c * other.c,
			b: self.r * other.r,
			c: self.c * other.r + self.r * other.c,
			d: self.c * other.z + self.z * other.c,
			e: self.r * other.z + self.z * other.r,
			f: self.z * other.z,
		}
	}
}

impl std::ops::Add for Quadratic {
	type Output = Quadratic;

	fn add(self, rhs: Self) -> Self::Output {
		Quadratic {
			a: self.a + rhs.a,
			b: self.b + rhs.b,
			c: self.c + rhs.c,
			d: self.d + rhs.d,
			e: self.e + rhs.e,
			f: self.f + rhs.f,
		}
	}
}

impl std::ops::Sub for Quadratic {
	type Output = Quadratic;

	fn sub(self, rhs: Self) -> Self::Output {
		Quadratic {
			a: self.a - rhs.a,
			b: self.b - rhs.b,
			c: self.c - rhs.c,
			d: self.d - rhs.d,
			e: self.e - rhs.e,
			f: self.f - rhs.f,
		}
	}
}

/// Solved square: center, and half-side vectors
struct SquareSolution {
	xyz: Vector3<f64>,
	abc: Vector3<f64>,
	pqr: Vector3<f64>,
	error: f64,
}

fn solve_square(info: &AprilTagDetectionInfo) -> SquareSolution {
	let [p1, p2, p3, p4] = info.detection.corners;
	let (u1, v1) = (p1.x(), p1.y());
	let (u2, v2) = (p2.x(), p2.y());
	let (u3, v3) = (p3.x(), p3.y());
	let (u4, v4) = (p4.x(), p4.y());
	let (ku, kv, u0, v0) = (info.fx, info.fy, info.cx, info.cy);

	// solve linear equation for a first guess at c/z and r/z
	let den = u1*v2 - u2*v1 - u1*v4 + u2*v3 - u3*v2 + u4*v1 + u3*v4 - u4*v3;
	let c0 = -(u1*v2 - u2*v1 - u1*v3 + u3*v1 + u2*v4 - u4*v2 - u3*v4 + u4*v3) / den;
	let r0 = -(u1*v3 - u3*v1 - u1*v4 - u2*v3 + u3*v2 + u4*v1 + u2*v4 - u4*v2) / den;

	// a b p q x y, each in terms of c r z
	let ks = [-0.5/ku, -0.5/kv, 0.5/ku, 0.5/kv, -0.5/ku, -0.5/kv];
	let cs = [u3+u2-u0-u0, v3+v2-v0-v0, u2-u1, v2-v1, -u3+u1, -v3+v1];
	let rs = [u3-u2, v3-v2, -u2-u1+u0+u0, -v2-v1+v0+v0, -u3+u1, -v3+v1];
	let zs = [-u3+u2, -v3+v2, u2-u1, v2-v1, u3+u1-u0-u0, v3+v1-v0-v0];
	let lin = |i: usize| Linear { c: -cs[i] * ks[i], r: -rs[i] * ks[i], z: -zs[i] * ks[i] };
	let (a, b, p, q, x, y) = (lin(0), lin(1), lin(2), lin(3), lin(4), lin(5));
	let c = Linear { c: 1., r: 0., z: 0. };
	let r = Linear { c: 0., r: 1., z: 0. };

	// ap + bq + cr == 0
	let q1 = a.product(&p) + b.product(&q) + c.product(&r);
	// a² + b² + c² == p² + q² + r²
	let q3 = a.product(&a) + b.product(&b) + c.product(&c);
	let q4 = p.product(&p) + q.product(&q) + r.product(&r);
	let q2 = q3 - q4;

	// with c = cz * z and r = rz * z, z drops out
	let (cz, rz, error) = solve_double_quadratic(&q1, &q2, c0, r0);

	// |abc|² / z², which must equal (L/2)² / z²
	let abc_sq = q3.a*cz*cz + q3.b*rz*rz + q3.c*cz*rz + q3.d*cz + q3.e*rz + q3.f;
	let half = info.tagsize / 2.;
	let z = f64::sqrt(half * half / abc_sq);
	let c = cz * z;
	let r = rz * z;

	SquareSolution {
		xyz: Vector3::new(x.eval(c, r, z), y.eval(c, r, z), z),
		abc: Vector3::new(a.eval(c, r, z), b.eval(c, r, z), c),
		pqr: Vector3::new(p.eval(c, r, z), q.eval(c, r, z), r),
		error,
	}
}

/// Rotation whose columns are the tag's x, y, and z axes
fn square_rotation(abc: &Vector3<f64>, pqr: &Vector3<f64>) -> Matrix3<f64> {
	let x_axis = (-*pqr).normalize();
	let y_axis = *abc - x_axis * x_axis.dot(abc);
	let y_axis = y_axis.normalize();
	let z_axis = x_axis.cross(&y_axis);
	Matrix3::from_columns(&[x_axis, y_axis, z_axis])
}

/// Estimate tag pose directly from its corners.
///
/// The returned error is the squared residual of the two quadratic
/// constraints. This is a best-effort solve: check the error.
pub fn estimate_tag_pose_solve_square(info: &AprilTagDetectionInfo) -> PoseWithError {
	let SquareSolution { xyz, abc, pqr, error } = solve_square(info);
	PoseWithError {
		pose: AprilTagPose {
			R: square_rotation(&abc, &pqr),
			t: xyz,
		},
		error,
	}
}

#[cfg(test)]
mod test {
	use float_cmp::assert_approx_eq;
	use nalgebra::Vector3;

	use super::{solve_double_quadratic, square_rotation, Quadratic};

	#[test]
	fn intersects_circle_and_line() {
		// x² + y² - 1 = 0, x - y = 0
		let circle = Quadratic { a: 1., b: 1., c: 0., d: 0., e: 0., f: -1. };
		let line = Quadratic { a: 0., b: 0., c: 0., d: 1., e: -1., f: 0. };
		let (x, y, err) = solve_double_quadratic(&circle, &line, 1., 0.2);
		assert!(err < 1e-18);
		assert_approx_eq!(f64, x, f64::sqrt(0.5), epsilon = 1e-8);
		assert_approx_eq!(f64, y, f64::sqrt(0.5), epsilon = 1e-8);
	}

	#[test]
	fn rotation_is_orthonormal() {
		let abc = Vector3::new(0.01, 1., 0.2);
		let pqr = Vector3::new(-1., 0.03, 0.);
		let r = square_rotation(&abc, &pqr);
		let should_be_identity = r * r.transpose();
		for i in 0..3 {
			for j in 0..3 {
				let expected = if i == j { 1. } else { 0. };
				assert_approx_eq!(f64, should_be_identity[(i, j)], expected, epsilon = 1e-12);
			}
		}
		assert_approx_eq!(f64, r.determinant(), 1., epsilon = 1e-12);
	}
}
