use crate::apriltag_math::mat33_sym_solve;

/// Regresses a model of the form:
/// intensity(x,y) = C0*x + C1*y + CC2
/// The J matrix is the:
///    J = [ x1 y1 1 ]
///        [ x2 y2 1 ]
///        [ ...     ]
///  The A matrix is J'J
#[derive(Default)]
pub(super) struct Graymodel {
	a: [[f64; 3]; 3],
	b: [f64; 3],
}

impl Graymodel {
	pub(super) fn new() -> Self {
		Self::default()
	}

	pub(super) fn add(&mut self, x: f64, y: f64, gray: f64) {
		// update upper right entries of A = J'J
		self.a[0][0] += x * x;
		self.a[0][1] += x * y;
		self.a[0][2] += x;
		self.a[1][1] += y * y;
		self.a[1][2] += y;
		self.a[2][2] += 1.;

		// update B = J'gray
		self.b[0] += x * gray;
		self.b[1] += y * gray;
		self.b[2] += gray;
	}

	pub(super) fn solve(&self) -> SolvedGraymodel {
		SolvedGraymodel {
			c: mat33_sym_solve(&self.a, &self.b),
		}
	}
}

/// Fitted planar intensity model
#[derive(Clone, Copy, Debug)]
pub(super) struct SolvedGraymodel {
	c: [f64; 3],
}

impl SolvedGraymodel {
	#[inline]
	pub(super) fn interpolate(&self, x: f64, y: f64) -> f64 {
		self.c[0] * x + self.c[1] * y + self.c[2]
	}
}

#[cfg(test)]
mod test {
	use float_cmp::assert_approx_eq;

	use super::Graymodel;

	#[test]
	fn recovers_plane() {
		let mut model = Graymodel::new();
		for i in 0..6 {
			for j in 0..6 {
				let x = i as f64 / 3. - 1.;
				let y = j as f64 / 3. - 1.;
				model.add(x, y, 20. * x - 8. * y + 100.);
			}
		}
		let model = model.solve();
		assert_approx_eq!(f64, model.interpolate(0., 0.), 100., epsilon = 1e-6);
		assert_approx_eq!(f64, model.interpolate(1., 0.5), 116., epsilon = 1e-6);
	}
}
