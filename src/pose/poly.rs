/// Polynomial (of degree > 0)
pub(super) struct Poly {
    /// Coefficients, lowest order first
    coefs: Vec<f64>,
}

/// Roots larger than this are ignored
const MAX_ROOT: f64 = 1000.;

impl Poly {
    /// Create new polynomial from coefficients, lowest order first
    pub(super) fn new(coefs: &[f64]) -> Self {
        assert!(coefs.len() > 1, "Cannot create polynomial of degree zero");
        Self {
            coefs: coefs.to_vec(),
        }
    }

    /// Get polynomial degree
    fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    /// Evaluates polynomial at x.
    fn eval(&self, x: f64) -> f64 {
        self.coefs
            .iter()
            .rev()
            .fold(0., |acc, coef| acc * x + coef)
    }

    fn derivative(&self) -> Poly {
        let coefs = self.coefs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, coef)| i as f64 * coef)
            .collect();

        Self {
            coefs,
        }
    }

    /// Numerically solve small degree polynomials. It ignores roots larger
    /// than 1000 and only gives small roots approximately.
    ///
    /// Roots are returned in increasing order.
    pub(super) fn solve_approx(&self) -> Vec<f64> {
        let p = &self.coefs;
        if self.degree() == 1 {
            if p[0].abs() > MAX_ROOT * p[1].abs() {
                return Vec::new();
            }
            return vec![-p[0] / p[1]];
        }

        // Calculate roots of derivative.
        let p_der = self.derivative();
        let der_roots = p_der.solve_approx();

        // Go through all possibilities for roots of the polynomial.
        let mut roots = Vec::new();
        for i in 0..=der_roots.len() {
            let min = if i == 0 { -MAX_ROOT } else { der_roots[i - 1] };
            let max = if i == der_roots.len() { MAX_ROOT } else { der_roots[i] };

            let f_min = self.eval(min);
            let f_max = self.eval(max);
            if f_min * f_max < 0. {
                // Zero-crossing in this interval, use a combination of Newton's and bisection.
                let (mut lower, mut upper) = if f_min < f_max {
                    (min, max)
                } else {
                    (max, min)
                };

                let mut root = 0.5 * (lower + upper);
                let mut dx_old = (upper - lower).abs();
                let mut dx = dx_old;
                let mut f = self.eval(root);
                let mut df = p_der.eval(root);

                for _ in 0..100 {
                    if ((f + df * (upper - root)) * (f + df * (lower - root)) > 0.) || ((2. * f).abs() > (dx_old * df).abs()) {
                        dx_old = dx;
                        dx = 0.5 * (upper - lower);
                        root = lower + dx;
                    } else {
                        dx_old = dx;
                        dx = -f / df;
                        root += dx;
                    }

                    if root == upper || root == lower {
                        break;
                    }

                    f = self.eval(root);
                    df = p_der.eval(root);

                    if f > 0. {
                        upper = root;
                    } else {
                        lower = root;
                    }
                }

                roots.push(root);
            } else if f_max == 0. {
                // Double/triple root.
                roots.push(max);
            }
        }

        roots
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::Poly;

    #[test]
    #[should_panic]
    fn disallow_empty() {
        Poly::new(&[]);
    }

    #[test]
    fn eval_2d() {
        let parabola = Poly::new(&[1., 2., 3.,]);
        assert_approx_eq!(f64, parabola.eval(0.), 1.);
        assert_approx_eq!(f64, parabola.eval(1.), 6.);
        assert_approx_eq!(f64, parabola.eval(2.), 17.);
        assert_approx_eq!(f64, parabola.eval(-2.), 9.);
    }

    #[test]
    fn linear_root() {
        let roots = Poly::new(&[4., 2.]).solve_approx();
        assert_eq!(roots, [-2.]);
        // too far away
        assert!(Poly::new(&[1e5, 1.]).solve_approx().is_empty());
    }

    #[test]
    fn quartic_roots() {
        // (x + 3)(x + 1)(x - 0.5)(x - 2)
        let poly = Poly::new(&[3., -3.5, -6., 1.5, 1.]);
        let roots = poly.solve_approx();
        assert_eq!(roots.len(), 4);
        for (root, expected) in roots.iter().zip([-3., -1., 0.5, 2.]) {
            assert_approx_eq!(f64, *root, expected, epsilon = 1e-6);
        }
    }
}
