use super::f_coefficient::FCoefficient;

/// A_nu(delta) = F(L, L) + 2 delta F(L, L') + delta^2 F(L', L'),
/// with all three F coefficients evaluated for the same nu, j_n and j.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvCoefficient {
    pub two_nu: i32,
    pub two_l: i32,
    pub two_lp: i32,
    pub two_jn: i32,
    pub two_j: i32,
    constant: FCoefficient,
    linear: FCoefficient,
    quadratic: FCoefficient,
}

impl AvCoefficient {
    pub fn new(two_nu: i32, two_l: i32, two_lp: i32, two_jn: i32, two_j: i32) -> Self {
        Self {
            two_nu,
            two_l,
            two_lp,
            two_jn,
            two_j,
            constant: FCoefficient::new(two_nu, two_l, two_l, two_jn, two_j),
            linear: FCoefficient::new(two_nu, two_l, two_lp, two_jn, two_j),
            quadratic: FCoefficient::new(two_nu, two_lp, two_lp, two_jn, two_j),
        }
    }

    pub fn eval(&self, delta: f64) -> f64 {
        self.constant.value() + 2.0 * delta * self.linear.value() + delta * delta * self.quadratic.value()
    }

    /// The three F coefficients in order of rising power of delta.
    pub fn f_coefficients(&self) -> [FCoefficient; 3] {
        [self.constant, self.linear, self.quadratic]
    }
}
