use super::f_coefficient::FCoefficient;
use super::kappa_coefficient::KappaCoefficient;
use crate::error::Result;

/// Polarization analogue of A_nu:
///
/// ```text
/// alpha_nu(delta) = -kappa(L, L) F(L, L) + 2 delta kappa(L, L') F(L, L')
///                   + delta^2 kappa(L', L') F(L', L')
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlphavCoefficient {
    pub two_nu: i32,
    pub two_l: i32,
    pub two_lp: i32,
    pub two_jn: i32,
    pub two_j: i32,
    constant: f64,
    linear: f64,
    quadratic: f64,
}

impl AlphavCoefficient {
    /// Fails with `KappaNuTooSmall` for nu < 2.
    pub fn new(two_nu: i32, two_l: i32, two_lp: i32, two_jn: i32, two_j: i32) -> Result<Self> {
        let kappa_ll = KappaCoefficient::new(two_nu, two_l, two_l)?;
        let kappa_llp = KappaCoefficient::new(two_nu, two_l, two_lp)?;
        let kappa_lplp = KappaCoefficient::new(two_nu, two_lp, two_lp)?;

        let f_ll = FCoefficient::new(two_nu, two_l, two_l, two_jn, two_j);
        let f_llp = FCoefficient::new(two_nu, two_l, two_lp, two_jn, two_j);
        let f_lplp = FCoefficient::new(two_nu, two_lp, two_lp, two_jn, two_j);

        Ok(Self {
            two_nu,
            two_l,
            two_lp,
            two_jn,
            two_j,
            constant: -kappa_ll.value() * f_ll.value(),
            linear: kappa_llp.value() * f_llp.value(),
            quadratic: kappa_lplp.value() * f_lplp.value(),
        })
    }

    pub fn eval(&self, delta: f64) -> f64 {
        self.constant + 2.0 * delta * self.linear + delta * delta * self.quadratic
    }
}
