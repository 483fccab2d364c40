use crate::angular_momentum::{factorial_ratio, triangle, wigner_3j};
use crate::error::{AngCorrError, Result};

/// Polarization coefficient kappa_nu(L, L').
///
/// ```text
/// kappa_nu(L, L') = -sqrt((nu - 2)! / (nu + 2)!) (L L' nu; 1 1 -2) / (L L' nu; 1 -1 0)
/// ```
///
/// Where L, L' and nu do not couple, the denominator vanishes and the
/// coefficient is set to zero. It only ever multiplies an F coefficient
/// with the same vanishing 3j symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KappaCoefficient {
    pub two_nu: i32,
    pub two_l: i32,
    pub two_lp: i32,
    value: f64,
}

impl KappaCoefficient {
    pub fn new(two_nu: i32, two_l: i32, two_lp: i32) -> Result<Self> {
        if two_nu < 4 {
            return Err(AngCorrError::KappaNuTooSmall(two_nu));
        }

        let mut value = 0.0;
        if triangle(two_l, two_lp, two_nu) {
            let denominator = wigner_3j(two_l, two_lp, two_nu, 2, -2, 0);
            if denominator != 0.0 {
                let nu = (two_nu / 2) as usize;
                value = -factorial_ratio(nu - 2, nu + 2).sqrt()
                    * wigner_3j(two_l, two_lp, two_nu, 2, 2, -4)
                    / denominator;
            }
        }

        Ok(Self {
            two_nu,
            two_l,
            two_lp,
            value,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
