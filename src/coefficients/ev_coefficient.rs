use super::f_coefficient::FCoefficient;
use crate::angular_momentum::factorial_ratio;
use crate::error::{AngCorrError, Result};
use crate::transition::EMCharacter;

/// Polarization coefficient E_nu(delta) in the form that carries the
/// electric/magnetic sign of each multipole explicitly.
///
/// With sigma = +1 (electric) or -1 (magnetic) and n = nu(nu + 1):
///
/// ```text
/// E_nu(delta) = [ sigma_L  F(L, L)   n 2L(L+1) / (n - 2L(L+1))
///               + 2 delta sigma_L' F(L, L') (L' - L)(L' + L + 1)
///               + delta^2 sigma_L' F(L', L') n 2L'(L'+1) / (n - 2L'(L'+1)) ]
///               (nu - 2)! / (nu + 2)!
/// ```
///
/// E_nu equals sigma_L times alpha_nu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvCoefficient {
    pub two_nu: i32,
    pub em_char: EMCharacter,
    pub two_l: i32,
    pub em_charp: EMCharacter,
    pub two_lp: i32,
    pub two_jn: i32,
    pub two_j: i32,
    constant: f64,
    linear: f64,
    quadratic: f64,
}

fn diagonal_factor(nu: f64, l: f64) -> f64 {
    let nu_term = nu * (nu + 1.0);
    let l_term = 2.0 * l * (l + 1.0);
    let denominator = nu_term - l_term;
    if denominator == 0.0 {
        0.0
    } else {
        nu_term * l_term / denominator
    }
}

impl EvCoefficient {
    pub fn new(
        two_nu: i32,
        em_char: EMCharacter,
        two_l: i32,
        em_charp: EMCharacter,
        two_lp: i32,
        two_jn: i32,
        two_j: i32,
    ) -> Result<Self> {
        if two_nu < 4 {
            return Err(AngCorrError::EvNuTooSmall(two_nu));
        }
        let nu = (two_nu / 2) as usize;
        let prefactor = factorial_ratio(nu - 2, nu + 2);
        let (nu, l, lp) = (nu as f64, (two_l / 2) as f64, (two_lp / 2) as f64);

        let f_ll = FCoefficient::new(two_nu, two_l, two_l, two_jn, two_j).value();
        let f_llp = FCoefficient::new(two_nu, two_l, two_lp, two_jn, two_j).value();
        let f_lplp = FCoefficient::new(two_nu, two_lp, two_lp, two_jn, two_j).value();

        Ok(Self {
            two_nu,
            em_char,
            two_l,
            em_charp,
            two_lp,
            two_jn,
            two_j,
            constant: prefactor * em_char.sign() * f_ll * diagonal_factor(nu, l),
            linear: prefactor * em_charp.sign() * f_llp * (lp - l) * (lp + l + 1.0),
            quadratic: prefactor * em_charp.sign() * f_lplp * diagonal_factor(nu, lp),
        })
    }

    pub fn eval(&self, delta: f64) -> f64 {
        self.constant + 2.0 * delta * self.linear + delta * delta * self.quadratic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::AlphavCoefficient;

    #[test]
    fn test_electric_matches_alphav() {
        let ev = EvCoefficient::new(4, EMCharacter::Electric, 4, EMCharacter::Magnetic, 6, 7, 3).unwrap();
        let alphav = AlphavCoefficient::new(4, 4, 6, 7, 3).unwrap();
        assert!((ev.eval(0.0) - 0.07143).abs() < 1e-4);
        assert!((ev.eval(0.0) - alphav.eval(0.0)).abs() < 1e-4);
    }

    #[test]
    fn test_magnetic_flips_sign() {
        let ev = EvCoefficient::new(4, EMCharacter::Magnetic, 2, EMCharacter::Electric, 4, 3, 3).unwrap();
        let alphav = AlphavCoefficient::new(4, 2, 4, 3, 3).unwrap();
        assert!((ev.eval(1.0) - (0.20000 - 0.25820)).abs() < 1e-4);
        assert!((ev.eval(1.0) + alphav.eval(1.0)).abs() < 1e-4);
    }

    #[test]
    fn test_nu_too_small() {
        assert!(matches!(
            EvCoefficient::new(0, EMCharacter::Electric, 2, EMCharacter::Magnetic, 4, 0, 2),
            Err(AngCorrError::EvNuTooSmall(0))
        ));
    }
}
