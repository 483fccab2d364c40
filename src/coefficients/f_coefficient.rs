use crate::angular_momentum::{cg_nonzero, racah_nonzero, wigner_3j, wigner_6j};

/// F coefficient F_nu(L, L', j1, j) of the angular-correlation expansion.
///
/// ```text
/// F_nu(L, L', j1, j) = (-1)^(j1 + j - 1) sqrt((2L+1)(2L'+1)(2j+1)(2nu+1))
///                      ( L  L' nu )  { j  j  nu }
///                      ( 1 -1  0  )  { L' L  j1 }
/// ```
///
/// j1 is the spin of the state on the far side of the transition, j the spin
/// of the state that takes part in the correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FCoefficient {
    pub two_nu: i32,
    pub two_l: i32,
    pub two_lp: i32,
    pub two_j1: i32,
    pub two_j: i32,
    value: f64,
}

impl FCoefficient {
    pub fn new(two_nu: i32, two_l: i32, two_lp: i32, two_j1: i32, two_j: i32) -> Self {
        let wigner3j = wigner_3j(two_l, two_lp, two_nu, 2, -2, 0);
        let value = if wigner3j == 0.0 {
            0.0
        } else {
            let wigner6j = wigner_6j(two_j, two_j, two_nu, two_lp, two_l, two_j1);
            if wigner6j == 0.0 {
                0.0
            } else {
                let sign = if ((two_j1 + two_j) / 2 - 1).rem_euclid(2) == 0 {
                    1.0
                } else {
                    -1.0
                };
                sign * [two_l, two_lp, two_j, two_nu].iter().map(|&x| f64::from(x + 1)).product::<f64>().sqrt()
                    * wigner3j
                    * wigner6j
            }
        };
        Self {
            two_nu,
            two_l,
            two_lp,
            two_j1,
            two_j,
            value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Selection rules of both Wigner symbols.
    ///
    /// `false` guarantees a vanishing coefficient. `true` can still meet an
    /// accidental zero of one of the symbols.
    pub fn is_nonzero(two_nu: i32, two_l: i32, two_lp: i32, two_j1: i32, two_j: i32) -> bool {
        cg_nonzero(two_l, two_lp, two_nu, 2, -2, 0)
            && racah_nonzero(two_j, two_j, two_nu, two_lp, two_l, two_j1)
    }
}
