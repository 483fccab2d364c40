use crate::angular_momentum::wigner_6j;

/// Deorientation coefficient U_nu of an unobserved intermediate transition
/// j -> j'.
///
/// ```text
/// U_nu(delta) = phi(nu, j, L, j') + delta^2 phi(nu, j, L', j')
/// phi(nu, j, L, j') = (-1)^(j + j' + L) sqrt((2j' + 1)(2j + 1)) { j nu j; j' L j' }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvCoefficient {
    pub two_nu: i32,
    pub two_j: i32,
    pub two_l: i32,
    pub two_lp: i32,
    pub delta: f64,
    pub two_jp: i32,
    value_l: f64,
    value_lp: f64,
}

fn phase_norm_6j(two_nu: i32, two_j: i32, two_l: i32, two_jp: i32) -> f64 {
    let sign = if ((two_j + two_jp + two_l) / 2) % 2 == 0 {
        1.0
    } else {
        -1.0
    };
    sign * (f64::from(two_jp + 1) * f64::from(two_j + 1)).sqrt() * wigner_6j(two_j, two_nu, two_j, two_jp, two_l, two_jp)
}

impl UvCoefficient {
    /// Pure multipole transition.
    pub fn new(two_nu: i32, two_j: i32, two_l: i32, two_jp: i32) -> Self {
        Self::mixed(two_nu, two_j, two_l, two_l + 2, 0.0, two_jp)
    }

    pub fn mixed(two_nu: i32, two_j: i32, two_l: i32, two_lp: i32, delta: f64, two_jp: i32) -> Self {
        let value_l = phase_norm_6j(two_nu, two_j, two_l, two_jp);
        // The secondary term is skipped for a pure transition.
        let value_lp = if delta != 0.0 {
            delta * delta * phase_norm_6j(two_nu, two_j, two_lp, two_jp)
        } else {
            0.0
        };
        Self {
            two_nu,
            two_j,
            two_l,
            two_lp,
            delta,
            two_jp,
            value_l,
            value_lp,
        }
    }

    pub fn value(&self) -> f64 {
        self.value_l + self.value_lp
    }
}
