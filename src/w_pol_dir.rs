use std::f64::consts::PI;

use crate::angular_momentum::factorial_ratio;
use crate::coefficients::{AlphavCoefficient, AvCoefficient};
use crate::correlation::{CascadeStep, GammaGammaCorrelation};
use crate::error::Result;
use crate::legendre::associated_legendre_p2;
use crate::state::State;
use crate::transition::EMCharacter;
use crate::w_dir_dir::WDirDir;

/// Polarization-direction correlation: the linear polarization of the first
/// photon is known.
///
/// ```text
/// W(theta, phi) = W_dir_dir(theta)
///     + s cos(2 phi) N sum_{nu >= 2} alpha_nu(first) [prod U_nu] A_nu(last) P_nu^2(cos theta)
/// ```
///
/// phi is measured from the polarization plane of the first photon.
/// s = -1 if the secondary multipole of the first transition is magnetic and
/// +1 otherwise. For a pure transition this means s = +1 for a magnetic and
/// s = -1 for an electric primary multipole.
#[derive(Debug, Clone)]
pub struct WPolDir {
    w_dir_dir: WDirDir,
    polarization_sign: f64,
    /// Index i holds the coefficient of P_{2(i+1)}^2.
    expansion_coefficients: Vec<f64>,
    alphav_coefficients: Vec<AlphavCoefficient>,
    av_coefficients: Vec<AvCoefficient>,
}

// max_theta |P_nu^2(cos theta)| <= 4 pi^(-3/4) sqrt((nu + 2)! / (nu - 2)!)
fn associated_legendre_upper_limit(nu: usize) -> f64 {
    4.0 * PI.powf(-0.75) * factorial_ratio(nu + 2, nu - 2).sqrt()
}

impl WPolDir {
    pub fn new(initial_state: &State, cascade_steps: &[CascadeStep]) -> Result<Self> {
        let w_dir_dir = WDirDir::new(initial_state, cascade_steps)?;
        let n = cascade_steps.len();
        let (first_transition, first_state) = &cascade_steps[0];
        let (last_transition, last_state) = &cascade_steps[n - 1];
        let before_last_state = &cascade_steps[n - 2].1;

        let polarization_sign = if first_transition.em_charp() == EMCharacter::Magnetic {
            -1.0
        } else {
            1.0
        };

        let uv_products = w_dir_dir.uv_coefficient_products().to_vec();
        let mut alphav_coefficients = Vec::new();
        let mut av_coefficients = Vec::new();
        let mut expansion_coefficients = Vec::new();

        for two_nu in (4..=w_dir_dir.two_nu_max()).step_by(4) {
            let alphav = AlphavCoefficient::new(
                two_nu,
                first_transition.two_l(),
                first_transition.two_lp(),
                initial_state.two_j(),
                first_state.two_j(),
            )?;
            let av = AvCoefficient::new(
                two_nu,
                last_transition.two_l(),
                last_transition.two_lp(),
                last_state.two_j(),
                before_last_state.two_j(),
            );
            let uv_product = uv_products.get((two_nu / 4) as usize).copied().unwrap_or(1.0);
            expansion_coefficients
                .push(alphav.eval(first_transition.delta()) * uv_product * av.eval(last_transition.delta()));
            alphav_coefficients.push(alphav);
            av_coefficients.push(av);
        }

        Ok(Self {
            w_dir_dir,
            polarization_sign,
            expansion_coefficients,
            alphav_coefficients,
            av_coefficients,
        })
    }

    /// The direction-direction part of the correlation.
    pub fn w_dir_dir(&self) -> &WDirDir {
        &self.w_dir_dir
    }

    pub fn polarization_sign(&self) -> f64 {
        self.polarization_sign
    }

    /// Coefficients of P_nu^2 for nu = 2, 4, ..., without normalization and sign.
    pub fn expansion_coefficients(&self) -> &[f64] {
        &self.expansion_coefficients
    }

    pub fn alphav_coefficients(&self) -> &[AlphavCoefficient] {
        &self.alphav_coefficients
    }

    pub fn av_coefficients(&self) -> &[AvCoefficient] {
        &self.av_coefficients
    }
}

impl GammaGammaCorrelation for WPolDir {
    fn eval(&self, theta: f64, phi: f64) -> f64 {
        let cos_theta = theta.cos();
        let sum: f64 = self
            .expansion_coefficients
            .iter()
            .enumerate()
            .map(|(i, coefficient)| coefficient * associated_legendre_p2(2 * (i + 1), cos_theta))
            .sum();
        self.w_dir_dir.eval_theta(theta)
            + self.polarization_sign * (2.0 * phi).cos() * sum * self.w_dir_dir.normalization_factor()
    }

    fn upper_limit(&self) -> f64 {
        let polarization_part: f64 = self
            .expansion_coefficients
            .iter()
            .enumerate()
            .map(|(i, coefficient)| coefficient.abs() * associated_legendre_upper_limit(2 * (i + 1)))
            .sum();
        self.w_dir_dir.upper_limit() + polarization_part * self.w_dir_dir.normalization_factor()
    }

    fn two_nu_max(&self) -> i32 {
        self.w_dir_dir.two_nu_max()
    }

    fn normalization_factor(&self) -> f64 {
        self.w_dir_dir.normalization_factor()
    }
}
