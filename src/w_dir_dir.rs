use crate::angular_momentum::triangle;
use crate::coefficients::{AvCoefficient, UvCoefficient};
use crate::correlation::{CascadeStep, GammaGammaCorrelation};
use crate::error::{AngCorrError, Result};
use crate::legendre::legendre_p;
use crate::state::State;
use crate::transition::Transition;

/// Direction-direction correlation of the first and the last photon of a
/// cascade:
///
/// ```text
/// W(theta) = N sum_{nu even} A_nu(first) [prod U_nu(unobserved)] A_nu(last) P_nu(cos theta)
/// ```
///
/// Transitions between the first and the last one are unobserved and enter
/// through their U_nu coefficients. All coefficients are computed once on
/// construction.
#[derive(Debug, Clone)]
pub struct WDirDir {
    /// Doubled maximum expansion order.
    two_nu_max: i32,
    normalization_factor: f64,
    /// Index i holds the coefficient of P_{2i}.
    expansion_coefficients: Vec<f64>,
    uv_coefficient_products: Vec<f64>,
    av_coefficients_excitation: Vec<AvCoefficient>,
    av_coefficients_decay: Vec<AvCoefficient>,
    uv_coefficients: Vec<Vec<UvCoefficient>>,
}

// Total intensity of a transition, counting only multipoles that can connect
// the two states: [L allowed] + delta^2 [L' allowed].
fn multipole_weight(initial: &State, transition: &Transition, fin: &State) -> f64 {
    let allowed = |two_l: i32| if triangle(initial.two_j(), fin.two_j(), two_l) { 1.0 } else { 0.0 };
    allowed(transition.two_l()) + transition.delta() * transition.delta() * allowed(transition.two_lp())
}

impl WDirDir {
    /// The cascade is taken as given; selection rules are checked by
    /// `AngularCorrelation`.
    pub fn new(initial_state: &State, cascade_steps: &[CascadeStep]) -> Result<Self> {
        let n = cascade_steps.len();
        if n < 2 {
            return Err(AngCorrError::TooShortCascade(n));
        }
        let (first_transition, first_state) = &cascade_steps[0];
        let (last_transition, last_state) = &cascade_steps[n - 1];
        let before_last_state = &cascade_steps[n - 2].1;

        let two_nu_max = Self::calculate_two_nu_max(cascade_steps);
        let normalization_factor: f64 = std::iter::once(initial_state)
            .chain(cascade_steps.iter().map(|(_, state)| state))
            .zip(cascade_steps.iter())
            .map(|(previous, (transition, state))| 1.0 / multipole_weight(previous, transition, state))
            .product();

        let mut av_coefficients_excitation = Vec::new();
        let mut av_coefficients_decay = Vec::new();
        let mut uv_coefficients = Vec::new();
        let mut uv_coefficient_products = Vec::new();
        let mut expansion_coefficients = Vec::new();

        for two_nu in (0..=two_nu_max).step_by(4) {
            let excitation = AvCoefficient::new(
                two_nu,
                first_transition.two_l(),
                first_transition.two_lp(),
                initial_state.two_j(),
                first_state.two_j(),
            );
            let decay = AvCoefficient::new(
                two_nu,
                last_transition.two_l(),
                last_transition.two_lp(),
                last_state.two_j(),
                before_last_state.two_j(),
            );

            let uv_for_nu: Vec<UvCoefficient> = (1..n - 1)
                .map(|i| {
                    let (transition, state) = &cascade_steps[i];
                    UvCoefficient::mixed(
                        two_nu,
                        cascade_steps[i - 1].1.two_j(),
                        transition.two_l(),
                        transition.two_lp(),
                        transition.delta(),
                        state.two_j(),
                    )
                })
                .collect();
            let uv_product: f64 = uv_for_nu.iter().map(UvCoefficient::value).product();

            expansion_coefficients.push(
                excitation.eval(first_transition.delta()) * uv_product * decay.eval(last_transition.delta()),
            );
            av_coefficients_excitation.push(excitation);
            av_coefficients_decay.push(decay);
            uv_coefficients.push(uv_for_nu);
            uv_coefficient_products.push(uv_product);
        }

        Ok(Self {
            two_nu_max,
            normalization_factor,
            expansion_coefficients,
            uv_coefficient_products,
            av_coefficients_excitation,
            av_coefficients_decay,
            uv_coefficients,
        })
    }

    // nu is bounded by the spins of the oriented states, by the multipoles
    // of the observed transitions and by every unobserved intermediate spin.
    fn calculate_two_nu_max(cascade_steps: &[CascadeStep]) -> i32 {
        let n = cascade_steps.len();
        let (first_transition, first_state) = &cascade_steps[0];
        let last_transition = &cascade_steps[n - 1].0;
        let before_last_state = &cascade_steps[n - 2].1;

        let mut nu_max = first_state
            .two_j()
            .min(before_last_state.two_j())
            .min(
                first_transition
                    .two_l()
                    .max(first_transition.two_lp())
                    .min(last_transition.two_l().max(last_transition.two_lp())),
            );
        for (_, state) in &cascade_steps[1..n - 1] {
            nu_max = nu_max.min(state.two_j());
        }
        2 * nu_max
    }

    /// W as a function of the polar angle alone.
    pub fn eval_theta(&self, theta: f64) -> f64 {
        let cos_theta = theta.cos();
        let sum: f64 = self
            .expansion_coefficients
            .iter()
            .enumerate()
            .map(|(i, coefficient)| coefficient * legendre_p(2 * i, cos_theta))
            .sum();
        sum * self.normalization_factor
    }

    /// Coefficients a_nu of P_nu, without the normalization factor.
    pub fn expansion_coefficients(&self) -> &[f64] {
        &self.expansion_coefficients
    }

    /// prod U_nu over the unobserved transitions, indexed like the expansion
    /// coefficients. All ones for a two-step cascade.
    pub fn uv_coefficient_products(&self) -> &[f64] {
        &self.uv_coefficient_products
    }

    pub fn av_coefficients_excitation(&self) -> &[AvCoefficient] {
        &self.av_coefficients_excitation
    }

    pub fn av_coefficients_decay(&self) -> &[AvCoefficient] {
        &self.av_coefficients_decay
    }

    pub fn uv_coefficients(&self) -> &[Vec<UvCoefficient>] {
        &self.uv_coefficients
    }
}

impl GammaGammaCorrelation for WDirDir {
    fn eval(&self, theta: f64, _phi: f64) -> f64 {
        self.eval_theta(theta)
    }

    fn upper_limit(&self) -> f64 {
        // |P_nu(x)| <= 1 on [-1, 1]
        self.normalization_factor * self.expansion_coefficients.iter().map(|c| c.abs()).sum::<f64>()
    }

    fn two_nu_max(&self) -> i32 {
        self.two_nu_max
    }

    fn normalization_factor(&self) -> f64 {
        self.normalization_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(two_j: i32) -> State {
        State::new(two_j).unwrap()
    }

    #[test]
    fn test_0_2_0() {
        let w = WDirDir::new(
            &state(0),
            &[(Transition::quadrupole(0.0), state(4)), (Transition::quadrupole(0.0), state(0))],
        )
        .unwrap();
        for theta in [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0] {
            let c: f64 = f64::cos(theta);
            let expected = 1.25 - 3.75 * c.powi(2) + 5.0 * c.powi(4);
            assert!((w.eval_theta(theta) - expected).abs() < 1e-7);
        }
        assert_eq!(w.two_nu_max(), 8);
        assert_eq!(w.expansion_coefficients().len(), 3);
    }

    #[test]
    fn test_phi_is_ignored() {
        let w = WDirDir::new(
            &state(0),
            &[(Transition::dipole(0.0), state(2)), (Transition::dipole(0.0), state(0))],
        )
        .unwrap();
        assert_eq!(w.eval(0.7, 0.0), w.eval(0.7, 2.1));
        // 1 + cos^2 theta, normalized: 0.75 (1 + cos^2 theta)
        let c: f64 = f64::cos(0.7);
        assert!((w.eval_theta(0.7) - 0.75 * (1.0 + c * c)).abs() < 1e-12);
    }

    #[test]
    fn test_normalization_factor() {
        let w = WDirDir::new(
            &state(0),
            &[(Transition::dipole(0.0), state(2)), (Transition::dipole(2.0), state(2))],
        )
        .unwrap();
        assert!((w.normalization_factor() - 0.2).abs() < 1e-15);
    }

    #[test]
    fn test_normalization_ignores_forbidden_multipole() {
        // 1 -> 0 cannot proceed by a quadrupole, so delta = 0.5 on the last
        // transition changes neither the shape nor the total intensity.
        let pure = WDirDir::new(
            &state(0),
            &[(Transition::dipole(0.0), state(2)), (Transition::dipole(0.0), state(0))],
        )
        .unwrap();
        let mixed = WDirDir::new(
            &state(0),
            &[(Transition::dipole(0.0), state(2)), (Transition::dipole(0.5), state(0))],
        )
        .unwrap();
        assert_eq!(mixed.normalization_factor(), 1.0);
        for theta in [0.0, 0.4, 1.2, 2.0, 3.1] {
            assert!((mixed.eval_theta(theta) - pure.eval_theta(theta)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_isotropic_for_spin_half_intermediate() {
        // A spin-1/2 state cannot be aligned: only nu = 0 survives.
        let w = WDirDir::new(
            &state(3),
            &[(Transition::dipole(0.0), state(1)), (Transition::dipole(0.0), state(3))],
        )
        .unwrap();
        assert_eq!(w.two_nu_max(), 2);
        assert!((w.eval_theta(0.3) - 1.0).abs() < 1e-12);
        assert!((w.upper_limit() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            WDirDir::new(&state(0), &[(Transition::dipole(0.0), state(2))]),
            Err(AngCorrError::TooShortCascade(1))
        ));
    }
}
