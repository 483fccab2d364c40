use tracing::debug;

use crate::angular_momentum::triangle;
use crate::correlation::{CascadeStep, Correlation, GammaGammaCorrelation};
use crate::error::{AngCorrError, Result};
use crate::euler_angle_transform::{rotate_direction_back, EulerAngles};
use crate::state::{Parity, State};
use crate::transition::{EMCharacter, Transition};
use crate::w_dir_dir::WDirDir;
use crate::w_pol_dir::WPolDir;

/// Angular correlation of the first and last photon of a validated cascade.
///
/// If the EM character of the first transition is known, the correlation is
/// sensitive to the linear polarization of the first photon and depends on
/// phi. Otherwise it is a direction-direction correlation.
#[derive(Debug, Clone)]
pub struct AngularCorrelation {
    initial_state: State,
    cascade_steps: Vec<CascadeStep>,
    w: Correlation,
    upper_limit: f64,
}

impl AngularCorrelation {
    pub fn new(initial_state: State, cascade_steps: Vec<CascadeStep>) -> Result<Self> {
        check_cascade(&initial_state, &cascade_steps)?;

        let w = if cascade_steps[0].0.em_char() == EMCharacter::Unknown {
            Correlation::DirDir(WDirDir::new(&initial_state, &cascade_steps)?)
        } else {
            Correlation::PolDir(WPolDir::new(&initial_state, &cascade_steps)?)
        };
        let upper_limit = w.upper_limit();

        debug!(
            "angular correlation {}: {} steps, 2nu_max = {}, normalization = {:.6}, upper limit = {:.6}",
            if matches!(w, Correlation::PolDir(_)) { "pol-dir" } else { "dir-dir" },
            cascade_steps.len(),
            w.two_nu_max(),
            w.normalization_factor(),
            upper_limit
        );

        Ok(Self {
            initial_state,
            cascade_steps,
            w,
            upper_limit,
        })
    }

    /// Build the cascade from states alone, inferring the lowest allowed
    /// multipole for every transition. EM characters are inferred where
    /// both parities are known; all mixing ratios are zero.
    pub fn from_states(initial_state: State, states: Vec<State>) -> Result<Self> {
        if states.len() < 2 {
            return Err(AngCorrError::TooShortCascade(states.len()));
        }
        check_spin_character(&initial_state, states.iter())?;

        let mut cascade_steps = Vec::with_capacity(states.len());
        let mut previous = initial_state;
        for (step, state) in states.into_iter().enumerate() {
            cascade_steps.push((infer_transition(step + 1, &previous, &state)?, state));
            previous = state;
        }
        Self::new(initial_state, cascade_steps)
    }

    pub fn eval(&self, theta: f64, phi: f64) -> f64 {
        self.w.eval(theta, phi)
    }

    /// W for a coordinate system whose orientation relative to the
    /// canonical one is given by `phi_theta_psi`.
    pub fn eval_rotated(&self, theta: f64, phi: f64, phi_theta_psi: EulerAngles) -> f64 {
        let [thetap, phip] = rotate_direction_back([theta, phi], phi_theta_psi);
        self.w.eval(thetap, phip)
    }

    /// Cached upper bound of W on the sphere.
    pub fn upper_limit(&self) -> f64 {
        self.upper_limit
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    pub fn cascade_steps(&self) -> &[CascadeStep] {
        &self.cascade_steps
    }

    pub fn correlation(&self) -> &Correlation {
        &self.w
    }

    pub fn is_polarization_sensitive(&self) -> bool {
        matches!(self.w, Correlation::PolDir(_))
    }
}

impl GammaGammaCorrelation for AngularCorrelation {
    fn eval(&self, theta: f64, phi: f64) -> f64 {
        self.w.eval(theta, phi)
    }

    fn upper_limit(&self) -> f64 {
        self.upper_limit
    }

    fn two_nu_max(&self) -> i32 {
        self.w.two_nu_max()
    }

    fn normalization_factor(&self) -> f64 {
        self.w.normalization_factor()
    }
}

fn check_cascade(initial_state: &State, cascade_steps: &[CascadeStep]) -> Result<()> {
    if cascade_steps.len() < 2 {
        return Err(AngCorrError::TooShortCascade(cascade_steps.len()));
    }
    check_spin_character(initial_state, cascade_steps.iter().map(|(_, state)| state))?;

    let mut previous = initial_state;
    for (i, (transition, state)) in cascade_steps.iter().enumerate() {
        let step = i + 1;
        check_triangle(step, previous, transition, state)?;
        check_em_character(step, previous, transition, state)?;
        previous = state;
    }
    Ok(())
}

// A cascade cannot mix integer and half-integer spins.
fn check_spin_character<'a>(initial_state: &State, states: impl Iterator<Item = &'a State>) -> Result<()> {
    let half_integer = initial_state.is_half_integer();
    for state in states {
        if state.is_half_integer() != half_integer {
            return Err(AngCorrError::InvalidSpin {
                two_j: state.two_j(),
                reason: "integer and half-integer spins mixed in one cascade",
            });
        }
    }
    Ok(())
}

fn check_triangle(step: usize, initial: &State, transition: &Transition, fin: &State) -> Result<()> {
    // The secondary multipole only counts if it carries intensity.
    if triangle(initial.two_j(), fin.two_j(), transition.two_l())
        || (transition.delta() != 0.0 && triangle(initial.two_j(), fin.two_j(), transition.two_lp()))
    {
        return Ok(());
    }
    Err(AngCorrError::TriangleViolation {
        step,
        two_j_initial: initial.two_j(),
        two_j_final: fin.two_j(),
        two_l: transition.two_l(),
        two_lp: transition.two_lp(),
    })
}

/// The EM character of a 2^L multipole that connects parities p0 and p1.
///
/// Without a parity change, even L is electric and odd L magnetic; a parity
/// change swaps the two. Unknown if either parity is unknown.
pub fn em_character_for(p0: Parity, p1: Parity, two_l: i32) -> EMCharacter {
    if !p0.is_known() || !p1.is_known() {
        return EMCharacter::Unknown;
    }
    let l_even = (two_l / 2) % 2 == 0;
    if (p0 != p1) ^ l_even {
        EMCharacter::Electric
    } else {
        EMCharacter::Magnetic
    }
}

fn check_em_character(step: usize, initial: &State, transition: &Transition, fin: &State) -> Result<()> {
    let inconsistency = |reason: String| Err(AngCorrError::ParityEmInconsistency { step, reason });
    let (em, emp) = (transition.em_char(), transition.em_charp());

    if !initial.parity().is_known() || !fin.parity().is_known() {
        if em.is_known() || emp.is_known() {
            return inconsistency("EM character given, but one or both parities are unknown".to_string());
        }
        return Ok(());
    }

    match (em.is_known(), emp.is_known()) {
        (false, false) => return Ok(()),
        (true, true) => {}
        _ => return inconsistency("only one EM character given".to_string()),
    }

    for (character, two_l) in [(em, transition.two_l()), (emp, transition.two_lp())] {
        let expected = em_character_for(initial.parity(), fin.parity(), two_l);
        if character != expected {
            return inconsistency(format!(
                "{:?} character of 2L = {} does not match the parities of {} -> {}",
                character, two_l, initial, fin
            ));
        }
    }
    Ok(())
}

fn infer_transition(step: usize, initial: &State, fin: &State) -> Result<Transition> {
    if initial.two_j() == 0 && fin.two_j() == 0 {
        return Err(AngCorrError::SpinZeroSpinZero { step });
    }
    let two_l = (initial.two_j() - fin.two_j()).abs().max(2);
    let em = em_character_for(initial.parity(), fin.parity(), two_l);
    Transition::with_em(em, two_l, 0.0)
}
