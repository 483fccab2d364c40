// Common interface of the two correlation flavours.

use crate::state::State;
use crate::transition::Transition;
use crate::w_dir_dir::WDirDir;
use crate::w_pol_dir::WPolDir;

/// One step of a cascade: the transition and the state it populates.
pub type CascadeStep = (Transition, State);

/// A two-photon angular correlation W(theta, phi), normalized to 4 pi on the
/// unit sphere.
pub trait GammaGammaCorrelation {
    /// Value of W for a photon emitted in direction (theta, phi).
    fn eval(&self, theta: f64, phi: f64) -> f64;

    /// An upper bound of W on the whole sphere.
    fn upper_limit(&self) -> f64;

    /// Largest doubled expansion order 2nu that contributes.
    fn two_nu_max(&self) -> i32;

    /// Product of 1/(1 + delta^2) over all transitions.
    fn normalization_factor(&self) -> f64;
}

/// The concrete correlation behind an `AngularCorrelation`.
#[derive(Debug, Clone)]
pub enum Correlation {
    /// No polarization information: depends on theta only.
    DirDir(WDirDir),
    /// Linear polarization of the first photon is known.
    PolDir(WPolDir),
}

impl GammaGammaCorrelation for Correlation {
    fn eval(&self, theta: f64, phi: f64) -> f64 {
        match self {
            Correlation::DirDir(w) => w.eval(theta, phi),
            Correlation::PolDir(w) => w.eval(theta, phi),
        }
    }

    fn upper_limit(&self) -> f64 {
        match self {
            Correlation::DirDir(w) => w.upper_limit(),
            Correlation::PolDir(w) => w.upper_limit(),
        }
    }

    fn two_nu_max(&self) -> i32 {
        match self {
            Correlation::DirDir(w) => w.two_nu_max(),
            Correlation::PolDir(w) => w.two_nu_max(),
        }
    }

    fn normalization_factor(&self) -> f64 {
        match self {
            Correlation::DirDir(w) => w.normalization_factor(),
            Correlation::PolDir(w) => w.normalization_factor(),
        }
    }
}
