use crate::angular_correlation::AngularCorrelation;

/// Sign convention of the analyzing power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convention {
    /// A(pi/2) = +1 for 0+ -> 1+ -> 0+ and -1 for 0+ -> 1- -> 0+.
    #[default]
    Natural,
    /// Kneissl, Pitz and Zilges, Prog. Part. Nucl. Phys. 37, 349 (1996).
    Kpz,
}

impl Convention {
    pub fn sign(self) -> f64 {
        match self {
            Convention::Natural => 1.0,
            Convention::Kpz => -1.0,
        }
    }
}

/// Relative difference of W in and perpendicular to the polarization plane
/// at a fixed polar angle:
///
/// ```text
/// A(theta) = c (W(theta, 0) - W(theta, pi/2)) / (W(theta, 0) + W(theta, pi/2))
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzingPower {
    angular_correlation: AngularCorrelation,
    convention: Convention,
}

impl AnalyzingPower {
    pub fn new(angular_correlation: AngularCorrelation, convention: Convention) -> Self {
        Self {
            angular_correlation,
            convention,
        }
    }

    pub fn eval(&self, theta: f64) -> f64 {
        let w_parallel = self.angular_correlation.eval(theta, 0.0);
        let w_perpendicular = self.angular_correlation.eval(theta, 0.5 * std::f64::consts::PI);
        self.convention.sign() * (w_parallel - w_perpendicular) / (w_parallel + w_perpendicular)
    }

    pub fn angular_correlation(&self) -> &AngularCorrelation {
        &self.angular_correlation
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }
}
