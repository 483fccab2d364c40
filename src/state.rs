use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AngCorrError, Result};

/// Parity of a nuclear state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Positive,
    Negative,
    #[default]
    Unknown,
}

impl Parity {
    pub fn is_known(self) -> bool {
        self != Parity::Unknown
    }

    /// "+" or "-". An unknown parity has no symbol.
    pub fn symbol(self) -> Result<&'static str> {
        match self {
            Parity::Positive => Ok("+"),
            Parity::Negative => Ok("-"),
            Parity::Unknown => Err(AngCorrError::UnknownParityStringification),
        }
    }
}

// Unknown parity prints as nothing.
impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol().unwrap_or(""))
    }
}

/// A nuclear state: spin (as 2J), parity and excitation energy in MeV.
///
/// States are validated on construction and cannot be changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct State {
    two_j: i32,
    parity: Parity,
    excitation_energy: f64,
}

// Unvalidated mirror of `State` used for deserialization.
#[derive(Deserialize)]
struct RawState {
    two_j: i32,
    #[serde(default)]
    parity: Parity,
    #[serde(default)]
    excitation_energy: f64,
}

impl TryFrom<RawState> for State {
    type Error = AngCorrError;

    fn try_from(raw: RawState) -> Result<Self> {
        State::with_energy(raw.two_j, raw.parity, raw.excitation_energy)
    }
}

impl State {
    /// State with unknown parity at zero excitation energy.
    pub fn new(two_j: i32) -> Result<Self> {
        Self::with_energy(two_j, Parity::Unknown, 0.0)
    }

    pub fn with_parity(two_j: i32, parity: Parity) -> Result<Self> {
        Self::with_energy(two_j, parity, 0.0)
    }

    pub fn with_energy(two_j: i32, parity: Parity, excitation_energy: f64) -> Result<Self> {
        if two_j < 0 {
            return Err(AngCorrError::InvalidSpin {
                two_j,
                reason: "angular momentum must be non-negative",
            });
        }
        if excitation_energy.is_nan() || excitation_energy < 0.0 {
            return Err(AngCorrError::InvalidExcitationEnergy(excitation_energy));
        }
        Ok(Self {
            two_j,
            parity,
            excitation_energy,
        })
    }

    pub fn two_j(&self) -> i32 {
        self.two_j
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    /// Excitation energy in MeV (0 for the ground state).
    pub fn excitation_energy(&self) -> f64 {
        self.excitation_energy
    }

    /// True if J is a half-integer.
    pub fn is_half_integer(&self) -> bool {
        self.two_j % 2 != 0
    }

    /// The spin as it is usually written, "2" or "3/2".
    pub fn spin_string(&self) -> String {
        if self.is_half_integer() {
            format!("{}/2", self.two_j)
        } else {
            format!("{}", self.two_j / 2)
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.spin_string(), self.parity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_validation() {
        assert!(matches!(
            State::new(-1),
            Err(AngCorrError::InvalidSpin { two_j: -1, .. })
        ));
        assert!(matches!(
            State::with_energy(2, Parity::Positive, -1.0),
            Err(AngCorrError::InvalidExcitationEnergy(_))
        ));
        assert!(State::with_energy(2, Parity::Positive, f64::NAN).is_err());

        let state = State::with_energy(3, Parity::Negative, 1.5).unwrap();
        assert_eq!(state.two_j(), 3);
        assert_eq!(state.parity(), Parity::Negative);
        assert_eq!(state.excitation_energy(), 1.5);
        assert!(state.is_half_integer());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(State::with_parity(3, Parity::Positive).unwrap().to_string(), "3/2+");
        assert_eq!(State::with_parity(4, Parity::Negative).unwrap().to_string(), "2-");
        assert_eq!(State::new(0).unwrap().to_string(), "0");
    }

    #[test]
    fn test_unknown_parity_symbol() {
        assert_eq!(Parity::Positive.symbol().unwrap(), "+");
        assert_eq!(Parity::Negative.to_string(), "-");
        assert_eq!(Parity::Unknown.to_string(), "");
        assert!(matches!(
            Parity::Unknown.symbol(),
            Err(AngCorrError::UnknownParityStringification)
        ));
    }

    #[test]
    fn test_state_deserialization_validates() {
        let state: State =
            serde_json::from_str(r#"{"two_j": 2, "parity": "positive"}"#).unwrap();
        assert_eq!(state.two_j(), 2);
        assert_eq!(state.excitation_energy(), 0.0);

        let invalid: std::result::Result<State, _> = serde_json::from_str(r#"{"two_j": -2}"#);
        assert!(invalid.is_err());
    }
}
