use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AngCorrError, Result};

/// Electromagnetic character of a multipole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EMCharacter {
    Electric,
    Magnetic,
    #[default]
    Unknown,
}

impl EMCharacter {
    /// Electric and magnetic swap; unknown stays unknown.
    pub fn alternate(self) -> Self {
        match self {
            EMCharacter::Electric => EMCharacter::Magnetic,
            EMCharacter::Magnetic => EMCharacter::Electric,
            EMCharacter::Unknown => EMCharacter::Unknown,
        }
    }

    pub fn is_known(self) -> bool {
        self != EMCharacter::Unknown
    }

    /// -1 for magnetic radiation, +1 otherwise.
    pub fn sign(self) -> f64 {
        if self == EMCharacter::Magnetic {
            -1.0
        } else {
            1.0
        }
    }

    pub fn symbol(self) -> Result<&'static str> {
        match self {
            EMCharacter::Electric => Ok("E"),
            EMCharacter::Magnetic => Ok("M"),
            EMCharacter::Unknown => Err(AngCorrError::UnknownEmCharacterStringification),
        }
    }
}

impl fmt::Display for EMCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol().unwrap_or(""))
    }
}

/// An electromagnetic transition with a primary multipolarity 2L, a secondary
/// multipolarity 2L' and the mixing ratio delta between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTransition")]
pub struct Transition {
    em_char: EMCharacter,
    two_l: i32,
    em_charp: EMCharacter,
    two_lp: i32,
    delta: f64,
}

// Unvalidated form read from configuration files. Omitted secondary fields
// take the defaults of `Transition::with_em`.
#[derive(Deserialize)]
struct RawTransition {
    #[serde(default)]
    em_char: EMCharacter,
    two_l: i32,
    #[serde(default)]
    em_charp: Option<EMCharacter>,
    #[serde(default)]
    two_lp: Option<i32>,
    #[serde(default)]
    delta: f64,
}

impl TryFrom<RawTransition> for Transition {
    type Error = AngCorrError;

    fn try_from(raw: RawTransition) -> Result<Self> {
        Transition::new(
            raw.em_char,
            raw.two_l,
            raw.em_charp.unwrap_or_else(|| raw.em_char.alternate()),
            raw.two_lp.unwrap_or(raw.two_l + 2),
            raw.delta,
        )
    }
}

fn check_multipolarity(two_l: i32, two_lp: i32) -> Result<()> {
    for value in [two_l, two_lp] {
        if value <= 0 {
            return Err(AngCorrError::InvalidMultipolarity {
                two_l,
                two_lp,
                reason: "multipolarity must be positive",
            });
        }
        if value % 2 != 0 {
            return Err(AngCorrError::InvalidMultipolarity {
                two_l,
                two_lp,
                reason: "multipolarity must be an integer",
            });
        }
    }
    if two_l == two_lp {
        return Err(AngCorrError::InvalidMultipolarity {
            two_l,
            two_lp,
            reason: "primary and secondary multipolarity must differ",
        });
    }
    Ok(())
}

impl Transition {
    pub fn new(em_char: EMCharacter, two_l: i32, em_charp: EMCharacter, two_lp: i32, delta: f64) -> Result<Self> {
        check_multipolarity(two_l, two_lp)?;
        Ok(Self {
            em_char,
            two_l,
            em_charp,
            two_lp,
            delta,
        })
    }

    /// Transition of unknown EM character.
    pub fn from_multipolarity(two_l: i32, two_lp: i32, delta: f64) -> Result<Self> {
        Self::new(EMCharacter::Unknown, two_l, EMCharacter::Unknown, two_lp, delta)
    }

    /// Secondary multipolarity 2L + 2 with the alternate EM character.
    pub fn with_em(em_char: EMCharacter, two_l: i32, delta: f64) -> Result<Self> {
        Self::new(em_char, two_l, em_char.alternate(), two_l + 2, delta)
    }

    /// Secondary multipolarity 2L + 2, EM character unknown.
    pub fn with_default_secondary(two_l: i32, delta: f64) -> Result<Self> {
        Self::from_multipolarity(two_l, two_l + 2, delta)
    }

    // Named constructors for the common low multipoles. Their multipolarities
    // are valid by construction.
    fn known(em_char: EMCharacter, two_l: i32, delta: f64) -> Self {
        Self {
            em_char,
            two_l,
            em_charp: em_char.alternate(),
            two_lp: two_l + 2,
            delta,
        }
    }

    /// E1 + M2
    pub fn e1(delta: f64) -> Self {
        Self::known(EMCharacter::Electric, 2, delta)
    }

    /// M1 + E2
    pub fn m1(delta: f64) -> Self {
        Self::known(EMCharacter::Magnetic, 2, delta)
    }

    /// E2 + M3
    pub fn e2(delta: f64) -> Self {
        Self::known(EMCharacter::Electric, 4, delta)
    }

    /// M2 + E3
    pub fn m2(delta: f64) -> Self {
        Self::known(EMCharacter::Magnetic, 4, delta)
    }

    /// Dipole + quadrupole of unknown character.
    pub fn dipole(delta: f64) -> Self {
        Self::known(EMCharacter::Unknown, 2, delta)
    }

    /// Quadrupole + octupole of unknown character.
    pub fn quadrupole(delta: f64) -> Self {
        Self::known(EMCharacter::Unknown, 4, delta)
    }

    pub fn em_char(&self) -> EMCharacter {
        self.em_char
    }

    pub fn two_l(&self) -> i32 {
        self.two_l
    }

    pub fn em_charp(&self) -> EMCharacter {
        self.em_charp
    }

    pub fn two_lp(&self) -> i32 {
        self.two_lp
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} + {}{} (δ = {})",
            self.em_char,
            self.two_l / 2,
            self.em_charp,
            self.two_lp / 2,
            self.delta
        )
    }
}
