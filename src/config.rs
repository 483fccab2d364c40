// Cascade definitions and sampler settings read from JSON.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::angular_correlation::AngularCorrelation;
use crate::cascade_sampler::CascadeDirectionSampler;
use crate::correlation::CascadeStep;
use crate::error::{AngCorrError, Result};
use crate::euler_angle_transform::EulerAngles;
use crate::state::State;
use crate::transition::Transition;

/// Seed and try budget shared by all samplers built from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    pub seed: u64,
    pub max_tries: u32,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        SamplerSettings {
            seed: 0,
            max_tries: 1000,
        }
    }
}

/// One transition and the state it populates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepConfig {
    pub transition: Transition,
    pub state: State,
}

impl From<StepConfig> for CascadeStep {
    fn from(step: StepConfig) -> Self {
        (step.transition, step.state)
    }
}

/// A cascade of arbitrary length together with the settings to sample the
/// emission directions of all its photons.
///
/// ```json
/// {
///   "initial_state": {"two_j": 0, "parity": "positive"},
///   "steps": [
///     {"transition": {"em_char": "magnetic", "two_l": 2}, "state": {"two_j": 2, "parity": "positive"}},
///     {"transition": {"em_char": "magnetic", "two_l": 2}, "state": {"two_j": 0, "parity": "positive"}}
///   ],
///   "sampler": {"seed": 42}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CascadeConfig {
    pub initial_state: State,
    pub steps: Vec<StepConfig>,
    #[serde(default)]
    pub sampler: SamplerSettings,
    /// Fixed orientation of the first photon. Isotropic if absent.
    #[serde(default)]
    pub initial_orientation: Option<EulerAngles>,
    #[serde(default = "default_include_first_direction")]
    pub include_first_direction: bool,
}

fn default_include_first_direction() -> bool {
    true
}

impl CascadeConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CascadeConfig = serde_json::from_str(json)?;
        debug!(
            "loaded cascade with {} steps from initial state {} (seed {}, max_tries {})",
            config.steps.len(),
            config.initial_state,
            config.sampler.seed,
            config.sampler.max_tries
        );
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        debug!("reading cascade from {}", path.as_ref().display());
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn cascade_steps(&self) -> Vec<CascadeStep> {
        self.steps.iter().copied().map(CascadeStep::from).collect()
    }

    /// Correlation between the first and the last photon of the whole cascade.
    pub fn angular_correlation(&self) -> Result<AngularCorrelation> {
        AngularCorrelation::new(self.initial_state, self.cascade_steps())
    }

    /// Correlations of all pairs of consecutive photons. Correlation i
    /// relates photon i + 1 to photon i.
    pub fn correlations(&self) -> Result<Vec<AngularCorrelation>> {
        if self.steps.len() < 2 {
            return Err(AngCorrError::TooShortCascade(self.steps.len()));
        }
        self.steps
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let initial_state = if i == 0 { self.initial_state } else { self.steps[i - 1].state };
                AngularCorrelation::new(initial_state, vec![pair[0].into(), pair[1].into()])
            })
            .collect()
    }

    /// Sampler for the directions of all photons of the cascade.
    pub fn direction_sampler(&self) -> Result<CascadeDirectionSampler> {
        Ok(CascadeDirectionSampler::new(
            self.correlations()?,
            self.initial_orientation,
            self.include_first_direction,
            self.sampler.seed,
            self.sampler.max_tries,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Parity;

    const THREE_STEPS: &str = r#"{
        "initial_state": {"two_j": 0, "parity": "positive"},
        "steps": [
            {"transition": {"two_l": 4}, "state": {"two_j": 4, "parity": "positive", "excitation_energy": 2.0}},
            {"transition": {"two_l": 4}, "state": {"two_j": 8, "parity": "positive", "excitation_energy": 1.0}},
            {"transition": {"two_l": 4}, "state": {"two_j": 4, "parity": "positive"}}
        ],
        "sampler": {"seed": 7}
    }"#;

    #[test]
    fn test_defaults() {
        let config = CascadeConfig::from_json_str(THREE_STEPS).unwrap();
        assert_eq!(config.sampler, SamplerSettings { seed: 7, max_tries: 1000 });
        assert_eq!(config.initial_orientation, None);
        assert!(config.include_first_direction);
        assert_eq!(config.steps[0].transition, Transition::quadrupole(0.0));
        assert_eq!(config.steps[0].state.parity(), Parity::Positive);
        assert_eq!(SamplerSettings::default().max_tries, 1000);
    }

    #[test]
    fn test_correlations() {
        let config = CascadeConfig::from_json_str(THREE_STEPS).unwrap();
        let correlations = config.correlations().unwrap();
        assert_eq!(correlations.len(), 2);
        assert_eq!(correlations[1].initial_state().two_j(), 4);
        assert_eq!(correlations[1].cascade_steps()[1].1.two_j(), 4);
        assert!(config.angular_correlation().is_ok());

        let mut sampler = config.direction_sampler().unwrap();
        assert_eq!(sampler.sample().len(), 3);
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = CascadeConfig::from_json_str(THREE_STEPS).unwrap();
        let json = config.to_json_string().unwrap();
        assert_eq!(CascadeConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_input() {
        let json = r#"{"initial_state": {"two_j": -1}, "steps": []}"#;
        match CascadeConfig::from_json_str(json) {
            Err(AngCorrError::Json(e)) => assert!(e.to_string().contains("spin")),
            other => panic!("unexpected {:?}", other),
        }

        let json = r#"{"initial_state": {"two_j": 0}, "steps": [
            {"transition": {"two_l": 2}, "state": {"two_j": 2}}
        ]}"#;
        let config = CascadeConfig::from_json_str(json).unwrap();
        assert!(matches!(config.correlations(), Err(AngCorrError::TooShortCascade(1))));

        assert!(matches!(
            CascadeConfig::from_json_file("/nonexistent/cascade.json"),
            Err(AngCorrError::Io(_))
        ));
    }
}
