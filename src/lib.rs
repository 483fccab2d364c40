// Angular correlations of gamma-ray cascades and sampling of the emission
// directions they imply.
mod analyzing_power;
mod ang_corr_rejection_sampler;
mod angular_correlation;
mod cascade_sampler;
mod config;
mod correlation;
mod error;
mod fast_rng;
mod reference_frame_sampler;
mod sphere_rejection_sampler;
mod spotlight_sampler;
mod state;
mod transition;
mod w_dir_dir;
mod w_pol_dir;

pub mod angular_momentum;
pub mod coefficients;
pub mod euler_angle_transform;
pub mod legendre;

pub use analyzing_power::{AnalyzingPower, Convention};
pub use ang_corr_rejection_sampler::AngCorrRejectionSampler;
pub use angular_correlation::{em_character_for, AngularCorrelation};
pub use cascade_sampler::{CascadeDirectionSampler, CascadeSampler};
pub use config::{CascadeConfig, SamplerSettings, StepConfig};
pub use correlation::{CascadeStep, Correlation, GammaGammaCorrelation};
pub use error::{AngCorrError, Result};
pub use euler_angle_transform::{CoordDir, EulerAngles};
pub use fast_rng::FastRng;
pub use reference_frame_sampler::{DeterministicReferenceFrameSampler, ReferenceFrameSampler, SphericalDensity};
pub use sphere_rejection_sampler::SphereRejectionSampler;
pub use spotlight_sampler::SpotlightSampler;
pub use state::{Parity, State};
pub use transition::{EMCharacter, Transition};
pub use w_dir_dir::WDirDir;
pub use w_pol_dir::WPolDir;
