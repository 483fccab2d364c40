use crate::angular_correlation::AngularCorrelation;
use crate::euler_angle_transform::{CoordDir, EulerAngles};
use crate::reference_frame_sampler::ReferenceFrameSampler;
use crate::sphere_rejection_sampler::SphereRejectionSampler;

/// Rejection sampler for an angular correlation, bounded by the
/// correlation's own upper limit.
#[derive(Debug, Clone)]
pub struct AngCorrRejectionSampler {
    sampler: SphereRejectionSampler<AngularCorrelation>,
}

impl AngCorrRejectionSampler {
    pub fn new(angular_correlation: AngularCorrelation, seed: u64, max_tries: u32) -> Self {
        let upper_limit = angular_correlation.upper_limit();
        Self {
            sampler: SphereRejectionSampler::new(angular_correlation, upper_limit, seed, max_tries),
        }
    }

    pub fn angular_correlation(&self) -> &AngularCorrelation {
        self.sampler.distribution()
    }

    pub fn max_tries(&self) -> u32 {
        self.sampler.max_tries()
    }

    pub fn sample_direction(&mut self) -> (u32, CoordDir) {
        self.sampler.sample_direction()
    }
}

impl ReferenceFrameSampler for AngCorrRejectionSampler {
    fn sample(&mut self) -> (u32, EulerAngles) {
        self.sampler.sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;
    use crate::transition::Transition;

    fn correlation_0_1_0() -> AngularCorrelation {
        AngularCorrelation::new(
            State::new(0).unwrap(),
            vec![
                (Transition::dipole(0.0), State::new(2).unwrap()),
                (Transition::dipole(0.0), State::new(0).unwrap()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_same_sequence_as_closed_form() {
        let w = correlation_0_1_0();
        let upper_limit = w.upper_limit();
        let mut ang_corr_sampler = AngCorrRejectionSampler::new(w, 5, 1000);
        let mut closed_form_sampler = SphereRejectionSampler::new(
            |theta: f64, _phi: f64| 0.75 * (1.0 + theta.cos().powi(2)),
            upper_limit,
            5,
            1000,
        );
        for _ in 0..1000 {
            let (tries_a, frame_a) = ang_corr_sampler.sample();
            let (tries_b, frame_b) = closed_form_sampler.sample();
            assert_eq!(tries_a, tries_b);
            for i in 0..3 {
                assert!((frame_a[i] - frame_b[i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_efficiency_matches_bound() {
        // Mean of W over the sphere is 1, so the acceptance rate is 1 / upper_limit.
        let w = correlation_0_1_0();
        let expected = 1.0 / w.upper_limit();
        let mut sampler = AngCorrRejectionSampler::new(w, 0, 1000);
        assert!((sampler.estimate_efficiency(100_000) - expected).abs() < 0.01);
    }
}
