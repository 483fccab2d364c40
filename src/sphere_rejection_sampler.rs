// Rejection sampling of directions from a density on the unit sphere.
//
// Candidates are drawn uniformly on the sphere (cos theta uniform in [-1, 1],
// phi uniform in [0, 2 pi)) and accepted with probability w(theta, phi) / w_max.
// An accepted direction fixes the z axis of the sampled frame; the rotation
// about that axis is free and drawn uniformly.

use std::f64::consts::PI;

use tracing::warn;

use crate::euler_angle_transform::{from_spherical, CoordDir, EulerAngles};
use crate::fast_rng::FastRng;
use crate::reference_frame_sampler::{ReferenceFrameSampler, SphericalDensity};

#[derive(Debug, Clone)]
pub struct SphereRejectionSampler<D> {
    distribution: D,
    distribution_maximum: f64,
    rng: FastRng,
    max_tries: u32,
}

impl<D: SphericalDensity> SphereRejectionSampler<D> {
    /// `distribution_maximum` must bound `distribution` from above, otherwise
    /// regions where it is exceeded are undersampled.
    pub fn new(distribution: D, distribution_maximum: f64, seed: u64, max_tries: u32) -> Self {
        Self {
            distribution,
            distribution_maximum,
            rng: FastRng::new(seed),
            max_tries,
        }
    }

    pub fn distribution(&self) -> &D {
        &self.distribution
    }

    pub fn distribution_maximum(&self) -> f64 {
        self.distribution_maximum
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    #[inline]
    fn sample_theta(&mut self) -> f64 {
        (2.0 * self.rng.uniform() - 1.0).acos()
    }

    #[inline]
    fn sample_phi(&mut self) -> f64 {
        2.0 * PI * self.rng.uniform()
    }

    fn accept(&mut self) -> Option<(u32, CoordDir)> {
        for tries in 1..=self.max_tries {
            let theta = self.sample_theta();
            let phi = self.sample_phi();
            let dis_val = self.distribution_maximum * self.rng.uniform();
            if dis_val <= self.distribution.density(theta, phi) {
                return Some((tries, [theta, phi]));
            }
        }
        warn!(
            "no direction accepted after {} tries (distribution maximum {})",
            self.max_tries, self.distribution_maximum
        );
        None
    }

    /// A direction without the free rotation. Returns `(max_tries, [0, 0])`
    /// if no candidate was accepted.
    pub fn sample_direction(&mut self) -> (u32, CoordDir) {
        self.accept().unwrap_or((self.max_tries, [0.0, 0.0]))
    }
}

impl<D: SphericalDensity> ReferenceFrameSampler for SphereRejectionSampler<D> {
    fn sample(&mut self) -> (u32, EulerAngles) {
        match self.accept() {
            Some((tries, theta_phi)) => {
                let phi_free = self.sample_phi();
                (tries, from_spherical(theta_phi, phi_free))
            }
            None => (self.max_tries, [0.0, 0.0, 0.0]),
        }
    }
}
