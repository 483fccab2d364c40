// Uniform sampling of frames whose z axis falls inside a cone.
//
// Directions are drawn uniformly on the spherical cap of half-angle alpha
// around the z axis (cos theta uniform in [cos alpha, 1]), then the cap is
// turned onto the target direction. The rotation about the sampled axis is
// uniform.

use std::f64::consts::PI;

use crate::euler_angle_transform::{compose, from_spherical, CoordDir, EulerAngles};
use crate::fast_rng::FastRng;
use crate::reference_frame_sampler::ReferenceFrameSampler;

#[derive(Debug, Clone)]
pub struct SpotlightSampler {
    direction: CoordDir,
    opening_angle: f64,
    u_min: f64,
    rng: FastRng,
}

impl SpotlightSampler {
    /// Cone of half-angle `opening_angle` around `direction`.
    pub fn new(direction: CoordDir, opening_angle: f64, seed: u64) -> Self {
        Self {
            direction,
            opening_angle,
            u_min: 0.5 * (1.0 + opening_angle.cos()),
            rng: FastRng::new(seed),
        }
    }

    /// Cone that covers a disk of `radius` at `distance` along `direction`.
    pub fn from_disk(direction: CoordDir, distance: f64, radius: f64, seed: u64) -> Self {
        Self::new(direction, (radius / distance).atan(), seed)
    }

    /// Always the same z axis, random rotation about it.
    pub fn pencil(direction: CoordDir, seed: u64) -> Self {
        Self::new(direction, 0.0, seed)
    }

    pub fn direction(&self) -> CoordDir {
        self.direction
    }

    pub fn opening_angle(&self) -> f64 {
        self.opening_angle
    }

    fn sample_theta(&mut self) -> f64 {
        let u = self.u_min + (1.0 - self.u_min) * self.rng.uniform();
        (2.0 * u - 1.0).clamp(-1.0, 1.0).acos()
    }
}

impl ReferenceFrameSampler for SpotlightSampler {
    fn sample(&mut self) -> (u32, EulerAngles) {
        if self.opening_angle == 0.0 {
            let phi_free = 2.0 * PI * self.rng.uniform();
            return (1, from_spherical(self.direction, phi_free));
        }
        let theta = self.sample_theta();
        let phi = 2.0 * PI * self.rng.uniform();
        let phi_free = 2.0 * PI * self.rng.uniform();
        let relative = from_spherical([theta, phi], phi_free);
        (1, compose(from_spherical(self.direction, 0.0), relative))
    }
}
