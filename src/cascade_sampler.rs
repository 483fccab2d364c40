use rand::RngCore;

use crate::angular_correlation::AngularCorrelation;
use crate::ang_corr_rejection_sampler::AngCorrRejectionSampler;
use crate::euler_angle_transform::{compose, to_spherical, CoordDir, EulerAngles};
use crate::fast_rng::FastRng;
use crate::reference_frame_sampler::{DeterministicReferenceFrameSampler, ReferenceFrameSampler};
use crate::sphere_rejection_sampler::SphereRejectionSampler;

/// Chains reference frames along a cascade.
///
/// The first sampler gives an absolute frame; every further sampler is
/// interpreted relative to the frame before it:
///
/// ```text
/// R_1 = S_1(),  R_i = compose(R_{i-1}, S_i())
/// ```
///
/// Only the first correlation in the chain may be polarization sensitive.
/// This is not checked.
pub struct CascadeSampler {
    samplers: Vec<Box<dyn ReferenceFrameSampler>>,
}

impl CascadeSampler {
    pub fn new(samplers: Vec<Box<dyn ReferenceFrameSampler>>) -> Self {
        Self { samplers }
    }

    /// One frame per sampler, in cascade order.
    pub fn sample(&mut self) -> Vec<EulerAngles> {
        self.sample_with_tries().into_iter().map(|(_, frame)| frame).collect()
    }

    /// Like `sample`, with the number of tries each sampler needed. A sampler
    /// that exhausted its budget reports its `max_tries` and contributes the
    /// identity rotation, so its frame equals the one before it.
    pub fn sample_with_tries(&mut self) -> Vec<(u32, EulerAngles)> {
        let mut frames: Vec<(u32, EulerAngles)> = Vec::with_capacity(self.samplers.len());
        for sampler in self.samplers.iter_mut() {
            let (tries, relative) = sampler.sample();
            let frame = match frames.last() {
                Some(&(_, previous)) => compose(previous, relative),
                None => relative,
            };
            frames.push((tries, frame));
        }
        frames
    }

    pub fn len(&self) -> usize {
        self.samplers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samplers.is_empty()
    }
}

/// Emission directions of all photons of a cascade built from two-step
/// correlations.
///
/// The first photon is emitted isotropically, or along the z axis of a fixed
/// initial orientation. Each following photon is drawn from its correlation
/// in the frame of the photon before it.
pub struct CascadeDirectionSampler {
    cascade_sampler: CascadeSampler,
    include_first_direction: bool,
    max_tries: u32,
}

impl CascadeDirectionSampler {
    /// Every sampler gets its own seed, derived from `seed`.
    pub fn new(
        correlations: Vec<AngularCorrelation>,
        initial_orientation: Option<EulerAngles>,
        include_first_direction: bool,
        seed: u64,
        max_tries: u32,
    ) -> Self {
        let mut seeds = FastRng::new(seed);
        let mut samplers: Vec<Box<dyn ReferenceFrameSampler>> = Vec::with_capacity(correlations.len() + 1);
        match initial_orientation {
            Some(frame) => samplers.push(Box::new(DeterministicReferenceFrameSampler::new(frame))),
            None => samplers.push(Box::new(SphereRejectionSampler::new(
                |_: f64, _: f64| 1.0,
                1.0,
                seeds.next_u64(),
                max_tries,
            ))),
        }
        for correlation in correlations {
            samplers.push(Box::new(AngCorrRejectionSampler::new(
                correlation,
                seeds.next_u64(),
                max_tries,
            )));
        }
        Self {
            cascade_sampler: CascadeSampler::new(samplers),
            include_first_direction,
            max_tries,
        }
    }

    /// Directions of the z axes of the sampled frames.
    pub fn sample(&mut self) -> Vec<CoordDir> {
        self.sample_with_tries().into_iter().map(|(_, direction)| direction).collect()
    }

    /// Directions together with the number of tries each one needed.
    /// `tries == max_tries` marks a draw that exhausted its budget.
    pub fn sample_with_tries(&mut self) -> Vec<(u32, CoordDir)> {
        let skip = usize::from(!self.include_first_direction);
        self.cascade_sampler
            .sample_with_tries()
            .into_iter()
            .skip(skip)
            .map(|(tries, frame)| (tries, to_spherical(frame)))
            .collect()
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Number of directions returned by `sample`.
    pub fn n_directions(&self) -> usize {
        self.cascade_sampler.len() - usize::from(!self.include_first_direction)
    }
}
