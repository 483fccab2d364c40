use crate::angular_correlation::AngularCorrelation;
use crate::euler_angle_transform::EulerAngles;

/// Source of randomly oriented reference frames.
///
/// `sample` returns the number of tries it needed together with the frame.
/// Samplers that can fail report `tries == max_tries` and the identity frame;
/// callers must treat that as a failed draw.
pub trait ReferenceFrameSampler {
    fn sample(&mut self) -> (u32, EulerAngles);

    /// Frame only, discarding the number of tries.
    fn sample_frame(&mut self) -> EulerAngles {
        self.sample().1
    }

    /// Acceptance rate over `n` draws: n / (total number of tries).
    fn estimate_efficiency(&mut self, n: u32) -> f64 {
        let total_tries: u64 = (0..n).map(|_| u64::from(self.sample().0)).sum();
        if total_tries == 0 {
            return 0.0;
        }
        f64::from(n) / total_tries as f64
    }
}

/// Always returns the same frame in a single try.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeterministicReferenceFrameSampler {
    frame: EulerAngles,
}

impl DeterministicReferenceFrameSampler {
    pub fn new(frame: EulerAngles) -> Self {
        Self { frame }
    }

    pub fn frame(&self) -> EulerAngles {
        self.frame
    }
}

impl ReferenceFrameSampler for DeterministicReferenceFrameSampler {
    fn sample(&mut self) -> (u32, EulerAngles) {
        (1, self.frame)
    }
}

/// Non-negative, bounded function on the unit sphere.
pub trait SphericalDensity {
    fn density(&self, theta: f64, phi: f64) -> f64;
}

impl<F> SphericalDensity for F
where
    F: Fn(f64, f64) -> f64,
{
    fn density(&self, theta: f64, phi: f64) -> f64 {
        self(theta, phi)
    }
}

impl SphericalDensity for AngularCorrelation {
    fn density(&self, theta: f64, phi: f64) -> f64 {
        self.eval(theta, phi)
    }
}
