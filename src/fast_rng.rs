// Seeded PCG-style generator owned by each sampler.
//
// A 64-bit linear congruential step followed by the RXS-M-XS output
// permutation (O'Neill, "PCG: A Family of Simple Fast Space-Efficient
// Statistically Good Algorithms for Random Number Generation").
// The whole state is one u64, so a sampler can be cloned or reseeded cheaply
// and the same seed always reproduces the same sequence of directions.

use rand::{RngCore, SeedableRng};

const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;
const OUTPUT_MULTIPLIER: u64 = 12605985483714917081;

/// 2^-53
const TWO_POW_MINUS_53: f64 = 1.0 / (1u64 << 53) as f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FastRng {
    state: u64,
}

impl FastRng {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        self.state = LCG_MULTIPLIER.wrapping_mul(self.state).wrapping_add(LCG_INCREMENT);
        let word = ((self.state >> ((self.state >> 59) + 5)) ^ self.state).wrapping_mul(OUTPUT_MULTIPLIER);
        (word >> 43) ^ word
    }

    /// Uniform random number in [0, 1).
    #[inline(always)]
    pub fn uniform(&mut self) -> f64 {
        unit_interval(self.step())
    }
}

// The top 53 bits fit the mantissa exactly, so 1.0 is never reached.
#[inline(always)]
fn unit_interval(word: u64) -> f64 {
    ((word >> 11) as f64) * TWO_POW_MINUS_53
}

impl SeedableRng for FastRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed)
    }
}

impl RngCore for FastRng {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
