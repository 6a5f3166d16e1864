use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use crate::traits::TemperatureSource;

const DEFAULT_AMBIENT: f64 = 25.0;
const DEFAULT_PEAK: f64 = 245.0;
const DEFAULT_SAMPLES: usize = 600;
const DEFAULT_NOISE: f64 = 1.5;

/// Random-walk plate simulator.
///
/// Ramps linearly from ambient to peak over the first two thirds of its run,
/// holds near the peak, and adds bounded noise to every reading. Seeded, so a
/// given configuration always produces the same curve.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    rng: StdRng,
    ambient: f64,
    peak: f64,
    noise: f64,
    total: usize,
    produced: usize,
}

impl SimulatedSource {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, DEFAULT_AMBIENT, DEFAULT_PEAK, DEFAULT_SAMPLES, DEFAULT_NOISE)
    }

    pub fn with_config(seed: u64, ambient: f64, peak: f64, total: usize, noise: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ambient,
            peak,
            noise: noise.abs(),
            total,
            produced: 0,
        }
    }

    fn target_at(&self, step: usize) -> f64 {
        let ramp_len = (self.total * 2 / 3).max(1);
        if step >= ramp_len {
            self.peak
        } else {
            self.ambient + (self.peak - self.ambient) * step as f64 / ramp_len as f64
        }
    }
}

impl TemperatureSource for SimulatedSource {
    fn next_value(&mut self) -> Option<f64> {
        if self.is_exhausted() {
            return None;
        }
        let target = self.target_at(self.produced);
        let jitter = if self.noise > 0.0 {
            self.rng.gen_range(-self.noise..=self.noise)
        } else {
            0.0
        };
        self.produced += 1;
        Some(target + jitter)
    }

    fn is_exhausted(&self) -> bool {
        self.produced >= self.total
    }

    fn name(&self) -> &str {
        "Simulated"
    }
}
