//! Synthetic triangle generator
//!
//! Generates random but internally consistent [`TriangleInput`] values for
//! testing, benchmarking, and development. Angles are drawn first and the
//! sides are derived from them by the law of sines, so every generated
//! input passes the validation gate.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::{ANGLE_SUM_DEG, DEG2RAD};
use crate::triangle::TriangleInput;

/// Configuration for synthetic triangle generation
pub struct SyntheticTriangleConfig {
    /// Number of inputs to generate
    pub count: usize,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Smallest scale factor for the generated side lengths
    pub min_scale: f64,
    /// Largest scale factor for the generated side lengths
    pub max_scale: f64,
}

impl Default for SyntheticTriangleConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 42,
            min_scale: 1.0,
            max_scale: 100.0,
        }
    }
}

impl SyntheticTriangleConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of inputs to generate
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the scale range for the side lengths
    pub fn with_scale_range(mut self, min: f64, max: f64) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    /// Generate the configured number of valid triangle inputs.
    ///
    /// Angle A is drawn from [40, 80) and angle B from [50, 90) degrees.
    /// With their sum at or above 90, `180 - (angle_a + angle_b)` incurs no
    /// rounding, so the exact angle-sum gate holds for every output; angle C
    /// lands in (10, 90) and no angle ever equals exactly 90.
    pub fn generate(&self) -> Vec<TriangleInput> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let angle_a_dist = Uniform::new(40.0, 80.0);
        let angle_b_dist = Uniform::new(50.0, 90.0);
        let scale_dist = Uniform::new(self.min_scale, self.max_scale);

        (0..self.count)
            .map(|_| {
                let angle_a = angle_a_dist.sample(&mut rng);
                let angle_b = angle_b_dist.sample(&mut rng);
                let angle_c = ANGLE_SUM_DEG - (angle_a + angle_b);
                let scale = scale_dist.sample(&mut rng);

                // Law of sines: each side is proportional to the sine of
                // its opposite angle.
                TriangleInput::new(
                    scale * (angle_c * DEG2RAD).sin(),
                    scale * (angle_a * DEG2RAD).sin(),
                    scale * (angle_b * DEG2RAD).sin(),
                    angle_a,
                    angle_b,
                    angle_c,
                )
            })
            .collect()
    }
}
