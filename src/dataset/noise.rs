//! Synthetic measurement-drift normalization.
//!
//! Real hysteresis measurements drift differently at the two saturation ends
//! of a sweep.  The builder emulates the correction for that asymmetry by
//! drawing two independent factors per sample and applying a shift-and-scale
//! to the whole interpolated curve.  The formula is carried over verbatim
//! from the reference data pipeline.

use rand::Rng;

/// Uniform bounds the two per-sample drift factors are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationDrift {
    pub low: f64,
    pub high: f64,
}

impl Default for SaturationDrift {
    fn default() -> Self {
        SaturationDrift { low: 0.985, high: 1.01 }
    }
}

impl SaturationDrift {
    /// Draws the two factors for one sample.  Draw order is fixed (lower
    /// saturation end first) so a seeded run is reproducible.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> DriftDraw {
        let lower_end = rng.gen_range(self.low..self.high);
        let upper_end = rng.gen_range(self.low..self.high);
        DriftDraw { lower_end, upper_end }
    }
}

/// One sample's pair of drift factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftDraw {
    pub lower_end: f64,
    pub upper_end: f64,
}

impl DriftDraw {
    /// Applies the asymmetry correction elementwise:
    /// `x -> (x - (lo - hi)/2) / ((lo + hi)/2)`.
    pub fn apply(&self, values: &mut [f64]) {
        let offset = (self.lower_end - self.upper_end) / 2.0;
        let scale = (self.lower_end + self.upper_end) / 2.0;
        for v in values.iter_mut() {
            *v = (*v - offset) / scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_stay_in_bounds() {
        let drift = SaturationDrift::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let d = drift.draw(&mut rng);
            assert!(d.lower_end >= 0.985 && d.lower_end < 1.01);
            assert!(d.upper_end >= 0.985 && d.upper_end < 1.01);
        }
    }

    #[test]
    fn draws_are_seed_deterministic() {
        let drift = SaturationDrift::default();
        let a = drift.draw(&mut StdRng::seed_from_u64(9));
        let b = drift.draw(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn apply_matches_reference_formula() {
        let d = DriftDraw { lower_end: 0.99, upper_end: 1.01 };
        let mut values = vec![1.0, -1.0];
        d.apply(&mut values);
        let offset = (0.99 - 1.01) / 2.0;
        let scale = (0.99 + 1.01) / 2.0;
        assert!((values[0] - (1.0 - offset) / scale).abs() < 1e-15);
        assert!((values[1] - (-1.0 - offset) / scale).abs() < 1e-15);
    }

    #[test]
    fn symmetric_draw_is_pure_scaling() {
        let d = DriftDraw { lower_end: 1.0, upper_end: 1.0 };
        let mut values = vec![0.25, -0.75];
        d.apply(&mut values);
        assert_eq!(values, vec![0.25, -0.75]);
    }
}
