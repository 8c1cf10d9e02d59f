//! The common field grid every sample's curve is resampled onto.

use crate::dataset::target::TargetParameter;

/// A fixed ascending sequence of field values, shared by all samples of one
/// dataset build.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid {
    points: Vec<f64>,
}

impl FieldGrid {
    /// `n` evenly spaced points over `[lo, hi]`, endpoints included.
    pub fn linspace(lo: f64, hi: f64, n: usize) -> FieldGrid {
        let points = match n {
            0 => Vec::new(),
            1 => vec![lo],
            _ => {
                let step = (hi - lo) / (n - 1) as f64;
                (0..n).map(|i| lo + step * i as f64).collect()
            }
        };
        FieldGrid { points }
    }

    /// The grid for a given target parameter (bounds per [`TargetParameter::grid_span`]).
    pub fn for_target(target: TargetParameter, n: usize) -> FieldGrid {
        let (lo, hi) = target.grid_span();
        FieldGrid::linspace(lo, hi, n)
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Column labels: each grid value rounded to two decimals.
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|v| format!("{:.2}", v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints() {
        let g = FieldGrid::linspace(-10.0, 10.0, 101);
        assert_eq!(g.len(), 101);
        assert_eq!(g.points()[0], -10.0);
        assert_eq!(*g.points().last().unwrap(), 10.0);
    }

    #[test]
    fn linspace_is_evenly_spaced() {
        let g = FieldGrid::linspace(-1.4, 1.3, 28);
        let step = (1.3 - (-1.4)) / 27.0;
        for w in g.points().windows(2) {
            assert!(((w[1] - w[0]) - step).abs() < 1e-12);
        }
    }

    #[test]
    fn grid_follows_target_span() {
        let g = FieldGrid::for_target(TargetParameter::KMean, 5);
        assert_eq!(g.points()[0], -10.0);
        let g = FieldGrid::for_target(TargetParameter::Vol111, 5);
        assert_eq!(g.points()[0], -1.4);
        assert!((*g.points().last().unwrap() - 1.3).abs() < 1e-12);
    }

    #[test]
    fn labels_round_to_two_decimals() {
        let g = FieldGrid::linspace(-1.4, 1.3, 2);
        assert_eq!(g.labels(), vec!["-1.40".to_string(), "1.30".to_string()]);
    }
}
