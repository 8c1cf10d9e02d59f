//! Per-column feature standardization.

use serde::{Serialize, Deserialize};

use crate::math::matrix::Matrix;

/// Zero-mean, unit-variance scaling fit on the training split only.
///
/// Fitting on the full dataset would leak test-set statistics into training;
/// callers fit once on the training features and apply the same transform to
/// both splits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Computes per-column mean and (population) standard deviation.
    pub fn fit(features: &Matrix) -> StandardScaler {
        assert!(features.rows > 0, "cannot fit a scaler on zero rows");
        let n = features.rows as f64;

        let mut means = vec![0.0; features.cols];
        for row in &features.data {
            for (m, v) in means.iter_mut().zip(row.iter()) {
                *m += v;
            }
        }
        for m in means.iter_mut() {
            *m /= n;
        }

        let mut stds = vec![0.0; features.cols];
        for row in &features.data {
            for ((s, v), m) in stds.iter_mut().zip(row.iter()).zip(means.iter()) {
                *s += (v - m) * (v - m);
            }
        }
        for s in stds.iter_mut() {
            *s = (*s / n).sqrt();
            // A constant column scales to zero, not to NaN.
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        StandardScaler { means, stds }
    }

    pub fn transform(&self, features: &Matrix) -> Matrix {
        assert_eq!(features.cols, self.means.len(), "column count mismatch");
        let data = features
            .data
            .iter()
            .map(|row| {
                row.iter()
                    .zip(self.means.iter().zip(self.stds.iter()))
                    .map(|(v, (m, s))| (v - m) / s)
                    .collect()
            })
            .collect();
        Matrix::from_rows(data)
    }
}
