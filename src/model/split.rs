//! Seeded train/test splitting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::math::matrix::Matrix;

/// A row-wise split of a row-aligned feature/target pair.
#[derive(Debug, Clone)]
pub struct Split {
    pub train_features: Matrix,
    pub train_targets: Matrix,
    pub test_features: Matrix,
    pub test_targets: Matrix,
}

/// Shuffles sample indices with a seeded RNG and carves off `test_fraction`
/// of the rows as the test set.  The same seed always produces the same
/// partition, so evaluation runs are comparable across invocations.
///
/// # Panics
/// Panics if the matrices disagree on row count, or if `test_fraction` does
/// not leave at least one row on each side.
pub fn train_test_split(
    features: &Matrix,
    targets: &Matrix,
    test_fraction: f64,
    seed: u64,
) -> Split {
    assert_eq!(
        features.rows, targets.rows,
        "features and targets must be row-aligned"
    );
    let n = features.rows;
    let n_test = (n as f64 * test_fraction).round() as usize;
    assert!(
        n_test >= 1 && n_test < n,
        "test_fraction {} leaves an empty split for {} samples",
        test_fraction,
        n
    );

    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));

    let (test_idx, train_idx) = indices.split_at(n_test);

    Split {
        train_features: features.select_rows(train_idx),
        train_targets: targets.select_rows(train_idx),
        test_features: features.select_rows(test_idx),
        test_targets: targets.select_rows(test_idx),
    }
}
