pub mod split;
pub mod scaler;
pub mod regressor;

pub use split::{train_test_split, Split};
pub use scaler::StandardScaler;
pub use regressor::{EpochRecord, FitConfig, Regressor};
