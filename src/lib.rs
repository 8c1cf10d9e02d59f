pub mod error;
pub mod math;
pub mod dataset;
pub mod model;

// Convenience re-exports
pub use error::DataError;
pub use math::matrix::Matrix;
pub use dataset::builder::{Dataset, DatasetBuilder};
pub use dataset::target::TargetParameter;
pub use model::regressor::{FitConfig, Regressor};
pub use model::scaler::StandardScaler;
pub use model::split::train_test_split;
