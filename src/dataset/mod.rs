pub mod target;
pub mod params;
pub mod curve;
pub mod grid;
pub mod noise;
pub mod builder;

pub use target::TargetParameter;
pub use params::SampleParams;
pub use curve::HysteresisCurve;
pub use grid::FieldGrid;
pub use noise::SaturationDrift;
pub use builder::{Dataset, DatasetBuilder};

/// Saturation magnetization (T) every curve is normalized by before storage.
pub const SATURATION_MAGNETIZATION: f64 = 1.43;

/// Full-scale anisotropy constant (J/m³); filenames encode `k_mean` as a
/// percentage of this value.
pub const ANISOTROPY_FULL_SCALE: f64 = 5.3e6;

/// Vacuum permeability as the upstream simulation writes it (truncated pi).
/// Kept verbatim so normalized fields match the reference data.
pub const MU_0: f64 = 4.0 * 3.1416e-7;
