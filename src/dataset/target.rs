use serde::{Serialize, Deserialize};

/// The six physical quantities a downstream model can be trained to predict.
///
/// Order matches the filename encoding: the j-th numeric token of a sample
/// filename is the parameter with `index() == j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetParameter {
    /// Mean anisotropy constant, % of the 5.3e6 J/m³ full scale.
    KMean,
    /// Standard deviation of the anisotropy constant, % of `KMean`.
    KSd,
    /// Easy-axis inclination from out-of-plane, SD in degrees.
    ThetaSd,
    /// Volume fraction of [200] misalignment, %.
    Vol200,
    /// Volume fraction of [111] misalignment, %.
    Vol111,
    /// Volume fraction of grains with K = 0, %.
    VolK0,
}

impl TargetParameter {
    pub const ALL: [TargetParameter; 6] = [
        TargetParameter::KMean,
        TargetParameter::KSd,
        TargetParameter::ThetaSd,
        TargetParameter::Vol200,
        TargetParameter::Vol111,
        TargetParameter::VolK0,
    ];

    /// Position of this parameter in the filename encoding and target matrix.
    pub fn index(self) -> usize {
        match self {
            TargetParameter::KMean => 0,
            TargetParameter::KSd => 1,
            TargetParameter::ThetaSd => 2,
            TargetParameter::Vol200 => 3,
            TargetParameter::Vol111 => 4,
            TargetParameter::VolK0 => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<TargetParameter> {
        Self::ALL.get(index).copied()
    }

    /// Display name used for plot axes and report headers.
    pub fn display_name(self) -> &'static str {
        match self {
            TargetParameter::KMean => "$K_{m}$",
            TargetParameter::KSd => "$K_{sd}$",
            TargetParameter::ThetaSd => "\u{03B8}$_{sd}$",
            TargetParameter::Vol200 => "$V_{200}$",
            TargetParameter::Vol111 => "$V_{111}$",
            TargetParameter::VolK0 => "$V_{K=0}$",
        }
    }

    pub fn display_names() -> [&'static str; 6] {
        let mut names = [""; 6];
        for (i, t) in Self::ALL.iter().enumerate() {
            names[i] = t.display_name();
        }
        names
    }

    /// Field-grid bounds for this target.
    ///
    /// Predicting the anisotropy constant itself uses the raw field range;
    /// every other target works on fields normalized by the per-sample
    /// anisotropy field, which compresses the interesting range.
    pub fn grid_span(self) -> (f64, f64) {
        match self {
            TargetParameter::KMean => (-10.0, 10.0),
            _ => (-1.4, 1.3),
        }
    }

    /// Whether per-sample field values are divided by the anisotropy field
    /// before interpolation.
    pub fn rescales_field(self) -> bool {
        self != TargetParameter::KMean
    }

    /// Whether the feature matrix carries the sample's anisotropy constant
    /// as an extra trailing column.  Predicting the SD of K is ill-posed
    /// without knowing K itself.
    pub fn carries_anisotropy_column(self) -> bool {
        self == TargetParameter::KSd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        for (i, t) in TargetParameter::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
            assert_eq!(TargetParameter::from_index(i), Some(*t));
        }
        assert_eq!(TargetParameter::from_index(6), None);
    }

    #[test]
    fn grid_span_depends_on_target() {
        assert_eq!(TargetParameter::KMean.grid_span(), (-10.0, 10.0));
        assert_eq!(TargetParameter::ThetaSd.grid_span(), (-1.4, 1.3));
        assert_eq!(TargetParameter::VolK0.grid_span(), (-1.4, 1.3));
    }

    #[test]
    fn only_ksd_carries_extra_column() {
        for t in TargetParameter::ALL {
            assert_eq!(t.carries_anisotropy_column(), t == TargetParameter::KSd);
        }
    }
}
