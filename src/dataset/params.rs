//! Filename-encoded sample parameters.
//!
//! Each measurement file is named `<k_mean>_<k_sd>_<theta_sd>_<v200>_<v111>_<vk0>.txt`
//! with dot-decimal numbers.  The filename is the only place these six values
//! live, so decoding is strict: exactly six numeric tokens, fixed order.

use serde::{Serialize, Deserialize};

use crate::dataset::{ANISOTROPY_FULL_SCALE, MU_0, SATURATION_MAGNETIZATION};
use crate::dataset::target::TargetParameter;
use crate::error::{DataError, Result};

/// The six target parameters of one sample, decoded from its filename and
/// rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleParams {
    /// Mean anisotropy constant, % of full scale.
    pub k_mean: f64,
    /// SD of the anisotropy constant, % of `k_mean`.
    pub k_sd: f64,
    /// Easy-axis inclination SD, degrees.
    pub theta_sd: f64,
    /// Volume fraction of [200] misalignment, %.
    pub vol_200: f64,
    /// Volume fraction of [111] misalignment, %.
    pub vol_111: f64,
    /// Volume fraction of K = 0 grains, %.
    pub vol_k0: f64,
}

impl SampleParams {
    pub const COUNT: usize = 6;

    /// Decodes a filename into its parameter record.
    ///
    /// Fails unless the name yields exactly six numeric tokens.
    pub fn decode_filename(name: &str) -> Result<SampleParams> {
        let tokens = numeric_tokens(name);
        if tokens.len() != Self::COUNT {
            return Err(DataError::MalformedFilename {
                name: name.to_string(),
                found: tokens.len(),
                expected: Self::COUNT,
            });
        }
        let v: Vec<f64> = tokens.into_iter().map(round2).collect();
        Ok(SampleParams {
            k_mean: v[0],
            k_sd: v[1],
            theta_sd: v[2],
            vol_200: v[3],
            vol_111: v[4],
            vol_k0: v[5],
        })
    }

    /// The parameters in filename order, ready to become a target-matrix row.
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.k_mean,
            self.k_sd,
            self.theta_sd,
            self.vol_200,
            self.vol_111,
            self.vol_k0,
        ]
    }

    pub fn get(&self, target: TargetParameter) -> f64 {
        self.as_array()[target.index()]
    }

    /// Anisotropy field H_a for this sample.
    ///
    /// Used to convert raw field readings into units comparable across
    /// samples with different anisotropy constants:
    /// `H_a = 2 K / M_s * mu_0` with `K = k_mean/100 * full_scale`.
    pub fn anisotropy_field(&self) -> f64 {
        2.0 * (self.k_mean / 100.0 * ANISOTROPY_FULL_SCALE) / SATURATION_MAGNETIZATION * MU_0
    }
}

/// Extracts every maximal `digits[.digits]` run from `name`, in order.
///
/// Mirrors the numeric-token pattern the upstream tooling used: an integer
/// part, optionally followed by a dot and a fractional part.  A dot with no
/// digit after it terminates the token (so `"1.2.3"` yields 1.2 and 3).
fn numeric_tokens(name: &str) -> Vec<f64> {
    let bytes = name.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        // Slice is ASCII digits with at most one interior dot; parse cannot fail.
        let token = &name[start..i];
        tokens.push(token.parse::<f64>().unwrap());
    }
    tokens
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_filename() {
        let p = SampleParams::decode_filename("96.2_2.36_8.43_4.63_5.32_2.17.txt").unwrap();
        assert_eq!(p.as_array(), [96.2, 2.36, 8.43, 4.63, 5.32, 2.17]);
    }

    #[test]
    fn accepts_integer_tokens() {
        let p = SampleParams::decode_filename("100_0_0_0_0_0.txt").unwrap();
        assert_eq!(p.k_mean, 100.0);
        assert_eq!(p.vol_k0, 0.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let p = SampleParams::decode_filename("96.199_2.355_8_4_5_2.txt").unwrap();
        assert_eq!(p.k_mean, 96.2);
        assert_eq!(p.k_sd, 2.36);
    }

    #[test]
    fn rejects_wrong_token_count() {
        let err = SampleParams::decode_filename("96.2_2.36_8.43.txt").unwrap_err();
        match err {
            DataError::MalformedFilename { name, found, expected } => {
                assert_eq!(name, "96.2_2.36_8.43.txt");
                assert_eq!(found, 3);
                assert_eq!(expected, 6);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn token_scan_matches_upstream_pattern() {
        assert_eq!(numeric_tokens("1.2.3"), vec![1.2, 3.0]);
        assert_eq!(numeric_tokens("a12b3.5c"), vec![12.0, 3.5]);
        assert_eq!(numeric_tokens("no digits here"), Vec::<f64>::new());
    }

    #[test]
    fn anisotropy_field_matches_reference_formula() {
        let p = SampleParams::decode_filename("96.2_2.36_8.43_4.63_5.32_2.17.txt").unwrap();
        let expected = 2.0 * (96.2 / 100.0 * 5.3e6) / 1.43 * (4.0 * 3.1416e-7);
        assert!((p.anisotropy_field() - expected).abs() < 1e-12);
    }
}
