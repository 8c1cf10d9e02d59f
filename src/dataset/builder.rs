//! The dataset builder: directory of measurement files in, row-aligned
//! feature/target matrices out.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dataset::curve::HysteresisCurve;
use crate::dataset::grid::FieldGrid;
use crate::dataset::noise::SaturationDrift;
use crate::dataset::params::SampleParams;
use crate::dataset::target::TargetParameter;
use crate::dataset::SATURATION_MAGNETIZATION;
use crate::error::{DataError, Result};
use crate::math::interp::interp_linear;
use crate::math::matrix::Matrix;

/// Output of one dataset build.
///
/// Row `i` of `features` and row `i` of `targets` describe the same sample
/// file; the builder aborts on the first malformed input rather than skip a
/// file and break that alignment.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// One row per sample: the magnetization curve resampled onto the grid
    /// (plus a trailing anisotropy-constant column for the K-SD target).
    pub features: Matrix,
    /// One row per sample: the six filename-encoded parameters.
    pub targets: Matrix,
    /// Column labels for `features`: grid values rounded to two decimals,
    /// plus `"K"` for the trailing column when present.
    pub feature_names: Vec<String>,
    /// Display names of the six target parameters.
    pub target_names: [&'static str; 6],
}

/// Writes one sample's resampled curve to a two-column text file when its
/// filename matches.  Inspection hook for plotting a single interpolation
/// result next to the raw sweep.
#[derive(Debug, Clone)]
struct TraceSink {
    filename: String,
    output: PathBuf,
}

/// Builds a [`Dataset`] from a directory of measurement files.
///
/// ```no_run
/// use hysteresis_nn::{DatasetBuilder, TargetParameter};
///
/// let dataset = DatasetBuilder::new("dataset_random", 101, TargetParameter::KMean)
///     .with_seed(42)
///     .build()?;
/// assert_eq!(dataset.features.rows, dataset.targets.rows);
/// # Ok::<(), hysteresis_nn::DataError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    dir: PathBuf,
    n_features: usize,
    target: TargetParameter,
    drift: SaturationDrift,
    seed: Option<u64>,
    trace: Option<TraceSink>,
}

impl DatasetBuilder {
    pub fn new(dir: impl Into<PathBuf>, n_features: usize, target: TargetParameter) -> Self {
        DatasetBuilder {
            dir: dir.into(),
            n_features,
            target,
            drift: SaturationDrift::default(),
            seed: None,
            trace: None,
        }
    }

    /// Seeds the drift-factor RNG so repeated builds of the same directory
    /// produce identical matrices.  Unseeded builds draw from entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the drift-factor bounds.
    pub fn with_drift(mut self, drift: SaturationDrift) -> Self {
        self.drift = drift;
        self
    }

    /// Dumps the resampled curve of the sample named `filename` to `output`
    /// as `field value` pairs, one per line.
    pub fn with_trace(mut self, filename: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        self.trace = Some(TraceSink {
            filename: filename.into(),
            output: output.into(),
        });
        self
    }

    pub fn build(&self) -> Result<Dataset> {
        let names = self.sample_names()?;
        let n_samples = names.len();

        info!("loading {} samples from {}", n_samples, self.dir.display());

        // Decode every filename up front so a bad name fails the build
        // before any file I/O.
        let params: Vec<SampleParams> = names
            .iter()
            .map(|name| SampleParams::decode_filename(name))
            .collect::<Result<_>>()?;

        let grid = FieldGrid::for_target(self.target, self.n_features);
        let extra_column = self.target.carries_anisotropy_column();
        let width = grid.len() + usize::from(extra_column);

        let mut features = Matrix::zeros(n_samples, width);
        let mut targets = Matrix::zeros(n_samples, SampleParams::COUNT);

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        for (j, (name, sample)) in names.iter().zip(params.iter()).enumerate() {
            let path = self.dir.join(name);
            let mut curve = HysteresisCurve::read(&path)?;
            debug!("{}: {} measured points", name, curve.len());

            if self.target.rescales_field() {
                curve.rescale_field(sample.anisotropy_field());
            }

            let draw = self.drift.draw(&mut rng);

            let mut row = interp_linear(grid.points(), &curve.field, &curve.magnetization);
            for v in row.iter_mut() {
                *v /= SATURATION_MAGNETIZATION;
            }
            draw.apply(&mut row);

            if extra_column {
                row.push(sample.k_mean);
            }
            features.set_row(j, &row);
            targets.set_row(j, &sample.as_array());

            if let Some(trace) = &self.trace {
                if trace.filename == *name {
                    write_trace(&trace.output, grid.points(), &row[..grid.len()])?;
                }
            }
        }

        info!("dataset ready: {} samples, {} features", n_samples, self.n_features);

        let mut feature_names = grid.labels();
        if extra_column {
            feature_names.push("K".to_string());
        }

        Ok(Dataset {
            features,
            targets,
            feature_names,
            target_names: TargetParameter::display_names(),
        })
    }

    /// Directory entries sorted by filename.
    ///
    /// Sorting pins the row order of the output matrices, which the raw
    /// directory listing does not guarantee.
    fn sample_names(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|source| DataError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DataError::Io {
                path: self.dir.clone(),
                source,
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        if names.is_empty() {
            return Err(DataError::EmptyDirectory(self.dir.clone()));
        }

        names.sort();
        Ok(names)
    }
}

fn write_trace(output: &Path, grid: &[f64], row: &[f64]) -> Result<()> {
    let io_err = |source| DataError::Io {
        path: output.to_path_buf(),
        source,
    };
    let mut file = fs::File::create(output).map_err(io_err)?;
    for (h, m) in grid.iter().zip(row.iter()) {
        writeln!(file, "{} {}", h, m).map_err(io_err)?;
    }
    Ok(())
}
