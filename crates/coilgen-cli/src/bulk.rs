//! Parameter sweep over outer radius and coil type.

use std::path::{Path, PathBuf};

use coilgen_core::{CoilError, CoilParameters, CoilType};
use coilgen_geometry::generate;
use coilgen_pcb::{coil_footprint, save_footprint};
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::error::{CliError, ErrorCode};
use crate::BulkArgs;

/// Slack when stepping to `max_outer_radius_mm`, so 10 + 18 * 5 still reaches 100.
const RADIUS_EPS: f64 = 1e-9;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    #[error("failed to read sweep config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sweep config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid sweep config: {0}")]
    Invalid(String),
    #[error(transparent)]
    Parameters(#[from] CoilError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub trace_width_mm: f64,
    pub trace_spacing_mm: f64,
    pub inner_radius_mm: f64,
    pub min_outer_radius_mm: f64,
    pub max_outer_radius_mm: f64,
    pub step_radius_mm: f64,
    pub coil_types: Vec<CoilType>,
    /// Decimal places kept for non-integral dimensions in file names.
    pub sig_figs: usize,
    pub output_dir: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            trace_width_mm: 0.128,
            trace_spacing_mm: 0.128,
            inner_radius_mm: 2.0,
            min_outer_radius_mm: 10.0,
            max_outer_radius_mm: 100.0,
            step_radius_mm: 5.0,
            coil_types: vec![CoilType::Spiral, CoilType::Square],
            sig_figs: 3,
            output_dir: PathBuf::from("bulk_output"),
        }
    }
}

impl SweepConfig {
    pub fn load(path: &Path) -> Result<Self, SweepError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SweepError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = if raw.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(&raw).map_err(|source| SweepError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SweepError> {
        let positive = [
            ("trace_width_mm", self.trace_width_mm),
            ("trace_spacing_mm", self.trace_spacing_mm),
            ("inner_radius_mm", self.inner_radius_mm),
            ("min_outer_radius_mm", self.min_outer_radius_mm),
            ("max_outer_radius_mm", self.max_outer_radius_mm),
            ("step_radius_mm", self.step_radius_mm),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SweepError::Invalid(format!("{field} must be > 0 (got {value})")));
            }
        }
        if self.max_outer_radius_mm <= self.min_outer_radius_mm {
            return Err(SweepError::Invalid(format!(
                "max_outer_radius_mm ({}) must be greater than min_outer_radius_mm ({})",
                self.max_outer_radius_mm, self.min_outer_radius_mm
            )));
        }
        if self.inner_radius_mm >= self.min_outer_radius_mm {
            return Err(SweepError::Invalid(format!(
                "inner_radius_mm ({}) must be below min_outer_radius_mm ({})",
                self.inner_radius_mm, self.min_outer_radius_mm
            )));
        }
        if self.coil_types.is_empty() {
            return Err(SweepError::Invalid("coil_types must not be empty".into()));
        }
        Ok(())
    }

    /// Outer radii from min to max inclusive.
    pub fn outer_radii(&self) -> Vec<f64> {
        let span = self.max_outer_radius_mm - self.min_outer_radius_mm;
        let steps = (span / self.step_radius_mm + RADIUS_EPS).floor() as usize;
        (0..=steps)
            .map(|i| self.min_outer_radius_mm + i as f64 * self.step_radius_mm)
            .collect()
    }

    /// One spacing-driven parameter set per outer radius and coil type.
    pub fn sweep_parameters(&self) -> Result<Vec<CoilParameters>, SweepError> {
        let mut params = Vec::new();
        for r_outer in self.outer_radii() {
            for &coil_type in &self.coil_types {
                params.push(
                    CoilParameters::builder()
                        .r_inner(self.inner_radius_mm)
                        .r_outer(r_outer)
                        .spacing(self.trace_spacing_mm)
                        .line_width(self.trace_width_mm)
                        .coil_type(coil_type)
                        .build()?,
                );
            }
        }
        Ok(params)
    }
}

fn format_dimension(value: f64, sig_figs: usize) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let s = format!("{value:.sig_figs$}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

/// `coil_<type>_r<R>mm_tw<W>mm.kicad_mod`
pub fn footprint_file_name(params: &CoilParameters, sig_figs: usize) -> String {
    format!(
        "coil_{}_r{}mm_tw{}mm.kicad_mod",
        params.coil_type(),
        format_dimension(params.r_outer(), sig_figs),
        format_dimension(params.line_width(), sig_figs)
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub written: usize,
    pub failed: usize,
}

/// Generate and save every footprint of the sweep into `output_dir`. A failing item is logged and
/// counted; the rest still run.
pub fn run_sweep(config: &SweepConfig, output_dir: &Path) -> Result<SweepReport, SweepError> {
    let params = config.sweep_parameters()?;
    info!(count = params.len(), dir = %output_dir.display(), "starting bulk sweep");

    let mut report = SweepReport::default();
    for param in &params {
        let file_name = footprint_file_name(param, config.sig_figs);
        let path = output_dir.join(&file_name);
        let name = file_name.trim_end_matches(".kicad_mod");
        debug!(file = %file_name, "generating footprint");

        let result = generate(param)
            .map_err(CliError::from)
            .and_then(|coil| {
                save_footprint(&coil_footprint(name, &coil, 0.0), &path).map_err(CliError::from)
            });
        match result {
            Ok(_) => report.written += 1,
            Err(err) => {
                error!(file = %file_name, "{err}");
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

pub fn run_bulk_command(args: &BulkArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => SweepConfig::load(path)?,
        None => SweepConfig::default(),
    };
    let output_dir = args.output.as_ref().unwrap_or(&config.output_dir);

    let report = run_sweep(&config, output_dir)?;
    println!(
        "Wrote {} footprints to {}",
        report.written,
        output_dir.display()
    );
    if report.failed > 0 {
        return Err(CliError::new(
            ErrorCode::Processing,
            format!(
                "{} of {} footprints failed",
                report.failed,
                report.written + report.failed
            ),
        ));
    }
    Ok(())
}
