//! Footprint assembly: pads, text and KiCad `.kicad_mod` output for generated coils.

mod kicad;

use std::path::{Path, PathBuf};

use coilgen_core::{Coil, CoilType, PadType, Point2D, Segment};
use tracing::debug;

pub use kicad::fmt_mm;

pub const FOOTPRINT_EXTENSION: &str = "kicad_mod";

#[derive(Debug, thiserror::Error)]
pub enum PcbError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write footprint {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadShape {
    Circle,
    Rect,
}

impl PadShape {
    /// Round pads follow a spiral's curve, square pads a square coil's corners.
    pub fn for_coil(coil_type: CoilType) -> Self {
        match coil_type {
            CoilType::Spiral => PadShape::Circle,
            CoilType::Square => PadShape::Rect,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    pub number: u32,
    pub pad_type: PadType,
    pub shape: PadShape,
    pub at: Point2D,
    pub size: f64,
    pub drill: Option<f64>,
}

impl Pad {
    pub fn layers(&self) -> &'static str {
        match self.pad_type {
            PadType::Smt => "F.Cu F.Paste F.Mask",
            PadType::Tht | PadType::Connect => "*.Cu *.Mask",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub segments: Vec<Segment>,
    pub pads: Vec<Pad>,
}

impl Footprint {
    pub fn to_kicad_mod(&self) -> String {
        kicad::render_module(self)
    }
}

/// Pads at both ends of the coil path.
///
/// With a positive `via_offset` the second pad lands that far inside the path's end point,
/// towards the coil center.
pub fn coil_pads(coil: &Coil, via_offset: f64) -> [Pad; 2] {
    let params = coil.params.params();
    let width = params.line_width();
    let shape = PadShape::for_coil(params.coil_type());

    let drill = match params.pad_type() {
        PadType::Tht => Some(params.drill_ratio() * width),
        PadType::Smt | PadType::Connect => None,
    };
    let size = match (drill, params.ring_width()) {
        (Some(drill), Some(ring)) => drill + 2.0 * ring,
        _ => width,
    };

    let pad = |number: u32, at: Point2D| Pad {
        number,
        pad_type: params.pad_type(),
        shape,
        at,
        size,
        drill,
    };
    [
        pad(1, coil.path.start_point()),
        pad(2, coil.path.landing_point(via_offset)),
    ]
}

pub fn coil_footprint(name: &str, coil: &Coil, via_offset: f64) -> Footprint {
    let coil_type = coil.params.params().coil_type();
    Footprint {
        name: name.to_string(),
        description: format!("One-layer {coil_type} coil"),
        tags: format!("coil {coil_type}"),
        segments: coil.path.segments().to_vec(),
        pads: coil_pads(coil, via_offset).to_vec(),
    }
}

/// `path` with the footprint extension appended unless it already has it.
pub fn footprint_path(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == FOOTPRINT_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(FOOTPRINT_EXTENSION);
    PathBuf::from(name)
}

/// Write `footprint` to `path`, overwriting any existing file. Returns the path written.
pub fn save_footprint(footprint: &Footprint, path: &Path) -> Result<PathBuf, PcbError> {
    let path = footprint_path(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| PcbError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, footprint.to_kicad_mod()).map_err(|source| PcbError::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), segments = footprint.segments.len(), "footprint written");
    Ok(path)
}
