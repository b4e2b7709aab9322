//! Coil path generation: spiral and square windings.

pub mod arc;
pub mod spacing;
pub mod spiral;
pub mod square;

pub use arc::{fit_arc, ArcFit};
pub use spacing::{resolve_spacing, Resolution};

use coilgen_core::{Advisory, Coil, CoilError, CoilParameters, CoilType};
use tracing::warn;

/// Upper bound on the segments one coil may be drawn with.
pub const MAX_SEGMENTS: usize = 1_000_000;

/// Generate the coil described by `params`, dispatching on its coil type.
pub fn generate(params: &CoilParameters) -> Result<Coil, CoilError> {
    match params.coil_type() {
        CoilType::Spiral => generate_spiral(params),
        CoilType::Square => generate_square(params),
    }
}

/// Arc chain approximating an Archimedean spiral from `r_inner` to `r_outer`.
pub fn generate_spiral(params: &CoilParameters) -> Result<Coil, CoilError> {
    let Resolution {
        params: resolved,
        advisories,
    } = resolve_spacing(params, CoilType::Spiral)?;
    let path = spiral::spiral_path(&resolved)?;
    report(CoilType::Spiral, &advisories);
    Ok(Coil {
        params: resolved,
        path,
        advisories,
    })
}

/// Square spiral of whole turns from `r_outer` inwards.
pub fn generate_square(params: &CoilParameters) -> Result<Coil, CoilError> {
    let Resolution {
        params: resolved,
        advisories,
    } = resolve_spacing(params, CoilType::Square)?;
    let path = square::square_path(&resolved)?;
    report(CoilType::Square, &advisories);
    Ok(Coil {
        params: resolved,
        path,
        advisories,
    })
}

fn report(coil_type: CoilType, advisories: &[Advisory]) {
    for advisory in advisories {
        warn!(%coil_type, "{advisory}");
    }
}
