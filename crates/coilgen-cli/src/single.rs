use coilgen_core::CoilParameters;
use coilgen_geometry::generate;
use coilgen_pcb::{coil_footprint, save_footprint};
use tracing::info;

use crate::error::{CliError, ErrorCode};
use crate::SingleArgs;

pub fn params_from_args(args: &SingleArgs) -> Result<CoilParameters, CliError> {
    let params = CoilParameters::builder()
        .r_inner(args.r_inner)
        .r_outer(args.r_outer)
        .maybe_n_turns(args.n_turns)
        .maybe_spacing(args.spacing)
        .line_width(args.line_width)
        .coil_type(args.coil_type.into())
        .direction(args.direction.into())
        .points_per_turn(args.points_per_turn)
        .drill_ratio(args.drill_ratio)
        .maybe_ring_width(args.ring_width)
        .pad_type(args.pad_type.into())
        .build()?;
    Ok(params)
}

pub fn run_single(args: &SingleArgs) -> Result<(), CliError> {
    let name = args
        .file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| {
            CliError::new(
                ErrorCode::Usage,
                format!("cannot derive a footprint name from {}", args.file.display()),
            )
        })?;

    let params = params_from_args(args)?;
    let coil = generate(&params)?;
    let footprint = coil_footprint(name, &coil, args.via_offset);
    let written = save_footprint(&footprint, &args.file)?;
    info!(
        path = %written.display(),
        turns = coil.params.n_turns(),
        segments = coil.path.segments().len(),
        "footprint written"
    );

    let spacing = coil.params.spacing();
    if spacing > 0.0 {
        println!("Line spacing = {spacing:.3} mm");
    } else {
        eprintln!("Warning: line spacing = {spacing:.3} mm, adjacent turns overlap");
    }
    Ok(())
}
