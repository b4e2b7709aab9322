//! Reconciles a requested turn count with a requested gap between turns.
//!
//! Either value can drive the geometry. Whichever one the caller supplied is authoritative and the
//! other is derived from it; `n_turns` wins when both are present.

use coilgen_core::{Advisory, CoilError, CoilParameters, CoilType, ResolvedParameters};

/// Largest turn-count change that truncation may make without being reported.
pub const TURN_TRUNCATION_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub params: ResolvedParameters,
    pub advisories: Vec<Advisory>,
}

/// Resolve `params` for the given generator.
///
/// The spiral keeps a fractional turn count so the winding finishes exactly at `r_outer`; the
/// square can only close whole turns and truncates.
pub fn resolve_spacing(
    params: &CoilParameters,
    coil_type: CoilType,
) -> Result<Resolution, CoilError> {
    let span = params.radial_span();
    let width = params.line_width();
    let mut advisories = Vec::new();

    let (n_turns, spacing) = match (params.n_turns(), params.spacing()) {
        (Some(requested), _) => match coil_type {
            CoilType::Spiral => (requested, spiral_spacing(span, requested, width)),
            CoilType::Square => {
                let turns = whole_turns(requested, &mut advisories)?;
                (f64::from(turns), square_spacing(span, turns, width))
            }
        },
        (None, Some(spacing)) => {
            let pitch = width + spacing;
            if pitch <= 0.0 {
                return Err(CoilError::invalid(format!(
                    "line_width + spacing must be > 0 (got {pitch})"
                )));
            }
            let effective = span / pitch;
            match coil_type {
                CoilType::Spiral => (effective, spacing),
                CoilType::Square => {
                    let turns = whole_turns(effective, &mut advisories)?;
                    (f64::from(turns), spacing)
                }
            }
        }
        (None, None) => {
            return Err(CoilError::invalid(
                "either n_turns or spacing must be given",
            ));
        }
    };

    if n_turns <= 0.0 {
        return Err(CoilError::invalid(format!(
            "resolved turn count must be > 0 (got {n_turns})"
        )));
    }
    if spacing <= 0.0 {
        advisories.push(Advisory::NonPositiveSpacing { spacing });
    }

    Ok(Resolution {
        params: ResolvedParameters::new(params.clone(), n_turns, spacing),
        advisories,
    })
}

/// Gap between adjacent spiral turns: radial growth over one full turn minus the copper width.
pub fn spiral_spacing(span: f64, n_turns: f64, line_width: f64) -> f64 {
    span / n_turns - line_width
}

/// Half-extent step between adjacent square rings.
///
/// A single ring has nothing to step to; it is given a forced step of twice the line width so the
/// path stays open instead of closing on itself.
pub fn square_step(span: f64, n_turns: u32, line_width: f64) -> f64 {
    if n_turns > 1 {
        span / f64::from(n_turns - 1)
    } else {
        2.0 * line_width
    }
}

pub fn square_spacing(span: f64, n_turns: u32, line_width: f64) -> f64 {
    square_step(span, n_turns, line_width) - line_width
}

fn whole_turns(requested: f64, advisories: &mut Vec<Advisory>) -> Result<u32, CoilError> {
    let truncated = requested.trunc();
    if truncated < 1.0 {
        return Err(CoilError::invalid(format!(
            "square coil needs at least one whole turn (got {requested:.3})"
        )));
    }
    if truncated > f64::from(u32::MAX) {
        return Err(CoilError::invalid(format!(
            "turn count {requested} is out of range"
        )));
    }
    let used = truncated as u32;
    if requested - truncated > TURN_TRUNCATION_TOLERANCE {
        advisories.push(Advisory::TurnsTruncated { requested, used });
    }
    Ok(used)
}
