//! Archimedean spiral approximated by circular arcs.
//!
//! The spiral is `r(θ) = r_inner + b·|θ|` with `b = (r_outer - r_inner) / total_angle`. Angles are
//! signed by the winding direction, so a clockwise coil is the counter-clockwise one mirrored about
//! the x axis. The spiral is first treated as a zero-width curve; the copper width is only applied
//! when segments are drawn.

use std::f64::consts::TAU;

use coilgen_core::{CoilError, CoilPath, Direction, Point2D, ResolvedParameters, Segment};
use tracing::debug;

use crate::arc::{fit_arc, ArcFit};
use crate::MAX_SEGMENTS;

/// Relative tolerance for treating the sweep as an exact multiple of the sampling step.
const STEP_EPS: f64 = 1e-6;

struct SpiralLaw {
    r_inner: f64,
    growth_per_rad: f64,
    sign: f64,
}

impl SpiralLaw {
    fn point_at(&self, angle_deg: f64) -> Point2D {
        let theta = angle_deg.to_radians();
        let r = self.r_inner + self.growth_per_rad * theta;
        Point2D::from_polar(r, self.sign * theta)
    }
}

/// Sample angles in degrees: every multiple of `step_deg` strictly below `total_deg`, then
/// `total_deg` itself. The last interval may be shorter than `step_deg`; it never overshoots.
pub fn sample_angles(total_deg: f64, step_deg: f64) -> Vec<f64> {
    let ratio = total_deg / step_deg;
    let steps = if (ratio - ratio.round()).abs() <= STEP_EPS * ratio.max(1.0) {
        ratio.round()
    } else {
        ratio.ceil()
    };
    let steps = steps.max(1.0) as usize;

    let mut angles: Vec<f64> = (0..steps).map(|i| i as f64 * step_deg).collect();
    angles.push(total_deg);
    angles
}

pub fn spiral_path(resolved: &ResolvedParameters) -> Result<CoilPath, CoilError> {
    let params = resolved.params();
    let total_deg = 360.0 * resolved.n_turns();
    if !(total_deg.is_finite() && total_deg > 0.0) {
        return Err(CoilError::invalid(format!(
            "spiral sweep must be > 0 (got {total_deg} deg)"
        )));
    }

    let samples = resolved.n_turns() * params.points_per_turn();
    if !(samples <= MAX_SEGMENTS as f64) {
        return Err(CoilError::invalid(format!(
            "spiral needs {samples:.0} arcs, more than the limit of {MAX_SEGMENTS}"
        )));
    }

    let law = SpiralLaw {
        r_inner: params.r_inner(),
        growth_per_rad: params.radial_span() / total_deg.to_radians(),
        sign: params.direction().sign(),
    };
    let angles = sample_angles(total_deg, 360.0 / params.points_per_turn());
    let width = params.line_width();

    let segments = angles
        .windows(2)
        .map(|pair| {
            let (a0, a1) = (pair[0], pair[1]);
            let start = law.point_at(a0);
            let mid = law.point_at((a0 + a1) / 2.0);
            let end = law.point_at(a1);
            segment_through(start, mid, end, params.direction(), width)
        })
        .collect();

    let start_point = law.point_at(angles[0]);
    let end_point = law.point_at(total_deg);
    Ok(CoilPath::new(segments, start_point, end_point))
}

/// Arc from `start` through `mid` to `end`, or a straight line when the three are collinear.
fn segment_through(
    start: Point2D,
    mid: Point2D,
    end: Point2D,
    direction: Direction,
    width: f64,
) -> Segment {
    match fit_arc(start, mid, end) {
        ArcFit::Circle { center, sweep_rad } => {
            let sweep = normalize_sweep(sweep_rad, direction);
            Segment::arc(center, start, sweep.to_degrees(), width)
        }
        ArcFit::Collinear => {
            debug!(?start, ?end, "collinear spiral samples, drawing a line");
            Segment::line(start, end, width)
        }
    }
}

/// Bring a fitted sweep onto the winding direction so no arc goes the long way round.
fn normalize_sweep(sweep_rad: f64, direction: Direction) -> f64 {
    match direction {
        Direction::CounterClockwise if sweep_rad < 0.0 => sweep_rad + TAU,
        Direction::Clockwise if sweep_rad > 0.0 => sweep_rad - TAU,
        _ => sweep_rad,
    }
}
