//! Square spiral built from concentric rings of four corners.
//!
//! It is assumed the coil should fill as much area as possible, so a side is only shortened once
//! per full turn. Each ring's last corner is stepped in by one ring pitch, leaving it open towards
//! the next ring; the path starts on a corner of the outermost ring and ends on that stepped corner
//! of the innermost one.

use coilgen_core::{CoilError, CoilPath, Direction, Point2D, ResolvedParameters, Segment};

use crate::spacing::square_step;
use crate::MAX_SEGMENTS;

/// Corners of one ring with half-extent `r`, the last one stepped in to `next`.
fn ring_corners(r: f64, next: f64, direction: Direction) -> [Point2D; 4] {
    match direction {
        Direction::CounterClockwise => [
            Point2D::new(-r, -r),
            Point2D::new(-r, r),
            Point2D::new(r, r),
            Point2D::new(r, -next),
        ],
        Direction::Clockwise => [
            Point2D::new(r, r),
            Point2D::new(-r, r),
            Point2D::new(-r, -r),
            Point2D::new(next, -r),
        ],
    }
}

/// Half-extent of each ring, outermost first, followed by the extent the innermost ring steps
/// in to.
fn stepped_extents(resolved: &ResolvedParameters) -> Vec<f64> {
    let params = resolved.params();
    let turns = resolved.n_turns() as u32;
    let step = square_step(params.radial_span(), turns, params.line_width());
    (0..=turns)
        .map(|i| params.r_outer() - f64::from(i) * step)
        .collect()
}

/// Half-extent of each ring, outermost first.
pub fn ring_half_extents(resolved: &ResolvedParameters) -> Vec<f64> {
    let mut extents = stepped_extents(resolved);
    extents.pop();
    extents
}

pub fn square_path(resolved: &ResolvedParameters) -> Result<CoilPath, CoilError> {
    let params = resolved.params();
    let direction = params.direction();

    let lines = 4.0 * resolved.n_turns() - 1.0;
    if !(lines <= MAX_SEGMENTS as f64) {
        return Err(CoilError::invalid(format!(
            "square coil needs {lines:.0} lines, more than the limit of {MAX_SEGMENTS}"
        )));
    }

    let points: Vec<Point2D> = stepped_extents(resolved)
        .windows(2)
        .flat_map(|pair| ring_corners(pair[0], pair[1], direction))
        .collect();

    let (Some(&start_point), Some(&end_point)) = (points.first(), points.last()) else {
        return Err(CoilError::invalid("square coil needs at least one turn"));
    };

    let width = params.line_width();
    let segments = points
        .windows(2)
        .map(|pair| Segment::line(pair[0], pair[1], width))
        .collect();

    Ok(CoilPath::new(segments, start_point, end_point))
}
