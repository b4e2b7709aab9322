use serde::{Deserialize, Serialize};

use crate::{Advisory, Point2D, ResolvedParameters};

/// Copper layer every coil segment is drawn on.
pub const COPPER_LAYER: &str = "F.Cu";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SegmentShape {
    Line {
        start: Point2D,
        end: Point2D,
    },
    /// Circular arc from `start` around `center`; positive sweep is counter-clockwise.
    Arc {
        center: Point2D,
        start: Point2D,
        sweep_deg: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub shape: SegmentShape,
    pub layer: &'static str,
    pub width: f64,
}

impl Segment {
    #[must_use]
    pub fn line(start: Point2D, end: Point2D, width: f64) -> Self {
        Self {
            shape: SegmentShape::Line { start, end },
            layer: COPPER_LAYER,
            width,
        }
    }

    #[must_use]
    pub fn arc(center: Point2D, start: Point2D, sweep_deg: f64, width: f64) -> Self {
        Self {
            shape: SegmentShape::Arc {
                center,
                start,
                sweep_deg,
            },
            layer: COPPER_LAYER,
            width,
        }
    }

    #[must_use]
    pub fn start(&self) -> Point2D {
        match self.shape {
            SegmentShape::Line { start, .. } | SegmentShape::Arc { start, .. } => start,
        }
    }

    /// End point; for arcs this is `start` rotated by the sweep around the center.
    #[must_use]
    pub fn end(&self) -> Point2D {
        match self.shape {
            SegmentShape::Line { end, .. } => end,
            SegmentShape::Arc {
                center,
                start,
                sweep_deg,
            } => {
                let (s, c) = sweep_deg.to_radians().sin_cos();
                let dx = start.x - center.x;
                let dy = start.y - center.y;
                Point2D::new(center.x + dx * c - dy * s, center.y + dx * s + dy * c)
            }
        }
    }
}

/// Ordered electrical path of one coil plus the two points pads attach to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoilPath {
    segments: Vec<Segment>,
    start_point: Point2D,
    end_point: Point2D,
}

impl CoilPath {
    #[must_use]
    pub fn new(segments: Vec<Segment>, start_point: Point2D, end_point: Point2D) -> Self {
        Self {
            segments,
            start_point,
            end_point,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn start_point(&self) -> Point2D {
        self.start_point
    }

    pub fn end_point(&self) -> Point2D {
        self.end_point
    }

    /// End point moved `offset` mm towards the coil center, for a via or pad landing.
    #[must_use]
    pub fn landing_point(&self, offset: f64) -> Point2D {
        if offset <= 0.0 {
            return self.end_point;
        }
        self.end_point.towards_origin(offset)
    }
}

/// Result of one generation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coil {
    pub params: ResolvedParameters,
    pub path: CoilPath,
    pub advisories: Vec<Advisory>,
}
