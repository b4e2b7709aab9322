use std::fmt;

use bon::bon;
use serde::{Deserialize, Serialize};

use crate::CoilError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoilType {
    #[default]
    Spiral,
    Square,
}

impl CoilType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CoilType::Spiral => "spiral",
            CoilType::Square => "square",
        }
    }
}

impl fmt::Display for CoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Winding direction, starting from the first sampled point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    CounterClockwise,
    Clockwise,
}

impl Direction {
    /// `+1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub const fn sign(&self) -> f64 {
        match self {
            Direction::CounterClockwise => 1.0,
            Direction::Clockwise => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadType {
    Smt,
    Tht,
    #[default]
    Connect,
}

/// One coil request.
///
/// Exactly one of `n_turns` and `spacing` is expected to carry the caller's intent. When both are
/// present `n_turns` wins and `spacing` is only reported back; when neither is present the value
/// still constructs, and generation rejects it.
///
/// The pad fields (`drill_ratio`, `ring_width`, `pad_type`) are not read by the geometry
/// generators; they travel with the request for footprint assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoilParameters {
    r_inner: f64,
    r_outer: f64,
    n_turns: Option<f64>,
    spacing: Option<f64>,
    line_width: f64,
    coil_type: CoilType,
    direction: Direction,
    points_per_turn: f64,
    drill_ratio: f64,
    ring_width: Option<f64>,
    pad_type: PadType,
}

#[bon]
impl CoilParameters {
    #[builder]
    pub fn new(
        r_inner: f64,
        r_outer: f64,
        n_turns: Option<f64>,
        spacing: Option<f64>,
        line_width: f64,
        #[builder(default)] coil_type: CoilType,
        #[builder(default)] direction: Direction,
        #[builder(default = 4.0)] points_per_turn: f64,
        #[builder(default = 0.6)] drill_ratio: f64,
        ring_width: Option<f64>,
        #[builder(default)] pad_type: PadType,
    ) -> Result<Self, CoilError> {
        let params = Self {
            r_inner,
            r_outer,
            n_turns,
            spacing,
            line_width,
            coil_type,
            direction,
            points_per_turn,
            drill_ratio,
            ring_width,
            pad_type,
        };
        params.validate()?;
        Ok(params)
    }
}

impl CoilParameters {
    fn validate(&self) -> Result<(), CoilError> {
        if !self.r_inner.is_finite() || !self.r_outer.is_finite() {
            return Err(CoilError::invalid("radii must be finite"));
        }
        if self.r_inner <= 0.0 {
            return Err(CoilError::invalid(format!(
                "r_inner must be > 0 (got {})",
                self.r_inner
            )));
        }
        if self.r_outer <= self.r_inner {
            return Err(CoilError::invalid(format!(
                "r_outer ({}) must be greater than r_inner ({})",
                self.r_outer, self.r_inner
            )));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(CoilError::invalid(format!(
                "line_width must be > 0 (got {})",
                self.line_width
            )));
        }
        if let Some(n) = self.n_turns {
            if !(n.is_finite() && n > 0.0) {
                return Err(CoilError::invalid(format!("n_turns must be > 0 (got {n})")));
            }
        }
        if let Some(s) = self.spacing {
            if !s.is_finite() {
                return Err(CoilError::invalid("spacing must be finite"));
            }
        }
        // At 2 or fewer samples per turn one arc would have to sweep half a turn or more.
        if !(self.points_per_turn.is_finite() && self.points_per_turn > 2.0) {
            return Err(CoilError::invalid(format!(
                "points_per_turn must be > 2 (got {})",
                self.points_per_turn
            )));
        }
        if !(self.drill_ratio > 0.0 && self.drill_ratio <= 1.0) {
            return Err(CoilError::invalid(format!(
                "drill_ratio must be in (0, 1] (got {})",
                self.drill_ratio
            )));
        }
        if let Some(ring) = self.ring_width {
            if !(ring.is_finite() && ring >= 0.0) {
                return Err(CoilError::invalid(format!(
                    "ring_width must be >= 0 (got {ring})"
                )));
            }
        }
        Ok(())
    }

    pub fn r_inner(&self) -> f64 {
        self.r_inner
    }

    pub fn r_outer(&self) -> f64 {
        self.r_outer
    }

    pub fn n_turns(&self) -> Option<f64> {
        self.n_turns
    }

    pub fn spacing(&self) -> Option<f64> {
        self.spacing
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn coil_type(&self) -> CoilType {
        self.coil_type
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn points_per_turn(&self) -> f64 {
        self.points_per_turn
    }

    pub fn drill_ratio(&self) -> f64 {
        self.drill_ratio
    }

    pub fn ring_width(&self) -> Option<f64> {
        self.ring_width
    }

    pub fn pad_type(&self) -> PadType {
        self.pad_type
    }

    /// Radial distance the winding has to cover.
    pub fn radial_span(&self) -> f64 {
        self.r_outer - self.r_inner
    }
}

/// Parameters after turn/spacing resolution; both values are concrete and consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedParameters {
    params: CoilParameters,
    n_turns: f64,
    spacing: f64,
}

impl ResolvedParameters {
    #[must_use]
    pub fn new(params: CoilParameters, n_turns: f64, spacing: f64) -> Self {
        Self {
            params,
            n_turns,
            spacing,
        }
    }

    pub fn params(&self) -> &CoilParameters {
        &self.params
    }

    pub fn n_turns(&self) -> f64 {
        self.n_turns
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}
