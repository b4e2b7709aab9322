//! Value types shared by the coil generators and footprint assembly.

mod advisory;
mod error;
mod params;
mod path;
mod point;

pub use advisory::Advisory;
pub use error::CoilError;
pub use params::{CoilParameters, CoilType, Direction, PadType, ResolvedParameters};
pub use path::{Coil, CoilPath, Segment, SegmentShape, COPPER_LAYER};
pub use point::Point2D;
