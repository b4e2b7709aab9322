use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoilError {
    #[error("invalid coil geometry: {reason}")]
    InvalidGeometry { reason: String },
}

impl CoilError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
