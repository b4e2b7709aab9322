use coilgen_core::CoilError;
use coilgen_pcb::PcbError;

use crate::bulk::SweepError;

/// Process exit status for each failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Usage = 1,
    /// Rejected coil parameters or sweep config.
    Input = 2,
    /// Footprint generation or writing failed.
    Processing = 3,
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<CoilError> for CliError {
    fn from(err: CoilError) -> Self {
        Self::new(ErrorCode::Input, err.to_string())
    }
}

impl From<PcbError> for CliError {
    fn from(err: PcbError) -> Self {
        Self::new(ErrorCode::Processing, err.to_string())
    }
}

impl From<SweepError> for CliError {
    fn from(err: SweepError) -> Self {
        Self::new(ErrorCode::Input, err.to_string())
    }
}
