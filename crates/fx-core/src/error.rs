use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FxError {
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("invalid range for {name}: {min}..{max}")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("vortex recycle depth {recycle} must be below max depth {max}")]
    DepthOrder { recycle: f32, max: f32 },
}

pub type Result<T> = std::result::Result<T, FxError>;

pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FxError::NonPositive { name, value })
    }
}
