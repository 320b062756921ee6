/// Errors surfaced by generation and rebuilds.
///
/// Both variants are reported synchronously to the caller; a failed rebuild
/// never disturbs the currently attached galaxy.
#[derive(Debug, thiserror::Error)]
pub enum GalaxyError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("buffer allocation failed: {0}")]
    AllocationFailure(String),
}
