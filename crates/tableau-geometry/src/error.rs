//! Geometry construction errors

/// Errors raised when shape parameters cannot yield a valid solid.
///
/// Validation happens before any buffer is built, so a failed construction
/// leaves nothing to clean up.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("{shape}: needs at least {min} {what}, got {got}")]
    TooFewSubdivisions {
        shape: &'static str,
        what: &'static str,
        min: u32,
        got: u32,
    },

    #[error("{shape}: {what} must be positive, got {got}")]
    NonPositiveDimension {
        shape: &'static str,
        what: &'static str,
        got: f32,
    },
}
