use crate::error::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
