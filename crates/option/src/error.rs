use thiserror::Error;

/// Returned (or panicked with) when the held value of an `O::Absent` is requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("unwrap() called on an O instance holding nothing")]
pub struct AbsentError;
