/// Convenience result type used across Lifereel.
pub type LifereelResult<T> = Result<T, LifereelError>;

/// Top-level error taxonomy used by engine APIs.
///
/// The timing core itself is total over well-formed inputs; these variants
/// surface at the collaborator boundaries (story persistence, caller input)
/// and are never produced by duration computation or transport operations.
#[derive(thiserror::Error, Debug)]
pub enum LifereelError {
    /// Invalid user-provided or story data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required caller input was absent (e.g. an empty story id).
    #[error("missing input: {0}")]
    InputMissing(String),

    /// A story id had no matching record. Distinct from [`LifereelError::InputMissing`].
    #[error("not found: {0}")]
    NotFound(String),

    /// An excluded collaborator (persistence, search) was unreachable or failed.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LifereelError {
    /// Build a [`LifereelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LifereelError::InputMissing`] value.
    pub fn input_missing(msg: impl Into<String>) -> Self {
        Self::InputMissing(msg.into())
    }

    /// Build a [`LifereelError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`LifereelError::Upstream`] value.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
