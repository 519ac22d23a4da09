use thiserror::Error;

/// An upstream record that was expected to exist could not be found.
///
/// Raised when a cross-service reference (e.g. the user behind a log entry)
/// does not resolve to any record in the owning microservice.
///
/// # Example
/// ```
/// use audit_gateway::error::entity::NotFoundError;
///
/// let err = NotFoundError::new("User", "42");
/// assert_eq!(err.to_string(), "User 42 not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Name of the entity that was not found (e.g. `"User"`)
    pub entity: &'static str,
    /// Identifier that was looked up
    pub id: String,
}

impl NotFoundError {
    pub fn new(entity: &'static str, id: impl Into<String>) -> Self {
        Self {
            entity,
            id: id.into(),
        }
    }
}
