//! Error taxonomy shared by the registry and the HTTP boundary.

/// Closed set of failure kinds raised by the core.
///
/// The core raises these synchronously and never swallows or retries; the
/// boundary layer owns the translation into transport responses (see
/// `server::types::status_for`), keeping the core transport-unaware.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    /// Submitted mock definition violates the schema.
    #[error("{0}")]
    Validation(String),

    /// A definition already occupies the derived lookup key.
    #[error("{0}")]
    AlreadyExists(String),

    /// No mock matched, or a sequenced mock has run out of responses.
    #[error("{0}")]
    NotFound(String),

    /// Catch-all for failures outside the taxonomy above.
    #[error("{0}")]
    Unspecified(String),
}

impl MockError {
    /// Stable kind name used in wire error reports.
    pub fn kind(&self) -> &'static str {
        match self {
            MockError::Validation(_) => "ValidationError",
            MockError::AlreadyExists(_) => "AlreadyExistsError",
            MockError::NotFound(_) => "NotFoundError",
            MockError::Unspecified(_) => "UnspecifiedError",
        }
    }
}
