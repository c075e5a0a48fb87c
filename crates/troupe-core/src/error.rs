use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TroupeError>;

/// All errors Troupe surfaces.
///
/// Nothing is retried or recovered locally; whatever the store raises is
/// mapped into one of these variants and handed straight to the caller.
#[derive(Debug, Error)]
pub enum TroupeError {
    /// An age-range lookup was made against a collection with no artists.
    #[error("artist collection is empty")]
    EmptyCollection,

    /// The store rejected the query (invalid sort field, malformed
    /// predicate).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The remote collection does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote store rejected our credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// Everything else the store surfaces: transport failures, malformed
    /// responses, server-side errors.
    #[error("store error: {0}")]
    Store(String),
}
