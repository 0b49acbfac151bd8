use thiserror::Error;
use uuid::Uuid;

use crate::auth::UserRole;

/// Closed error taxonomy for repz. Every failure site constructs its variant
/// explicitly; nothing is caught and re-wrapped.
///
/// The enum is `Clone + PartialEq` so the store can keep a copy of the last
/// failure in its error slot while also returning it to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepzError {
    /// Rejected input, e.g. an empty title.
    #[error("{0}")]
    Validation(String),

    /// The collection is at its configured capacity.
    #[error("Maximum number of reports reached ({0})")]
    QuotaExceeded(usize),

    /// An operation referenced an id that is not in the collection.
    #[error("Report not found: {0}")]
    NotFound(Uuid),

    /// A mutating operation was attempted without the required capability.
    #[error("The {0} role is not allowed to modify reports")]
    PermissionDenied(UserRole),

    /// Durable read/write failure. Constructed only inside the persistence
    /// adapter and absorbed there; callers of `load`/`save` never see it.
    #[error("Storage failure: {0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, RepzError>;
