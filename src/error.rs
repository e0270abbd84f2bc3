use std::num::ParseIntError;
use thiserror::Error;

/// Failures raised by the persistence collaborator.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    Closed,
    #[error("Store dropped the request")]
    Dropped,
    #[error("Identifier was never assigned by this store: {0}")]
    UnknownId(String),
}

/// Errors surfaced by the catalog services.
///
/// "Not found" is never an error here; it is reported through
/// [`Lookup::NotFound`](crate::lifecycle::Lookup) or a `false` return.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("Malformed identifier {raw:?}: {source}")]
    MalformedId {
        raw: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),
}
