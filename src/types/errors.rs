use std::fmt;

// === StorageError ===

/// Errors from the durable state store.
///
/// These are non-fatal on the persist-on-write path: the in-memory state
/// stays authoritative for the session and the failure is only logged.
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the state file failed.
    IoError(String),
    /// The state blob could not be serialized or deserialized.
    SerializationError(String),
    /// A versioned state blob could not be upgraded to the current shape.
    MigrationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(msg) => write!(f, "State store I/O error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "State serialization error: {}", msg)
            }
            StorageError::MigrationError(msg) => write!(f, "State migration error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === FetchError ===

/// Errors from the HTML fetch step of metadata enrichment.
///
/// Never surfaces to store callers: enrichment swallows these and degrades
/// to an all-`None` metadata record.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    ClientBuild(String),
    /// The request failed (connect error, timeout, abort).
    RequestFailed(String),
    /// The response body could not be read.
    BodyRead(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::ClientBuild(msg) => write!(f, "HTTP client build failed: {}", msg),
            FetchError::RequestFailed(msg) => write!(f, "Metadata fetch failed: {}", msg),
            FetchError::BodyRead(msg) => write!(f, "Metadata body read failed: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

// === DeepLinkError ===

/// Errors from parsing an inbound deep link.
///
/// Caught and logged by the deep-link bridge; never affects store state.
#[derive(Debug)]
pub enum DeepLinkError {
    /// The deep link was not a URL at all.
    Unparsable(String),
    /// The deep link path is not one the app handles.
    UnknownPath(String),
    /// The `url` query parameter was missing or not an acceptable URL.
    BadCandidate(String),
}

impl fmt::Display for DeepLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepLinkError::Unparsable(raw) => write!(f, "Unparsable deep link: {}", raw),
            DeepLinkError::UnknownPath(path) => write!(f, "Unknown deep link path: {}", path),
            DeepLinkError::BadCandidate(cand) => {
                write!(f, "Deep link candidate is not a usable URL: {}", cand)
            }
        }
    }
}

impl std::error::Error for DeepLinkError {}
