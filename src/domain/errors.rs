/// Simplified error system - no over-engineering!
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    NetworkError(String),
    HttpStatus(u16),
    ParseError(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            DataError::HttpStatus(code) => write!(f, "HTTP error: {}", code),
            DataError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
        }
    }
}

impl std::error::Error for DataError {}

/// Poll-cycle failures as the tracker surfaces them.
///
/// A seed failure is terminal for that start attempt; an update failure is
/// transient and retried on the slower delay. A response that arrives but
/// cannot be interpreted counts as a failure of the same stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollError {
    SeedFetchFailed(String),
    UpdateFetchFailed(String),
    MalformedResponse(String),
}

impl PollError {
    /// True when the error ends the current start attempt instead of
    /// re-arming the update loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PollError::SeedFetchFailed(_))
    }
}

impl std::fmt::Display for PollError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollError::SeedFetchFailed(msg) => write!(f, "Seed fetch failed: {}", msg),
            PollError::UpdateFetchFailed(msg) => write!(f, "Update fetch failed: {}", msg),
            PollError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for PollError {}

// Simple convenience type alias
pub type NetworkResult<T> = Result<T, DataError>;
