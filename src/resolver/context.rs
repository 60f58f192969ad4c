//! Request context passed into inbound resolution.

/// Immutable view of the incoming request.
///
/// The resolver only needs the raw path-info string, exactly as the
/// framework received it (locale prefix and percent-escapes intact).
#[derive(Debug, Clone)]
pub struct RequestContext {
    path_info: String,
}

impl RequestContext {
    /// Create a context from the request's raw path-info.
    pub fn new(path_info: impl Into<String>) -> Self {
        Self {
            path_info: path_info.into(),
        }
    }

    /// The raw path-info string.
    pub fn path_info(&self) -> &str {
        &self.path_info
    }
}
