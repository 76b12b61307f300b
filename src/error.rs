/// Errors that can occur while parsing a URL into its query model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `?` is present but no `key=value` token follows it
    MalformedInput,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::MalformedInput => "Malformed query string",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Internal failure while form-encoding a pending parameter value.
/// Never returned to callers: serialization drops the pending parameters instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EncodingFailure;

impl From<core::fmt::Error> for EncodingFailure {
    fn from(_: core::fmt::Error) -> Self {
        Self
    }
}

impl core::fmt::Display for EncodingFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Failed to form-encode value")
    }
}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
