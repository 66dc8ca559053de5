use super::Error;

/// Error when an entity declaration is inconsistent.
///
/// Raised while building an entity definition, for example on duplicate
/// column names or an auto-number attribute that is not an integer key.
#[derive(Debug)]
pub(super) struct InvalidDefinition {
    message: Box<str>,
}

impl std::error::Error for InvalidDefinition {}

impl core::fmt::Display for InvalidDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid definition: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid definition error.
    ///
    /// Definitions are checked once per entity type, either eagerly when
    /// registered with the builder or on first resolution.
    pub fn invalid_definition(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDefinition(InvalidDefinition {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid definition error.
    pub fn is_invalid_definition(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDefinition(_))
    }
}
