use super::Error;

/// Error when an attribute path does not name a declared attribute.
///
/// This occurs when:
/// - A path ends on a field the owning entity does not declare
/// - A related attribute points at a field missing on the related entity
/// - A template value is read through a projection the entity cannot follow
#[derive(Debug)]
pub(super) struct InvalidPath {
    message: Box<str>,
}

impl std::error::Error for InvalidPath {}

impl core::fmt::Display for InvalidPath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid path: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid path error.
    pub fn invalid_path(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidPath(InvalidPath {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid path error.
    pub fn is_invalid_path(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidPath(_))
    }
}
