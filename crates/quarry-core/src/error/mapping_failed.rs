use super::Error;

/// Error when a selection cannot be carried over to another entity type.
///
/// The target lacks a field with the same name, or the field exists with
/// a different shape (relation versus attribute, or a different value type).
#[derive(Debug)]
pub(super) struct MappingFailed {
    message: Box<str>,
}

impl std::error::Error for MappingFailed {}

impl core::fmt::Display for MappingFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping failed: {}", self.message)
    }
}

impl Error {
    /// Creates a mapping failed error.
    pub fn mapping_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MappingFailed(MappingFailed {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a mapping failed error.
    pub fn is_mapping_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingFailed(_))
    }
}
