use super::Error;

/// Error when a table definition is assembled incorrectly.
///
/// This occurs when:
/// - A column name is used twice on the same table
/// - A unique group names a column owned by another table
/// - `ON DELETE CASCADE` is requested on a column without a foreign target
/// - A table or column handle does not belong to the schema
///
/// These are mistakes in the code building the schema, reported at the call
/// that made them.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::InvalidSchema(_))
    }
}
