use super::Error;
use crate::stmt::Value;

/// Error when a literal value does not fit the column type it is cast to.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    shape: &'static str,
    to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.shape, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// `to_type` is the SQL name of the type the value was cast to.
    pub fn type_conversion(value: &Value, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            shape: value.shape(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::TypeConversion(_))
    }
}
