mod adhoc;
mod invalid_schema;
mod type_conversion;
mod unsupported_feature;

use adhoc::AdhocError;
use invalid_schema::InvalidSchema;
use std::{fmt, sync::Arc};
use type_conversion::TypeConversionError;
use unsupported_feature::UnsupportedFeature;

/// Builds an ad-hoc [`Error`] from a format string, usually to pass to
/// [`Error::context`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building or rendering a schema.
///
/// An error may carry a cause, added with [`Error::context`]. It displays as
/// `outer: ...: root`, and the `is_*` predicates classify the root.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    InvalidSchema(InvalidSchema),
    TypeConversion(TypeConversionError),
    UnsupportedFeature(UnsupportedFeature),
}

impl Error {
    /// Wraps this error in `outer`, which describes what was being done when
    /// it occurred.
    pub fn context(self, outer: Error) -> Error {
        let kind = match Arc::try_unwrap(outer.inner) {
            Ok(ErrorInner { kind, cause: None }) => kind,
            // `outer` is shared or already has a cause; keep its text only
            Ok(inner) => ErrorKind::Adhoc(AdhocError::new(Error::from(inner).to_string())),
            Err(shared) => ErrorKind::Adhoc(AdhocError::new(Error { inner: shared }.to_string())),
        };

        Error::from(ErrorInner {
            kind,
            cause: Some(self),
        })
    }

    /// The innermost cause, or `self` when there is none.
    fn root(&self) -> &Error {
        let mut err = self;
        while let Some(cause) = &err.inner.cause {
            err = cause;
        }
        err
    }

    fn root_kind(&self) -> &ErrorKind {
        &self.root().inner.kind
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner.kind, f)?;
        if let Some(cause) = &self.inner.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return fmt::Display::fmt(self, f);
        }

        f.debug_struct("Error")
            .field("kind", &self.inner.kind)
            .field("cause", &self.inner.cause)
            .finish()
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Adhoc(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidSchema(err) => fmt::Display::fmt(err, f),
            ErrorKind::TypeConversion(err) => fmt::Display::fmt(err, f),
            ErrorKind::UnsupportedFeature(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorInner> for Error {
    fn from(inner: ErrorInner) -> Error {
        Error {
            inner: Arc::new(inner),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::from(ErrorInner { kind, cause: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::Value;

    #[test]
    fn error_size() {
        assert_eq!(core::mem::size_of::<usize>(), core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = err!("table {} not found", 3);
        assert_eq!(err.to_string(), "table 3 not found");
    }

    #[test]
    fn context_chain_display() {
        let err = Error::invalid_schema("duplicate column name 'id'")
            .context(err!("adding column to `users`"))
            .context(err!("building schema"));

        assert_eq!(
            err.to_string(),
            "building schema: adding column to `users`: invalid schema: duplicate column name 'id'"
        );
    }

    #[test]
    fn predicates_look_at_root() {
        let err = Error::type_conversion(&Value::I64(1), "BOOLEAN").context(err!("column `flag`"));

        assert!(err.is_type_conversion());
        assert!(!err.is_invalid_schema());
    }

    #[test]
    fn shared_context_keeps_its_text() {
        let outer = err!("rendering table `t`");
        let _keep = outer.clone();

        let err = Error::unsupported_feature("DATE default values").context(outer);
        assert_eq!(
            err.to_string(),
            "rendering table `t`: unsupported feature: DATE default values"
        );
        assert!(err.is_unsupported_feature());
    }

    #[test]
    fn invalid_schema_error() {
        let err = Error::invalid_schema("wrong table");
        assert!(err.is_invalid_schema());
        assert!(!err.is_type_conversion());
        assert_eq!(err.to_string(), "invalid schema: wrong table");
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(&Value::I64(42), "BOOLEAN");
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert I64 to BOOLEAN");
    }

    #[test]
    fn unsupported_feature_error() {
        let err = Error::unsupported_feature("DATE literals");
        assert!(err.is_unsupported_feature());
        assert_eq!(err.to_string(), "unsupported feature: DATE literals");
    }

    #[test]
    fn alternate_debug_shows_kind() {
        let err = Error::invalid_schema("no foreign column");
        let debug = format!("{err:#?}");
        assert!(debug.contains("InvalidSchema"));
    }
}
