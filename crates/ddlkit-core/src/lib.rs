mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses ddlkit's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
