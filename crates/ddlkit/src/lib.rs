//! Build SQL `CREATE TABLE` statements with a fluent API.
//!
//! ```
//! use ddlkit::{Render, Schema};
//!
//! # fn main() -> ddlkit::Result<()> {
//! let mut schema = Schema::new();
//!
//! let mut scopes = schema.create_table("Scopes");
//! scopes.int("id")?.primary().auto();
//!
//! assert_eq!(
//!     scopes.render()?,
//!     "CREATE TABLE Scopes (\n\tid INT PRIMARY KEY AUTOINCREMENT\n);"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Tables live in a [`Schema`]. Columns are referenced through
//! [`ColumnId`] handles, which is how foreign keys and unique groups point
//! at them.

pub use ddlkit_core::{
    err,
    schema::{
        Column, ColumnBuilder, ColumnId, Table, TableBuilder, TableId, Type, TypeFamily,
        UniqueGroup,
    },
    stmt::Value,
    Error, Result, Schema,
};

pub use ddlkit_sql::{stmt, CreateTable, Serializer};

/// Renders `CREATE TABLE` SQL.
pub trait Render {
    fn render(&self) -> Result<String>;
}

/// Renders the table being built.
impl Render for TableBuilder<'_> {
    fn render(&self) -> Result<String> {
        render(self.schema(), self.id())
    }
}

/// Renders every table, in creation order, separated by a blank line.
impl Render for Schema {
    fn render(&self) -> Result<String> {
        Ok(Serializer::new(self).create_tables()?.join("\n\n"))
    }
}

/// Renders the `CREATE TABLE` statement for `table`.
pub fn render(schema: &Schema, table: impl Into<TableId>) -> Result<String> {
    Serializer::new(schema).create_table(table)
}
