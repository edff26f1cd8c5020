use super::TableBuilder;
use crate::{
    schema::{Column, ColumnId},
    stmt::Value,
    Error, Result,
};

/// Configures a column just added to a table.
///
/// Flag setters consume and return the builder so calls can be chained.
/// [`ColumnBuilder::ok`] hands back the table builder to keep adding
/// columns, and [`ColumnBuilder::id`] ends the chain with the column's
/// handle.
#[derive(Debug)]
pub struct ColumnBuilder<'b, 'a> {
    table: &'b mut TableBuilder<'a>,
    id: ColumnId,
}

impl<'b, 'a> ColumnBuilder<'b, 'a> {
    pub(super) fn new(table: &'b mut TableBuilder<'a>, id: ColumnId) -> Self {
        Self { table, id }
    }

    pub fn id(self) -> ColumnId {
        self.id
    }

    pub fn column(&self) -> &Column {
        &self.table.table().columns[self.id.index]
    }

    /// Marks the column `PRIMARY KEY`.
    pub fn primary(mut self) -> Self {
        self.column_mut().primary_key = true;
        self
    }

    /// Marks the column `AUTOINCREMENT`.
    pub fn auto(mut self) -> Self {
        self.column_mut().auto_increment = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.column_mut().not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.column_mut().unique = true;
        self
    }

    /// Sets the `DEFAULT` literal.
    ///
    /// The value is cast against the column type right away, so a value of
    /// the wrong shape, or a type without a literal encoding, fails here
    /// rather than when the table is rendered.
    pub fn default(mut self, value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        let column = self.column_mut();

        column.ty.cast(&value).map_err(|err| {
            err.context(crate::err!("default value for column `{}`", column.name))
        })?;
        column.default = Some(value);
        Ok(self)
    }

    /// Adds a `FOREIGN KEY` referencing `target`.
    ///
    /// The target may be in any table of the same schema, including this
    /// column's own table.
    pub fn foreign(mut self, target: impl Into<ColumnId>) -> Result<Self> {
        let target = target.into();
        self.table.schema().column(target)?;

        self.column_mut().foreign_key = Some(target);
        Ok(self)
    }

    /// Adds `ON DELETE CASCADE` to the foreign key.
    ///
    /// Fails unless [`ColumnBuilder::foreign`] was called first.
    pub fn cascade(mut self) -> Result<Self> {
        let column = self.column_mut();

        if column.foreign_key.is_none() {
            return Err(Error::invalid_schema(format!(
                "no foreign column for `{}`; call `foreign` before `cascade`",
                column.name
            )));
        }

        column.on_delete_cascade = true;
        Ok(self)
    }

    /// Finishes the column and returns the owning table's builder.
    pub fn ok(self) -> &'b mut TableBuilder<'a> {
        self.table
    }

    fn column_mut(&mut self) -> &mut Column {
        &mut self.table.table_mut().columns[self.id.index]
    }
}
