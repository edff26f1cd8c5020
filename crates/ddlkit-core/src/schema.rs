mod builder;
pub use builder::{ColumnBuilder, TableBuilder};

mod column;
pub use column::{Column, ColumnId};

mod table;
pub use table::{Table, TableId, UniqueGroup};

mod ty;
pub use ty::{Type, TypeFamily};

use crate::{Error, Result};

/// Arena holding every table defined in one building session.
///
/// Tables and columns refer to each other through [`TableId`] and
/// [`ColumnId`] handles, which index into this arena. Handles are only
/// meaningful for the schema that issued them.
#[derive(Debug, Default)]
pub struct Schema {
    tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty table and returns a builder for it.
    ///
    /// The name is not validated, and nothing stops two tables from sharing
    /// a name.
    pub fn create_table(&mut self, name: impl Into<String>) -> TableBuilder<'_> {
        let id = TableId(self.tables.len());
        let name = name.into();

        tracing::trace!(table = %name, ?id, "create table");

        self.tables.push(Table::new(id, name));
        TableBuilder::new(self, id)
    }

    /// Returns a builder for a table created earlier.
    pub fn extend_table(&mut self, id: TableId) -> Result<TableBuilder<'_>> {
        self.table(id)?;
        Ok(TableBuilder::new(self, id))
    }

    /// All tables, in creation order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn table(&self, id: impl Into<TableId>) -> Result<&Table> {
        let id = id.into();
        self.tables
            .get(id.0)
            .ok_or_else(|| Error::invalid_schema(format!("{id:?} does not belong to this schema")))
    }

    /// Finds the first table with the given name.
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> Result<&Column> {
        let id = id.into();
        self.table(id.table)?
            .columns
            .get(id.index)
            .ok_or_else(|| Error::invalid_schema(format!("{id:?} does not belong to this schema")))
    }

    fn table_mut(&mut self, id: TableId) -> &mut Table {
        &mut self.tables[id.0]
    }
}
