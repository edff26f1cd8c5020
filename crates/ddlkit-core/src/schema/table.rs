use super::{Column, ColumnId};

use std::fmt;

/// A table definition
#[derive(Debug)]
pub struct Table {
    /// Uniquely identifies the table within its schema
    pub id: TableId,

    /// Name of the table
    pub name: String,

    /// When true, the statement is emitted as `CREATE TABLE IF NOT EXISTS`
    pub if_not_exists: bool,

    /// The table's columns, in the order they were added
    pub columns: Vec<Column>,

    /// Composite unique constraints, in the order they were registered
    pub unique: Vec<UniqueGroup>,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

/// A set of columns whose combined values must be unique.
///
/// All columns belong to the table holding the group.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueGroup {
    pub columns: Vec<ColumnId>,
}

impl Table {
    pub(crate) fn new(id: TableId, name: String) -> Self {
        Self {
            id,
            name,
            if_not_exists: false,
            columns: vec![],
            unique: vec![],
        }
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(id.table, self.id, "column belongs to another table");
        &self.columns[id.index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The columns of a unique group, in the group's order.
    pub fn unique_columns<'a>(
        &'a self,
        group: &'a UniqueGroup,
    ) -> impl ExactSizeIterator<Item = &'a Column> + 'a {
        group.columns.iter().map(move |id| self.column(*id))
    }
}

impl From<&Table> for TableId {
    fn from(value: &Table) -> Self {
        value.id
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
