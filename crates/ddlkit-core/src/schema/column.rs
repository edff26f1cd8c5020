use super::{TableId, Type};
use crate::stmt::Value;

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema. `id.table` is the
    /// owning table.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The column type.
    pub ty: Type,

    /// Literal emitted after `DEFAULT`. Always castable to `ty`.
    pub default: Option<Value>,

    pub primary_key: bool,

    pub auto_increment: bool,

    pub not_null: bool,

    pub unique: bool,

    /// Column referenced by a `FOREIGN KEY` clause. May live in any table of
    /// the schema, including this one.
    pub foreign_key: Option<ColumnId>,

    /// Appends `ON DELETE CASCADE` to the foreign key. Only set together
    /// with `foreign_key`.
    pub on_delete_cascade: bool,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    pub(crate) fn new(id: ColumnId, name: String, ty: Type) -> Self {
        Self {
            id,
            name,
            ty,
            default: None,
            primary_key: false,
            auto_increment: false,
            not_null: false,
            unique: false,
            foreign_key: None,
            on_delete_cascade: false,
        }
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
