use super::ColumnDef;

use ddlkit_core::{
    schema::{Schema, TableId},
    Result,
};

/// A `CREATE TABLE` statement with every reference resolved to a name.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    pub if_not_exists: bool,

    /// Column definitions, in render order
    pub columns: Vec<ColumnDef>,

    /// Table-level unique constraints, rendered after all columns
    pub unique: Vec<Unique>,
}

/// `UNIQUE(a, b, ...)` table constraint
#[derive(Debug, Clone, PartialEq)]
pub struct Unique {
    pub columns: Vec<String>,
}

impl CreateTable {
    /// Lowers a schema table into a statement.
    ///
    /// Default values are cast and foreign targets are resolved here, so a
    /// lowered statement always serializes.
    pub fn from_schema(schema: &Schema, id: impl Into<TableId>) -> Result<CreateTable> {
        let table = schema.table(id)?;

        Ok(CreateTable {
            name: table.name.clone(),
            if_not_exists: table.if_not_exists,
            columns: table
                .columns
                .iter()
                .map(|column| ColumnDef::from_schema(schema, column))
                .collect::<Result<_>>()?,
            unique: table
                .unique
                .iter()
                .map(|group| Unique {
                    columns: table
                        .unique_columns(group)
                        .map(|column| column.name.clone())
                        .collect(),
                })
                .collect(),
        })
    }
}
