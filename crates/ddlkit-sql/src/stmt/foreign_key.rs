use ddlkit_core::{
    schema::{Column, ColumnId, Schema},
    Result,
};

/// `FOREIGN KEY (column) REFERENCES table(column)` attached to a column
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    /// The referencing column
    pub column: String,

    /// Table holding the referenced column
    pub references_table: String,

    /// The referenced column
    pub references_column: String,

    pub on_delete_cascade: bool,
}

impl ForeignKey {
    pub(crate) fn from_schema(
        schema: &Schema,
        column: &Column,
        target: ColumnId,
    ) -> Result<ForeignKey> {
        let references_table = schema.table(target.table)?;
        let references_column = schema.column(target)?;

        Ok(ForeignKey {
            column: column.name.clone(),
            references_table: references_table.name.clone(),
            references_column: references_column.name.clone(),
            on_delete_cascade: column.on_delete_cascade,
        })
    }
}
