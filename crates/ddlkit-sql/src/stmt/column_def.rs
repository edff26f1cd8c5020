use super::{ForeignKey, Type};

use ddlkit_core::{
    err,
    schema::{Column, Schema},
    Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub not_null: bool,
    pub unique: bool,

    /// The `DEFAULT` literal, already cast for `ty`
    pub default: Option<String>,

    pub foreign_key: Option<ForeignKey>,
}

impl ColumnDef {
    pub fn from_schema(schema: &Schema, column: &Column) -> Result<ColumnDef> {
        Self::lower(schema, column).map_err(|err| err.context(err!("column `{}`", column.name)))
    }

    fn lower(schema: &Schema, column: &Column) -> Result<ColumnDef> {
        let default = column
            .default
            .as_ref()
            .map(|value| column.ty.cast(value))
            .transpose()?;

        let foreign_key = match column.foreign_key {
            Some(target) => Some(ForeignKey::from_schema(schema, column, target)?),
            None => None,
        };

        Ok(ColumnDef {
            name: column.name.clone(),
            ty: column.ty,
            primary_key: column.primary_key,
            auto_increment: column.auto_increment,
            not_null: column.not_null,
            unique: column.unique,
            default,
            foreign_key,
        })
    }
}
