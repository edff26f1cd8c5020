#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Indented};

// Fragment serializers
mod column_def;
mod create_table;
mod ty;

use crate::stmt::CreateTable;

use ddlkit_core::{
    schema::{Schema, TableId},
    Result,
};

/// Serialize `CREATE TABLE` statements to SQL strings
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema holding the tables to serialize
    schema: &'a Schema,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Serializer<'a> {
        Serializer { schema }
    }

    /// Renders the `CREATE TABLE` statement for one table of the schema.
    pub fn create_table(&self, id: impl Into<TableId>) -> Result<String> {
        let stmt = CreateTable::from_schema(self.schema, id)?;
        let sql = self.serialize(&stmt);

        tracing::debug!(table = %stmt.name, %sql, "serialized create table");

        Ok(sql)
    }

    /// Renders every table of the schema, in creation order.
    pub fn create_tables(&self) -> Result<Vec<String>> {
        self.schema
            .tables()
            .iter()
            .map(|table| self.create_table(table))
            .collect()
    }

    pub fn serialize(&self, stmt: &CreateTable) -> String {
        let mut ret = String::with_capacity(create_table::size_hint(stmt));

        let mut fmt = Formatter { dst: &mut ret };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
