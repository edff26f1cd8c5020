use super::ColumnBuilder;
use crate::{
    schema::{Column, ColumnId, Schema, Table, TableId, Type, UniqueGroup},
    Error, Result,
};

/// Adds columns and constraints to one table of a [`Schema`].
///
/// Returned by [`Schema::create_table`] and [`Schema::extend_table`].
#[derive(Debug)]
pub struct TableBuilder<'a> {
    schema: &'a mut Schema,
    id: TableId,
}

macro_rules! column_constructors {
    ( $lt:lifetime; $( $name:ident => $ty:ident, )+ ) => {
        $(
            #[doc = concat!("Adds a column of type [`Type::", stringify!($ty), "`].")]
            pub fn $name(&mut self, name: impl Into<String>) -> Result<ColumnBuilder<'_, $lt>> {
                self.column(name, Type::$ty)
            }
        )+
    };
}

impl<'a> TableBuilder<'a> {
    pub(crate) fn new(schema: &'a mut Schema, id: TableId) -> Self {
        Self { schema, id }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn table(&self) -> &Table {
        &self.schema.tables[self.id.0]
    }

    /// Renders the statement as `CREATE TABLE IF NOT EXISTS`.
    pub fn if_not_exists(&mut self) -> &mut Self {
        self.table_mut().if_not_exists = true;
        self
    }

    /// Appends a column and returns a builder to configure it.
    ///
    /// Fails if the table already has a column with this name.
    pub fn column(
        &mut self,
        name: impl Into<String>,
        ty: Type,
    ) -> Result<ColumnBuilder<'_, 'a>> {
        let name = name.into();
        let table = self.table_mut();

        if table.column_by_name(&name).is_some() {
            return Err(Error::invalid_schema(format!(
                "duplicate column name '{name}' in table `{}`",
                table.name
            )));
        }

        let id = ColumnId {
            table: table.id,
            index: table.columns.len(),
        };

        tracing::trace!(table = %table.name, column = %name, %ty, "add column");

        table.columns.push(Column::new(id, name, ty));
        Ok(ColumnBuilder::new(self, id))
    }

    column_constructors! {
        'a;
        bool => Boolean,
        int => Int,
        integer => Integer,
        tiny_int => TinyInt,
        small_int => SmallInt,
        medium_int => MediumInt,
        big_int => BigInt,
        unsigned_big_int => UnsignedBigInt,
        int2 => Int2,
        int8 => Int8,
        character => Character20,
        varchar => VarChar255,
        varying_character => VaryingCharacter255,
        nchar => NChar55,
        native_character => NativeCharacter70,
        nvarchar => NVarChar100,
        text => Text,
        clob => Clob,
        blob => Blob,
        real => Real,
        double => Double,
        double_precision => DoublePrecision,
        float => Float,
        numeric => Numeric,
        decimal => Decimal10_5,
        date => Date,
        datetime => DateTime,
    }

    /// Registers a composite `UNIQUE(...)` constraint over `columns`.
    ///
    /// Every column must belong to this table, and the group must not be
    /// empty. Nothing is registered when validation fails.
    pub fn unique(&mut self, columns: impl IntoIterator<Item = ColumnId>) -> Result<&mut Self> {
        let columns: Vec<_> = columns.into_iter().collect();
        let table = self.table();

        if columns.is_empty() {
            return Err(Error::invalid_schema(format!(
                "empty unique group in table `{}`",
                table.name
            )));
        }

        for column in &columns {
            if column.table != table.id || column.index >= table.columns.len() {
                return Err(Error::invalid_schema(format!(
                    "unique group in table `{}` references {column:?} from another table",
                    table.name
                )));
            }
        }

        self.table_mut().unique.push(UniqueGroup { columns });
        Ok(self)
    }

    pub fn schema(&self) -> &Schema {
        self.schema
    }

    pub(super) fn table_mut(&mut self) -> &mut Table {
        self.schema.table_mut(self.id)
    }
}
