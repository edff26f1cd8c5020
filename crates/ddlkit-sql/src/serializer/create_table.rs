use super::{Comma, Indented, ToSql};

use crate::stmt;

const CREATE_TABLE: &str = "CREATE TABLE";
const IF_NOT_EXISTS: &str = " IF NOT EXISTS";
const UNIQUE: &str = "UNIQUE(";

/// A line inside the parentheses of `CREATE TABLE`
enum TableElement<'a> {
    Column(&'a stmt::ColumnDef),
    Unique(&'a stmt::Unique),
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let if_not_exists = self.if_not_exists.then_some(IF_NOT_EXISTS);
        let elements = Indented(
            self.columns
                .iter()
                .map(TableElement::Column)
                .chain(self.unique.iter().map(TableElement::Unique)),
        );

        fmt!(f, CREATE_TABLE if_not_exists " " self.name.as_str() " (" elements "\n)");
    }
}

impl ToSql for TableElement<'_> {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        match self {
            TableElement::Column(column) => column.to_sql(f),
            TableElement::Unique(unique) => unique.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Unique {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, UNIQUE Comma(&self.columns) ")");
    }
}

/// Upper bound on the serialized length of `stmt`, including the trailing
/// `;`, used to size the output buffer up front.
pub(super) fn size_hint(stmt: &stmt::CreateTable) -> usize {
    // "\n\t" before each element and "," after it
    const ELEMENT: usize = 3;

    let mut len = CREATE_TABLE.len() + 1 + stmt.name.len() + " (".len() + "\n);".len();

    if stmt.if_not_exists {
        len += IF_NOT_EXISTS.len();
    }

    for column in &stmt.columns {
        len += ELEMENT + super::column_def::size_hint(column);
    }

    for unique in &stmt.unique {
        len += ELEMENT + UNIQUE.len() + 1;
        len += unique
            .columns
            .iter()
            .map(|name| name.len() + ", ".len())
            .sum::<usize>();
    }

    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stmt::CreateTable, Serializer};

    use ddlkit_core::Schema;

    #[test]
    fn size_hint_covers_rendered_statement() {
        let mut schema = Schema::new();
        let id = schema
            .create_table("Scopes")
            .int("id")
            .unwrap()
            .primary()
            .auto()
            .id();

        let mut settings = schema.create_table("PlaceSettings");
        settings
            .if_not_exists()
            .int("place")
            .unwrap()
            .primary()
            .foreign(id)
            .unwrap()
            .cascade()
            .unwrap()
            .ok()
            .varchar("voice")
            .unwrap()
            .not_null()
            .default("en-US")
            .unwrap();
        let a = settings.int("a").unwrap().id();
        let b = settings.int("b").unwrap().id();
        settings.unique([a, b]).unwrap();
        let table = settings.id();

        let stmt = CreateTable::from_schema(&schema, table).unwrap();
        let sql = Serializer::new(&schema).serialize(&stmt);

        let hint = size_hint(&stmt);
        assert!(hint >= sql.len(), "hint={hint} len={}", sql.len());
        // Only the trailing comma and separator slack is over-counted
        assert!(hint - sql.len() <= 3 * 5);
    }
}
