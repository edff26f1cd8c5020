use super::ToSql;

use crate::stmt;

const PRIMARY_KEY: &str = " PRIMARY KEY";
const AUTOINCREMENT: &str = " AUTOINCREMENT";
const NOT_NULL: &str = " NOT NULL";
const UNIQUE: &str = " UNIQUE";
const DEFAULT: &str = " DEFAULT ";
const FOREIGN_KEY: &str = ",\n\tFOREIGN KEY (";
const REFERENCES: &str = ") REFERENCES ";
const ON_DELETE_CASCADE: &str = " ON DELETE CASCADE";

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let primary_key = self.primary_key.then_some(PRIMARY_KEY);
        let auto_increment = self.auto_increment.then_some(AUTOINCREMENT);
        let not_null = self.not_null.then_some(NOT_NULL);
        let unique = self.unique.then_some(UNIQUE);

        fmt!(f, self.name.as_str() " " self.ty primary_key auto_increment not_null unique);

        if let Some(default) = &self.default {
            fmt!(f, DEFAULT default);
        }

        fmt!(f, self.foreign_key.as_ref());
    }
}

impl ToSql for &stmt::ForeignKey {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        let on_delete_cascade = self.on_delete_cascade.then_some(ON_DELETE_CASCADE);

        fmt!(
            f,
            FOREIGN_KEY self.column.as_str() REFERENCES self.references_table.as_str()
            "(" self.references_column.as_str() ")" on_delete_cascade
        );
    }
}

pub(super) fn size_hint(column: &stmt::ColumnDef) -> usize {
    let mut len = column.name.len() + 1 + column.ty.as_sql().len();

    for (set, keyword) in [
        (column.primary_key, PRIMARY_KEY),
        (column.auto_increment, AUTOINCREMENT),
        (column.not_null, NOT_NULL),
        (column.unique, UNIQUE),
    ] {
        if set {
            len += keyword.len();
        }
    }

    if let Some(default) = &column.default {
        len += DEFAULT.len() + default.len();
    }

    if let Some(fk) = &column.foreign_key {
        len += FOREIGN_KEY.len()
            + fk.column.len()
            + REFERENCES.len()
            + fk.references_table.len()
            + fk.references_column.len()
            + 2;

        if fk.on_delete_cascade {
            len += ON_DELETE_CASCADE.len();
        }
    }

    len
}
