use super::ToSql;

use crate::stmt;

impl ToSql for stmt::Type {
    fn to_sql(self, f: &mut super::Formatter<'_>) {
        fmt!(f, self.as_sql());
    }
}
