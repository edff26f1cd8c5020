mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::{CreateTable, Unique};

mod foreign_key;
pub use foreign_key::ForeignKey;

pub use ddlkit_core::schema::Type;
