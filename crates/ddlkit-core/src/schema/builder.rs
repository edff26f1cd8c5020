mod column;
pub use column::ColumnBuilder;

mod table;
pub use table::TableBuilder;
