pub mod field;
pub mod foreign_key;
pub mod index;
pub mod names;
pub mod relation;
pub mod table;

pub use field::{AttrValue, FieldDef, UniqueSpec};
pub use foreign_key::{ForeignKeyDef, Generation};
pub use index::{IndexDef, IndexField};
pub use names::TableName;
pub use relation::RelationDef;
pub use table::{TableData, TableDef};
