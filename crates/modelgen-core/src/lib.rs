pub mod dialect;
pub mod schema;

pub use dialect::Dialect;
pub use schema::{
    AttrValue, FieldDef, ForeignKeyDef, Generation, IndexDef, IndexField, RelationDef, TableData,
    TableDef, TableName, UniqueSpec,
};
