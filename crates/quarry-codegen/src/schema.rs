mod column;
pub(crate) use column::Column;

mod entity;
pub(crate) use entity::Entity;

mod entity_attr;
pub(crate) use entity_attr::EntityAttr;

mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::{Field, FieldAttr, FieldTy};

mod related;
pub(crate) use related::Related;

mod relation;
pub(crate) use relation::Relation;
