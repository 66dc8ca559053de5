mod entity;
pub use entity::{Entity, Navigation, Record};

pub mod filter_set;
pub use filter_set::ValueFilterSet;

pub mod relation;
pub use relation::EntityRelationSet;

pub mod selection;
pub use selection::EntitySelection;

pub mod stmt;
pub use stmt::{AnyPath, EntityPath, IntoValue, Path, Primitive};

mod update;
pub use update::UpdateSet;

pub use quarry_core::{
    definitions, schema, DefinitionProvider, Definitions, Error, Register, Result,
};

pub use quarry_macros::Entity;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        stmt::{EntityPath, Path, Primitive},
        Entity, Error, Navigation, Record, Register, Result,
    };
    pub use quarry_core::stmt::{EntityReference, Member, RelatedAttribute, Value};

    pub mod schema {
        pub use quarry_core::schema::{
            Entity, EntityType, Field, FieldName, FieldPrimitive, FieldTy, Related, Relation,
        };
    }
}
