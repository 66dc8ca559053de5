mod entity;
pub use entity::Entity;

mod entity_type;
pub use entity_type::EntityType;

mod field;
pub use field::{Field, FieldName, FieldPrimitive, FieldTy, Related, Relation};

/// Implemented by every type that can be registered as an entity.
///
/// The derive macro generates this; hand-written implementations are mostly
/// useful for tests that build schemas directly.
pub trait Register: 'static {
    /// Identity of the implementing type.
    fn entity_type() -> EntityType;

    /// Declared shape of the entity.
    fn schema() -> Entity;
}
