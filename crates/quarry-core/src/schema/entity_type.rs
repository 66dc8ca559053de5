use super::Entity;

use std::{any::TypeId, fmt, hash};

/// Identity of an entity type.
///
/// Two values are equal when they were created for the same Rust type. The
/// name is carried for diagnostics and the schema function is called when a
/// definition provider first resolves the type.
#[derive(Clone, Copy)]
pub struct EntityType {
    id: TypeId,
    name: &'static str,
    schema: fn() -> Entity,
}

impl EntityType {
    pub fn of<T: 'static>(name: &'static str, schema: fn() -> Entity) -> EntityType {
        EntityType {
            id: TypeId::of::<T>(),
            name,
            schema,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Builds the declared schema of this entity type.
    pub fn schema(&self) -> Entity {
        (self.schema)()
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EntityType {}

impl hash::Hash for EntityType {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EntityType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}
