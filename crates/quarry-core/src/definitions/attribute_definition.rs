use super::EntityLocation;
use crate::{
    schema::Field,
    stmt::{AttributeLocation, Type},
};

use std::hash::{Hash, Hasher};

/// How an attribute is reached from the root of its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Declared on the root entity
    Direct,

    /// Reached through navigation
    Related,

    /// Primary key of an entity one navigation away
    RelatedPrimaryKey,

    /// Auto-numbered key of an entity one navigation away
    RelatedAutoNumberKey,
}

/// An attribute as found through a specific location.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityAttributeDefinition {
    pub location: AttributeLocation,

    /// Placement of the owning entity occurrence
    pub entity: EntityLocation,

    pub property_name: &'static str,
    pub physical_name: &'static str,
    pub kind: AttributeKind,
    pub ty: Type,
    pub nullable: bool,
    pub is_primary_key: bool,
    pub is_auto_number: bool,

    /// Index of the field in the owning entity
    pub ordinal: usize,
}

impl EntityAttributeDefinition {
    pub(super) fn new(
        location: AttributeLocation,
        entity: EntityLocation,
        field: &Field,
        ty: Type,
    ) -> EntityAttributeDefinition {
        let kind = match location.nodes().len() {
            1 => AttributeKind::Direct,
            2 if field.auto => AttributeKind::RelatedAutoNumberKey,
            2 if field.primary_key => AttributeKind::RelatedPrimaryKey,
            _ => AttributeKind::Related,
        };

        EntityAttributeDefinition {
            location,
            entity,
            property_name: field.name.app_name,
            physical_name: field.name.storage_name(),
            kind,
            ty,
            nullable: field.nullable,
            is_primary_key: field.primary_key,
            is_auto_number: field.auto,
            ordinal: field.index,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.entity.alias.as_deref()
    }

    /// Column qualified by the entity alias or table name, as in
    /// `ComplexEntity.FakeComplexEntityId`.
    pub fn reference_name(&self) -> String {
        format!("{}.{}", self.entity.reference_name(), self.physical_name)
    }
}

/// Compares attribute definitions by owning entity, column and alias.
///
/// The location path is ignored, so the same column reached through two
/// different navigations is considered a duplicate.
#[derive(Debug, Clone)]
pub struct DistinctAttribute(pub EntityAttributeDefinition);

impl DistinctAttribute {
    pub fn into_inner(self) -> EntityAttributeDefinition {
        self.0
    }
}

impl PartialEq for DistinctAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.0.entity.entity == other.0.entity.entity
            && self.0.physical_name == other.0.physical_name
            && self.0.entity.alias == other.0.entity.alias
    }
}

impl Eq for DistinctAttribute {}

impl Hash for DistinctAttribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.entity.entity.hash(state);
        self.0.physical_name.hash(state);
        self.0.entity.alias.hash(state);
    }
}
