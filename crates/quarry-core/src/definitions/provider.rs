use super::{verify, EntityAttributeDefinition, EntityDefinition, EntityLocation};
use crate::{
    stmt::{AttributeLocation, EntityReference, EntityRelation, Selection},
    schema::EntityType,
    Error, Result,
};

use std::sync::Arc;

/// Source of entity metadata.
///
/// Only `resolve` is required. Implementations are expected to memoize: it is
/// called for every attribute lookup.
pub trait DefinitionProvider {
    /// Returns the definition of `entity`.
    fn resolve(&self, entity: EntityType) -> Result<Arc<EntityDefinition>>;

    /// Finds the attribute named by `location` on its owning entity.
    fn find(&self, location: &AttributeLocation) -> Result<EntityAttributeDefinition> {
        let owner = location.entity();
        let definition = self.resolve(owner.entity)?;

        let Some((field, primitive)) = definition
            .field(location.attribute())
            .and_then(|field| Some((field, field.ty.as_primitive()?)))
        else {
            return Err(Error::invalid_path(format!(
                "`{}` has no attribute `{}`",
                owner.entity,
                location.attribute()
            ))
            .context(crate::err!("while resolving `{}`", location.path())));
        };

        let entity = self.entity_location(owner)?;

        Ok(EntityAttributeDefinition::new(
            location.clone(),
            entity,
            field,
            primitive.ty,
        ))
    }

    /// Physical placement of an entity occurrence.
    fn entity_location(&self, reference: &EntityReference) -> Result<EntityLocation> {
        let definition = self.resolve(reference.entity)?;
        Ok(definition.location().aliased(reference.alias.as_deref()))
    }

    /// Checks that both endpoints of `relation` exist, share a value type
    /// and that at least one of them is a primary key attribute.
    fn verify_relation(&self, relation: &EntityRelation) -> Result<()> {
        verify::relation(self, relation)
    }

    /// Resolves every attribute referenced by `selection`, including nested,
    /// parent and linked selections, and verifies every relation.
    fn verify_selection(&self, selection: &Selection) -> Result<()> {
        verify::selection(self, selection)
    }

    /// Finds each location, dropping attributes already found through a
    /// different navigation.
    fn distinct_attributes<'a>(
        &self,
        locations: impl IntoIterator<Item = &'a AttributeLocation>,
    ) -> Result<Vec<EntityAttributeDefinition>>
    where
        Self: Sized,
    {
        verify::distinct_attributes(self, locations)
    }
}

impl<T: DefinitionProvider + ?Sized> DefinitionProvider for &T {
    fn resolve(&self, entity: EntityType) -> Result<Arc<EntityDefinition>> {
        (**self).resolve(entity)
    }

    fn find(&self, location: &AttributeLocation) -> Result<EntityAttributeDefinition> {
        (**self).find(location)
    }

    fn entity_location(&self, reference: &EntityReference) -> Result<EntityLocation> {
        (**self).entity_location(reference)
    }
}

impl<T: DefinitionProvider + ?Sized> DefinitionProvider for Arc<T> {
    fn resolve(&self, entity: EntityType) -> Result<Arc<EntityDefinition>> {
        (**self).resolve(entity)
    }

    fn find(&self, location: &AttributeLocation) -> Result<EntityAttributeDefinition> {
        (**self).find(location)
    }

    fn entity_location(&self, reference: &EntityReference) -> Result<EntityLocation> {
        (**self).entity_location(reference)
    }
}
