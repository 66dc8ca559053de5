use super::{Config, EntityLocation};
use crate::{
    schema::{EntityType, Field, FieldTy, Relation},
    Error, Result,
};

use std::collections::HashSet;

/// Validated metadata for one entity type.
#[derive(Debug)]
pub struct EntityDefinition {
    entity: EntityType,
    location: EntityLocation,
    fields: Vec<Field>,
}

impl EntityDefinition {
    pub fn entity(&self) -> EntityType {
        self.entity
    }

    /// Unaliased placement of the entity's table.
    pub fn location(&self) -> &EntityLocation {
        &self.location
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    /// A non-relation field named `name`.
    pub fn attribute(&self, name: &str) -> Option<&Field> {
        self.field(name).filter(|field| !field.ty.is_relation())
    }

    pub fn primary_key(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.primary_key)
    }

    pub fn auto_number_key(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.auto)
    }

    pub fn relations(&self) -> impl Iterator<Item = (&Field, &Relation)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| field.ty.as_relation().map(|relation| (field, relation)))
    }

    /// Attributes stored in the entity's own table.
    pub fn direct_attributes(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| {
            field
                .ty
                .as_primitive()
                .is_some_and(|primitive| primitive.related.is_none())
        })
    }

    pub(super) fn build(entity: EntityType, config: &Config) -> Result<EntityDefinition> {
        let schema = entity.schema();

        let mut names = HashSet::new();
        let mut columns = HashSet::new();

        for (index, field) in schema.fields.iter().enumerate() {
            if field.index != index {
                return Err(Error::invalid_definition(format!(
                    "field `{}::{}` is declared at index {} but found at {index}",
                    entity, field.name.app_name, field.index
                )));
            }

            if !names.insert(field.name.app_name) {
                return Err(Error::invalid_definition(format!(
                    "duplicate field `{}` on `{entity}`",
                    field.name.app_name
                )));
            }

            match &field.ty {
                FieldTy::Primitive(primitive) => {
                    if primitive.related.is_none() && !columns.insert(field.name.storage_name()) {
                        return Err(Error::invalid_definition(format!(
                            "duplicate column `{}` on `{entity}`",
                            field.name.storage_name()
                        )));
                    }

                    if field.auto && !(field.primary_key && primitive.ty.is_integer()) {
                        return Err(Error::invalid_definition(format!(
                            "field `{}::{}` is auto-numbered but is not an integer primary key",
                            entity, field.name.app_name
                        )));
                    }

                    if primitive.related.is_some() && (field.primary_key || field.auto) {
                        return Err(Error::invalid_definition(format!(
                            "related attribute `{}::{}` cannot be part of the primary key",
                            entity, field.name.app_name
                        )));
                    }
                }
                FieldTy::Relation(_) => {
                    if field.primary_key || field.auto {
                        return Err(Error::invalid_definition(format!(
                            "relation `{}::{}` cannot be part of the primary key",
                            entity, field.name.app_name
                        )));
                    }
                }
            }
        }

        let mut name = config.table_name_prefix.clone().unwrap_or_default();
        name.push_str(schema.table_name());

        let container = schema
            .container
            .map(str::to_string)
            .or_else(|| config.default_container.clone());

        Ok(EntityDefinition {
            entity,
            location: EntityLocation {
                entity,
                container,
                name,
                alias: None,
            },
            fields: schema.fields,
        })
    }
}
