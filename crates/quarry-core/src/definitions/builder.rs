use super::{Config, DefinitionProvider, Definitions};
use crate::{
    err,
    schema::{EntityType, FieldTy, Register},
    Error, Result,
};

/// Configures a [`Definitions`] registry.
///
/// Registered entities are resolved and cross-checked by [`Builder::build`],
/// so declaration mistakes surface before any selection is built.
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
    entities: Vec<EntityType>,
}

impl Builder {
    pub fn register<T: Register>(&mut self) -> &mut Self {
        self.register_entity(T::entity_type())
    }

    pub fn register_entity(&mut self, entity: EntityType) -> &mut Self {
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.config.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Set the container for entities that do not declare one
    pub fn default_container(&mut self, container: &str) -> &mut Self {
        self.config.default_container = Some(container.to_string());
        self
    }

    pub fn build(&self) -> Result<Definitions> {
        let definitions = Definitions::from_config(self.config.clone());

        for entity in &self.entities {
            definitions
                .resolve(*entity)
                .map_err(|e| e.context(err!("failed to register `{entity}`")))?;
        }

        for entity in &self.entities {
            let definition = definitions.resolve(*entity)?;

            for field in definition.fields() {
                match &field.ty {
                    FieldTy::Relation(relation) => {
                        definitions.resolve(relation.target).map_err(|e| {
                            e.context(err!(
                                "relation `{}::{}` targets an invalid entity",
                                entity,
                                field.name.app_name
                            ))
                        })?;
                    }
                    FieldTy::Primitive(primitive) => {
                        let Some(related) = &primitive.related else {
                            continue;
                        };

                        let target = definitions.resolve(related.target)?;

                        if target.attribute(related.attribute).is_none() {
                            return Err(Error::invalid_definition(format!(
                                "related attribute `{}::{}` refers to missing attribute `{}::{}`",
                                entity, field.name.app_name, related.target, related.attribute
                            )));
                        }
                    }
                }
            }
        }

        log::debug!(
            "built entity definitions; registered={}, resolved={}",
            self.entities.len(),
            definitions.entities().len()
        );

        Ok(definitions)
    }
}
