mod attribute_definition;
pub use attribute_definition::{AttributeKind, DistinctAttribute, EntityAttributeDefinition};

mod builder;
pub use builder::Builder;

mod entity_definition;
pub use entity_definition::EntityDefinition;

mod entity_location;
pub use entity_location::EntityLocation;

mod provider;
pub use provider::DefinitionProvider;

mod verify;

use crate::{schema::EntityType, Result};

use indexmap::IndexMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Memoizing registry of entity definitions.
///
/// Definitions are built from each entity's declared schema the first time
/// the entity type is resolved and shared afterwards. The registry is safe to
/// use from several threads.
#[derive(Debug, Default)]
pub struct Definitions {
    config: Config,
    cache: RwLock<IndexMap<EntityType, Arc<EntityDefinition>>>,
}

#[derive(Debug, Default, Clone)]
struct Config {
    /// Prepended to every table name
    table_name_prefix: Option<String>,

    /// Container used by entities that do not declare one
    default_container: Option<String>,
}

impl Definitions {
    /// A registry with default configuration; entities resolve lazily.
    pub fn new() -> Definitions {
        Definitions::default()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    fn from_config(config: Config) -> Definitions {
        Definitions {
            config,
            cache: RwLock::default(),
        }
    }

    /// Returns `true` if the definition of `entity` has already been built.
    pub fn is_resolved(&self, entity: EntityType) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&entity)
    }

    /// Entity types resolved so far, in resolution order.
    pub fn entities(&self) -> Vec<EntityType> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }
}

impl DefinitionProvider for Definitions {
    fn resolve(&self, entity: EntityType) -> Result<Arc<EntityDefinition>> {
        if let Some(definition) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&entity)
        {
            return Ok(definition.clone());
        }

        // Built outside the lock; a concurrent build of the same type is
        // discarded in favor of whichever was stored first.
        let definition = Arc::new(EntityDefinition::build(entity, &self.config)?);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let definition = cache.entry(entity).or_insert(definition).clone();

        log::debug!(
            "resolved entity definition; entity={entity}, table={}",
            definition.location().qualified_name()
        );

        Ok(definition)
    }
}
