use crate::schema::EntityType;

use std::fmt;

/// An entity type, optionally aliased.
///
/// Each occurrence of an entity within one selection is addressed by a
/// reference. Joining the same type twice requires distinct aliases.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityReference {
    pub entity: EntityType,
    pub alias: Option<String>,
}

impl EntityReference {
    pub fn new(entity: EntityType, alias: Option<&str>) -> EntityReference {
        EntityReference {
            entity,
            alias: alias.map(str::to_string),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> EntityReference {
        self.alias = Some(alias.into());
        self
    }

    /// The alias when present, otherwise the entity name.
    pub fn name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.entity.name())
    }
}

impl From<EntityType> for EntityReference {
    fn from(entity: EntityType) -> EntityReference {
        EntityReference {
            entity,
            alias: None,
        }
    }
}

impl fmt::Debug for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} as {}", self.entity.name(), alias),
            None => f.write_str(self.entity.name()),
        }
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
