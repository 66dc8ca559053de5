use crate::schema::EntityType;

use std::fmt;

/// Physical placement of an entity occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityLocation {
    pub entity: EntityType,

    /// Database schema holding the table
    pub container: Option<String>,

    /// Table name
    pub name: String,

    pub alias: Option<String>,
}

impl EntityLocation {
    /// Name used to qualify columns: the alias when present, otherwise the
    /// table name.
    pub fn reference_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// Table name prefixed with its container.
    pub fn qualified_name(&self) -> String {
        match &self.container {
            Some(container) => format!("{container}.{}", self.name),
            None => self.name.clone(),
        }
    }

    pub(crate) fn aliased(&self, alias: Option<&str>) -> EntityLocation {
        EntityLocation {
            alias: alias.map(str::to_string),
            ..self.clone()
        }
    }
}

impl fmt::Display for EntityLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())?;

        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }

        Ok(())
    }
}
