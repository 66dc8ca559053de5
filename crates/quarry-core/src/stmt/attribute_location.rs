use super::{AttributePath, EntityReference};
use crate::schema::EntityType;

use std::fmt;

/// An attribute together with the chain of entities used to reach it.
///
/// Nodes are in navigation order: the root entity first and the entity
/// owning the attribute last. Aliases declared on a relation apply only to
/// the node that relation reaches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeLocation {
    path: AttributePath,
    nodes: Vec<EntityReference>,
    attribute: &'static str,
}

/// The owning entity occurrence and attribute name, without the path taken.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeReference {
    pub entity: EntityReference,
    pub attribute: &'static str,
}

impl AttributeLocation {
    /// Walks `path`, producing one node per entity visited.
    ///
    /// A flat related attribute contributes its related entity as the final
    /// node and names the referenced attribute rather than the declaring
    /// field.
    pub fn resolve(path: AttributePath) -> AttributeLocation {
        let mut nodes = Vec::with_capacity(path.relations.len() + 2);
        nodes.push(EntityReference::from(path.root));

        for step in &path.relations {
            nodes.push(step.target.clone());
        }

        let attribute = match &path.attribute.related {
            Some(related) => {
                nodes.push(related.entity.clone());
                related.attribute
            }
            None => path.attribute.field.name,
        };

        AttributeLocation {
            path,
            nodes,
            attribute,
        }
    }

    pub fn path(&self) -> &AttributePath {
        &self.path
    }

    pub fn root(&self) -> EntityType {
        self.path.root
    }

    pub fn nodes(&self) -> &[EntityReference] {
        &self.nodes
    }

    /// The entity occurrence owning the attribute.
    pub fn entity(&self) -> &EntityReference {
        // `resolve` always pushes the root
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    pub fn is_direct(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn reference(&self) -> AttributeReference {
        AttributeReference {
            entity: self.entity().clone(),
            attribute: self.attribute,
        }
    }
}

impl From<AttributePath> for AttributeLocation {
    fn from(path: AttributePath) -> AttributeLocation {
        AttributeLocation::resolve(path)
    }
}

impl fmt::Display for AttributeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity().name(), self.attribute)
    }
}

impl fmt::Display for AttributeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity.name(), self.attribute)
    }
}
