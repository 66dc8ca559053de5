use super::{EntityReference, Member};
use crate::schema::EntityType;

use std::fmt;

/// A navigation from a root entity to one of its attributes.
///
/// Intermediate steps always follow relations and the path always ends on an
/// attribute, so every path names exactly one attribute of some entity
/// reachable from the root.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributePath {
    pub root: EntityType,
    pub relations: Vec<RelationStep>,
    pub attribute: AttributeStep,
}

/// One navigation through a relation field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelationStep {
    pub field: Member,

    /// The entity reached, carrying the relation's declared alias
    pub target: EntityReference,
}

/// The terminal attribute of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeStep {
    pub field: Member,

    /// Set when the field is a flat copy of an attribute on another entity
    pub related: Option<RelatedAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RelatedAttribute {
    pub entity: EntityReference,
    pub attribute: &'static str,
}

impl AttributePath {
    /// A path to an attribute declared directly on `root`.
    pub fn direct(root: EntityType, field: Member) -> AttributePath {
        AttributePath {
            root,
            relations: vec![],
            attribute: AttributeStep {
                field,
                related: None,
            },
        }
    }

    pub fn is_direct(&self) -> bool {
        self.relations.is_empty() && self.attribute.related.is_none()
    }

    /// The entity declaring the terminal field.
    pub fn declaring_entity(&self) -> EntityType {
        self.relations
            .last()
            .map(|step| step.target.entity)
            .unwrap_or(self.root)
    }

    /// Field indices from the root, used to read values off an instance.
    pub fn projection(&self) -> Vec<usize> {
        self.relations
            .iter()
            .map(|step| step.field.index)
            .chain(Some(self.attribute.field.index))
            .collect()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root.name())?;

        for step in &self.relations {
            write!(f, ".{}", step.field.name)?;
        }

        write!(f, ".{}", self.attribute.field.name)
    }
}

impl fmt::Debug for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttributePath({self})")
    }
}
