use super::{AttributeLocation, AttributeReference, EntityReference};
use crate::{Error, Result};

/// How the related entity is joined.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinType {
    #[default]
    Inner,
    Left,
}

/// A join between a source attribute and a relation attribute.
///
/// The explicit aliases override the alias of the entity owning each
/// endpoint. Two relations are equal when they have the same join type and
/// the same effective endpoints, regardless of the paths used to reach them,
/// so a join inferred from navigation paths equals the same join spelled out
/// with both entity types.
///
/// At least one endpoint must be a primary key attribute of the entity that
/// owns it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityRelation {
    pub join_type: JoinType,
    pub source: AttributeLocation,
    pub relation: AttributeLocation,
    pub source_alias: Option<String>,
    pub relation_alias: Option<String>,
}

impl EntityRelation {
    pub fn new(
        join_type: JoinType,
        source: AttributeLocation,
        relation: AttributeLocation,
        source_alias: Option<String>,
        relation_alias: Option<String>,
    ) -> Result<EntityRelation> {
        let relation = EntityRelation {
            join_type,
            source,
            relation,
            source_alias,
            relation_alias,
        };

        if relation.source_entity() == relation.relation_entity() {
            return Err(Error::invalid_relation(format!(
                "`{}` and `{}` are attributes of the same entity occurrence `{}`",
                relation.source_attribute(),
                relation.relation_attribute(),
                relation.source_entity(),
            )));
        }

        if !is_key(&relation.source) && !is_key(&relation.relation) {
            return Err(Error::invalid_relation(format!(
                "join between `{}` and `{}` does not reference a key",
                relation.source_attribute(),
                relation.relation_attribute()
            )));
        }

        Ok(relation)
    }

    pub fn inner(source: AttributeLocation, relation: AttributeLocation) -> Result<EntityRelation> {
        EntityRelation::new(JoinType::Inner, source, relation, None, None)
    }

    pub fn left(source: AttributeLocation, relation: AttributeLocation) -> Result<EntityRelation> {
        EntityRelation::new(JoinType::Left, source, relation, None, None)
    }

    /// The entity occurrence owning the source attribute.
    pub fn source_entity(&self) -> EntityReference {
        effective(&self.source, self.source_alias.as_deref())
    }

    /// The entity occurrence owning the relation attribute.
    pub fn relation_entity(&self) -> EntityReference {
        effective(&self.relation, self.relation_alias.as_deref())
    }

    pub fn source_attribute(&self) -> AttributeReference {
        AttributeReference {
            entity: self.source_entity(),
            attribute: self.source.attribute(),
        }
    }

    pub fn relation_attribute(&self) -> AttributeReference {
        AttributeReference {
            entity: self.relation_entity(),
            attribute: self.relation.attribute(),
        }
    }
}

fn is_key(location: &AttributeLocation) -> bool {
    location
        .entity()
        .entity
        .schema()
        .field_by_name(location.attribute())
        .is_some_and(|field| field.primary_key)
}

fn effective(location: &AttributeLocation, alias: Option<&str>) -> EntityReference {
    let entity = location.entity().clone();

    match alias {
        Some(alias) => entity.with_alias(alias),
        None => entity,
    }
}

impl PartialEq for EntityRelation {
    fn eq(&self, other: &Self) -> bool {
        self.join_type == other.join_type
            && self.source_attribute() == other.source_attribute()
            && self.relation_attribute() == other.relation_attribute()
    }
}

impl Eq for EntityRelation {}
