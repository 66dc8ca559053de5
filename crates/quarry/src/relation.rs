use crate::{stmt::Path, Entity, Result};
use quarry_core::stmt::{EntityRelation, JoinType};
use std::marker::PhantomData;

/// Builds a join between attributes of two, possibly different, root
/// entities.
///
/// The aliases override the alias of the entity occurrence owning each
/// endpoint. Both endpoints hold values of type `V`, and at least one of them
/// must be a primary key attribute.
pub fn join<S, R, V>(
    join_type: JoinType,
    source: Path<S, V>,
    relation: Path<R, V>,
    source_alias: Option<&str>,
    relation_alias: Option<&str>,
) -> Result<EntityRelation> {
    EntityRelation::new(
        join_type,
        source.into_location(),
        relation.into_location(),
        source_alias.map(str::to_string),
        relation_alias.map(str::to_string),
    )
}

/// Relations collected for a selection of `T`.
#[derive(Debug)]
pub struct EntityRelationSet<T> {
    relations: Vec<EntityRelation>,
    _p: PhantomData<fn() -> T>,
}

impl<T: Entity> EntityRelationSet<T> {
    pub fn new() -> Self {
        EntityRelationSet {
            relations: vec![],
            _p: PhantomData,
        }
    }

    /// Inner join between two attributes reached from `T`. Each endpoint is
    /// owned by the last entity its path navigates to.
    pub fn inner_join<V>(self, source: Path<T, V>, relation: Path<T, V>) -> Result<Self> {
        Ok(self.push(join(JoinType::Inner, source, relation, None, None)?))
    }

    pub fn left_join<V>(self, source: Path<T, V>, relation: Path<T, V>) -> Result<Self> {
        Ok(self.push(join(JoinType::Left, source, relation, None, None)?))
    }

    /// Inner join between attributes of explicitly named entity types.
    pub fn join<S, R, V>(
        self,
        source: Path<S, V>,
        relation: Path<R, V>,
        source_alias: Option<&str>,
        relation_alias: Option<&str>,
    ) -> Result<Self> {
        let relation = join(
            JoinType::Inner,
            source,
            relation,
            source_alias,
            relation_alias,
        )?;
        Ok(self.push(relation))
    }

    pub fn left_join_between<S, R, V>(
        self,
        source: Path<S, V>,
        relation: Path<R, V>,
        source_alias: Option<&str>,
        relation_alias: Option<&str>,
    ) -> Result<Self> {
        let relation = join(
            JoinType::Left,
            source,
            relation,
            source_alias,
            relation_alias,
        )?;
        Ok(self.push(relation))
    }

    pub fn relations(&self) -> &[EntityRelation] {
        &self.relations
    }

    pub fn into_relations(self) -> Vec<EntityRelation> {
        self.relations
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    fn push(mut self, relation: EntityRelation) -> Self {
        self.relations.push(relation);
        self
    }
}

impl<T: Entity> Default for EntityRelationSet<T> {
    fn default() -> Self {
        EntityRelationSet::new()
    }
}
