use crate::{
    filter_set::{self, values_of},
    relation,
    stmt::{AnyPath, IntoValue, Path},
    Entity, EntityRelationSet, Result, ValueFilterSet,
};
use quarry_core::{
    stmt::{
        self, AggregateFunction, EntityRelation, Filter, JoinType, Mapper, OrderExpression,
        ParentExpression, ResultPage, SelectExpression, SelectionLinkType, Value, ValueFilter,
    },
    DefinitionProvider, Error,
};
use std::{fmt, marker::PhantomData};

/// A selection of `T` built with typed paths.
///
/// Every call resolves its paths and appends to the underlying
/// [`stmt::Selection`], so the order of calls is the order of projections,
/// filters, relations and sort keys.
pub struct EntitySelection<T> {
    untyped: stmt::Selection,
    _p: PhantomData<fn() -> T>,
}

impl<T: Entity> EntitySelection<T> {
    /// Selects every attribute of every `T`.
    pub fn new() -> Self {
        EntitySelection::from_untyped(stmt::Selection::new(T::entity_type()))
    }

    fn from_untyped(untyped: stmt::Selection) -> Self {
        EntitySelection {
            untyped,
            _p: PhantomData,
        }
    }

    pub fn untyped(&self) -> &stmt::Selection {
        &self.untyped
    }

    pub fn into_untyped(self) -> stmt::Selection {
        self.untyped
    }

    pub fn select<V>(mut self, path: Path<T, V>) -> Self {
        self.untyped
            .select
            .push(SelectExpression::new(path.into_location()));
        self
    }

    pub fn select_as<V>(mut self, path: Path<T, V>, alias: impl Into<String>) -> Self {
        self.untyped
            .select
            .push(SelectExpression::new(path.into_location()).alias(alias));
        self
    }

    pub fn select_aggregate<V>(
        mut self,
        path: Path<T, V>,
        function: AggregateFunction,
        alias: impl Into<String>,
    ) -> Self {
        self.untyped.select.push(
            SelectExpression::new(path.into_location())
                .aggregate(function)
                .alias(alias),
        );
        self
    }

    pub fn where_equal<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push_filter(ValueFilter::equal(path.into_location(), value.into_value()))
    }

    pub fn where_not_equal<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push_filter(ValueFilter::not_equal(path.into_location(), value.into_value()))
    }

    pub fn greater_than<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push_filter(ValueFilter::greater_than(path.into_location(), value.into_value()))
    }

    pub fn greater_than_or_equal_to<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push_filter(ValueFilter::greater_than_or_equal_to(
            path.into_location(),
            value.into_value(),
        ))
    }

    pub fn less_than<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push_filter(ValueFilter::less_than(path.into_location(), value.into_value()))
    }

    pub fn less_than_or_equal_to<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push_filter(ValueFilter::less_than_or_equal_to(
            path.into_location(),
            value.into_value(),
        ))
    }

    /// Inclusive range; the bounds may be given in either order.
    pub fn between<V>(
        self,
        path: Path<T, V>,
        min: impl IntoValue<V>,
        max: impl IntoValue<V>,
    ) -> Self {
        self.push_filter(ValueFilter::between(
            path.into_location(),
            min.into_value(),
            max.into_value(),
        ))
    }

    pub fn include<V, I>(self, path: Path<T, V>, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoValue<V>,
    {
        let filter = ValueFilter::matches_set(path.into_location(), values_of(values))?;
        Ok(self.push_filter(filter))
    }

    pub fn exclude<V, I>(self, path: Path<T, V>, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoValue<V>,
    {
        let filter = ValueFilter::does_not_match_set(path.into_location(), values_of(values))?;
        Ok(self.push_filter(filter))
    }

    pub fn is_set<V>(self, path: Path<T, V>) -> Self {
        self.push_filter(ValueFilter::is_set(path.into_location()))
    }

    pub fn is_not_set<V>(self, path: Path<T, V>) -> Self {
        self.push_filter(ValueFilter::is_not_set(path.into_location()))
    }

    /// Equality with `entity`'s current value for each selector.
    pub fn matching(mut self, entity: &T, selectors: &[AnyPath<T>]) -> Result<Self> {
        self.untyped
            .filters
            .extend(filter_set::matching(entity, selectors)?.map(Filter::from));
        Ok(self)
    }

    /// Equality on each declared primary key attribute of `entity`.
    pub fn match_key(mut self, entity: &T, provider: &dyn DefinitionProvider) -> Result<Self> {
        self.untyped
            .filters
            .extend(filter_set::match_key(entity, provider)?.map(Filter::from));
        Ok(self)
    }

    /// Appends every filter of `filters`.
    pub fn filter(mut self, filters: ValueFilterSet<T>) -> Self {
        self.untyped.filters.extend(filters.into_filters());
        self
    }

    pub fn exists<U: Entity>(
        self,
        selection: EntitySelection<U>,
        relations: EntityRelationSet<T>,
    ) -> Result<Self> {
        Ok(self.push_filter(filter_set::exists(false, selection, relations)?))
    }

    pub fn not_exists<U: Entity>(
        self,
        selection: EntitySelection<U>,
        relations: EntityRelationSet<T>,
    ) -> Result<Self> {
        Ok(self.push_filter(filter_set::exists(true, selection, relations)?))
    }

    /// Inner join between two attributes reached from `T`. Each endpoint is
    /// owned by the last entity its path navigates to.
    pub fn inner_join<V>(self, source: Path<T, V>, relation: Path<T, V>) -> Result<Self> {
        let relation = relation::join(JoinType::Inner, source, relation, None, None)?;
        Ok(self.push_relation(relation))
    }

    pub fn left_join<V>(self, source: Path<T, V>, relation: Path<T, V>) -> Result<Self> {
        let relation = relation::join(JoinType::Left, source, relation, None, None)?;
        Ok(self.push_relation(relation))
    }

    /// Inner join between attributes of explicitly named entity types.
    pub fn join<S, R, V>(
        self,
        source: Path<S, V>,
        relation: Path<R, V>,
        source_alias: Option<&str>,
        relation_alias: Option<&str>,
    ) -> Result<Self> {
        let relation = relation::join(
            JoinType::Inner,
            source,
            relation,
            source_alias,
            relation_alias,
        )?;
        Ok(self.push_relation(relation))
    }

    pub fn left_join_between<S, R, V>(
        self,
        source: Path<S, V>,
        relation: Path<R, V>,
        source_alias: Option<&str>,
        relation_alias: Option<&str>,
    ) -> Result<Self> {
        let relation = relation::join(
            JoinType::Left,
            source,
            relation,
            source_alias,
            relation_alias,
        )?;
        Ok(self.push_relation(relation))
    }

    pub fn with_relations(mut self, relations: EntityRelationSet<T>) -> Self {
        self.untyped.relations.extend(relations.into_relations());
        self
    }

    /// Joins the selection to a named sub-selection on `parent_attribute =
    /// attribute`. The parent's entity occurrence is aliased `name`.
    pub fn with_parent<P: Entity, V>(
        mut self,
        name: &str,
        parent: EntitySelection<P>,
        parent_attribute: Path<P, V>,
        attribute: Path<T, V>,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_argument("parent expression name is empty"));
        }

        if let Some(existing) = &self.untyped.parent {
            return Err(Error::invariant_violation(format!(
                "selection of `{}` already has parent expression `{}`",
                T::entity_type(),
                existing.name
            )));
        }

        let relation = relation::join(
            JoinType::Inner,
            attribute,
            parent_attribute,
            None,
            Some(name),
        )?;

        self.untyped.parent = Some(ParentExpression {
            name: name.to_string(),
            selection: Box::new(parent.into_untyped()),
            relations: vec![relation],
        });

        Ok(self)
    }

    pub fn order_by<V>(mut self, path: Path<T, V>) -> Self {
        self.untyped
            .order_by
            .push(OrderExpression::ascending(path.into_location()));
        self
    }

    pub fn order_by_descending<V>(mut self, path: Path<T, V>) -> Self {
        self.untyped
            .order_by
            .push(OrderExpression::descending(path.into_location()));
        self
    }

    pub fn skip(mut self, rows: u64) -> Self {
        self.untyped.page = self.untyped.page.skip(rows);
        self
    }

    pub fn take(mut self, rows: u64) -> Self {
        self.untyped.page = self.untyped.page.take(rows);
        self
    }

    pub fn seek(mut self, f: impl FnOnce(ResultPage) -> ResultPage) -> Self {
        self.untyped.page = f(self.untyped.page);
        self
    }

    /// Moves to the 1-based page `page` of the current page size.
    pub fn set_page(mut self, page: u64) -> Result<Self> {
        self.untyped.page.set_page(page)?;
        Ok(self)
    }

    pub fn page(&self) -> ResultPage {
        self.untyped.page
    }

    pub fn union(self, other: EntitySelection<T>) -> Self {
        self.link(SelectionLinkType::Union, other)
    }

    pub fn intersect(self, other: EntitySelection<T>) -> Self {
        self.link(SelectionLinkType::Intersection, other)
    }

    pub fn except(self, other: EntitySelection<T>) -> Self {
        self.link(SelectionLinkType::Exception, other)
    }

    pub fn property_values(&self) -> Vec<Value> {
        self.untyped.property_values()
    }

    pub fn relations(&self) -> &[EntityRelation] {
        &self.untyped.relations
    }

    /// The equivalent selection against `U`.
    pub fn map_selection<U: Entity>(
        &self,
        provider: &dyn DefinitionProvider,
    ) -> Result<EntitySelection<U>> {
        let mapped = Mapper::new(T::entity_type(), U::entity_type(), provider)?
            .selection(&self.untyped)?;

        log::debug!(
            "mapped selection; from={}, to={}",
            T::entity_type(),
            U::entity_type()
        );

        Ok(EntitySelection::from_untyped(mapped))
    }

    /// Resolves every attribute the selection references.
    pub fn verify(&self, provider: &dyn DefinitionProvider) -> Result<()> {
        provider.verify_selection(&self.untyped)
    }

    fn push_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.untyped.filters.push(filter.into());
        self
    }

    fn push_relation(mut self, relation: EntityRelation) -> Self {
        self.untyped.relations.push(relation);
        self
    }

    fn link(mut self, link: SelectionLinkType, other: EntitySelection<T>) -> Self {
        self.untyped.append_link(link, other.untyped);
        self
    }
}

impl<T: Entity> Default for EntitySelection<T> {
    fn default() -> Self {
        EntitySelection::new()
    }
}

impl<T> Clone for EntitySelection<T> {
    fn clone(&self) -> Self {
        EntitySelection {
            untyped: self.untyped.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> fmt::Debug for EntitySelection<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}

impl<T> From<EntitySelection<T>> for stmt::Selection {
    fn from(value: EntitySelection<T>) -> Self {
        value.untyped
    }
}
