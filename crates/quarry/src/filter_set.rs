use crate::{
    stmt::{AnyPath, IntoValue, Path},
    Entity, EntityRelationSet, EntitySelection, Result,
};
use quarry_core::{
    stmt::{
        AttributeLocation, AttributePath, ExistsFilter, Filter, Mapper, Member, Value, ValueFilter,
    },
    DefinitionProvider, Error,
};
use std::marker::PhantomData;

/// Filters over `T`, built apart from any selection.
///
/// A filter set can be attached to an [`EntitySelection`] with
/// [`EntitySelection::filter`] or mapped to another entity type on its own.
pub struct ValueFilterSet<T> {
    filters: Vec<Filter>,
    _p: PhantomData<fn() -> T>,
}

impl<T: Entity> ValueFilterSet<T> {
    pub fn new() -> Self {
        ValueFilterSet {
            filters: vec![],
            _p: PhantomData,
        }
    }

    pub fn where_equal<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push(ValueFilter::equal(path.into_location(), value.into_value()))
    }

    pub fn where_not_equal<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push(ValueFilter::not_equal(path.into_location(), value.into_value()))
    }

    pub fn greater_than<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push(ValueFilter::greater_than(path.into_location(), value.into_value()))
    }

    pub fn greater_than_or_equal_to<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push(ValueFilter::greater_than_or_equal_to(
            path.into_location(),
            value.into_value(),
        ))
    }

    pub fn less_than<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push(ValueFilter::less_than(path.into_location(), value.into_value()))
    }

    pub fn less_than_or_equal_to<V>(self, path: Path<T, V>, value: impl IntoValue<V>) -> Self {
        self.push(ValueFilter::less_than_or_equal_to(
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
        self.push(ValueFilter::between(
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
        Ok(self.push(filter))
    }

    pub fn exclude<V, I>(self, path: Path<T, V>, values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoValue<V>,
    {
        let filter = ValueFilter::does_not_match_set(path.into_location(), values_of(values))?;
        Ok(self.push(filter))
    }

    pub fn is_set<V>(self, path: Path<T, V>) -> Self {
        self.push(ValueFilter::is_set(path.into_location()))
    }

    pub fn is_not_set<V>(self, path: Path<T, V>) -> Self {
        self.push(ValueFilter::is_not_set(path.into_location()))
    }

    /// Equality with `entity`'s current value for each selector.
    pub fn matching(mut self, entity: &T, selectors: &[AnyPath<T>]) -> Result<Self> {
        self.filters.extend(matching(entity, selectors)?.map(Filter::from));
        Ok(self)
    }

    /// Equality on each declared primary key attribute of `entity`.
    pub fn match_key(mut self, entity: &T, provider: &dyn DefinitionProvider) -> Result<Self> {
        self.filters.extend(match_key(entity, provider)?.map(Filter::from));
        Ok(self)
    }

    /// Equality on explicitly chosen key attributes, in selector order.
    pub fn match_key_with(self, entity: &T, selectors: &[AnyPath<T>]) -> Result<Self> {
        self.matching(entity, selectors)
    }

    pub fn exists<U: Entity>(
        self,
        selection: EntitySelection<U>,
        relations: EntityRelationSet<T>,
    ) -> Result<Self> {
        Ok(self.push(exists(false, selection, relations)?))
    }

    pub fn not_exists<U: Entity>(
        self,
        selection: EntitySelection<U>,
        relations: EntityRelationSet<T>,
    ) -> Result<Self> {
        Ok(self.push(exists(true, selection, relations)?))
    }

    /// Equivalent filters against `U`.
    pub fn map_set<U: Entity>(
        &self,
        provider: &dyn DefinitionProvider,
    ) -> Result<ValueFilterSet<U>> {
        let mapper = Mapper::new(T::entity_type(), U::entity_type(), provider)?;

        Ok(ValueFilterSet {
            filters: self
                .filters
                .iter()
                .map(|filter| mapper.filter(filter))
                .collect::<Result<_>>()?,
            _p: PhantomData,
        })
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn into_filters(self) -> Vec<Filter> {
        self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filter values in declaration order.
    pub fn property_values(&self) -> Vec<Value> {
        let mut selection = quarry_core::stmt::Selection::new(T::entity_type());
        selection.filters = self.filters.clone();
        selection.property_values()
    }

    fn push(mut self, filter: impl Into<Filter>) -> Self {
        self.filters.push(filter.into());
        self
    }
}

impl<T: Entity> Default for ValueFilterSet<T> {
    fn default() -> Self {
        ValueFilterSet::new()
    }
}

pub(crate) fn values_of<V, I>(values: I) -> Vec<Value>
where
    I: IntoIterator,
    I::Item: IntoValue<V>,
{
    values.into_iter().map(IntoValue::<V>::into_value).collect()
}

/// Current values of `entity` at each selector.
pub(crate) fn selected_values<T: Entity>(
    entity: &T,
    selectors: &[AnyPath<T>],
) -> Result<Vec<(AttributeLocation, Value)>> {
    if selectors.is_empty() {
        return Err(Error::invalid_argument(format!(
            "no attributes of `{}` were selected",
            T::entity_type()
        )));
    }

    selectors
        .iter()
        .map(|selector| {
            let location = selector.location();
            let value = entity.value_at(&location.path().projection())?;
            Ok((location.clone(), value))
        })
        .collect()
}

pub(crate) fn matching<T: Entity>(
    entity: &T,
    selectors: &[AnyPath<T>],
) -> Result<impl Iterator<Item = ValueFilter>> {
    Ok(selected_values(entity, selectors)?
        .into_iter()
        .map(|(location, value)| ValueFilter::equal(location, value)))
}

pub(crate) fn match_key<T: Entity>(
    entity: &T,
    provider: &dyn DefinitionProvider,
) -> Result<impl Iterator<Item = ValueFilter>> {
    let definition = provider.resolve(T::entity_type())?;
    let mut filters = vec![];

    for field in definition.primary_key() {
        let location = AttributeLocation::resolve(AttributePath::direct(
            T::entity_type(),
            Member::new(field.index, field.name.app_name),
        ));
        let value = entity.value_at(&[field.index])?;
        filters.push(ValueFilter::equal(location, value));
    }

    if filters.is_empty() {
        return Err(Error::invalid_definition(format!(
            "`{}` does not declare a primary key",
            T::entity_type()
        )));
    }

    log::trace!(
        "matching primary key; entity={}, attributes={}",
        T::entity_type(),
        filters.len()
    );

    Ok(filters.into_iter())
}

pub(crate) fn exists<T: Entity, U: Entity>(
    negated: bool,
    selection: EntitySelection<U>,
    relations: EntityRelationSet<T>,
) -> Result<ExistsFilter> {
    if relations.is_empty() {
        return Err(Error::invalid_argument(format!(
            "existence filter over `{}` has no relation to `{}`",
            U::entity_type(),
            T::entity_type()
        )));
    }

    Ok(ExistsFilter {
        negated,
        relations: relations.into_relations(),
        selection: Box::new(selection.into_untyped()),
    })
}
