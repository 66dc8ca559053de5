use crate::{
    filter_set,
    stmt::{AnyPath, IntoValue, Path},
    Entity, EntitySelection, Result,
};
use quarry_core::{
    stmt::{self, AttributeLocation, AttributePath, Assignments, Mapper, Member, Value},
    DefinitionProvider,
};
use std::{fmt, marker::PhantomData};

/// Assignments to attributes of `T` plus the selection of rows they apply
/// to.
pub struct UpdateSet<T> {
    untyped: stmt::UpdateSet,
    _p: PhantomData<fn() -> T>,
}

impl<T: Entity> UpdateSet<T> {
    pub fn new() -> Self {
        UpdateSet {
            untyped: stmt::UpdateSet::new(T::entity_type()),
            _p: PhantomData,
        }
    }

    pub fn untyped(&self) -> &stmt::UpdateSet {
        &self.untyped
    }

    pub fn into_untyped(self) -> stmt::UpdateSet {
        self.untyped
    }

    pub fn assignments(&self) -> &Assignments {
        &self.untyped.assignments
    }

    /// Assigns `value` to a direct attribute of `T`.
    pub fn set<V>(mut self, path: Path<T, V>, value: impl IntoValue<V>) -> Result<Self> {
        self.untyped
            .assignments
            .set(path.into_location(), value.into_value())?;
        Ok(self)
    }

    /// Assigns every direct attribute that is neither a key nor generated by
    /// the database, taking values from `entity`.
    pub fn set_from(mut self, entity: &T, provider: &dyn DefinitionProvider) -> Result<Self> {
        let definition = provider.resolve(T::entity_type())?;

        for field in definition
            .direct_attributes()
            .filter(|field| !field.primary_key && !field.auto)
        {
            let location = AttributeLocation::resolve(AttributePath::direct(
                T::entity_type(),
                Member::new(field.index, field.name.app_name),
            ));
            let value = entity.value_at(&[field.index])?;
            self.untyped.assignments.set(location, value)?;
        }

        Ok(self)
    }

    /// Assigns the selected attributes, taking values from `entity`.
    pub fn set_matching(mut self, entity: &T, selectors: &[AnyPath<T>]) -> Result<Self> {
        for (location, value) in filter_set::selected_values(entity, selectors)? {
            self.untyped.assignments.set(location, value)?;
        }

        Ok(self)
    }

    /// Restricts the update to the rows `selection` matches.
    pub fn filter(mut self, selection: EntitySelection<T>) -> Self {
        self.untyped.selection = selection.into_untyped();
        self
    }

    /// Assigned values followed by the filter selection's values.
    pub fn property_values(&self) -> Vec<Value> {
        self.untyped.property_values()
    }

    pub fn map_set<U: Entity>(&self, provider: &dyn DefinitionProvider) -> Result<UpdateSet<U>> {
        let mapped = Mapper::new(T::entity_type(), U::entity_type(), provider)?
            .update_set(&self.untyped)?;

        Ok(UpdateSet {
            untyped: mapped,
            _p: PhantomData,
        })
    }
}

impl<T: Entity> Default for UpdateSet<T> {
    fn default() -> Self {
        UpdateSet::new()
    }
}

impl<T> fmt::Debug for UpdateSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.untyped, f)
    }
}
