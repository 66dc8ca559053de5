use crate::{stmt::EntityPath, Result};
use quarry_core::{stmt::Value, Register};

/// A type declared with `#[derive(Entity)]`.
pub trait Entity: Register + Record + Sized {
    /// Typed field accessors for an occurrence of this entity reached from
    /// the root entity `R`.
    type Fields<R>;

    fn fields_at<R>(path: EntityPath<R, Self>) -> Self::Fields<R>;
}

/// A navigation field's type, resolving to the entity it points at.
pub trait Navigation {
    type Entity: Entity;

    /// True if the navigation may be absent
    const NULLABLE: bool = false;
}

impl<T: Navigation> Navigation for Option<T> {
    type Entity = T::Entity;
    const NULLABLE: bool = true;
}

impl<T: Navigation> Navigation for Box<T> {
    type Entity = T::Entity;
    const NULLABLE: bool = T::NULLABLE;
}

/// Reads attribute values off an entity instance.
pub trait Record {
    /// Returns the value at `projection`, a list of field indices starting at
    /// this entity. Absent navigations yield [`Value::Null`].
    fn value_at(&self, projection: &[usize]) -> Result<Value>;
}

impl<T: Record> Record for Option<T> {
    fn value_at(&self, projection: &[usize]) -> Result<Value> {
        match self {
            Some(record) => record.value_at(projection),
            None => Ok(Value::Null),
        }
    }
}

impl<T: Record> Record for Box<T> {
    fn value_at(&self, projection: &[usize]) -> Result<Value> {
        (**self).value_at(projection)
    }
}
