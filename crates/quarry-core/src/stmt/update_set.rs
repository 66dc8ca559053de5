use super::{AttributeLocation, Selection, Value};
use crate::{schema::EntityType, Error, Result};

use indexmap::IndexMap;

/// Untyped update: attribute assignments plus the selection of rows to
/// update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateSet {
    pub entity: EntityType,
    pub assignments: Assignments,

    /// Rows to update; an unfiltered selection updates every row
    pub selection: Selection,
}

/// Assignments in the order they were made, at most one per attribute.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignments {
    assignments: IndexMap<AttributeLocation, Value>,
}

impl UpdateSet {
    pub fn new(entity: EntityType) -> UpdateSet {
        UpdateSet {
            entity,
            assignments: Assignments::default(),
            selection: Selection::new(entity),
        }
    }

    /// Assignment values followed by the selection's values.
    pub fn property_values(&self) -> Vec<Value> {
        let mut out: Vec<_> = self.assignments.values().cloned().collect();
        self.selection.collect_values(&mut out);
        out
    }
}

impl Assignments {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Assigns `value` to a direct attribute.
    pub fn set(&mut self, attribute: AttributeLocation, value: Value) -> Result<()> {
        if !attribute.is_direct() {
            return Err(Error::invalid_argument(format!(
                "`{}` is not a direct attribute of `{}`",
                attribute.path(),
                attribute.root()
            )));
        }

        if self.assignments.contains_key(&attribute) {
            return Err(Error::invariant_violation(format!(
                "attribute `{attribute}` is already assigned"
            )));
        }

        self.assignments.insert(attribute, value);
        Ok(())
    }

    pub fn get(&self, attribute: &AttributeLocation) -> Option<&Value> {
        self.assignments.get(attribute)
    }

    pub fn contains(&self, attribute: &AttributeLocation) -> bool {
        self.assignments.contains_key(attribute)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&AttributeLocation, &Value)> + '_ {
        self.assignments.iter()
    }

    pub fn attributes(&self) -> impl ExactSizeIterator<Item = &AttributeLocation> + '_ {
        self.assignments.keys()
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.assignments.values()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Assignments {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.assignments.iter())
    }
}
