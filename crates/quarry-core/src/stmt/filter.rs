use super::{EntityRelation, Selection, Value, ValueFilter};

/// One entry in a selection's filter list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Filter {
    Value(ValueFilter),
    Exists(ExistsFilter),
}

/// Existence (or absence) of rows in a correlated sub-selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExistsFilter {
    pub negated: bool,

    /// Joins correlating the sub-selection with the outer selection
    pub relations: Vec<EntityRelation>,

    pub selection: Box<Selection>,
}

impl Filter {
    pub fn as_value(&self) -> Option<&ValueFilter> {
        match self {
            Filter::Value(filter) => Some(filter),
            Filter::Exists(_) => None,
        }
    }

    pub fn as_exists(&self) -> Option<&ExistsFilter> {
        match self {
            Filter::Exists(filter) => Some(filter),
            Filter::Value(_) => None,
        }
    }

    pub(super) fn collect_values(&self, out: &mut Vec<Value>) {
        match self {
            Filter::Value(filter) => out.extend(filter.values.iter().cloned()),
            Filter::Exists(filter) => filter.selection.collect_values(out),
        }
    }
}

impl From<ValueFilter> for Filter {
    fn from(filter: ValueFilter) -> Filter {
        Filter::Value(filter)
    }
}

impl From<ExistsFilter> for Filter {
    fn from(filter: ExistsFilter) -> Filter {
        Filter::Exists(filter)
    }
}
