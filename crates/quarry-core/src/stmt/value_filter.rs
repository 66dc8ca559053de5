use super::{AttributeLocation, FilterType, Value};
use crate::{Error, Result};

use std::cmp::Ordering;

/// A predicate over one attribute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValueFilter {
    pub attribute: AttributeLocation,
    pub filter_type: FilterType,
    pub values: Vec<Value>,
}

impl ValueFilter {
    /// Builds a filter, checking the value count against the filter type.
    pub fn new(
        attribute: AttributeLocation,
        filter_type: FilterType,
        values: Vec<Value>,
    ) -> Result<ValueFilter> {
        match filter_type.arity() {
            Some(arity) if arity != values.len() => {
                return Err(Error::invalid_argument(format!(
                    "{filter_type:?} filter on `{attribute}` takes {arity} value(s), got {}",
                    values.len()
                )));
            }
            None if values.is_empty() => {
                return Err(Error::invalid_argument(format!(
                    "{filter_type:?} filter on `{attribute}` requires at least one value"
                )));
            }
            _ => {}
        }

        let mut values = values;
        if filter_type == FilterType::Between
            && values[0].partial_cmp(&values[1]) == Some(Ordering::Greater)
        {
            values.swap(0, 1);
        }

        Ok(ValueFilter {
            attribute,
            filter_type,
            values,
        })
    }

    /// Equality; a null value becomes an `IsNotSet` filter.
    pub fn equal(attribute: AttributeLocation, value: Value) -> ValueFilter {
        if value.is_null() {
            ValueFilter::is_not_set(attribute)
        } else {
            ValueFilter::single(attribute, FilterType::Equality, value)
        }
    }

    /// Inequality; a null value becomes an `IsSet` filter.
    pub fn not_equal(attribute: AttributeLocation, value: Value) -> ValueFilter {
        if value.is_null() {
            ValueFilter::is_set(attribute)
        } else {
            ValueFilter::single(attribute, FilterType::Inequality, value)
        }
    }

    pub fn less_than(attribute: AttributeLocation, value: Value) -> ValueFilter {
        ValueFilter::single(attribute, FilterType::LessThan, value)
    }

    pub fn less_than_or_equal_to(attribute: AttributeLocation, value: Value) -> ValueFilter {
        ValueFilter::single(attribute, FilterType::LessThanOrEqualTo, value)
    }

    pub fn greater_than(attribute: AttributeLocation, value: Value) -> ValueFilter {
        ValueFilter::single(attribute, FilterType::GreaterThan, value)
    }

    pub fn greater_than_or_equal_to(attribute: AttributeLocation, value: Value) -> ValueFilter {
        ValueFilter::single(attribute, FilterType::GreaterThanOrEqualTo, value)
    }

    /// Inclusive range with the bounds put in ascending order.
    pub fn between(attribute: AttributeLocation, min: Value, max: Value) -> ValueFilter {
        let values = match min.partial_cmp(&max) {
            Some(Ordering::Greater) => vec![max, min],
            _ => vec![min, max],
        };

        ValueFilter {
            attribute,
            filter_type: FilterType::Between,
            values,
        }
    }

    pub fn matches_set(attribute: AttributeLocation, values: Vec<Value>) -> Result<ValueFilter> {
        ValueFilter::new(attribute, FilterType::MatchesSet, values)
    }

    pub fn does_not_match_set(
        attribute: AttributeLocation,
        values: Vec<Value>,
    ) -> Result<ValueFilter> {
        ValueFilter::new(attribute, FilterType::DoesNotMatchSet, values)
    }

    pub fn is_set(attribute: AttributeLocation) -> ValueFilter {
        ValueFilter {
            attribute,
            filter_type: FilterType::IsSet,
            values: vec![],
        }
    }

    pub fn is_not_set(attribute: AttributeLocation) -> ValueFilter {
        ValueFilter {
            attribute,
            filter_type: FilterType::IsNotSet,
            values: vec![],
        }
    }

    fn single(attribute: AttributeLocation, filter_type: FilterType, value: Value) -> ValueFilter {
        ValueFilter {
            attribute,
            filter_type,
            values: vec![value],
        }
    }
}
