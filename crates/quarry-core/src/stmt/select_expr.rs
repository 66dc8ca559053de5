use super::{AggregateFunction, AttributeLocation};

/// One projected attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectExpression {
    pub attribute: AttributeLocation,
    pub aggregate: AggregateFunction,

    /// Output name of the projected column
    pub alias: Option<String>,
}

impl SelectExpression {
    pub fn new(attribute: AttributeLocation) -> SelectExpression {
        SelectExpression {
            attribute,
            aggregate: AggregateFunction::None,
            alias: None,
        }
    }

    pub fn aggregate(mut self, aggregate: AggregateFunction) -> SelectExpression {
        self.aggregate = aggregate;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> SelectExpression {
        self.alias = Some(alias.into());
        self
    }
}
