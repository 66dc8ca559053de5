use super::AttributeLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderExpression {
    pub attribute: AttributeLocation,
    pub descending: bool,
}

impl OrderExpression {
    pub fn ascending(attribute: AttributeLocation) -> OrderExpression {
        OrderExpression {
            attribute,
            descending: false,
        }
    }

    pub fn descending(attribute: AttributeLocation) -> OrderExpression {
        OrderExpression {
            attribute,
            descending: true,
        }
    }
}
