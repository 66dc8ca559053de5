/// Comparison applied by a value filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FilterType {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,

    /// Inclusive range; values are stored min then max
    Between,

    /// Attribute value is one of the filter values
    MatchesSet,

    /// Attribute value is none of the filter values
    DoesNotMatchSet,

    /// Attribute is not null
    IsSet,

    /// Attribute is null
    IsNotSet,
}

impl FilterType {
    /// Number of values the filter carries, `None` when variadic.
    pub fn arity(&self) -> Option<usize> {
        match self {
            FilterType::IsSet | FilterType::IsNotSet => Some(0),
            FilterType::Between => Some(2),
            FilterType::MatchesSet | FilterType::DoesNotMatchSet => None,
            _ => Some(1),
        }
    }
}
