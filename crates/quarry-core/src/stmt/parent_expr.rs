use super::{EntityRelation, Selection};

/// A named sub-selection the outer selection joins against, rendered as a
/// common table expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParentExpression {
    pub name: String,
    pub selection: Box<Selection>,

    /// Joins from the outer selection to the named parent
    pub relations: Vec<EntityRelation>,
}
