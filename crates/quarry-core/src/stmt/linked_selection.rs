use super::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SelectionLinkType {
    Union,
    Intersection,
    Exception,
}

/// A set operation joining a selection to another of the same entity type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinkedSelection {
    pub link: SelectionLinkType,
    pub selection: Box<Selection>,
}
