//! Common imports for test files
//!
//! `use tests::prelude::*;` brings in the fixture entities, the quarry
//! builders and the assertion macros.

pub use crate::models::*;
pub use crate::{assert_err, assert_ok, definitions};

pub use quarry::{
    AnyPath, DefinitionProvider, Definitions, EntityRelationSet, EntitySelection, Register,
    UpdateSet, ValueFilterSet,
};
pub use quarry_core::stmt::{AggregateFunction, FilterType, JoinType, SelectionLinkType, Value};
