use super::EntityType;
use crate::stmt::Type;

#[derive(Debug, Clone)]
pub struct Field {
    /// Index of the field in the containing entity
    pub index: usize,

    /// Rust and storage names
    pub name: FieldName,

    /// Attribute or navigation
    pub ty: FieldTy,

    /// True if the field holds an `Option`
    pub nullable: bool,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// True if the database generates the value
    pub auto: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    pub app_name: &'static str,
    pub storage_name: Option<&'static str>,
}

impl FieldName {
    /// Physical column name, falling back to the Rust name.
    pub fn storage_name(&self) -> &'static str {
        self.storage_name.unwrap_or(self.app_name)
    }
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    Relation(Relation),
}

impl FieldTy {
    pub fn is_relation(&self) -> bool {
        matches!(self, FieldTy::Relation(_))
    }

    pub fn as_primitive(&self) -> Option<&FieldPrimitive> {
        match self {
            FieldTy::Primitive(primitive) => Some(primitive),
            FieldTy::Relation(_) => None,
        }
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            FieldTy::Relation(relation) => Some(relation),
            FieldTy::Primitive(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    /// Value type of the attribute
    pub ty: Type,

    /// Set when the attribute is stored on a related entity
    pub related: Option<Related>,
}

/// A flat attribute that lives on a related entity's table.
#[derive(Debug, Clone)]
pub struct Related {
    pub target: EntityType,
    pub alias: Option<&'static str>,

    /// Field name on the target entity
    pub attribute: &'static str,
}

/// A navigation field pointing at another entity.
#[derive(Debug, Clone)]
pub struct Relation {
    pub target: EntityType,
    pub alias: Option<&'static str>,
}
