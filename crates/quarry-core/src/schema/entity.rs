use super::{Field, FieldTy};

/// Declared shape of an entity, as produced by `#[derive(Entity)]`.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Rust type name of the entity
    pub name: &'static str,

    /// Table the entity maps to; defaults to the entity name
    pub table: Option<&'static str>,

    /// Container (database schema) holding the table
    pub container: Option<&'static str>,

    /// Fields in declaration order
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    pub fn table_name(&self) -> &'static str {
        self.table.unwrap_or(self.name)
    }

    /// Fields marked `#[key]`, in declaration order.
    pub fn primary_key(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.primary_key)
    }

    pub fn relations(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields
            .iter()
            .filter(|field| matches!(field.ty, FieldTy::Relation(_)))
    }
}
