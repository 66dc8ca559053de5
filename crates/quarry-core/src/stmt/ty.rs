use super::Value;

/// Value type of a declared attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit float
    F32,

    /// 64-bit float
    F64,

    /// String type
    String,

    /// Raw bytes
    Bytes,

    /// UUID
    Uuid,
}

impl Type {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Type::I8
                | Type::I16
                | Type::I32
                | Type::I64
                | Type::U8
                | Type::U16
                | Type::U32
                | Type::U64
        )
    }

    /// Returns `true` if `value` can be bound to an attribute of this type.
    ///
    /// Null is accepted by every type; nullability is tracked on the field.
    pub fn is_a(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::List(items) => items.iter().all(|item| self.is_a(item)),
            _ => value.ty() == Some(*self),
        }
    }
}
