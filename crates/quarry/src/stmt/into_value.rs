use quarry_core::stmt::Value;
use uuid::Uuid;

/// Conversion of a Rust value into a [`Value`] compared against or assigned
/// to an attribute of type `T`.
pub trait IntoValue<T> {
    fn into_value(self) -> Value;
}

macro_rules! impl_into_value {
    ( $( $t:ty ),* ) => {
        $(
            impl IntoValue<$t> for $t {
                fn into_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_into_value!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Vec<u8>, Uuid);

impl IntoValue<String> for &str {
    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl IntoValue<Option<String>> for &str {
    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl IntoValue<Vec<u8>> for &[u8] {
    fn into_value(self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl<T: IntoValue<T> + Clone> IntoValue<T> for &T {
    fn into_value(self) -> Value {
        self.clone().into_value()
    }
}

impl<T: IntoValue<T>> IntoValue<Option<T>> for T {
    fn into_value(self) -> Value {
        IntoValue::<T>::into_value(self)
    }
}

impl<T: IntoValue<T> + Clone> IntoValue<Option<T>> for &T {
    fn into_value(self) -> Value {
        IntoValue::<T>::into_value(self.clone())
    }
}

impl<T: IntoValue<T>> IntoValue<Option<T>> for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(value) => IntoValue::<T>::into_value(value),
            None => Value::Null,
        }
    }
}
