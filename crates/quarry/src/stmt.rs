mod into_value;
pub use into_value::IntoValue;

mod path;
pub use path::{AnyPath, EntityPath, Path};

mod primitive;
pub use primitive::Primitive;

pub use quarry_core::stmt::*;
