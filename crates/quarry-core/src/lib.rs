mod error;
pub use error::{Error, IntoError};

pub mod definitions;
pub use definitions::{DefinitionProvider, Definitions};

pub mod schema;
pub use schema::{EntityType, Register};

pub mod stmt;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
