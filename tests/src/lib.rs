mod models;
pub use models::*;

pub mod prelude;

pub use std_util::*;

/// Builds a `Definitions` registry with the given entities registered.
#[macro_export]
macro_rules! definitions {
    (
        $( $entity:ident ),*
    ) => {{
        $crate::init_logging();

        let mut builder = quarry::Definitions::builder();
        $( builder.register::<$entity>(); )*
        builder.build().unwrap()
    }};
}

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
