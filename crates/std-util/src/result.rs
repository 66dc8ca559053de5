/// Unwraps an `Err`, panicking with a note when the result is `Ok`.
///
/// With a second argument, the error's `Display` output must also match it.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            Ok(_) => panic!("expected `Err`; actual=`Ok`"),
        }
    };
    ($e:expr, $message:expr) => {
        match $e {
            Err(e) => {
                assert_eq!(e.to_string(), $message, "unexpected error message");
                e
            }
            Ok(_) => panic!("expected `Err({})`; actual=`Ok`", $message),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error's `Display` output otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error=`{}`", e),
        }
    };
}
