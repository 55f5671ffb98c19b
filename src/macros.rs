// src/macros.rs

/// String shorthand: `s!()` for an empty `String`, `s!(x)` for `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Log an error at the boundary it crosses, then return it to the caller.
#[macro_export]
macro_rules! bail_logged {
    ($err:expr) => {{
        let err = $err;
        ::tracing::error!(error = %err, "{}", err);
        return Err(err.into());
    }};
}
