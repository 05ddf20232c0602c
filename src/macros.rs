// src/macros.rs

/// `String` from anything `String: From` accepts; empty with no argument.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate `AsRef<str>` parts (`&str`, `String`, `&String`, `Cow<str>`)
/// into one `String`, sized up front. Used for URL building.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        [$(::core::convert::AsRef::<str>::as_ref(&$part)),+].concat()
    }};
}
