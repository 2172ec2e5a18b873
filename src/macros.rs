//! `println!`-style status macros.
//!
//! Each macro takes any number of `Display` expressions and forwards them
//! to the matching free function, e.g. `success!("copied", n, "files")`.

#[macro_export]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {
        $crate::debug(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! message {
    ($($arg:expr),* $(,)?) => {
        $crate::message(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:expr),* $(,)?) => {
        $crate::success(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! result {
    ($($arg:expr),* $(,)?) => {
        $crate::result(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:expr),* $(,)?) => {
        $crate::error(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Print an error line and exit with status 1.
#[macro_export]
macro_rules! die {
    ($($arg:expr),* $(,)?) => {
        $crate::die(&[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
