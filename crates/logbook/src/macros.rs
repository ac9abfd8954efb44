// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Logbook Contributors

//! Logging macros that capture the call site

/// Capture the call site as a [`Context`](crate::Context): source file,
/// enclosing function, and line number.
///
/// The function name comes from the type name of a nested item, so it
/// is the fully qualified path of whatever function the macro expands
/// inside.
#[macro_export]
macro_rules! context {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(__here);
        let function = name
            .strip_suffix("::__here")
            .unwrap_or(name)
            .trim_end_matches("::{{closure}}");
        $crate::Context::new(file!(), function, line!())
    }};
}

/// Log through a logger at an explicit level, capturing the call site.
///
/// The level's context default decides whether the location lands on
/// the line; pass `context = <bool>` before the format string to
/// decide explicitly.
#[macro_export]
macro_rules! log {
    // Explicit context flag
    ($logger:expr, $level:expr, context = $should_log_context:expr, $($arg:tt)+) => {{
        let message = format!($($arg)+);
        $logger.log($level, message, $should_log_context, $crate::context!())
    }};

    // The level's context default
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let level = $level;
        let message = format!($($arg)+);
        $logger.log(level, message, level.logs_context_by_default(), $crate::context!())
    }};
}

/// Info level logging
#[macro_export]
macro_rules! info {
    ($logger:expr, context = $should_log_context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, context = $should_log_context, $($arg)+)
    };

    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Warn level logging
#[macro_export]
macro_rules! warn {
    ($logger:expr, context = $should_log_context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, context = $should_log_context, $($arg)+)
    };

    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Error level logging, with the call site on the line by default
#[macro_export]
macro_rules! error {
    ($logger:expr, context = $should_log_context:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, context = $should_log_context, $($arg)+)
    };

    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}
