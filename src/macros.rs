//! Emission macros.
//!
//! Every macro captures the call site with [`caller!`] where it is expanded,
//! i.e. inside the user's function, so nesting one macro in another never
//! shifts the reported function. By default they log through
//! [`global()`](crate::global); a leading `logger: <expr>,` targets a specific
//! [`LevelLogger`](crate::LevelLogger) instead.

/// Captures the enclosing function as a [`Caller`](crate::Caller).
#[macro_export]
macro_rules! caller {
    () => {{
        #[allow(clippy::items_after_statements)]
        const fn __zlog_marker() {}
        $crate::Caller::from_frame(
            $crate::caller::type_name_of(__zlog_marker),
            $crate::caller::MARKER_DEPTH,
        )
    }};
}

/// Template-style emission at an explicit level.
///
/// ```
/// zlog::logf!(zlog::Level::Info, "listening on {}:{}", "0.0.0.0", 8080);
/// ```
#[macro_export]
macro_rules! logf {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::LevelLogger::log_formatted(
            $logger,
            $level,
            &$crate::caller!(),
            ::core::format_args!($($arg)+),
        )
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $crate::global(), $level, $($arg)+)
    };
}

/// Line-oriented emission at an explicit level: arguments are `Display`ed,
/// joined by single spaces and terminated by one newline.
///
/// ```
/// zlog::logln!(zlog::Level::Debug, "cache", "miss", 42);
/// ```
#[macro_export]
macro_rules! logln {
    (logger: $logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $crate::LevelLogger::log_line(
            $logger,
            $level,
            &$crate::caller!(),
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    };
    ($level:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $crate::global(), $level $(, $arg)*)
    };
}

#[macro_export]
macro_rules! verbosef {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $logger, $crate::Level::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logf!($crate::Level::Verbose, $($arg)+)
    };
}

#[macro_export]
macro_rules! verboseln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $logger, $crate::Level::Verbose $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Verbose $(, $arg)*)
    };
}

#[macro_export]
macro_rules! tracef {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $logger, $crate::Level::Trace, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logf!($crate::Level::Trace, $($arg)+)
    };
}

#[macro_export]
macro_rules! traceln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $logger, $crate::Level::Trace $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Trace $(, $arg)*)
    };
}

#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $logger, $crate::Level::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logf!($crate::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! debugln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $logger, $crate::Level::Debug $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Debug $(, $arg)*)
    };
}

#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logf!($crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! infoln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $logger, $crate::Level::Info $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Info $(, $arg)*)
    };
}

#[macro_export]
macro_rules! warningf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $logger, $crate::Level::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logf!($crate::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! warningln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $logger, $crate::Level::Warning $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Warning $(, $arg)*)
    };
}

#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logf!($crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! errorln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $logger, $crate::Level::Error $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Error $(, $arg)*)
    };
}

/// Logs at `Fatal`. Only a label: the process keeps running.
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::logf!(logger: $logger, $crate::Level::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::logf!($crate::Level::Fatal, $($arg)+)
    };
}

/// Logs at `Fatal`. Only a label: the process keeps running.
#[macro_export]
macro_rules! fatalln {
    (logger: $logger:expr $(, $arg:expr)* $(,)?) => {
        $crate::logln!(logger: $logger, $crate::Level::Fatal $(, $arg)*)
    };
    ($($arg:expr),* $(,)?) => {
        $crate::logln!($crate::Level::Fatal $(, $arg)*)
    };
}
