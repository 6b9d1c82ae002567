//! Call-site identity.
//!
//! A log line names the function that called the logging macro, not any of the
//! macro layers in between. `caller!()` declares a marker fn inside the user's
//! body and reads its `type_name`, which yields the full symbol path of the
//! enclosing function plus the marker itself:
//!
//! ```text
//! my_app::net::Client::connect::__zlog_marker
//! ```
//!
//! [`Caller::from_frame`] drops exactly [`MARKER_DEPTH`] trailing segments and
//! then any `{{closure}}` segments, leaving `my_app::net::Client::connect`.
//! The module identifier is everything before the last segment with generic
//! arguments removed, the context is the second-to-last segment and the
//! function is the last one.

use std::borrow::Cow;

/// Segments the capture macro appends after the user's function.
pub const MARKER_DEPTH: usize = 1;

/// Label used when the path has no usable segment.
pub const UNKNOWN: &str = "unknown";

const CLOSURE_SEGMENT: &str = "{{closure}}";

/// Where a log call came from.
#[derive(Debug, Clone)]
pub struct Caller {
    path: Cow<'static, str>,
    /// End of the normalized path inside `path`.
    end: usize,
    /// Start of the function segment inside `path`.
    function_start: usize,
    /// Module identifier when it differs from the raw prefix of `path`.
    module_key: Option<String>,
}

impl Caller {
    /// Explicit caller path, already normalized (e.g. `"my_app::net::connect"`).
    #[must_use]
    pub fn new(path: impl Into<Cow<'static, str>>) -> Self {
        Self::from_frame(path, 0)
    }

    /// Captured frame path with `skip` trailing helper segments to drop.
    #[must_use]
    pub fn from_frame(path: impl Into<Cow<'static, str>>, skip: usize) -> Self {
        let path = path.into();
        let mut end = path.len();

        for _ in 0..skip {
            end = split_last(&path[..end]).map_or(0, |(head, _)| head.len());
        }

        while let Some((head, last)) = split_last(&path[..end]) {
            if last != CLOSURE_SEGMENT {
                break;
            }
            end = head.len();
        }
        if &path[..end] == CLOSURE_SEGMENT {
            end = 0;
        }

        let function_start = split_last(&path[..end]).map_or(0, |(head, _)| head.len() + 2);
        let module_key = function_start
            .checked_sub(2)
            .and_then(|module_end| match strip_generics(&path[..module_end]) {
                Cow::Owned(key) => Some(key),
                Cow::Borrowed(_) => None,
            });

        Self {
            path,
            end,
            function_start,
            module_key,
        }
    }

    /// Used when no call site can be resolved.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            path: Cow::Borrowed(""),
            end: 0,
            function_start: 0,
            module_key: None,
        }
    }

    /// Normalized symbol path of the calling function.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path[..self.end]
    }

    /// Key into the per-module threshold table: every segment but the function,
    /// without generic arguments (`my_app::Wrap<_>::get` keys as `my_app::Wrap`).
    #[must_use]
    pub fn module(&self) -> &str {
        match &self.module_key {
            Some(key) => key,
            None if self.function_start < 2 => UNKNOWN,
            None => &self.path[..self.function_start - 2],
        }
    }

    /// Innermost enclosing module or type, shown before the function name.
    #[must_use]
    pub fn context(&self) -> &str {
        if self.function_start < 2 {
            return UNKNOWN;
        }
        let module = &self.path[..self.function_start - 2];
        let last = split_last(module).map_or(module, |(_, last)| last);
        display_segment(last)
    }

    /// Name of the calling function.
    #[must_use]
    pub fn function(&self) -> &str {
        let function = &self.path[self.function_start..self.end];
        if function.is_empty() {
            UNKNOWN
        } else {
            display_segment(function)
        }
    }
}

impl PartialEq for Caller {
    fn eq(&self, other: &Self) -> bool {
        self.path() == other.path()
    }
}

impl Eq for Caller {}

impl Default for Caller {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Splits off the last `::` segment that is not nested inside `<...>`.
fn split_last(path: &str) -> Option<(&str, &str)> {
    let bytes = path.as_bytes();
    let mut depth = 0usize;
    let mut found = None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                found = Some(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    found.map(|at| (&path[..at], &path[at + 2..]))
}

/// `<my_app::Type as my_app::Trait>` reads as `Type`, `Wrapper<u8>` as `Wrapper`.
fn display_segment(segment: &str) -> &str {
    if let Some(inner) = segment
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
    {
        let self_ty = inner.split(" as ").next().unwrap_or(inner);
        let last = split_last(self_ty).map_or(self_ty, |(_, last)| last);
        return display_segment(last);
    }
    segment
        .find('<')
        .map_or(segment, |generic| &segment[..generic])
}

/// Removes `<...>` lists that follow a name. A `<` opening a segment is a
/// qualified path like `<Disk as Backend>` and stays.
fn strip_generics(path: &str) -> Cow<'_, str> {
    if !path.contains('<') {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len());
    let mut depth = 0usize;
    let mut prev = '\0';
    for c in path.chars() {
        if depth > 0 {
            match c {
                '<' => depth += 1,
                '>' if prev != '-' => depth -= 1,
                _ => {}
            }
        } else if c == '<' && (prev.is_alphanumeric() || prev == '_') {
            depth = 1;
        } else {
            out.push(c);
        }
        prev = c;
    }

    if out.len() == path.len() {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(out)
    }
}

#[doc(hidden)]
#[must_use]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}
