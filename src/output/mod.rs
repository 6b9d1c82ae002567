//! Where rendered lines go. One logger writes to exactly one `Output`; the
//! trait lets embedders redirect lines without touching the filtering logic.

mod capture;
mod stderr;

pub use capture::CaptureOutput;
pub use stderr::{DEFAULT_TIMESTAMP_FORMAT, StderrOutput};

/// `Send + Sync` so a logger shared across threads can hold any backend.
/// `Debug` shows up in the logger's own `Debug` output.
pub trait Output: Send + Sync + std::fmt::Debug {
    /// Writes one fully rendered line. The line may already end in `\n`
    /// (line-oriented calls); backends must not add a second one.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, line: &str) -> Result<(), crate::Error>;

    /// Buffered backends may hold tail data until flushed.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
