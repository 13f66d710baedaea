//! # linemark
//!
//! Convert single-line lightweight markup to HTML.
//!
//! Input is expected to be HTML-escaped already; linemark only recognizes
//! markup constructs and substitutes the matching tags. Every construct is
//! scoped to one line.
//!
//! ## Design
//!
//! - **Constructs**: header, italic, bold, strikethrough, inline code,
//!   blockquote, link and image, each a pattern plus flank rules
//! - **Fixpoint**: constructs are swept over the text until a sweep rewrites
//!   nothing, so stripping inner delimiters can expose an outer construct
//! - **Line breaks**: `<br>` is inserted before every line terminator once,
//!   after the fixpoint is reached
//!
//! Malformed markup is never an error; it passes through as text.
//!
//! ## Example
//!
//! ```rust
//! let html = linemark::convert("# Title\nSome **bold** and *italic* text");
//! assert_eq!(
//!     html,
//!     "<h1>Title</h1><br>\nSome <b>bold</b> and <i>italic</i> text"
//! );
//! ```

mod constructs;
mod engine;
#[cfg(feature = "io")]
mod io;
mod matcher;
mod rewrite;
mod utilities;

pub use constructs::{construct, constructs, Construct, ConstructKind, Flank, Trim};
pub use engine::{finalize_line_breaks, Conversion, Engine};
#[cfg(feature = "io")]
pub use io::{convert_bytes, convert_stream};
pub use matcher::Occurrence;
pub use utilities::{is_line_terminator, BREAK_TAG, LINE_TERMINATORS};

/// Error type for linemark operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convert markup text to HTML.
///
/// Total: any input produces output, and text that matches no construct is
/// returned unchanged apart from line-break markers.
pub fn convert(text: &str) -> String {
    Engine::new().run(text).output
}
