//! Construct and Flank types for line-scoped markup.

use regex::{CaptureLocations, Regex};

use crate::utilities::{char_at, char_before, is_line_terminator};

/// Type alias for render functions. Receives the captured content in group order.
pub type RenderFn = fn(&[&str]) -> String;

/// The kinds of construct rewritten by the fixpoint loop, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    Header,
    Italic,
    Bold,
    Strikethrough,
    Code,
    Blockquote,
    Link,
    Image,
}

impl ConstructKind {
    /// Every kind, in the order a sweep applies them
    pub const ALL: [ConstructKind; 8] = [
        ConstructKind::Header,
        ConstructKind::Italic,
        ConstructKind::Bold,
        ConstructKind::Strikethrough,
        ConstructKind::Code,
        ConstructKind::Blockquote,
        ConstructKind::Link,
        ConstructKind::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConstructKind::Header => "header",
            ConstructKind::Italic => "italic",
            ConstructKind::Bold => "bold",
            ConstructKind::Strikethrough => "strikethrough",
            ConstructKind::Code => "code",
            ConstructKind::Blockquote => "blockquote",
            ConstructKind::Link => "link",
            ConstructKind::Image => "image",
        }
    }
}

/// A flank restricts the character adjacent to one side of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flank {
    /// No restriction
    Any,
    /// The match must begin a line: start of text or right after a terminator
    LineStart,
    /// The neighbouring character, if present, must not be this one
    Not(char),
}

impl Flank {
    /// Check if `neighbour` (None at the edge of the text) satisfies this flank
    pub fn admits(self, neighbour: Option<char>) -> bool {
        match self {
            Flank::Any => true,
            Flank::LineStart => neighbour.map_or(true, is_line_terminator),
            Flank::Not(c) => neighbour != Some(c),
        }
    }
}

/// Delimiter bytes between the outer captures and the edges of a match.
///
/// They are consumed by a rewrite rather than re-emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Trim {
    pub left: usize,
    pub right: usize,
}

/// A construct defines how to recognize one kind of markup and render it
pub struct Construct {
    pub kind: ConstructKind,
    pattern: Regex,
    before: Flank,
    after: Flank,
    trim: Trim,
    render: RenderFn,
}

impl Construct {
    /// Create a construct from a pattern with at least one capture group.
    ///
    /// Patterns are fixed at compile time, so an invalid one is a bug.
    pub(crate) fn new(kind: ConstructKind, pattern: &str, render: RenderFn) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid {} pattern: {e}", kind.name()));
        debug_assert!(pattern.captures_len() > 1, "{} has no capture", kind.name());
        Self {
            kind,
            pattern,
            before: Flank::Any,
            after: Flank::Any,
            trim: Trim::default(),
            render,
        }
    }

    /// Restrict the characters around a match
    pub(crate) fn flanked(mut self, before: Flank, after: Flank) -> Self {
        self.before = before;
        self.after = after;
        self
    }

    /// Set the delimiter bytes consumed around the captures
    pub(crate) fn trimmed(mut self, left: usize, right: usize) -> Self {
        self.trim = Trim { left, right };
        self
    }

    /// Number of content capture groups
    pub fn captures(&self) -> usize {
        self.pattern.captures_len() - 1
    }

    pub fn trim(&self) -> Trim {
        self.trim
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub(crate) fn capture_locations(&self) -> CaptureLocations {
        self.pattern.capture_locations()
    }

    /// Check the flanking characters of a candidate match spanning `start..end`
    pub fn admits(&self, text: &str, start: usize, end: usize) -> bool {
        self.before.admits(char_before(text, start)) && self.after.admits(char_at(text, end))
    }

    /// Apply this construct's rendering to captured content
    pub fn render(&self, captures: &[&str]) -> String {
        (self.render)(captures)
    }
}

impl std::fmt::Debug for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Construct")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.as_str())
            .field("before", &self.before)
            .field("after", &self.after)
            .field("trim", &self.trim)
            .finish()
    }
}
