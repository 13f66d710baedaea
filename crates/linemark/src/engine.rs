//! Engine - the fixpoint driver and the line-break finalizer.

use crate::constructs::{constructs, Construct};
use crate::matcher::find_all;
use crate::rewrite::apply_all;
use crate::utilities::{is_line_terminator, terminator_len, BREAK_TAG};

/// Result of running the engine over one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// The converted text
    pub output: String,
    /// Sweeps performed, the final empty sweep included
    pub sweeps: usize,
    /// Rewrites performed across all sweeps
    pub rewrites: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Done,
}

/// Applies constructs to a fixpoint.
///
/// Each sweep runs every construct in order; a construct's occurrences are
/// all rewritten before the next construct is matched, so later constructs
/// see the buffer left by earlier ones. Overlapping constructs of different
/// kinds are therefore resolved by construct order.
///
/// Every rewrite consumes delimiter bytes that no replacement reintroduces at
/// a matchable position, so the number of productive sweeps is bounded by the
/// nesting depth of constructs in the input (and never exceeds the number of
/// delimiter runs). Each sweep is linear in the text length per construct.
/// There is no iteration cap; callers needing bounded latency should limit
/// input size.
#[derive(Debug, Clone)]
pub struct Engine {
    constructs: Vec<&'static Construct>,
}

impl Engine {
    /// Create an engine with the built-in constructs in their standard order
    pub fn new() -> Self {
        Self {
            constructs: constructs().iter().collect(),
        }
    }

    /// Create an engine applying the given constructs in the given order
    pub fn with_constructs<I>(constructs: I) -> Self
    where
        I: IntoIterator<Item = &'static Construct>,
    {
        Self {
            constructs: constructs.into_iter().collect(),
        }
    }

    /// Convert text: the fixpoint loop followed by the line-break finalizer
    pub fn run(&self, text: &str) -> Conversion {
        let mut conversion = self.fixpoint(text);
        conversion.output = finalize_line_breaks(&conversion.output);
        conversion
    }

    /// Sweep until a sweep rewrites nothing. Line breaks are not inserted.
    pub fn fixpoint(&self, text: &str) -> Conversion {
        let mut buffer = text.to_string();
        let mut sweeps = 0;
        let mut rewrites = 0;
        let mut state = State::Scanning;

        while state == State::Scanning {
            let count = self.sweep(&mut buffer);
            sweeps += 1;
            rewrites += count;
            log::trace!("sweep {sweeps}: {count} rewrites");
            if count == 0 {
                state = State::Done;
            }
        }

        log::debug!(
            "Converged after {sweeps} sweeps with {rewrites} rewrites ({} bytes)",
            buffer.len()
        );

        Conversion {
            output: buffer,
            sweeps,
            rewrites,
        }
    }

    /// Run every construct once, returning the number of rewrites
    fn sweep(&self, buffer: &mut String) -> usize {
        let mut count = 0;
        for construct in &self.constructs {
            let occurrences = find_all(construct, buffer);
            if occurrences.is_empty() {
                continue;
            }
            log::trace!(
                "{}: {} occurrences",
                construct.kind.name(),
                occurrences.len()
            );
            count += apply_all(construct, buffer, &occurrences);
        }
        count
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a break marker before every line terminator.
///
/// A single pass that never rescans its own output. `\r\n` and `\n\r` count
/// as one terminator, and terminator bytes are kept after the marker.
pub fn finalize_line_breaks(text: &str) -> String {
    let breaks = text.matches(is_line_terminator).count();
    let mut result = String::with_capacity(text.len() + breaks * BREAK_TAG.len());
    let mut rest = text;

    while let Some(at) = rest.find(is_line_terminator) {
        let len = terminator_len(&rest[at..]).unwrap_or(1);
        result.push_str(&rest[..at]);
        result.push_str(BREAK_TAG);
        result.push_str(&rest[at..at + len]);
        rest = &rest[at + len..];
    }
    result.push_str(rest);

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructs::{construct, ConstructKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_single_sweep() {
        let conversion = Engine::new().fixpoint("nothing to see");
        assert_eq!(conversion.output, "nothing to see");
        assert_eq!(conversion.sweeps, 1);
        assert_eq!(conversion.rewrites, 0);
    }

    #[test]
    fn test_fixpoint_never_inserts_breaks() {
        let conversion = Engine::new().fixpoint("# a\n*b*\r\nc");
        assert_eq!(conversion.output, "<h1>a</h1>\n<i>b</i>\r\nc");
        assert!(!conversion.output.contains(BREAK_TAG));
    }

    #[test]
    fn test_nested_needs_extra_sweep() {
        let conversion = Engine::new().run("*a **b** c*");
        assert_eq!(conversion.output, "<i>a <b>b</b> c</i>");
        assert_eq!(conversion.sweeps, 3);
        assert_eq!(conversion.rewrites, 2);
    }

    #[test]
    fn test_inner_first_in_one_sweep() {
        let conversion = Engine::new().run("~~x *y* z~~");
        assert_eq!(conversion.output, "<s>x <i>y</i> z</s>");
        assert_eq!(conversion.sweeps, 2);
    }

    #[test]
    fn test_three_levels() {
        let conversion = Engine::new().run("*a **b ~~c~~ d** e*");
        assert_eq!(conversion.output, "<i>a <b>b <s>c</s> d</b> e</i>");
        assert_eq!(conversion.sweeps, 3);
        assert_eq!(conversion.rewrites, 3);
    }

    #[test]
    fn test_custom_order() {
        let engine = Engine::with_constructs([
            construct(ConstructKind::Blockquote),
            construct(ConstructKind::Header),
        ]);
        let conversion = engine.run("> *q*");
        assert_eq!(conversion.output, "<blockquote>*q*</blockquote>");
    }

    #[test]
    fn test_finalize_line_breaks() {
        assert_eq!(finalize_line_breaks("line1\nline2\n"), "line1<br>\nline2<br>\n");
        assert_eq!(finalize_line_breaks("a\r\nb"), "a<br>\r\nb");
        assert_eq!(finalize_line_breaks("a\n\rb"), "a<br>\n\rb");
        assert_eq!(finalize_line_breaks("a\n\r\nb"), "a<br>\n\r<br>\nb");
        assert_eq!(finalize_line_breaks("a\u{2028}b\u{0C}"), "a<br>\u{2028}b<br>\u{0C}");
        assert_eq!(finalize_line_breaks("no breaks"), "no breaks");
        assert_eq!(finalize_line_breaks(""), "");
    }
}
