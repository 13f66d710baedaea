//! Built-in construct definitions.

use super::{Construct, ConstructKind, Flank, RenderFn};
use crate::utilities::EOL_CLASS;

/// Create all constructs, in application order
pub fn builtin_constructs() -> Vec<Construct> {
    ConstructKind::ALL.iter().map(|&kind| definition(kind)).collect()
}

fn definition(kind: ConstructKind) -> Construct {
    match kind {
        ConstructKind::Header => header_construct(),
        ConstructKind::Italic => delimited_construct(kind, '*', 1, |c| format!("<i>{}</i>", c[0])),
        ConstructKind::Bold => delimited_construct(kind, '*', 2, |c| format!("<b>{}</b>", c[0])),
        ConstructKind::Strikethrough => {
            delimited_construct(kind, '~', 2, |c| format!("<s>{}</s>", c[0]))
        }
        ConstructKind::Code => {
            delimited_construct(kind, '`', 1, |c| format!("<code>{}</code>", c[0]))
        }
        ConstructKind::Blockquote => blockquote_construct(),
        ConstructKind::Link => link_construct(),
        ConstructKind::Image => image_construct(),
    }
}

fn header_construct() -> Construct {
    Construct::new(
        ConstructKind::Header,
        &format!(r"(#{{1,6}}) ([^{EOL_CLASS}]+)"),
        |captures| {
            let level = captures[0].len();
            format!("<h{level}>{}</h{level}>", captures[1])
        },
    )
    .flanked(Flank::LineStart, Flank::Any)
}

/// Inline content between `width` copies of a delimiter character.
///
/// The content never contains the delimiter, so `**x**` cannot be read as
/// italics and a run of delimiters never matches two ways.
fn delimited_construct(
    kind: ConstructKind,
    delimiter: char,
    width: usize,
    render: RenderFn,
) -> Construct {
    let d = regex::escape(&delimiter.to_string());
    Construct::new(
        kind,
        &format!(r"{d}{{{width}}}([^{EOL_CLASS}{d}]+){d}{{{width}}}"),
        render,
    )
    .flanked(Flank::Not(delimiter), Flank::Not(delimiter))
    .trimmed(width, width)
}

fn blockquote_construct() -> Construct {
    Construct::new(
        ConstructKind::Blockquote,
        &format!(r"> ([^{EOL_CLASS}]*)"),
        |captures| format!("<blockquote>{}</blockquote>", captures[0]),
    )
    .flanked(Flank::LineStart, Flank::Any)
    .trimmed(2, 0)
}

fn link_construct() -> Construct {
    Construct::new(
        ConstructKind::Link,
        &format!(r"\[([^{EOL_CLASS}]+?)\]\(([^{EOL_CLASS}]*?)\)"),
        |captures| format!("<a href='{}'>{}</a>", captures[1], captures[0]),
    )
    .flanked(Flank::Not('!'), Flank::Any)
    .trimmed(1, 1)
}

fn image_construct() -> Construct {
    Construct::new(
        ConstructKind::Image,
        &format!(r"!\[([^{EOL_CLASS}]+?)\]\(([^{EOL_CLASS}]*?)\)"),
        |captures| format!("<img src='{}' alt='{}'>", captures[1], captures[0]),
    )
    .trimmed(2, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructs::Trim;

    #[test]
    fn test_table_order_matches_kinds() {
        let constructs = builtin_constructs();
        let kinds: Vec<ConstructKind> = constructs.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, ConstructKind::ALL.to_vec());
    }

    #[test]
    fn test_capture_counts() {
        for construct in builtin_constructs() {
            let expected = match construct.kind {
                ConstructKind::Header | ConstructKind::Link | ConstructKind::Image => 2,
                _ => 1,
            };
            assert_eq!(construct.captures(), expected, "{:?}", construct.kind);
        }
    }

    #[test]
    fn test_trim_offsets() {
        assert_eq!(definition(ConstructKind::Header).trim(), Trim::default());
        assert_eq!(definition(ConstructKind::Bold).trim(), Trim { left: 2, right: 2 });
        assert_eq!(definition(ConstructKind::Code).trim(), Trim { left: 1, right: 1 });
        assert_eq!(definition(ConstructKind::Blockquote).trim(), Trim { left: 2, right: 0 });
        assert_eq!(definition(ConstructKind::Image).trim(), Trim { left: 2, right: 1 });
    }

    #[test]
    fn test_render_header_levels() {
        let header = definition(ConstructKind::Header);
        assert_eq!(header.render(&["#", "h1"]), "<h1>h1</h1>");
        assert_eq!(header.render(&["######", "h6"]), "<h6>h6</h6>");
    }

    #[test]
    fn test_render_inline() {
        assert_eq!(definition(ConstructKind::Italic).render(&["x"]), "<i>x</i>");
        assert_eq!(definition(ConstructKind::Bold).render(&["x"]), "<b>x</b>");
        assert_eq!(definition(ConstructKind::Strikethrough).render(&["x"]), "<s>x</s>");
        assert_eq!(definition(ConstructKind::Code).render(&["x"]), "<code>x</code>");
    }

    #[test]
    fn test_render_link_like() {
        assert_eq!(
            definition(ConstructKind::Link).render(&["desc", "dest"]),
            "<a href='dest'>desc</a>"
        );
        assert_eq!(
            definition(ConstructKind::Image).render(&["desc", "dest"]),
            "<img src='dest' alt='desc'>"
        );
    }

    #[test]
    fn test_blockquote_allows_empty_body() {
        let blockquote = definition(ConstructKind::Blockquote);
        assert!(blockquote.pattern().is_match("> "));
        assert!(!blockquote.pattern().is_match(">"));
    }

    #[test]
    fn test_patterns_stop_at_line_end() {
        let italic = definition(ConstructKind::Italic);
        assert!(!italic.pattern().is_match("*a\nb*"));
        assert!(!italic.pattern().is_match("*a\u{2028}b*"));
        let link = definition(ConstructKind::Link);
        assert!(!link.pattern().is_match("[a]\r(b)"));
    }
}
