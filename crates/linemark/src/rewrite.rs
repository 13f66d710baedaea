//! Rewriting matched occurrences into output tags.

use std::ops::Range;

use crate::constructs::Construct;
use crate::matcher::Occurrence;

/// The byte range an occurrence replaces.
///
/// This runs from the first capture minus the left trim to the last capture
/// plus the right trim, which for every built-in construct is exactly the
/// whole-match span. A trim reaching outside the whole match falls back to
/// the whole match.
pub fn replaced_span(construct: &Construct, occurrence: &Occurrence) -> Range<usize> {
    let trim = construct.trim();
    let whole = &occurrence.whole;
    let (Some(first), Some(last)) = (occurrence.captures.first(), occurrence.captures.last())
    else {
        return whole.clone();
    };
    first
        .start
        .checked_sub(trim.left)
        .zip(last.end.checked_add(trim.right))
        .filter(|&(start, end)| start >= whole.start && end <= whole.end)
        .map_or_else(|| whole.clone(), |(start, end)| start..end)
}

/// Render the replacement fragment for one occurrence
pub fn render(construct: &Construct, text: &str, occurrence: &Occurrence) -> String {
    construct.render(&occurrence.contents(text))
}

/// Replace one occurrence in place. Bytes outside its span are untouched.
pub fn apply(construct: &Construct, text: &mut String, occurrence: &Occurrence) {
    let fragment = render(construct, text, occurrence);
    text.replace_range(replaced_span(construct, occurrence), &fragment);
}

/// Apply a left-to-right batch of non-overlapping occurrences, returning how
/// many were rewritten.
///
/// Occurrences are applied from the highest offset to the lowest. A rewrite
/// only shifts bytes to its right, so every occurrence still pending keeps
/// valid offsets.
pub fn apply_all(construct: &Construct, text: &mut String, occurrences: &[Occurrence]) -> usize {
    debug_assert!(
        occurrences
            .windows(2)
            .all(|pair| pair[0].whole.end <= pair[1].whole.start),
        "occurrences must be ordered and non-overlapping"
    );
    for occurrence in occurrences.iter().rev() {
        apply(construct, text, occurrence);
    }
    occurrences.len()
}
