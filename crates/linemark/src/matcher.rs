//! Finding construct occurrences in a text buffer.

use std::ops::Range;

use crate::constructs::Construct;
use crate::utilities::char_at;

/// One recognized construct instance.
///
/// Offsets are byte offsets into the buffer the occurrence was found in and
/// are only valid against that exact buffer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The whole match, consumed delimiters included
    pub whole: Range<usize>,
    /// Content captures, in group order
    pub captures: Vec<Range<usize>>,
}

impl Occurrence {
    /// Borrow the captured content from the buffer this occurrence came from
    pub fn contents<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.captures.iter().map(|r| &text[r.clone()]).collect()
    }
}

/// Find every non-overlapping occurrence of `construct`, left to right.
///
/// A candidate whose flanking characters are rejected is skipped and the scan
/// resumes one character past the candidate's start, so a later occurrence
/// that overlaps the rejected candidate can still be found.
pub fn find_all(construct: &Construct, text: &str) -> Vec<Occurrence> {
    let mut found = Vec::new();
    let mut locations = construct.capture_locations();
    let mut at = 0;

    while at <= text.len() {
        let Some(whole) = construct
            .pattern()
            .captures_read_at(&mut locations, text, at)
        else {
            break;
        };

        if whole.is_empty() || !construct.admits(text, whole.start(), whole.end()) {
            at = whole.start() + char_at(text, whole.start()).map_or(1, char::len_utf8);
            continue;
        }

        let captures: Option<Vec<Range<usize>>> = (1..=construct.captures())
            .map(|group| locations.get(group).map(|(start, end)| start..end))
            .collect();
        if let Some(captures) = captures {
            found.push(Occurrence {
                whole: whole.range(),
                captures,
            });
        }
        at = whole.end();
    }

    found
}
