//! Byte-buffer and stream adapters around [`convert`](crate::convert).
//!
//! Both delegate to the string conversion and add no semantics of their own.

use std::io::{Read, Write};

use crate::{convert, Result};

/// Stands in for an invalid byte run while the text is converted
const PLACEHOLDER: char = '\u{E000}';

/// Convert a byte buffer.
///
/// Invalid byte sequences behave like ordinary characters: they never end a
/// line or act as a delimiter, and they come out unchanged.
pub fn convert_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut invalid = Vec::new();
    let text = encode_invalid(bytes, &mut invalid);
    decode_invalid(&convert(&text), &invalid)
}

/// Build convertible text, replacing invalid run `n` with `PLACEHOLDER n PLACEHOLDER`.
///
/// A literal placeholder character is doubled. Tokens hold no delimiter or
/// terminator, so rewrites move them whole and never split one.
fn encode_invalid<'b>(bytes: &'b [u8], invalid: &mut Vec<&'b [u8]>) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            if c == PLACEHOLDER {
                text.push(PLACEHOLDER);
            }
            text.push(c);
        }
        if !chunk.invalid().is_empty() {
            text.push(PLACEHOLDER);
            text.push_str(&invalid.len().to_string());
            text.push(PLACEHOLDER);
            invalid.push(chunk.invalid());
        }
    }
    text
}

fn decode_invalid(converted: &str, invalid: &[&[u8]]) -> Vec<u8> {
    let mut result = Vec::with_capacity(converted.len());
    let mut rest = converted;

    while let Some(at) = rest.find(PLACEHOLDER) {
        result.extend_from_slice(rest[..at].as_bytes());
        let after = &rest[at + PLACEHOLDER.len_utf8()..];

        if let Some(tail) = after.strip_prefix(PLACEHOLDER) {
            let mut buf = [0; 4];
            result.extend_from_slice(PLACEHOLDER.encode_utf8(&mut buf).as_bytes());
            rest = tail;
            continue;
        }

        let len = after.find(PLACEHOLDER).unwrap_or(after.len());
        match after[..len].parse::<usize>().ok().and_then(|n| invalid.get(n)) {
            Some(bytes) => {
                result.extend_from_slice(bytes);
                rest = after.get(len + PLACEHOLDER.len_utf8()..).unwrap_or("");
            }
            None => {
                result.extend_from_slice(rest[at..at + PLACEHOLDER.len_utf8()].as_bytes());
                rest = after;
            }
        }
    }
    result.extend_from_slice(rest.as_bytes());

    result
}

/// Read all of `reader`, convert it, and write the result to `writer`
pub fn convert_stream<R: Read, W: Write>(mut reader: R, mut writer: W) -> Result<()> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    writer.write_all(&convert_bytes(&input))?;
    writer.flush()?;
    Ok(())
}
