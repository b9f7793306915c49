// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;

/// Shared escape handling for reading and writing JSON strings.
///
/// Escapes are shallow: on input a backslash makes the following byte
/// literal (`\"` is `"`, `\n` is `n`); on output only `"` and `\` are
/// escaped. Sequences like `\u0041` are not decoded.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Iterates the unescaped bytes of raw string content (quotes excluded).
    pub fn unescape(raw: &[u8]) -> Unescaped<'_> {
        Unescaped { raw }
    }

    /// True for bytes the serializer must prefix with a backslash.
    pub fn needs_escape(byte: u8) -> bool {
        matches!(byte, b'"' | b'\\')
    }

    /// Appends `text` to `out`, escaping `"` and `\`.
    pub fn write_escaped(out: &mut String, text: &str) {
        let mut rest = text;
        while let Some(idx) = rest.bytes().position(Self::needs_escape) {
            let (plain, tail) = rest.split_at(idx);
            out.push_str(plain);
            out.push('\\');
            // Both escapable bytes are ASCII, so idx + 1 is a char boundary
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
        out.push_str(rest);
    }
}

/// Iterator over unescaped bytes, see [`EscapeProcessor::unescape`].
#[derive(Debug, Clone)]
pub struct Unescaped<'a> {
    raw: &'a [u8],
}

impl Iterator for Unescaped<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        match self.raw {
            [] => None,
            [b'\\', escaped, rest @ ..] => {
                self.raw = rest;
                Some(*escaped)
            }
            // A dangling backslash cannot come out of the scanner; keep it
            [byte, rest @ ..] => {
                self.raw = rest;
                Some(*byte)
            }
        }
    }
}
