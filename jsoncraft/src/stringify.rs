// SPDX-License-Identifier: Apache-2.0

use alloc::string::String;
use core::fmt::Write;

use crate::escape_processor::EscapeProcessor;
use crate::value::Value;

/// Capacity the output buffer starts with.
pub const INITIAL_CAPACITY: usize = 64;

/// Output text that grows by doubling whenever a write would overflow it.
struct OutputBuffer {
    out: String,
}

impl OutputBuffer {
    fn new() -> Self {
        Self {
            out: String::with_capacity(INITIAL_CAPACITY),
        }
    }

    fn reserve_for(&mut self, additional: usize) {
        let needed = self.out.len() + additional;
        let capacity = self.out.capacity();
        if needed <= capacity {
            return;
        }
        let mut target = capacity.max(1) * 2;
        while target < needed {
            target *= 2;
        }
        self.out.reserve_exact(target - self.out.len());
    }

    fn push_char(&mut self, c: char) {
        self.reserve_for(c.len_utf8());
        self.out.push(c);
    }

    fn push_escaped(&mut self, text: &str) {
        let escapes = text
            .bytes()
            .filter(|&b| EscapeProcessor::needs_escape(b))
            .count();
        self.reserve_for(text.len() + escapes + 2);
        self.out.push('"');
        EscapeProcessor::write_escaped(&mut self.out, text);
        self.out.push('"');
    }
}

impl Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.reserve_for(s.len());
        self.out.push_str(s);
        Ok(())
    }
}

/// Writes a number in the fixed six-decimal format (`2` becomes `2.000000`).
///
/// Non-finite values have no JSON spelling and are written as `null`.
pub(crate) fn write_number<W: Write>(out: &mut W, n: f64) -> core::fmt::Result {
    if n.is_finite() {
        write!(out, "{n:.6}")
    } else {
        out.write_str("null")
    }
}

fn write_value(out: &mut OutputBuffer, value: &Value) -> core::fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Boolean(true) => out.write_str("true"),
        Value::Boolean(false) => out.write_str("false"),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => {
            out.push_escaped(s);
            Ok(())
        }
        Value::Array(items) => {
            out.push_char('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_char(',');
                }
                write_value(out, item)?;
            }
            out.push_char(']');
            Ok(())
        }
        Value::Object(members) => {
            out.push_char('{');
            for (idx, (key, item)) in members.iter().enumerate() {
                if idx > 0 {
                    out.push_char(',');
                }
                out.push_escaped(key);
                out.push_char(':');
                write_value(out, item)?;
            }
            out.push_char('}');
            Ok(())
        }
    }
}

/// Serializes a value tree to compact JSON text.
///
/// Strings escape only `"` and `\`, numbers use the fixed six-decimal
/// format, and no whitespace is emitted.
///
/// # Example
/// ```
/// use jsoncraft::{parse, stringify};
/// let value = parse(r#"{"x": [1, true, "a\"b"]}"#).unwrap();
/// assert_eq!(stringify(&value), r#"{"x":[1.000000,true,"a\"b"]}"#);
/// ```
pub fn stringify(value: &Value) -> String {
    let mut out = OutputBuffer::new();
    // Writing into a String cannot fail
    let _ = write_value(&mut out, value);
    out.out
}
