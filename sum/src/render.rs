//! Text forms of operands as they appear in the response body.
//!
//! Booleans print as `True`/`False` and null as `None`. Strings nested in
//! lists or objects are single-quoted unless that needs escaping and double
//! quotes do not. Floats use the shortest round-trip digits and switch to
//! exponent notation below `1e-4` and from `1e16` on.

use std::fmt::{self, Write};

use serde_json::Value;

use crate::Operand;

pub(crate) fn write_float<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("nan");
    }
    if value.is_infinite() {
        return out.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return Err(fmt::Error);
    };
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if (-4..16).contains(&exponent) {
        let fixed = value.to_string();
        out.write_str(&fixed)?;
        if !fixed.contains('.') {
            out.write_str(".0")?;
        }
        Ok(())
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(out, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

fn write_quoted<W: Write>(out: &mut W, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    out.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if c.is_control() => write!(out, "\\x{:02x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

/// Nested form of a JSON value, as used inside lists and objects.
pub(crate) struct Repr<'a>(pub &'a Value);

impl fmt::Display for Repr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Null => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Number(number) => match Operand::from_number(number) {
                Ok(operand) => write!(f, "{operand}"),
                Err(_) => write!(f, "{number}"),
            },
            Value::String(text) => write_quoted(f, text),
            Value::Array(list) => write_list(f, list),
            Value::Object(map) => {
                f.write_char('{')?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ": {}", Repr(value))?;
                }
                f.write_char('}')
            }
        }
    }
}

pub(crate) fn write_list<W: Write>(out: &mut W, list: &[Value]) -> fmt::Result {
    out.write_char('[')?;
    for (idx, value) in list.iter().enumerate() {
        if idx > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}", Repr(value))?;
    }
    out.write_char(']')
}
