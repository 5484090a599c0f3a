// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed script values
//!
//! `osascript -s s` prints its result in AppleScript source form: quoted
//! strings with backslash escapes, `{...}` lists, integers, `true`/`false`,
//! and `missing value`. [`parse_source`] turns that text into a
//! [`ScriptValue`] tree; the checked accessors fail with a descriptive
//! message instead of panicking when the shape is not what the caller
//! expected.

use crate::runner::ScriptError;

/// A value returned by the scripting bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptValue {
    Text(String),
    Bool(bool),
    Int(i64),
    Null,
    List(Vec<ScriptValue>),
}

impl ScriptValue {
    pub fn as_text(&self) -> Result<&str, ScriptError> {
        match self {
            ScriptValue::Text(s) => Ok(s),
            other => Err(shape_error("text", other)),
        }
    }

    pub fn as_bool(&self) -> Result<bool, ScriptError> {
        match self {
            ScriptValue::Bool(b) => Ok(*b),
            other => Err(shape_error("boolean", other)),
        }
    }

    pub fn as_int(&self) -> Result<i64, ScriptError> {
        match self {
            ScriptValue::Int(n) => Ok(*n),
            other => Err(shape_error("integer", other)),
        }
    }

    pub fn as_list(&self) -> Result<&[ScriptValue], ScriptError> {
        match self {
            ScriptValue::List(items) => Ok(items),
            other => Err(shape_error("list", other)),
        }
    }

    pub fn into_list(self) -> Result<Vec<ScriptValue>, ScriptError> {
        match self {
            ScriptValue::List(items) => Ok(items),
            other => Err(shape_error("list", &other)),
        }
    }

    /// Text content, with `missing value` mapped to `None`.
    pub fn as_optional_text(&self) -> Result<Option<&str>, ScriptError> {
        match self {
            ScriptValue::Null => Ok(None),
            ScriptValue::Text(s) => Ok(Some(s)),
            other => Err(shape_error("text or missing value", other)),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ScriptValue::Text(_) => "text",
            ScriptValue::Bool(_) => "boolean",
            ScriptValue::Int(_) => "integer",
            ScriptValue::Null => "missing value",
            ScriptValue::List(_) => "list",
        }
    }
}

fn shape_error(expected: &str, got: &ScriptValue) -> ScriptError {
    ScriptError::TypeConversion(format!("expected {}, got {}", expected, got.kind()))
}

/// Quote a string as an AppleScript string literal.
///
/// Backslash and double quote are the only characters AppleScript escapes in
/// source form; everything else passes through verbatim.
pub fn applescript_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Parse osascript `-s s` output into a [`ScriptValue`].
///
/// An empty result (script returned nothing) parses as [`ScriptValue::Null`].
pub fn parse_source(input: &str) -> Result<ScriptValue, ScriptError> {
    let mut parser = Parser {
        chars: input.trim().char_indices().peekable(),
        input: input.trim(),
    };
    if parser.input.is_empty() {
        return Ok(ScriptValue::Null);
    }
    let value = parser.value()?;
    parser.skip_ws();
    match parser.chars.peek() {
        None => Ok(value),
        Some((pos, _)) => Err(parse_error(parser.input, *pos, "trailing content")),
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    input: &'a str,
}

impl Parser<'_> {
    fn value(&mut self) -> Result<ScriptValue, ScriptError> {
        self.skip_ws();
        match self.chars.peek().copied() {
            None => Err(parse_error(self.input, self.input.len(), "unexpected end")),
            Some((_, '{')) => self.list(),
            Some((_, '"')) => self.string(),
            Some((_, c)) if c == '-' || c.is_ascii_digit() => self.number(),
            Some((pos, _)) => self.word(pos),
        }
    }

    fn list(&mut self) -> Result<ScriptValue, ScriptError> {
        self.chars.next(); // consume '{'
        let mut items = Vec::new();
        self.skip_ws();
        if let Some((_, '}')) = self.chars.peek() {
            self.chars.next();
            return Ok(ScriptValue::List(items));
        }
        loop {
            items.push(self.value()?);
            self.skip_ws();
            match self.chars.next() {
                Some((_, ',')) => continue,
                Some((_, '}')) => return Ok(ScriptValue::List(items)),
                Some((pos, _)) => {
                    return Err(parse_error(self.input, pos, "expected ',' or '}'"))
                }
                None => return Err(parse_error(self.input, self.input.len(), "unclosed list")),
            }
        }
    }

    fn string(&mut self) -> Result<ScriptValue, ScriptError> {
        self.chars.next(); // consume opening quote
        let mut out = String::new();
        while let Some((pos, c)) = self.chars.next() {
            match c {
                '"' => return Ok(ScriptValue::Text(out)),
                '\\' => match self.chars.next() {
                    Some((_, '\\')) => out.push('\\'),
                    Some((_, '"')) => out.push('"'),
                    Some((_, 'n')) => out.push('\n'),
                    Some((_, 'r')) => out.push('\r'),
                    Some((_, 't')) => out.push('\t'),
                    Some((p, _)) => return Err(parse_error(self.input, p, "bad escape")),
                    None => return Err(parse_error(self.input, pos, "unterminated escape")),
                },
                other => out.push(other),
            }
        }
        Err(parse_error(self.input, self.input.len(), "unterminated string"))
    }

    fn number(&mut self) -> Result<ScriptValue, ScriptError> {
        let start = match self.chars.peek() {
            Some((pos, _)) => *pos,
            None => self.input.len(),
        };
        let mut end = start;
        while let Some((pos, c)) = self.chars.peek().copied() {
            if c == '-' || c.is_ascii_digit() {
                end = pos + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }
        self.input[start..end]
            .parse::<i64>()
            .map(ScriptValue::Int)
            .map_err(|_| parse_error(self.input, start, "bad integer"))
    }

    fn word(&mut self, start: usize) -> Result<ScriptValue, ScriptError> {
        let mut end = start;
        while let Some((pos, c)) = self.chars.peek().copied() {
            if c.is_ascii_alphabetic() || c == ' ' {
                // "missing value" is two words; stop a space run at a
                // delimiter by peeking the remaining text below.
                end = pos + c.len_utf8();
                self.chars.next();
            } else {
                break;
            }
        }
        match self.input[start..end].trim_end() {
            "true" => Ok(ScriptValue::Bool(true)),
            "false" => Ok(ScriptValue::Bool(false)),
            "missing value" => Ok(ScriptValue::Null),
            other => Err(parse_error(
                self.input,
                start,
                &format!("unrecognized token {:?}", other),
            )),
        }
    }

    fn skip_ws(&mut self) {
        while let Some((_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }
}

fn parse_error(input: &str, pos: usize, message: &str) -> ScriptError {
    ScriptError::TypeConversion(format!(
        "malformed script result at byte {}: {} in {:?}",
        pos,
        message,
        input.chars().take(120).collect::<String>()
    ))
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
