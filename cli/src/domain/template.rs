//! Minimal text templating: `{{ .field }}` placeholders filled from a record.
//!
//! The accepted syntax is the plain field-access subset of Go's
//! `text/template`, which is what the shipped template files use. Anything
//! else inside `{{ }}` is rejected rather than passed through, so a typo in a
//! template can never end up verbatim in a config file.

#![allow(clippy::expect_used)] // Patterns are compile-time constants

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::domain::error::RenderError;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("valid placeholder pattern"));

static FIELD_ACCESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\.([A-Za-z_][A-Za-z0-9_]*)$").expect("valid field access pattern")
});

/// Render `template` against the serialized fields of `record`.
///
/// # Errors
///
/// - [`RenderError::NotARecord`] if `record` does not serialize to a map.
/// - [`RenderError::Syntax`] for an unclosed `{{` or a placeholder that is not
///   a plain `.field` access, or a field that is not a scalar.
/// - [`RenderError::UnknownField`] if a placeholder names a missing field.
pub fn render(template: &str, record: &impl Serialize) -> Result<String, RenderError> {
    let Ok(Value::Object(fields)) = serde_json::to_value(record) else {
        return Err(RenderError::NotARecord);
    };

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let literal = &template[cursor..whole.start()];
        reject_unclosed(template, cursor, literal)?;
        out.push_str(literal);

        let line = line_at(template, whole.start());
        let body = body.as_str().trim();
        let Some(name) = FIELD_ACCESS.captures(body).and_then(|c| c.get(1)) else {
            return Err(RenderError::Syntax {
                line,
                detail: format!("unsupported action \"{body}\""),
            });
        };
        let name = name.as_str();
        match fields.get(name) {
            Some(Value::String(s)) => out.push_str(s),
            Some(Value::Number(n)) => out.push_str(&n.to_string()),
            Some(Value::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),
            Some(_) => {
                return Err(RenderError::Syntax {
                    line,
                    detail: format!("field '{name}' is not a scalar"),
                });
            }
            None => {
                return Err(RenderError::UnknownField {
                    field: name.to_string(),
                    line,
                });
            }
        }
        cursor = whole.end();
    }

    let tail = &template[cursor..];
    reject_unclosed(template, cursor, tail)?;
    out.push_str(tail);
    Ok(out)
}

fn reject_unclosed(template: &str, offset: usize, literal: &str) -> Result<(), RenderError> {
    match literal.find("{{") {
        Some(pos) => Err(RenderError::Syntax {
            line: line_at(template, offset + pos),
            detail: "unclosed action".to_string(),
        }),
        None => Ok(()),
    }
}

fn line_at(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}

// ── Unit tests ───────────────────────────────────────────────────────────────
