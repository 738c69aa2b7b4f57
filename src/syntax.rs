//! Go-style template actions.
//!
//! Worker templates are written with `{{ .Field }}` placeholders and
//! `{{ if .Field }}...{{ end }}` blocks. This module rewrites them into the
//! equivalent MiniJinja source so the rest of the crate only deals with one
//! engine. Literal text between actions is kept byte for byte.
//!
//! Supported actions:
//! - `{{ .Field }}` and dotted paths such as `{{ .Worker.Name }}`
//! - `{{ if .Field }}`, `{{ if not .Field }}`
//! - `{{ else if .Field }}`, `{{ else }}`, `{{ end }}`
//! - `{{/* comment */}}`
//! - `{{- ` and ` -}}` trim markers

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{Error, Result};

fn action_regex() -> &'static Regex {
    static ACTION: OnceLock<Regex> = OnceLock::new();
    ACTION.get_or_init(|| {
        Regex::new(r"(?s)\{\{(-\s)?(.*?)(\s-)?\}\}").expect("action pattern is valid")
    })
}

fn field_regex() -> &'static Regex {
    static FIELD: OnceLock<Regex> = OnceLock::new();
    FIELD.get_or_init(|| {
        Regex::new(r"^(?:\.[A-Za-z_][A-Za-z0-9_]*)+$").expect("field pattern is valid")
    })
}

/// A parsed `{{ ... }}` action.
#[derive(Debug, PartialEq, Eq)]
enum Action {
    Field(String),
    If(String),
    ElseIf(String),
    Else,
    End,
    Comment,
}

/// Whitespace trimming requested around an action.
#[derive(Debug, Clone, Copy, Default)]
struct Trim {
    left: bool,
    right: bool,
}

/// Rewrites Go-style `source` into MiniJinja syntax.
///
/// `name` only labels errors.
///
/// # Errors
/// * `Error::TemplateParseError` on an unterminated `{{`, an unsupported
///   action, or unbalanced `if`/`end` blocks
pub fn translate(name: &str, source: &str) -> Result<String> {
    let parse_error = |reason: String| Error::TemplateParseError {
        template: name.to_string(),
        reason,
    };

    let mut output = String::with_capacity(source.len());
    let mut open_blocks = 0usize;
    let mut last_end = 0;
    let mut previous = Trim::default();

    for caps in action_regex().captures_iter(source) {
        let whole = caps.get(0).expect("group 0 is always present");
        let trim = Trim { left: caps.get(1).is_some(), right: caps.get(3).is_some() };
        let body = caps.get(2).map_or("", |m| m.as_str());

        let text = &source[last_end..whole.start()];
        push_text(&mut output, text, previous.right, trim.left)
            .map_err(parse_error)?;

        let action = parse_action(body).map_err(parse_error)?;
        match action {
            Action::Field(path) => {
                output.push_str("{{ ");
                output.push_str(&path);
                output.push_str(" }}");
            }
            Action::If(condition) => {
                open_blocks += 1;
                output.push_str(&format!("{{% if {condition} %}}"));
            }
            Action::ElseIf(condition) => {
                if open_blocks == 0 {
                    return Err(parse_error("unexpected {{else if}}".to_string()));
                }
                output.push_str(&format!("{{% elif {condition} %}}"));
            }
            Action::Else => {
                if open_blocks == 0 {
                    return Err(parse_error("unexpected {{else}}".to_string()));
                }
                output.push_str("{% else %}");
            }
            Action::End => {
                if open_blocks == 0 {
                    return Err(parse_error("unexpected {{end}}".to_string()));
                }
                open_blocks -= 1;
                output.push_str("{% endif %}");
            }
            Action::Comment => {}
        }

        previous = trim;
        last_end = whole.end();
    }

    push_text(&mut output, &source[last_end..], previous.right, false)
        .map_err(parse_error)?;

    if open_blocks > 0 {
        return Err(parse_error("unexpected EOF, missing {{end}}".to_string()));
    }

    Ok(output)
}

/// Appends literal `text`, applying the trim markers of the surrounding actions.
fn push_text(
    output: &mut String,
    text: &str,
    trim_start: bool,
    trim_end: bool,
) -> std::result::Result<(), String> {
    if text.contains("{{") {
        return Err("unclosed action".to_string());
    }

    let mut text = text;
    if trim_start {
        text = text.trim_start_matches(is_go_space);
    }
    if trim_end {
        text = text.trim_end_matches(is_go_space);
    }

    push_literal(output, text);
    Ok(())
}

/// Appends literal text so that MiniJinja prints it unchanged.
///
/// Any chunk holding a brace is emitted as a string expression, so braces
/// never reach the lexer as data and cannot combine with a neighbouring chunk
/// or tag into markup.
fn push_literal(output: &mut String, text: &str) {
    if !text.contains(['{', '}']) {
        output.push_str(text);
        return;
    }

    output.push_str("{{ \"");
    for c in text.chars() {
        match c {
            '\\' => output.push_str("\\\\"),
            '"' => output.push_str("\\\""),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c => output.push(c),
        }
    }
    output.push_str("\" }}");
}

fn is_go_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn parse_action(body: &str) -> std::result::Result<Action, String> {
    let body = body.trim();

    if body.starts_with("/*") {
        return if body.ends_with("*/") {
            Ok(Action::Comment)
        } else {
            Err("unclosed comment".to_string())
        };
    }

    let mut words = body.split_whitespace();
    match words.next() {
        Some("end") if words.next().is_none() => Ok(Action::End),
        Some("else") => match words.next() {
            None => Ok(Action::Else),
            Some("if") => {
                let rest: Vec<&str> = words.collect();
                parse_condition(&rest).map(Action::ElseIf)
            }
            Some(_) => Err(format!("unsupported action {{{{{body}}}}}")),
        },
        Some("if") => {
            let rest: Vec<&str> = words.collect();
            parse_condition(&rest).map(Action::If)
        }
        Some(word) if words.next().is_none() => {
            field_path(word).map(Action::Field).ok_or_else(|| {
                format!("unsupported action {{{{{body}}}}}")
            })
        }
        Some(_) => Err(format!("unsupported action {{{{{body}}}}}")),
        None => Err("missing value for command".to_string()),
    }
}

fn parse_condition(words: &[&str]) -> std::result::Result<String, String> {
    let path = match words {
        [field] => field_path(field),
        ["not", field] => field_path(field).map(|p| format!("not {p}")),
        _ => None,
    };
    path.ok_or_else(|| format!("unsupported condition '{}'", words.join(" ")))
}

/// Converts `.A.B` into `A.B`.
fn field_path(word: &str) -> Option<String> {
    if field_regex().is_match(word) {
        Some(word[1..].to_string())
    } else {
        None
    }
}
