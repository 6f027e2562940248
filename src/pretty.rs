//! Output formatting.
//!
//! Reformats the raw generated text: collapses whitespace runs outside
//! string literals and comments, re-indents by brace depth, and rejects
//! unbalanced output. The generator is agnostic to these rules; it only has
//! to produce one statement per line with balanced braces.

use crate::error::FormatError;

const INDENT: &str = "  ";

/// Reformat generated declaration text.
///
/// # Errors
///
/// Returns `FormatError` when brace nesting is unbalanced.
pub fn reformat(source: &str) -> Result<String, FormatError> {
    let mut out = String::with_capacity(source.len());
    let mut depth: i32 = 0;
    let mut previous_blank = true;

    for (index, raw) in source.lines().enumerate() {
        let line = normalize(raw);
        let line = line.trim();

        if line.is_empty() {
            if !previous_blank {
                out.push('\n');
                previous_blank = true;
            }
            continue;
        }
        previous_blank = false;

        let level = if line.starts_with('}') { depth - 1 } else { depth };
        if level < 0 {
            return Err(FormatError::UnexpectedClose { line: index + 1 });
        }
        for _ in 0..level {
            out.push_str(INDENT);
        }
        // Block comment continuations keep the conventional one-space offset.
        if line.starts_with('*') {
            out.push(' ');
        }
        out.push_str(line);
        out.push('\n');

        depth += brace_delta(line);
        if depth < 0 {
            return Err(FormatError::UnexpectedClose { line: index + 1 });
        }
    }

    if depth != 0 {
        return Err(FormatError::UnclosedBraces {
            count: depth as usize,
        });
    }

    // Trim a trailing blank line left by blank-run collapsing.
    while out.ends_with("\n\n") {
        out.pop();
    }
    Ok(out)
}

/// Collapse whitespace runs outside string literals; comment text is kept
/// verbatim.
fn normalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line.char_indices().peekable();
    let mut in_string: Option<char> = None;
    let mut escaped = false;
    let mut pending_space = false;

    while let Some((position, c)) = rest.next() {
        if let Some(quote) = in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }

        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;

        if c == '/' && rest.peek().map(|(_, next)| *next) == Some('/') {
            // Line comment: the remainder is text, not code.
            out.push_str(&line[position..]);
            break;
        }
        out.push(c);
        if c == '"' || c == '\'' {
            in_string = Some(c);
        }
    }

    out
}

/// Net brace count of a line, ignoring braces in strings and line comments.
fn brace_delta(line: &str) -> i32 {
    let mut delta = 0;
    let mut rest = line.chars().peekable();
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    while let Some(c) = rest.next() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => in_string = Some(c),
            '/' if rest.peek() == Some(&'/') => break,
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }

    delta
}
