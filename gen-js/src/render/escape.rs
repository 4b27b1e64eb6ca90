use std::fmt::Write;

/// Writes `value` as a double-quoted string literal. `\r\n` collapses into a
/// single `\n`. Non-ASCII text is kept as is except U+2028 and U+2029, which
/// are line terminators inside older string literal grammars.
pub fn write_string_literal(out: &mut String, value: &str) {
  out.push('"');

  let mut chars = value.chars().peekable();
  while let Some(ch) = chars.next() {
    match ch {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\r' if chars.peek() == Some(&'\n') => {
        chars.next();
        out.push_str("\\n");
      }
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\0' => {
        let next_is_digit = chars.peek().map_or(false, |c| c.is_ascii_digit());
        if next_is_digit {
          out.push_str("\\x00");
        } else {
          out.push_str("\\0");
        }
      }
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      ch if ch < '\u{20}' => {
        // Writing to a String cannot fail.
        let _ = write!(out, "\\x{:02X}", ch as u32);
      }
      ch => out.push(ch),
    }
  }

  out.push('"');
}

pub fn string_literal(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  write_string_literal(&mut out, value);
  out
}

/// Writes a `/** ... */` block for `document`, one ` * ` prefixed line per
/// source line, each indented by `indent`. Nothing is written for a blank
/// document.
pub fn write_document(out: &mut String, document: &str, indent: &str) {
  let trimmed = document.trim();
  if trimmed.is_empty() {
    return;
  }
  out.push_str(indent);
  out.push_str("/**\n");
  for line in trimmed.lines() {
    let line = line.trim_end();
    out.push_str(indent);
    if line.is_empty() {
      out.push_str(" *\n");
    } else {
      out.push_str(" * ");
      out.push_str(&line.replace("*/", "* /"));
      out.push('\n');
    }
  }
  out.push_str(indent);
  out.push_str(" */\n");
}
