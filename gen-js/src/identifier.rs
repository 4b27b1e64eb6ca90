use ahash::HashSet;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Words that can never be used as a bare binding name in either dialect.
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
  [
    // Keywords.
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // Strict mode.
    "let",
    "static",
    "implements",
    "interface",
    "package",
    "private",
    "protected",
    "public",
    // Literals.
    "true",
    "false",
    "null",
    // Bindings that either cannot be reassigned or would hide something the
    // generated code relies on.
    "arguments",
    "eval",
    "undefined",
    "globalThis",
    // TypeScript primitive type names.
    "any",
    "bigint",
    "boolean",
    "never",
    "number",
    "object",
    "string",
    "symbol",
    "unknown",
  ]
  .into_iter()
  .collect()
});

pub fn is_reserved_word(name: &str) -> bool {
  RESERVED_WORDS.contains(name)
}

fn is_identifier_start(c: char) -> bool {
  c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

fn has_identifier_shape(name: &str) -> bool {
  let mut chars = name.chars();
  match chars.next() {
    Some(c) if is_identifier_start(c) => chars.all(is_identifier_part),
    _ => false,
  }
}

/// Whether `name` can be written as a binding or reference with no rewriting.
pub fn is_valid_bare_identifier(name: &str) -> bool {
  has_identifier_shape(name) && !is_reserved_word(name)
}

/// Whether `name` can follow a `.` or be an unquoted object key. Reserved words
/// are allowed in both positions.
pub fn is_safe_property_name(name: &str) -> bool {
  has_identifier_shape(name)
}

/// A name that is always legal as a bare binding.
///
/// Construction never fails: illegal input is rewritten into a legal name, so
/// `Identifier::new("new")` is `new_` and `Identifier::new("1st value")` is
/// `_1st_value`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
  pub fn new(raw: &str) -> Identifier {
    if is_valid_bare_identifier(raw) {
      return Identifier(raw.to_string());
    }
    let mut name: String = raw
      .chars()
      .map(|c| if is_identifier_part(c) { c } else { '_' })
      .collect();
    if name.chars().next().map_or(true, |c| c.is_ascii_digit()) {
      name.insert(0, '_');
    }
    if is_reserved_word(&name) {
      name.push('_');
    }
    Identifier(name)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<String> for Identifier {
  fn from(value: String) -> Self {
    Identifier::new(&value)
  }
}

impl From<&str> for Identifier {
  fn from(value: &str) -> Self {
    Identifier::new(value)
  }
}

impl From<Identifier> for String {
  fn from(value: Identifier) -> Self {
    value.0
  }
}

impl Borrow<str> for Identifier {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for Identifier {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Identifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Position in the enumeration of candidate names. Advances monotonically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentifierIndex(u64);

impl IdentifierIndex {
  pub const INITIAL: IdentifierIndex = IdentifierIndex(0);

  pub const fn new(value: u64) -> Self {
    IdentifierIndex(value)
  }

  pub const fn value(self) -> u64 {
    self.0
  }

  pub const fn next(self) -> Self {
    IdentifierIndex(self.0 + 1)
  }

  // First characters cannot be digits.
  const FIRST_CHARS: &'static [u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
  const OTHER_CHARS: &'static [u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

  /// Candidate string for this index. Every string of the alphabet is hit
  /// exactly once, shorter strings before longer ones: `a`..`Z`, then
  /// `aa`..`Z9`, then `aaa`, and so on.
  pub fn encode(self) -> String {
    let first_len = Self::FIRST_CHARS.len() as u128;
    let other_len = Self::OTHER_CHARS.len() as u128;

    let mut n = self.0 as u128;
    let mut len = 1;
    let mut block = first_len;
    while n >= block {
      n -= block;
      block *= other_len;
      len += 1;
    }

    let mut rest = Vec::with_capacity(len - 1);
    for _ in 1..len {
      rest.push(Self::OTHER_CHARS[(n % other_len) as usize]);
      n /= other_len;
    }
    let mut buf = Vec::with_capacity(len);
    buf.push(Self::FIRST_CHARS[n as usize]);
    buf.extend(rest.into_iter().rev());
    buf.into_iter().map(char::from).collect()
  }
}

/// Mints the first name at or after `index` that is neither a reserved word
/// nor in `reserved`, returning it with the index to resume from.
pub fn create_identifier(
  index: IdentifierIndex,
  reserved: &IndexSet<Identifier>,
) -> (Identifier, IdentifierIndex) {
  let mut index = index;
  loop {
    let candidate = index.encode();
    index = index.next();
    if !is_reserved_word(&candidate) && !reserved.contains(candidate.as_str()) {
      return (Identifier(candidate), index);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn encode_is_length_ordered() {
    assert_eq!(IdentifierIndex::new(0).encode(), "a");
    assert_eq!(IdentifierIndex::new(25).encode(), "z");
    assert_eq!(IdentifierIndex::new(26).encode(), "A");
    assert_eq!(IdentifierIndex::new(51).encode(), "Z");
    assert_eq!(IdentifierIndex::new(52).encode(), "aa");
    assert_eq!(IdentifierIndex::new(53).encode(), "ab");
    assert_eq!(IdentifierIndex::new(52 + 61).encode(), "a9");
    assert_eq!(IdentifierIndex::new(52 + 62).encode(), "ba");
    assert_eq!(IdentifierIndex::new(52 + 52 * 62 - 1).encode(), "Z9");
    assert_eq!(IdentifierIndex::new(52 + 52 * 62).encode(), "aaa");
  }

  #[test]
  fn encode_is_injective() {
    let mut seen = HashSet::default();
    for i in 0..20_000 {
      let name = IdentifierIndex::new(i).encode();
      assert!(has_identifier_shape(&name), "{name}");
      assert!(seen.insert(name));
    }
  }

  #[test]
  fn encode_handles_large_indices() {
    let name = IdentifierIndex::new(u64::MAX).encode();
    assert!(has_identifier_shape(&name));
  }

  #[test]
  fn create_identifier_skips_reserved() {
    let reserved: IndexSet<Identifier> = ["a", "b"].into_iter().map(Identifier::new).collect();
    let (name, next) = create_identifier(IdentifierIndex::INITIAL, &reserved);
    assert_eq!(name.as_str(), "c");
    assert_eq!(next, IdentifierIndex::new(3));
  }

  #[test]
  fn create_identifier_skips_keywords() {
    // "do" is index 52 + 3 * 62 + 14.
    let index = IdentifierIndex::new(52 + 3 * 62 + 14);
    assert_eq!(index.encode(), "do");
    let (name, _) = create_identifier(index, &IndexSet::new());
    assert_eq!(name.as_str(), "dp");
  }

  #[test]
  fn normalizes_illegal_names() {
    assert_eq!(Identifier::new("value").as_str(), "value");
    assert_eq!(Identifier::new("new").as_str(), "new_");
    assert_eq!(Identifier::new("").as_str(), "_");
    assert_eq!(Identifier::new("1st value").as_str(), "_1st_value");
    assert_eq!(Identifier::new("a-b").as_str(), "a_b");
    assert_eq!(Identifier::new("$el").as_str(), "$el");
  }

  #[test]
  fn property_names_allow_keywords() {
    assert!(is_safe_property_name("default"));
    assert!(!is_valid_bare_identifier("default"));
    assert!(!is_safe_property_name("content-type"));
    assert!(!is_safe_property_name("0"));
  }

  #[test]
  fn deserializing_normalizes() {
    let id: Identifier = serde_json::from_str("\"class\"").unwrap();
    assert_eq!(id.as_str(), "class_");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"class_\"");
  }
}
